pub mod layout;
pub mod og;
pub mod svg;
