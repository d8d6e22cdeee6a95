use axum::{Router, routing::get};

use crate::AppState;

mod common;
mod og;

pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(common::health))
        .route("/api/faqs", get(og::get_faq_og))
        .fallback(common::not_found)
}
