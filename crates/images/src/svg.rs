//! SVG rasterization.

use std::{
    io::Cursor,
    sync::{Arc, OnceLock},
};

use anyhow::{Result, anyhow};
use image::{DynamicImage, ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};

/// System font database, loaded once per process.
fn fontdb() -> Arc<usvg::fontdb::Database> {
    static FONTDB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTDB
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            Arc::new(db)
        })
        .clone()
}

/// Rasterize an SVG document at its declared size and encode as `format`.
pub fn render_image(svg_src: &str, format: ImageFormat) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb = fontdb();
    let tree = usvg::Tree::from_str(svg_src, &options)?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow!("Invalid image size: {}x{}", size.width(), size.height()))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    let image = RgbaImage::from_raw(size.width(), size.height(), demultiply(&pixmap))
        .ok_or_else(|| anyhow!("Pixmap size mismatch"))?;
    encode_image(&DynamicImage::ImageRgba8(image), format)
}

fn demultiply(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}

/// Encode a decoded image in the given format.
pub fn encode_image(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut data = Cursor::new(Vec::new());
    image.write_to(&mut data, format)?;
    Ok(data.into_inner())
}

#[cfg(test)]
mod tests {
    use image::ImageFormat;

    use super::render_image;

    #[test]
    fn test_render_image_png() {
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"8\" height=\"4\" \
                   viewBox=\"0 0 8 4\"><rect x=\"0\" y=\"0\" width=\"8\" height=\"4\" \
                   fill=\"#ff0000\"/></svg>";
        let data = render_image(svg, ImageFormat::Png).unwrap();
        let decoded = image::load_from_memory(&data).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 4));
        let rgba = decoded.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_render_image_rejects_invalid_svg() {
        assert!(render_image("not an svg", ImageFormat::Png).is_err());
    }
}
