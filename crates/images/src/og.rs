//! FAQ social card template.
//!
//! The composition is fixed: background photograph, readability overlay,
//! brand row, title, description, decorative glyph, footer. The title is the
//! only dynamic input.

use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use image::ImageFormat;

use crate::{
    layout::{Color, Document, FontWeight, ImageNode, RectNode, TextNode, rgb},
    svg,
};

/// Open Graph preview dimensions.
pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

const BRAND: &str = "ok.com";
const BADGE: &str = "FAQ";
const DESCRIPTION: &str =
    "Find answers to common questions and get help with your account, listings, and more.";
const FOOTER: &str = "Visit ok.com for more information";

const INK: Color = rgb(0x1a, 0x1a, 0x1a);
const MUTED: Color = rgb(0x66, 0x66, 0x66);
const FAINT: Color = rgb(0x99, 0x99, 0x99);
const WHITE: Color = rgb(0xff, 0xff, 0xff);
const BADGE_FILL: Color = rgb(0xe3, 0xf2, 0xfd);
const BADGE_INK: Color = rgb(0x19, 0x76, 0xd2);

const MARGIN: f32 = 80.0;
const BRAND_BASELINE: f32 = 188.0;
const TITLE_SIZE: f32 = 64.0;
const TITLE_BASELINE: f32 = 284.0;
const TITLE_LINE_HEIGHT: f32 = 77.0;
/// Characters that fit the 1000px content column at 64px bold.
const TITLE_WRAP_CHARS: usize = 30;
const DESCRIPTION_SIZE: f32 = 32.0;
const DESCRIPTION_LINE_HEIGHT: f32 = 48.0;
const DESCRIPTION_WRAP_CHARS: usize = 56;
/// Gap between the last title baseline and the first description baseline.
const DESCRIPTION_OFFSET: f32 = 72.0;

/// Fetch the background photograph and render the card as `format`.
///
/// Any failure here (unreachable host, non-success status, rasterizer fault)
/// is terminal for the request; there is no visual fallback.
pub async fn render(
    client: &reqwest::Client,
    background_url: &str,
    title: &str,
    format: ImageFormat,
) -> Result<Vec<u8>> {
    let background = fetch_background(client, background_url).await?;
    let document = document(Some(&background), title);
    svg::render_image(&document.to_svg(), format)
}

/// Fetch the background image and embed it as a data URI.
// The fetch has no timeout of its own; a stalled remote hangs the request
// until the server-level request timeout fires.
async fn fetch_background(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch background image")?
        .error_for_status()?;
    let data = response.bytes().await.context("Failed to read background image")?;
    tracing::debug!("Fetched background image: {} bytes", data.len());
    let mime = image::guess_format(&data).map(|f| f.to_mime_type()).unwrap_or("image/jpeg");
    Ok(format!("data:{};base64,{}", mime, BASE64.encode(&data)))
}

/// Compose the card as a layout document. Pure; no I/O.
pub fn document(background: Option<&str>, title: &str) -> Document {
    let mut doc = Document::new(WIDTH, HEIGHT);
    // White canvas base; the photograph blends onto it at reduced opacity.
    doc.push(RectNode {
        x: 0.0,
        y: 0.0,
        width: WIDTH as f32,
        height: HEIGHT as f32,
        radius: 0.0,
        fill: WHITE,
        opacity: 1.0,
    });
    if let Some(href) = background {
        doc.push(ImageNode {
            href: href.to_string(),
            x: 0.0,
            y: 0.0,
            width: WIDTH as f32,
            height: HEIGHT as f32,
            opacity: 0.3,
        });
    }
    // Overlay for text readability
    doc.push(RectNode {
        x: 0.0,
        y: 0.0,
        width: WIDTH as f32,
        height: HEIGHT as f32,
        radius: 0.0,
        fill: WHITE,
        opacity: 0.6,
    });
    doc.push(TextNode {
        x: MARGIN,
        y: BRAND_BASELINE,
        size: 32.0,
        weight: FontWeight::Bold,
        fill: INK,
        opacity: 1.0,
        content: BRAND.to_string(),
    });
    doc.push(RectNode {
        x: 212.0,
        y: BRAND_BASELINE - 24.0,
        width: 58.0,
        height: 30.0,
        radius: 4.0,
        fill: BADGE_FILL,
        opacity: 1.0,
    });
    doc.push(TextNode {
        x: 224.0,
        y: BRAND_BASELINE - 2.0,
        size: 18.0,
        weight: FontWeight::SemiBold,
        fill: BADGE_INK,
        opacity: 1.0,
        content: BADGE.to_string(),
    });
    let title_lines = wrap_text(title, TITLE_WRAP_CHARS);
    for (i, line) in title_lines.iter().enumerate() {
        doc.push(TextNode {
            x: MARGIN,
            y: TITLE_BASELINE + i as f32 * TITLE_LINE_HEIGHT,
            size: TITLE_SIZE,
            weight: FontWeight::Bold,
            fill: INK,
            opacity: 1.0,
            content: line.clone(),
        });
    }
    let last_title_baseline =
        TITLE_BASELINE + title_lines.len().saturating_sub(1) as f32 * TITLE_LINE_HEIGHT;
    for (i, line) in wrap_text(DESCRIPTION, DESCRIPTION_WRAP_CHARS).iter().enumerate() {
        doc.push(TextNode {
            x: MARGIN,
            y: last_title_baseline + DESCRIPTION_OFFSET + i as f32 * DESCRIPTION_LINE_HEIGHT,
            size: DESCRIPTION_SIZE,
            weight: FontWeight::Normal,
            fill: MUTED,
            opacity: 1.0,
            content: line.clone(),
        });
    }
    doc.push(TextNode {
        x: 1050.0,
        y: 360.0,
        size: 120.0,
        weight: FontWeight::Bold,
        fill: INK,
        opacity: 0.1,
        content: "?".to_string(),
    });
    doc.push(TextNode {
        x: MARGIN,
        y: HEIGHT as f32 - MARGIN,
        size: 24.0,
        weight: FontWeight::Normal,
        fill: FAINT,
        opacity: 1.0,
        content: FOOTER.to_string(),
    });
    doc
}

/// Greedy word wrap by character count. A single word longer than the limit
/// stays on its own line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty()
            && current.chars().count() + 1 + word.chars().count() > max_chars
        {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
