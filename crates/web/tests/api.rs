use std::{io::Cursor, sync::Arc, thread};

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use faq_og_core::config::Config;
use faq_og_web::{AppState, app};
use http_body_util::BodyExt;
use image::{DynamicImage, ImageFormat, RgbImage};
use tower::ServiceExt;
use url::Url;

/// Serve a small generated JPEG standing in for the remote background
/// photograph. Returns the URL to request it from.
fn serve_background() -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let url = format!("http://{}/background.jpg", server.server_addr());
    thread::spawn(move || {
        while let Ok(request) = server.recv() {
            let mut data = Cursor::new(Vec::new());
            DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, image::Rgb([120, 140, 160])))
                .write_to(&mut data, ImageFormat::Jpeg)
                .unwrap();
            let response = tiny_http::Response::from_data(data.into_inner()).with_header(
                "Content-Type: image/jpeg".parse::<tiny_http::Header>().unwrap(),
            );
            let _ = request.respond(response);
        }
    });
    url
}

fn test_app(background_url: &str) -> axum::Router {
    let mut config = Config::default();
    config.og.background_image_url = Url::parse(background_url).unwrap();
    app(AppState { config: Arc::new(config), client: reqwest::Client::new() })
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, content_type, body)
}

#[tokio::test]
async fn test_faq_og_without_title() {
    let background_url = serve_background();
    let (status, content_type, body) = get(test_app(&background_url), "/api/faqs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    let decoded = image::load_from_memory(&body).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1200, 630));
}

#[tokio::test]
async fn test_faq_og_with_title() {
    let background_url = serve_background();
    let (status, content_type, body) =
        get(test_app(&background_url), "/api/faqs?title=Billing%20Help").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    let decoded = image::load_from_memory(&body).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1200, 630));
}

#[tokio::test]
async fn test_faq_og_with_long_title() {
    let background_url = serve_background();
    let long_title = "a".repeat(100);
    let (status, _, body) =
        get(test_app(&background_url), &format!("/api/faqs?title={long_title}")).await;
    assert_eq!(status, StatusCode::OK);
    let decoded = image::load_from_memory(&body).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1200, 630));
}

#[tokio::test]
async fn test_faq_og_unreachable_background() {
    // Nothing listens here, so the background fetch fails and the render is
    // terminal for the request.
    let (status, _, body) = get(test_app("http://127.0.0.1:1/background.jpg"), "/api/faqs").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(String::from_utf8(body).unwrap(), "Failed to generate the image");
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _, body) = get(test_app("http://127.0.0.1:1/"), "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(String::from_utf8(body).unwrap(), "Not found");
}

#[tokio::test]
async fn test_health() {
    let (status, content_type, body) = get(test_app("http://127.0.0.1:1/"), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ok");
}
