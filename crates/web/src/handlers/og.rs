use std::time::{Duration, Instant};

use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use faq_og_core::{AppError, title};
use faq_og_images::og;
use image::ImageFormat;

use crate::AppState;

/// Per-stage durations for one render, reported as one structured log line.
#[derive(Default)]
struct Timings {
    url_parse: Duration,
    param_get: Duration,
    title_process: Duration,
    image_generation: Duration,
}

impl Timings {
    fn log_success(&self, total: Duration) {
        tracing::info!(
            target: "og",
            url_parse_ms = ms(self.url_parse),
            param_get_ms = ms(self.param_get),
            title_process_ms = ms(self.title_process),
            image_generation_ms = ms(self.image_generation),
            total_ms = ms(total),
            "Rendered FAQ card"
        );
    }

    fn log_failure(&self, err: &anyhow::Error, elapsed: Duration) {
        tracing::error!(
            target: "og",
            error = ?err,
            url_parse_ms = ms(self.url_parse),
            param_get_ms = ms(self.param_get),
            title_process_ms = ms(self.title_process),
            image_generation_ms = ms(self.image_generation),
            error_occurred_at_ms = ms(elapsed),
            "Failed to render FAQ card"
        );
    }
}

fn ms(duration: Duration) -> f64 { duration.as_secs_f64() * 1000.0 }

/// Render the FAQ Open Graph card for the given `title` query parameter.
pub async fn get_faq_og(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let start = Instant::now();
    let mut timings = Timings::default();

    let stage = Instant::now();
    let query = query.unwrap_or_default();
    timings.url_parse = stage.elapsed();

    let stage = Instant::now();
    let raw_title = title::raw_query_param(&query, "title");
    timings.param_get = stage.elapsed();

    let stage = Instant::now();
    let display_title = title::display_title(raw_title);
    timings.title_process = stage.elapsed();

    let stage = Instant::now();
    let background_url = state.config.og.background_image_url.as_str();
    let data =
        match og::render(&state.client, background_url, &display_title, ImageFormat::Png).await {
            Ok(data) => data,
            Err(err) => {
                timings.image_generation = stage.elapsed();
                timings.log_failure(&err, start.elapsed());
                return Err(AppError::Status(StatusCode::INTERNAL_SERVER_ERROR));
            }
        };
    timings.image_generation = stage.elapsed();
    timings.log_success(start.elapsed());

    Ok((
        [(header::CONTENT_TYPE, "image/png"), (header::CACHE_CONTROL, "public, max-age=3600")],
        data,
    )
        .into_response())
}
