pub mod config;
pub mod title;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Response body for any failed render. Error detail stays server-side.
pub const RENDER_FAILURE_BODY: &str = "Failed to generate the image";

pub enum AppError {
    Status(StatusCode),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Status(status) if status == StatusCode::NOT_FOUND => {
                (status, "Not found").into_response()
            }
            Self::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR => {
                (status, RENDER_FAILURE_BODY).into_response()
            }
            Self::Status(status) => status.into_response(),
            Self::Internal(err) => {
                tracing::error!("{:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILURE_BODY).into_response()
            }
        }
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self { Self::Internal(err.into()) }
}
