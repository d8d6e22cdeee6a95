use axum::{Json, http::StatusCode};
use faq_og_core::AppError;
use serde_json::{Value, json};

/// Liveness probe for load balancers and monitoring.
pub async fn health() -> Json<Value> { Json(json!({ "status": "ok" })) }

pub async fn not_found() -> AppError { AppError::Status(StatusCode::NOT_FOUND) }
