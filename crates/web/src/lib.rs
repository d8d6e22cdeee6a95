mod handlers;

use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
    sync::Arc,
    time::Duration,
};

use axum::{
    Router,
    extract::{ConnectInfo, FromRef},
    http::{Method, Request, StatusCode, header},
};
use faq_og_core::config::Config;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt,
    cors::{self, CorsLayer},
    normalize_path::NormalizePathLayer,
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, MakeSpan, TraceLayer},
};
use tracing::{Level, Span};

use crate::handlers::build_router;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

/// Assemble the service: routes plus the shared middleware stack.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(RequestMakeSpan)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(120),
        ))
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(CorsLayer::new().allow_methods([Method::GET]).allow_origin(cors::Any))
        .compression();
    build_router().with_state(state).layer(middleware)
}

#[derive(Debug, Clone)]
struct RequestMakeSpan;

impl<B> MakeSpan<B> for RequestMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        // Prefer the proxy-reported client address when present
        let ip = request
            .headers()
            .get("CF-Connecting-IP")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| IpAddr::from_str(s).ok())
            .or_else(|| {
                request
                    .extensions()
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip())
            })
            .unwrap_or(IpAddr::from([0, 0, 0, 0]));
        let user_agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("[unknown]");
        tracing::span!(
            Level::INFO,
            "request",
            method = %request.method(),
            uri = %request.uri(),
            ip = %ip,
            user_agent = %user_agent,
        )
    }
}
