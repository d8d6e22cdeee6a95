use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use faq_og_core::config::Config;
use faq_og_web::{AppState, app};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::builder()
        // Default to info level
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let config = Arc::new(Config::load("config.yml").expect("Failed to load config file"));
    let state = AppState { config: config.clone(), client: reqwest::Client::new() };

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server.port));
    tracing::info!("Web server: Listening on {}", addr);
    let listener = TcpListener::bind(addr).await.expect("bind error");
    let router = app(state).into_make_service_with_connect_info::<SocketAddr>();
    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")
    {
        tracing::error!("{e}");
    }
    tracing::info!("Shut down gracefully");
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler");
        tokio::select! {
            result = signal::ctrl_c() => result.expect("Failed to listen for ctrl-c"),
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.expect("Failed to listen for ctrl-c");
    }
}
