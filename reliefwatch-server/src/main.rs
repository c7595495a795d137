//! HTTP server exposing the scoring pipeline.
//!
//! Serves a small dashboard at `/` and a JSON API at `POST /api/check`
//! that resolves coordinates to a country, fetches that country's
//! ReliefWeb reports, and returns them scored for disaster relevance.
#![forbid(unsafe_code)]

mod config;
mod routes;

use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use axum::routing::{get, post};
use reliefwatch_core::BatchAggregator;
use reliefwatch_data::{ClientBuildError, NominatimClient, ReliefWebClient};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::routes::AppState;

/// Failures that abort server startup.
#[derive(Debug, Error)]
enum ServerError {
    /// A gateway HTTP client could not be constructed.
    #[error("failed to build gateway client: {source}")]
    Client {
        #[from]
        source: ClientBuildError,
    },
    /// The listen socket could not be bound or served.
    #[error("server io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/api/check", post(routes::check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState {
        geocoder: NominatimClient::with_config(config.nominatim())?,
        reports: ReliefWebClient::with_config(config.reliefweb())?,
        aggregator: BatchAggregator::default(),
    };
    let app = build_router(state);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reliefwatch_server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    if let Err(err) = run(config).await {
        eprintln!("reliefwatch-server: {err}");
        std::process::exit(1);
    }
}
