//! HTTP surface of the flaky backend: `/getbalance` and `/getlogs`.
//!
//! Used by the binary and by integration tests. Create with [`create_router`].
//! Uses Extension for state so the router is `Router<()>`; serve it with
//! `into_make_service_with_connect_info::<SocketAddr>()` so handlers can see
//! the peer address.

use axum::{
    extract::{ConnectInfo, Extension},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use log::{error, info};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::codec;
use crate::log_store::LogStore;
use crate::simulator::Simulator;
use crate::types::{LogRecord, Outcome};

/// Server-side paths, passed in explicitly instead of living in globals.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Append-only log store path.
    pub log_file: PathBuf,
    /// Static asset returned in the body of a 200 balance response.
    pub response_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("logs.log"),
            response_file: PathBuf::from("response.html"),
        }
    }
}

/// Shared app state: one simulator and one log store per process.
#[derive(Clone)]
pub struct AppState {
    simulator: Arc<Mutex<Simulator>>,
    store: Arc<LogStore>,
    response_file: Arc<PathBuf>,
}

/// Builds the router with state.
pub fn create_router(config: ServerConfig, simulator: Simulator) -> Router<()> {
    let state = AppState {
        simulator: Arc::new(Mutex::new(simulator)),
        store: Arc::new(LogStore::new(&config.log_file)),
        response_file: Arc::new(config.response_file),
    };
    Router::new()
        .route("/getbalance", get(get_balance))
        .route("/getlogs", get(get_logs))
        .layer(Extension(state))
}

/// Draws a weighted-random outcome, appends one log record for the peer, and
/// answers with the outcome's status and body.
async fn get_balance(
    Extension(state): Extension<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
) -> Response {
    let outcome = {
        let mut guard = state.simulator.lock().expect("lock");
        guard.draw()
    };
    let status = outcome.status_code();
    info!("balance request from {} -> {}", remote.ip(), status);

    // Exactly one append per request, regardless of outcome. Best-effort:
    // a write failure must not abort the in-flight response.
    let record = LogRecord::now(remote.ip().to_string(), status);
    if let Err(e) = state.store.append(&record) {
        error!("failed to append log record: {}", e);
    }

    match outcome {
        Outcome::Ok => {
            let body = match std::fs::read_to_string(state.response_file.as_ref()) {
                Ok(body) => body,
                Err(e) => {
                    // Missing asset degrades to an empty 200 body.
                    error!("failed to read balance response asset: {}", e);
                    String::new()
                }
            };
            (StatusCode::OK, body).into_response()
        }
        Outcome::Forbidden => {
            (StatusCode::FORBIDDEN, "403 Forbidden: Access Denied").into_response()
        }
        Outcome::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "500: Internal Server Error").into_response()
        }
        Outcome::Timeout => StatusCode::REQUEST_TIMEOUT.into_response(),
        Outcome::Unexpected(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
    }
}

/// Re-reads the whole log store and serializes it into the JSON array.
/// Produced fresh per request; read failure propagates as a non-200.
async fn get_logs(Extension(state): Extension<AppState>) -> Response {
    match state.store.read_lines() {
        Ok(lines) => {
            let body = codec::serialize_log_lines(lines.iter().map(String::as_str));
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            error!("failed to read log store: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read logs: {}", e),
            )
                .into_response()
        }
    }
}
