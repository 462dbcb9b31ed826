//! Flaky balance server binary.
//!
//! Usage: `flaky_balance_server [ip] [port]`. Defaults to `0.0.0.0:8080`; an
//! invalid port falls back to the default with a warning. `LOG_FILE` and
//! `RESPONSE_FILE` override the default store and asset paths.

use flaky_balance::api::{self, ServerConfig};
use flaky_balance::simulator::{Simulator, SimulatorConfig};
use std::net::SocketAddr;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    let _ = env_logger::try_init();

    let args: Vec<String> = std::env::args().collect();
    let ip = args.get(1).cloned().unwrap_or_else(|| "0.0.0.0".to_string());
    let port = match args.get(2) {
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) if port > 0 => port,
            _ => {
                println!(
                    "Invalid port number provided. Default port {} will be used.",
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }
        },
        None => DEFAULT_PORT,
    };

    let mut config = ServerConfig::default();
    if let Ok(path) = std::env::var("LOG_FILE") {
        config.log_file = path.into();
    }
    if let Ok(path) = std::env::var("RESPONSE_FILE") {
        config.response_file = path.into();
    }

    let app = api::create_router(config, Simulator::new(SimulatorConfig::default()));

    let addr = format!("{}:{}", ip, port);
    let listener = TcpListener::bind(&addr).await.expect("bind");
    println!("Server started on {}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("serve");
}
