//! Code Cards · Problem Catalogue Backend
//!
//! - Axum HTTP + WebSocket API over an in-memory catalogue of problem cards
//! - Built-in cards plus session-lifetime user cards (nothing is persisted)
//! - Static page fallback (STATIC_DIR/index.html)
//!
//! Important env variables:
//!   PORT                : u16 (default 3000)
//!   CATALOG_CONFIG_PATH : path to TOML config (extra built-in problems, static_dir)
//!   STATIC_DIR          : page bundle directory (default "./static")
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

mod card;
mod config;
mod cursor;
mod domain;
mod export;
mod logic;
mod protocol;
mod query;
mod routes;
mod seeds;
mod session;
mod state;
mod store;
mod telemetry;
mod util;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let state = Arc::new(AppState::new());
  let app = build_router(state.clone());

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "catalog_backend", %addr, static_dir = %state.static_dir, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "catalog_backend", "Server stopped; user-added cards discarded");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    warn!(target: "catalog_backend", error = %e, "Failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
}
