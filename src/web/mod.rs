//! Web layer - Local HTTP API over the note manager

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

use crate::infrastructure::Config;

/// Shared state for the web layer: just the resolved configuration.
/// Managers are opened per request through the backend selector, never
/// cached here, so every request observes the current file contents.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

pub use routes::create_router;
pub use server::serve;
