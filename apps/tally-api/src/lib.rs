//! # Tally API
//!
//! HTTP server that scores receipts and serves the stored points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally API Server                               │
//! │                                                                         │
//! │  Client ───► axum (8080) ───► ReceiptService ───► tally-core (score)   │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                              tally-store (id → points)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `SERVER_ADDRESS` - Interface to bind (default: 0.0.0.0)
//! - `PORT` - HTTP port (default: 8080)
//! - `REQUEST_TIMEOUT_SECS` - Per-request deadline (default: 10)
//! - `LOG_FILTER` - Tracing filter directive (default: info)

pub mod config;
pub mod error;
pub mod routes;
pub mod services;

use std::sync::Arc;

use tally_store::ScoreRepository;
use tokio_util::sync::CancellationToken;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ServiceError};
pub use routes::router;
pub use services::ReceiptService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub receipts: ReceiptService,
    pub config: Arc<ApiConfig>,
    /// Cancelled when the server starts shutting down; requests derive
    /// child tokens from it.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: ApiConfig, store: Arc<dyn ScoreRepository>) -> Self {
        AppState {
            receipts: ReceiptService::new(store),
            config: Arc::new(config),
            shutdown: CancellationToken::new(),
        }
    }
}
