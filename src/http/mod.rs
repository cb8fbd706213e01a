//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, CORS, body limit, tracing)
//!     → request.rs (assign or keep x-request-id)
//!     → GET  /        → status.rs
//!     → POST /openai  → relay::handler
//!     → Send to client (x-request-id echoed)
//! ```

pub mod request;
pub mod server;
pub mod status;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, RelayServer};
