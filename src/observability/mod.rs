//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers, upstream client, server lifecycle
//!     → tracing events with structured fields
//!     → TraceLayer span per request (method, path, request_id)
//!     → logging.rs subscriber (stdout, pretty or JSON)
//! ```

pub mod logging;
