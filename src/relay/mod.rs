//! Relay subsystem.
//!
//! # Data Flow
//! ```text
//! POST /openai body
//!     → handler.rs (decode RelayRequest)
//!     → client.rs (single-turn payload + bearer key → upstream)
//!     → 2xx: types.rs extracts choices[0].message.content
//!     → otherwise: error.rs maps the failure to status + {error}
//! ```

pub mod client;
pub mod error;
pub mod handler;
pub mod types;

pub use client::UpstreamClient;
pub use error::RelayError;
pub use types::{ErrorBody, RelayReply, RelayRequest, NO_RESPONSE};
