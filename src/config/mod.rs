//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → loader.rs (optional TOML file, then OPENAI_API_KEY / PORT)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with every handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults to allow an empty environment
//! - A missing API key is not a startup error; upstream rejects it later

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ApiKey, ListenerConfig, LogFormat, ObservabilityConfig, RelayBehaviorConfig, RelayConfig,
    UpstreamConfig,
};
