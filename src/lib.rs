//! OpenAI relay library.
//!
//! Accepts `{ "message": ... }` from clients, forwards it to a chat-completion
//! API with a server-side bearer key, and answers `{ "reply": ... }` or
//! `{ "error": ... }`.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::schema::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
