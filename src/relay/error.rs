//! Relay error taxonomy and its mapping onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::relay::types::ErrorBody;

#[derive(Debug, Error)]
pub enum RelayError {
    /// Upstream answered with a non-2xx status. `body` is its raw text.
    #[error("{body}")]
    Upstream { status: StatusCode, body: String },

    /// Network failure, timeout or body read failure talking to upstream.
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream returned 2xx but the body was not valid JSON.
    #[error("Invalid upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The caller's body could not be accepted.
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },
}

impl RelayError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } | Self::InvalidRequest { status, .. } => *status,
            Self::Transport(_) | Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
