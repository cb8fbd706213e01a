//! `POST /openai` handler.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    Json,
};

use crate::http::server::AppState;
use crate::relay::error::RelayError;
use crate::relay::types::{RelayReply, RelayRequest};

/// Explicit decode step for the inbound body.
///
/// An empty body decodes to a request with no message. Anything else must
/// be a JSON object; arrays and scalars are rejected with 400.
///
/// The content type is not checked: a `text/plain` body holding a JSON
/// object is relayed the same as `application/json`. Express-style JSON
/// middleware would instead leave such a body unparsed and forward no
/// message.
#[derive(Debug)]
pub struct RelayPayload(pub RelayRequest);

impl<S> FromRequest<S> for RelayPayload
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| RelayError::InvalidRequest {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(RelayRequest::default()));
        }

        let invalid =
            |e: serde_json::Error| RelayError::bad_request(format!("Invalid request body: {e}"));

        // Derived struct deserializers also accept sequences by position.
        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(invalid)?;
        if !value.is_object() {
            return Err(RelayError::bad_request(
                "Invalid request body: expected a JSON object",
            ));
        }

        serde_json::from_value(value).map(Self).map_err(invalid)
    }
}

pub async fn relay_message(
    State(state): State<AppState>,
    RelayPayload(request): RelayPayload,
) -> Result<Json<RelayReply>, RelayError> {
    let message = request.message.as_deref();

    if state.config.relay.require_message && message.map_or(true, str::is_empty) {
        return Err(RelayError::bad_request("Missing 'message' field"));
    }

    tracing::debug!(
        model = state.upstream.model(),
        has_message = message.is_some(),
        "Relaying message upstream"
    );

    match state.upstream.complete(message).await {
        Ok(reply) => Ok(Json(RelayReply { reply })),
        Err(e) => {
            // Upstream rejections are already logged with their body.
            if !matches!(e, RelayError::Upstream { .. }) {
                tracing::error!(error = %e, "Relay request failed");
            }
            Err(e)
        }
    }
}
