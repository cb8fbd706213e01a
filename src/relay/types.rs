//! Wire types for the client-facing and upstream-facing JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ROLE_USER: &str = "user";

/// Substituted when a successful upstream response carries no usable content.
pub const NO_RESPONSE: &str = "No response";

/// Inbound body of `POST /openai`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Outbound body on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayReply {
    pub reply: String,
}

/// Outbound body on any failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Chat-completion request sent upstream.
#[derive(Debug, Serialize)]
pub struct UpstreamPayload<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 1],
}

impl<'a> UpstreamPayload<'a> {
    /// A single user turn carrying `message`.
    pub fn single_turn(model: &'a str, message: Option<&'a str>) -> Self {
        Self {
            model,
            messages: [ChatMessage {
                role: ROLE_USER,
                content: message,
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    /// Omitted entirely when the caller sent no message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
}

/// Pull `choices[0].message.content` out of an upstream response.
///
/// Anything other than a non-empty string collapses to [`NO_RESPONSE`].
pub fn extract_reply(response: &Value) -> String {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.is_empty())
        .unwrap_or(NO_RESPONSE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_embeds_message_as_user_turn() {
        let payload = UpstreamPayload::single_turn("gpt-4o-mini", Some("hi"));
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "model": "gpt-4o-mini",
                "messages": [{ "role": "user", "content": "hi" }]
            })
        );
    }

    #[test]
    fn payload_omits_absent_content() {
        let payload = UpstreamPayload::single_turn("gpt-4o-mini", None);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "model": "gpt-4o-mini", "messages": [{ "role": "user" }] })
        );
    }

    #[test]
    fn request_message_may_be_missing_or_null() {
        let missing: RelayRequest = serde_json::from_str("{}").unwrap();
        assert!(missing.message.is_none());
        let null: RelayRequest = serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert!(null.message.is_none());
        let extra: RelayRequest =
            serde_json::from_str(r#"{"message":"hey","temperature":0.2}"#).unwrap();
        assert_eq!(extra.message.as_deref(), Some("hey"));
    }

    #[test]
    fn non_string_message_is_rejected() {
        assert!(serde_json::from_str::<RelayRequest>(r#"{"message":42}"#).is_err());
    }

    #[test]
    fn extracts_first_choice() {
        let response = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "hello" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        });
        assert_eq!(extract_reply(&response), "hello");
    }

    #[test]
    fn falls_back_to_placeholder() {
        for response in [
            json!({}),
            json!({ "choices": [] }),
            json!({ "choices": [{}] }),
            json!({ "choices": [{ "message": { "content": null } }] }),
            json!({ "choices": [{ "message": { "content": "" } }] }),
            json!([1, 2, 3]),
            Value::Null,
        ] {
            assert_eq!(extract_reply(&response), NO_RESPONSE, "{response}");
        }
    }
}
