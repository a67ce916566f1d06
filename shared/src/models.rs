//! Shared data models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Caller-supplied context accompanying a message.
///
/// Arbitrary JSON is accepted; only string values are read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MessageContext(Map<String, Value>);

impl MessageContext {
    /// Look up a string value by key, ignoring blank and non-string values.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Language hint, if the caller sent one.
    pub fn language(&self) -> Option<&str> {
        self.get_str("language")
    }

    #[cfg(test)]
    pub(crate) fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), Value::String(value.to_string()));
        self
    }
}

/// A single inbound message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    pub text: String,
    pub context: MessageContext,
}

impl Message {
    pub fn new(text: impl Into<String>, context: MessageContext) -> Self {
        Self {
            text: text.into(),
            context,
        }
    }

    /// Whether the message carries no text worth classifying.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The composed, human-readable reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Simple-call request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SimpleRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
    #[serde(default)]
    pub context: MessageContext,
    #[serde(default, alias = "channelId")]
    pub channel_id: Option<String>,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
}

impl SimpleRequest {
    /// Trim the message so whitespace-only input fails validation.
    pub fn normalized(mut self) -> Self {
        self.message = self.message.trim().to_string();
        self
    }

    pub fn into_message(self) -> Message {
        Message::new(self.message, self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_request() {
        let json = r#"{"message":"  help ","context":{"language":"Rust","depth":3},"channelId":"c-1"}"#;
        let request: SimpleRequest = serde_json::from_str(json).unwrap();
        let request = request.normalized();

        assert_eq!(request.message, "help");
        assert_eq!(request.channel_id.as_deref(), Some("c-1"));
        assert_eq!(request.user_id, None);
        assert_eq!(request.context.language(), Some("Rust"));
        assert_eq!(request.context.get_str("depth"), None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_message_fails_validation() {
        let request: SimpleRequest = serde_json::from_str(r#"{"message":"   "}"#).unwrap();
        assert!(request.normalized().validate().is_err());

        let request: SimpleRequest = serde_json::from_str("{}").unwrap();
        assert!(request.normalized().validate().is_err());
    }
}
