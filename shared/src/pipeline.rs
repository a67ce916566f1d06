//! Request pipeline: guard, classify, compose, then wrap in an envelope.
//!
//! This is the only place errors are turned into responses. Every path returns
//! a well-formed envelope.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::a2a::{self, JsonRpcRequest, JsonRpcResponse, Outcome, METHOD_MESSAGE_SEND};
use crate::composer::{Composer, EMPTY_MESSAGE_REPLY, INTERNAL_ERROR_REPLY};
use crate::intent;
use crate::legacy::{LegacyAdapter, LegacyEnvelope};
use crate::models::{Message, Reply, SimpleRequest};
use crate::{Config, Error, Result};

/// Stateless request pipeline over read-only configuration.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    config: &'a Config,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Classify and answer a message. Blank messages are a validation error.
    pub fn respond(&self, message: &Message) -> Result<Reply> {
        if message.is_blank() {
            return Err(Error::Validation(EMPTY_MESSAGE_REPLY.to_string()));
        }

        let intent = intent::classify(&message.text);
        info!(?intent, "Classified message");

        Composer::new(self.config).compose(intent, message)
    }

    /// Handle a simple call, returning the HTTP status and flat envelope.
    pub fn handle_simple(&self, request: SimpleRequest) -> (u16, LegacyEnvelope) {
        let adapter = LegacyAdapter::new(self.config);
        let request = request.normalized();
        let channel_id = request.channel_id.clone();
        let user_id = request.user_id.clone();

        let outcome = validator::Validate::validate(&request)
            .map_err(Error::from)
            .and_then(|_| {
                info!(
                    user_id = user_id.as_deref().unwrap_or("unknown"),
                    message = %request.message,
                    "Processing message"
                );
                self.respond(&request.into_message())
            });

        match outcome {
            Ok(reply) => (
                200,
                adapter.build(&reply, channel_id.as_deref(), user_id.as_deref()),
            ),
            Err(e) => {
                let reply = self.error_reply(&e);
                (
                    e.status_code(),
                    adapter.error(&reply, channel_id.as_deref(), user_id.as_deref()),
                )
            }
        }
    }

    /// Handle a JSON-RPC call. Malformed input yields a failed task.
    pub fn handle_rpc(&self, body: &Value) -> JsonRpcResponse {
        let request = JsonRpcRequest::from_value(body);

        if request.jsonrpc != a2a::JSONRPC_VERSION {
            warn!(jsonrpc = %request.jsonrpc, "Unexpected JSON-RPC version");
        }

        let text = request.message_text();
        let result = if request.method == METHOD_MESSAGE_SEND {
            let message = Message::new(text.clone(), request.context());
            match self.respond(&message) {
                // Blank text still completes, with guidance instead of an answer.
                Err(Error::Validation(guidance)) => Ok(Reply::new(guidance)),
                other => other,
            }
        } else {
            Err(Error::UnknownMethod(request.method.clone()))
        };

        match result {
            Ok(reply) => a2a::build(request.id, &reply, Some(text.as_str()), Outcome::Completed),
            Err(e) => {
                let reply = self.error_reply(&e);
                a2a::build(request.id, &reply, None, Outcome::Failed)
            }
        }
    }

    fn error_reply(&self, err: &Error) -> Reply {
        match err {
            Error::Validation(_) => {
                warn!(error = %err, "Rejected request");
                Reply::new(EMPTY_MESSAGE_REPLY)
            }
            Error::UnknownMethod(method) => {
                warn!(method = %method, "Unknown JSON-RPC method");
                Reply::new(format!(
                    "Unknown method: '{}'. Only '{}' is supported.",
                    method, METHOD_MESSAGE_SEND
                ))
            }
            _ => {
                error!(error = %err, "Failed to process request");
                Reply::new(INTERNAL_ERROR_REPLY)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a2a::{Role, TaskState};
    use crate::models::MessageContext;
    use serde_json::json;

    fn rpc(method: &str, text: &str) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": "req-42",
            "method": method,
            "params": {"message": {"kind": "message", "role": "user", "parts": [{"kind": "text", "text": text}]}}
        })
    }

    #[test]
    fn test_respond_help() {
        let config = Config::default();
        let reply = Pipeline::new(&config)
            .respond(&Message::new("help", MessageContext::default()))
            .unwrap();
        assert!(reply.text.contains("Code Analysis"));
    }

    #[test]
    fn test_respond_blank_is_validation_error() {
        let config = Config::default();
        let err = Pipeline::new(&config)
            .respond(&Message::new("  ", MessageContext::default()))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_simple_call() {
        let config = Config::default();
        let request: SimpleRequest =
            serde_json::from_value(json!({"message": "explain OOP", "user_id": "u-1"})).unwrap();
        let (status, envelope) = Pipeline::new(&config).handle_simple(request);

        assert_eq!(status, 200);
        assert!(envelope.data.response.contains("Object-Oriented Programming"));
        assert_eq!(envelope.meta.user_id, "u-1");
        assert_eq!(envelope.meta.channel_id, "unknown");
    }

    #[test]
    fn test_simple_call_empty_message() {
        let config = Config::default();
        let request: SimpleRequest = serde_json::from_value(json!({"message": ""})).unwrap();
        let (status, envelope) = Pipeline::new(&config).handle_simple(request);

        assert_eq!(status, 400);
        assert!(envelope.error);
        assert_eq!(envelope.data.response, EMPTY_MESSAGE_REPLY);
    }

    #[test]
    fn test_rpc_completed() {
        let config = Config::default();
        let response = Pipeline::new(&config).handle_rpc(&rpc("message/send", "explain git"));
        let task = &response.result;

        assert_eq!(response.id, json!("req-42"));
        assert_eq!(task.state(), TaskState::Completed);
        assert_eq!(task.history.len(), 2);
        assert_eq!(task.history[0].text(), "explain git");
        assert!(task.history[1].text().contains("distributed version control"));
        assert_eq!(task.artifacts[0].text(), task.history[1].text());
    }

    #[test]
    fn test_rpc_unknown_method() {
        let config = Config::default();
        let response = Pipeline::new(&config).handle_rpc(&rpc("ping", "help"));
        let task = &response.result;

        assert_eq!(task.state(), TaskState::Failed);
        assert_eq!(task.history.len(), 1);
        assert_eq!(task.history[0].role, Role::Agent);
        assert!(task.history[0].text().contains("Unknown method"));
    }

    #[test]
    fn test_rpc_empty_body() {
        let config = Config::default();
        let response = Pipeline::new(&config).handle_rpc(&json!({}));

        assert_eq!(response.id, json!(""));
        assert_eq!(response.result.state(), TaskState::Failed);
        assert_eq!(response.result.artifacts.len(), 1);
    }

    #[test]
    fn test_rpc_blank_message_completes_with_guidance() {
        let config = Config::default();
        let response = Pipeline::new(&config).handle_rpc(&rpc("message/send", "   "));
        let task = &response.result;

        assert_eq!(task.state(), TaskState::Completed);
        assert_eq!(task.history.len(), 1);
        assert_eq!(task.history[0].text(), EMPTY_MESSAGE_REPLY);
    }

    #[test]
    fn test_internal_error_reply_is_generic_apology() {
        let config = Config::default();
        let reply = Pipeline::new(&config).error_reply(&Error::Internal("render failed: secret detail".into()));

        assert_eq!(reply.text, INTERNAL_ERROR_REPLY);
        assert!(!reply.text.contains("secret detail"));
    }

    #[test]
    fn test_internal_error_becomes_failed_task() {
        let config = Config::default();
        let reply = Pipeline::new(&config).error_reply(&Error::Internal("boom".into()));
        let task = a2a::build(json!("req-9"), &reply, Some("secret"), Outcome::Failed).result;

        assert_eq!(task.state(), TaskState::Failed);
        assert_eq!(task.history.len(), 1);
        assert_eq!(task.history[0].role, Role::Agent);
        assert_eq!(task.history[0].text(), INTERNAL_ERROR_REPLY);
        assert_eq!(task.artifacts[0].text(), INTERNAL_ERROR_REPLY);
    }

    #[test]
    fn test_internal_error_becomes_error_envelope() {
        let config = Config::default();
        let err = Error::Internal("boom".into());
        let reply = Pipeline::new(&config).error_reply(&err);
        let envelope = LegacyAdapter::new(&config).error(&reply, Some("c-1"), Some("u-1"));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(err.status_code(), 500);
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], true);
        assert_eq!(value["data"]["response"], INTERNAL_ERROR_REPLY);
    }
}
