//! JSON-RPC 2.0 task envelope (A2A task shape).
//!
//! Every call produces a fresh task that moves from `submitted` straight to a
//! terminal state before it is returned. Nothing is stored between calls.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::models::{MessageContext, Reply};

/// JSON-RPC protocol version.
pub const JSONRPC_VERSION: &str = "2.0";
/// The only method this agent accepts.
pub const METHOD_MESSAGE_SEND: &str = "message/send";
/// Name of the single artifact attached to every task.
pub const ARTIFACT_NAME: &str = "codeHelperResponse";

/// Inbound JSON-RPC request.
///
/// Built leniently from any JSON value: missing or mistyped fields become
/// defaults so that a malformed body still yields a well-formed response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Value,
    pub method: String,
    pub params: Value,
}

impl JsonRpcRequest {
    pub fn from_value(value: &Value) -> Self {
        let str_field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            jsonrpc: str_field("jsonrpc"),
            id: value.get("id").cloned().unwrap_or(Value::Null),
            method: str_field("method"),
            params: value.get("params").cloned().unwrap_or(Value::Null),
        }
    }

    /// Text of `params.message.parts`, see [`extract_text`].
    pub fn message_text(&self) -> String {
        self.params
            .pointer("/message/parts")
            .and_then(Value::as_array)
            .map(|parts| extract_text(parts))
            .unwrap_or_default()
    }

    /// Context hints from `params.metadata`, if it is an object.
    pub fn context(&self) -> MessageContext {
        self.params
            .get("metadata")
            .filter(|m| m.is_object())
            .and_then(|m| serde_json::from_value(m.clone()).ok())
            .unwrap_or_default()
    }
}

/// Recover message text from A2A message parts.
///
/// Collects, in order, the `text` of every `text` part and of every `text`
/// item nested in the `data` array of a `data` part. Fragments are trimmed,
/// empty ones dropped, and the rest joined with single spaces.
pub fn extract_text(parts: &[Value]) -> String {
    fn text_of(item: &Value) -> Option<&str> {
        if item.get("kind").and_then(Value::as_str) != Some("text") {
            return None;
        }
        item.get("text")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    let mut fragments = Vec::new();

    for part in parts {
        match part.get("kind").and_then(Value::as_str) {
            Some("text") => fragments.extend(text_of(part)),
            Some("data") => {
                if let Some(items) = part.get("data").and_then(Value::as_array) {
                    fragments.extend(items.iter().filter_map(text_of));
                }
            }
            _ => {}
        }
    }

    fragments.join(" ")
}

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Submitted,
    Completed,
    Failed,
}

/// How a request ended. Only terminal states can be returned to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed,
}

impl From<Outcome> for TaskState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Completed => TaskState::Completed,
            Outcome::Failed => TaskState::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

/// A message or artifact part. Only text parts are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Part {
    Text { text: String },
}

/// One entry of a task's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub kind: &'static str,
    pub role: Role,
    pub parts: Vec<Part>,
    pub message_id: Uuid,
    pub task_id: Uuid,
}

impl HistoryEntry {
    fn new(role: Role, text: &str, task_id: Uuid) -> Self {
        Self {
            kind: "message",
            role,
            parts: vec![Part::Text {
                text: text.to_string(),
            }],
            message_id: Uuid::new_v4(),
            task_id,
        }
    }

    pub fn text(&self) -> &str {
        match self.parts.first() {
            Some(Part::Text { text }) => text.as_str(),
            None => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub artifact_id: Uuid,
    pub name: String,
    pub parts: Vec<Part>,
}

impl Artifact {
    pub fn text(&self) -> &str {
        match self.parts.first() {
            Some(Part::Text { text }) => text.as_str(),
            None => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatus {
    pub state: TaskState,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<HistoryEntry>,
}

/// The JSON-RPC result: one request's lifecycle and terminal state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub context_id: Uuid,
    pub status: TaskStatus,
    pub artifacts: Vec<Artifact>,
    pub history: Vec<HistoryEntry>,
    pub kind: &'static str,
}

impl Task {
    fn submitted() -> Self {
        Self {
            id: Uuid::new_v4(),
            context_id: Uuid::new_v4(),
            status: TaskStatus {
                state: TaskState::Submitted,
                timestamp: now(),
                message: None,
            },
            artifacts: Vec::new(),
            history: Vec::new(),
            kind: "task",
        }
    }

    /// Move to a terminal state, recording the exchange.
    fn finish(mut self, outcome: Outcome, reply: &Reply, original_message: Option<&str>) -> Self {
        let state = TaskState::from(outcome);

        if state == TaskState::Completed {
            if let Some(text) = original_message.filter(|t| !t.trim().is_empty()) {
                self.history.push(HistoryEntry::new(Role::User, text, self.id));
            }
        }

        let agent_message = HistoryEntry::new(Role::Agent, &reply.text, self.id);
        self.history.push(agent_message.clone());

        self.artifacts.push(Artifact {
            artifact_id: Uuid::new_v4(),
            name: ARTIFACT_NAME.to_string(),
            parts: vec![Part::Text {
                text: reply.text.clone(),
            }],
        });

        self.status = TaskStatus {
            state,
            timestamp: now(),
            message: Some(agent_message),
        };
        self
    }

    pub fn state(&self) -> TaskState {
        self.status.state
    }
}

/// JSON-RPC 2.0 success response carrying a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    pub result: Task,
}

/// Wrap `reply` in a JSON-RPC task response.
///
/// The inbound message is recorded in history only for completed tasks.
pub fn build(
    request_id: Value,
    reply: &Reply,
    original_message: Option<&str>,
    outcome: Outcome,
) -> JsonRpcResponse {
    let id = match request_id {
        Value::Null => Value::String(String::new()),
        other => other,
    };

    JsonRpcResponse {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id,
        result: Task::submitted().finish(outcome, reply, original_message),
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
