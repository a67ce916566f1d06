//! Informational payloads: banner, health check, usage and the Telex workflow
//! descriptor.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::SUPPORTED_LANGUAGES;
use crate::Config;

/// Route of the simple-call endpoint.
pub const AGENT_PATH: &str = "/a2a/agent/codeHelper";
/// Route of the JSON-RPC endpoint.
pub const AGENT_RPC_PATH: &str = "/a2a/agent/codeHelper/rpc";

const WORKFLOW_ID: &str = "python_code_helper_v1";
const WORKFLOW_NAME: &str = "python_code_helper";
const NODE_TYPE: &str = "a2a/python-a2a-node";

const LONG_DESCRIPTION: &str = "You are a helpful code assistant that provides code analysis, \
programming explanations, and development guidance. You help developers with code review, \
concept explanations, and best practices across multiple programming languages.";

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub agent: String,
    pub version: String,
    pub timestamp: String,
}

pub fn health(config: &Config) -> Health {
    Health {
        status: "healthy",
        agent: config.agent_name.clone(),
        version: config.agent_version.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Service banner listing the available endpoints.
pub fn home(config: &Config) -> Value {
    json!({
        "message": format!("{} is running", config.agent_name),
        "status": "active",
        "version": config.agent_version,
        "supportedLanguages": SUPPORTED_LANGUAGES,
        "endpoints": {
            "GET /health": "Health check",
            "GET /workflow": "Telex workflow JSON",
            format!("POST {}", AGENT_PATH): "Simple agent endpoint",
            format!("POST {}", AGENT_RPC_PATH): "JSON-RPC 2.0 agent endpoint (message/send)",
        },
    })
}

/// Usage help returned for GET on the agent route.
pub fn usage() -> Value {
    json!({
        "error": "Method Not Allowed",
        "message": "This endpoint only accepts POST requests",
        "usage": {
            "method": "POST",
            "content-type": "application/json",
            "example_payload": {
                "message": "help",
                "channel_id": "your-channel-id",
                "user_id": "your-user-id",
                "context": {"language": "python"}
            }
        }
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNode {
    pub id: &'static str,
    pub name: &'static str,
    pub parameters: Value,
    pub position: [u32; 2],
    #[serde(rename = "type")]
    pub node_type: &'static str,
    pub type_version: u32,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct Workflow {
    pub active: bool,
    pub category: &'static str,
    pub description: &'static str,
    pub id: &'static str,
    pub long_description: &'static str,
    pub name: &'static str,
    pub nodes: Vec<WorkflowNode>,
    #[serde(rename = "pinData")]
    pub pin_data: Value,
    pub settings: Value,
    pub short_description: &'static str,
}

/// Telex workflow descriptor pointing at this agent.
pub fn workflow(config: &Config) -> Workflow {
    Workflow {
        active: true,
        category: "development",
        description: "AI-powered code analysis and programming assistance",
        id: WORKFLOW_ID,
        long_description: LONG_DESCRIPTION,
        name: WORKFLOW_NAME,
        nodes: vec![WorkflowNode {
            id: "code_helper_agent",
            name: "Code Helper Agent",
            parameters: json!({}),
            position: [500, 200],
            node_type: NODE_TYPE,
            type_version: 1,
            url: config.public_url.clone(),
        }],
        pin_data: json!({}),
        settings: json!({"executionOrder": "v1"}),
        short_description: "AI code analysis and programming assistance",
    }
}
