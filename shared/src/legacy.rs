//! Flat REST envelope for the simple endpoint.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::models::Reply;
use crate::Config;

/// Capabilities advertised in every flat envelope.
pub const CAPABILITIES: &[&str] = &["code_analysis", "concept_explanation"];

/// Used when the caller omits channel or user ids.
const UNKNOWN_ID: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyData {
    pub response: String,
    pub agent: String,
    pub version: String,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMeta {
    pub channel_id: String,
    pub user_id: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyEnvelope {
    pub status: Status,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
    pub data: LegacyData,
    pub meta: LegacyMeta,
}

/// Reshapes replies into the flat envelope. Carries only agent identity.
#[derive(Debug, Clone, Copy)]
pub struct LegacyAdapter<'a> {
    config: &'a Config,
}

impl<'a> LegacyAdapter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(&self, reply: &Reply, channel_id: Option<&str>, user_id: Option<&str>) -> LegacyEnvelope {
        self.envelope(Status::Success, reply, channel_id, user_id)
    }

    pub fn error(&self, reply: &Reply, channel_id: Option<&str>, user_id: Option<&str>) -> LegacyEnvelope {
        self.envelope(Status::Error, reply, channel_id, user_id)
    }

    fn envelope(
        &self,
        status: Status,
        reply: &Reply,
        channel_id: Option<&str>,
        user_id: Option<&str>,
    ) -> LegacyEnvelope {
        LegacyEnvelope {
            status,
            error: status == Status::Error,
            data: LegacyData {
                response: reply.text.clone(),
                agent: self.config.agent_name.clone(),
                version: self.config.agent_version.clone(),
                capabilities: CAPABILITIES.iter().map(|c| c.to_string()).collect(),
            },
            meta: LegacyMeta {
                channel_id: channel_id.unwrap_or(UNKNOWN_ID).to_string(),
                user_id: user_id.unwrap_or(UNKNOWN_ID).to_string(),
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}
