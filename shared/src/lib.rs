//! Shared library for the Code Helper agent.
//!
//! Holds the request pipeline (intent classification, reply composition and
//! the two response envelopes) plus configuration and HTTP helpers used by the
//! Lambda handler.

pub mod a2a;
pub mod analyzer;
pub mod composer;
pub mod concepts;
pub mod config;
pub mod error;
pub mod http;
pub mod intent;
pub mod legacy;
pub mod models;
pub mod pipeline;
pub mod service;
mod text;

pub use a2a::{JsonRpcRequest, JsonRpcResponse, Outcome, Task, TaskState};
pub use analyzer::CodeAnalysis;
pub use composer::Composer;
pub use concepts::ConceptExplanation;
pub use config::Config;
pub use error::{Error, Result};
pub use intent::Intent;
pub use legacy::{LegacyAdapter, LegacyEnvelope};
pub use models::{Message, MessageContext, Reply, SimpleRequest};
pub use pipeline::Pipeline;
