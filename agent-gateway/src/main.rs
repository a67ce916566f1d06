//! Code Helper Lambda - Handles the Telex agent endpoints.
//!
//! Endpoints:
//! - GET / - Service banner
//! - GET /health - Health check
//! - GET /workflow - Telex workflow descriptor
//! - POST /a2a/agent/codeHelper - Simple call, flat envelope
//! - POST /a2a/agent/codeHelper/rpc - JSON-RPC 2.0 call, task envelope

use anyhow::Context;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::json;
use shared::http::{error_response, json_response, parse_json_body};
use shared::service::{self, AGENT_PATH, AGENT_RPC_PATH};
use shared::{Config, Pipeline, SimpleRequest};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const NO_JSON_REPLY: &str =
    "❌ No JSON data received. Please send a POST request with JSON payload.";

/// Application state shared across requests.
struct AppState {
    config: Config,
}

impl AppState {
    fn from_env() -> anyhow::Result<Self> {
        let config = Config::from_env().context("Failed to load agent configuration")?;
        Ok(Self { config })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str();
    let path = match event.uri().path() {
        "/" => "/",
        p => p.trim_end_matches('/'),
    };

    info!("Agent request: {} {}", method, path);

    let pipeline = Pipeline::new(&state.config);

    match (method, path) {
        ("GET", "/") => json_response(200, &service::home(&state.config)),

        ("GET", "/health") => json_response(200, &service::health(&state.config)),

        ("GET", "/workflow") => json_response(200, &service::workflow(&state.config)),

        ("POST", AGENT_PATH) => {
            let Some(body) = parse_json_body(event.body()) else {
                warn!("Simple call without a JSON body");
                return error_response(400, NO_JSON_REPLY);
            };

            let request: SimpleRequest = match serde_json::from_value(body) {
                Ok(request) => request,
                Err(e) => {
                    warn!("Invalid simple call payload: {}", e);
                    return error_response(400, format!("Invalid request: {}", e));
                }
            };

            let (status, envelope) = pipeline.handle_simple(request);
            json_response(status, &envelope)
        }

        ("POST", AGENT_RPC_PATH) => {
            // Malformed bodies still get a failed task back.
            let body = parse_json_body(event.body()).unwrap_or_else(|| json!({}));
            json_response(200, &pipeline.handle_rpc(&body))
        }

        (_, AGENT_PATH) | (_, AGENT_RPC_PATH) => json_response(405, &service::usage()),

        _ => error_response(404, "Not found"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::from_env()?);
    info!(
        agent = %state.config.agent_name,
        version = %state.config.agent_version,
        "Starting Code Helper agent"
    );

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
