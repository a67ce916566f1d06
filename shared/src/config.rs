//! Configuration management for the agent.

use std::env;

use crate::{Error, Result};

/// Default display name advertised by the agent.
pub const DEFAULT_AGENT_NAME: &str = "Python Code Helper";
/// Default agent version.
pub const DEFAULT_AGENT_VERSION: &str = "1.0.0";
/// Language assumed for analysis when the caller sends none.
pub const DEFAULT_LANGUAGE: &str = "python";
/// Placeholder URL used in the workflow descriptor.
pub const DEFAULT_PUBLIC_URL: &str = "https://your-deployment-url/a2a/agent/codeHelper";

/// Languages the agent advertises in its help text.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "Java",
    "Go",
    "Rust",
    "C++",
    "C#",
    "PHP",
    "Ruby",
];

/// Agent configuration loaded once at cold start and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Agent display name
    pub agent_name: String,
    /// Agent version
    pub agent_version: String,
    /// Language used for code analysis when the context has none
    pub default_language: String,
    /// Public URL of the agent endpoint (used by the workflow descriptor)
    pub public_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_name: DEFAULT_AGENT_NAME.to_string(),
            agent_version: DEFAULT_AGENT_VERSION.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; keys set to a blank value are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| -> Result<String> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => {
                    Err(Error::Config(format!("{} is set but empty", key)))
                }
                Some(value) => Ok(value.trim().to_string()),
                None => Ok(default.to_string()),
            }
        };

        Ok(Self {
            agent_name: read("AGENT_NAME", DEFAULT_AGENT_NAME)?,
            agent_version: read("AGENT_VERSION", DEFAULT_AGENT_VERSION)?,
            default_language: read("DEFAULT_LANGUAGE", DEFAULT_LANGUAGE)?.to_lowercase(),
            public_url: read("AGENT_PUBLIC_URL", DEFAULT_PUBLIC_URL)?,
        })
    }
}
