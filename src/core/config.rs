//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the remote Countries API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.ote-godaddy.com";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Remote API configuration.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration of the remote REST API the tools front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Tool names to leave out of the registry.
    #[serde(default)]
    pub disabled_tools: Vec<String>,
}

impl ApiConfig {
    /// Whether the named tool should be registered.
    pub fn is_enabled(&self, tool: &str) -> bool {
        !self.disabled_tools.iter().any(|t| t == tool)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for external API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// API credential. When unset, requests are sent without authorization
    /// (the Countries endpoints are public). Never serialized.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Scheme prefix of the `Authorization` header, e.g. `sso-key` or `Bearer`.
    pub auth_scheme: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("auth_scheme", &self.auth_scheme)
            .finish()
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            auth_scheme: "sso-key".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("countries-mcp-server/{}", env!("CARGO_PKG_VERSION")),
            disabled_tools: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "countries-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api: ApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_API_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_API_BASE_URL") {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
            info!("API base URL: {}", config.api.base_url);
        }

        if let Ok(timeout) = std::env::var("MCP_API_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.api.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_API_TIMEOUT_SECS '{}', using {}s",
                    timeout, config.api.timeout_secs
                ),
            }
        }

        if let Ok(disabled) = std::env::var("MCP_API_DISABLED_TOOLS") {
            config.api.disabled_tools = disabled
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(api_key) = std::env::var("MCP_API_KEY") {
            config.credentials.api_key = Some(api_key);
            info!("API credential loaded from environment");
        }

        if let Ok(scheme) = std::env::var("MCP_API_AUTH_SCHEME") {
            config.credentials.auth_scheme = scheme;
        }

        config
    }
}
