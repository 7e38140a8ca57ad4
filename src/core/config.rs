//! Configuration management for the MCP server.
//!
//! All configuration comes from environment variables (a `.env` file is
//! honored via dotenvy), organized by domain for clarity.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::transport::TransportConfig;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream API credentials.
    pub credentials: CredentialsConfig,

    /// Which upstream API modules are exposed as tools.
    pub modules: ModulesConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Response shaping configuration.
    pub response: ResponseConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Credentials and endpoint for the upstream DataForSEO API.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Account username (email).
    pub username: Option<String>,

    /// Account password.
    pub password: Option<String>,

    /// Override for the API base URL, used mainly in tests.
    pub base_url: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Selection of upstream API modules to expose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// Allow-list of module names. `None` or empty enables all modules.
    pub enabled: Option<Vec<String>>,
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// Allow-list of prompt names. `None` or empty enables all prompts.
    pub enabled: Option<Vec<String>>,
}

/// Response shaping configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseConfig {
    /// Return full upstream envelopes instead of projected items.
    pub full_response: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "seo-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            credentials: CredentialsConfig::default(),
            modules: ModulesConfig::default(),
            prompts: PromptsConfig::default(),
            response: ResponseConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(username) = std::env::var("DATAFORSEO_USERNAME") {
            config.credentials.username = Some(username);
        }
        if let Ok(password) = std::env::var("DATAFORSEO_PASSWORD") {
            config.credentials.password = Some(password);
        }
        if let Ok(base_url) = std::env::var("DATAFORSEO_BASE_URL") {
            config.credentials.base_url = Some(base_url);
        }
        if config.credentials.username.is_none() || config.credentials.password.is_none() {
            warn!(
                "DATAFORSEO_USERNAME and DATAFORSEO_PASSWORD are not both set; \
                 upstream calls will be rejected"
            );
        }

        if let Ok(modules) = std::env::var("ENABLED_MODULES") {
            config.modules.enabled = Some(split_list(&modules));
        }

        if let Ok(prompts) = std::env::var("ENABLED_PROMPTS") {
            config.prompts.enabled = Some(split_list(&prompts));
        }

        if let Ok(full) = std::env::var("DATAFORSEO_FULL_RESPONSE") {
            config.response.full_response = full.trim().eq_ignore_ascii_case("true");
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}
