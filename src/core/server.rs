//! MCP server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! Tools are rows in `domains/tools/catalog/` consumed by a generic
//! dispatcher; the ToolRouter is built dynamically in
//! `domains/tools/router.rs`. Adding a tool does not require modifying
//! this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::locations::{LocationCache, LocationResolver};
use crate::domains::prompts::PromptService;
use crate::domains::tools::{ToolContext, ToolRegistry, build_tool_router};

use super::client::DataForSeoClient;
use super::config::Config;
use super::error::Error;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and coordinates between
/// the tools and prompts domain services.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the upstream client cannot be constructed, for example
    /// when credentials are missing.
    pub fn new(config: Config) -> Result<Self, Error> {
        let config = Arc::new(config);

        let client = Arc::new(DataForSeoClient::new(&config.credentials)?);
        let resolver = Arc::new(LocationResolver::new(client.clone(), LocationCache::new()));
        let context = Arc::new(ToolContext {
            client,
            resolver,
            full_response: config.response.full_response,
        });

        let registry = ToolRegistry::new(&config.modules);
        info!(tools = registry.len(), "tool registry built");

        let prompt_service = Arc::new(PromptService::new(&config.prompts));

        Ok(Self {
            tool_router: build_tool_router::<Self>(&registry, context),
            config,
            prompt_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "SEO data gateway backed by the DataForSEO API. Provides SERP results, \
                 keyword research and difficulty metrics, competitor analysis, and \
                 technical OnPage audits as tools, plus prompts for common SEO workflows."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts();
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        // Convert serde_json::Map to HashMap<String, String>
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.credentials.username = Some("login@example.com".to_string());
        config.credentials.password = Some("secret".to_string());
        config
    }

    #[test]
    fn test_server_creation() {
        let server = McpServer::new(test_config()).unwrap();
        assert_eq!(server.name(), "seo-mcp-server");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_server_requires_credentials() {
        let result = McpServer::new(Config::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_server_info_capabilities() {
        let server = McpServer::new(test_config()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.instructions.is_some());
    }
}
