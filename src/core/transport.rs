//! Transport layer for the MCP server.
//!
//! Two transports are supported, selected by feature flag and the
//! `MCP_TRANSPORT` environment variable:
//! - **STDIO** (default): standard input/output, the normal MCP mode
//! - **TCP**: line-delimited JSON-RPC over a TCP socket

use rmcp::ServiceExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[cfg(feature = "tcp")]
use tokio::net::TcpListener;
#[cfg(feature = "tcp")]
use tracing::warn;

use super::McpServer;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Server initialization error.
    #[error("Server initialization error: {0}")]
    Init(String),

    /// Service error from rmcp.
    #[error("Service error: {0}")]
    Service(String),
}

impl TransportError {
    fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }
}

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with JSON-RPC messages.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

#[cfg(feature = "tcp")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: default_host(),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or tcp");
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => {
                let port = std::env::var("MCP_TCP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000);
                let host = std::env::var("MCP_TCP_HOST").unwrap_or_else(|_| default_host());
                Self::Tcp(TcpConfig { port, host })
            }
            #[cfg(feature = "stdio")]
            _ => Self::Stdio,
            #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
            _ => Self::Tcp(TcpConfig::default()),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
        }
    }
}

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => run_stdio(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => run_tcp(server, cfg).await,
        }
    }
}

/// Run the STDIO transport.
#[cfg(feature = "stdio")]
async fn run_stdio(server: McpServer) -> TransportResult<()> {
    info!("Ready - communicating via stdin/stdout");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::init(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| TransportError::Service(e.to_string()))?;

    info!("STDIO transport finished");
    Ok(())
}

/// Run the TCP transport, serving each connection on its own task.
#[cfg(feature = "tcp")]
async fn run_tcp(server: McpServer, config: TcpConfig) -> TransportResult<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| TransportError::Bind {
            address: addr.clone(),
            source,
        })?;

    info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if let Err(e) = stream.set_nodelay(true) {
                    warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                }

                let server = server.clone();
                tokio::spawn(async move {
                    match server.serve(stream).await {
                        Ok(service) => {
                            info!("Client {} connected, serving...", peer_addr);
                            if let Err(e) = service.waiting().await {
                                warn!("Error while serving client {}: {}", peer_addr, e);
                            } else {
                                info!("Client {} disconnected cleanly", peer_addr);
                            }
                        }
                        Err(e) => {
                            warn!("Failed to initialize service for {}: {}", peer_addr, e);
                        }
                    }
                });
            }
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
            }
        }
    }
}
