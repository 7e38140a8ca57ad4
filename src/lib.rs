//! SEO MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the DataForSEO API as callable tools, with a modular architecture
//! organized by domains.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the upstream HTTP client, the
//!   main server handler and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the data-driven endpoint catalog and its generic dispatcher
//!   - **locations**: free-text location resolution with a TTL cache
//!   - **prompts**: prompt templates for multi-step SEO workflows
//!
//! # Example
//!
//! ```rust,no_run
//! use seo_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
