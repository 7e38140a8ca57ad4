//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! error handling, configuration, the upstream HTTP client, server lifecycle
//! management, and the transport layer.

pub mod client;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use client::DataForSeoClient;
pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
