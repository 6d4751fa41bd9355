//! TRAPI MCP Server
//!
//! A Model Context Protocol (MCP) server exposing NCATS Biomedical Data
//! Translator services as tools for LLM agents.
//!
//! # Tools
//!
//! - **ARS**: `trapi` (build and submit a one-hop query), `submit_trapi_query`,
//!   `trapi_status`, `trapi_results`
//! - **Name Resolution**: `lookup_name`
//! - **Node Normalization**: `normalize_nodes`
//!
//! Every tool makes exactly one upstream request and returns the upstream JSON
//! unchanged. Polling a submitted job until it finishes is left to the caller.
//!
//! # Example
//!
//! ```no_run
//! use trapi_mcp::{client::TranslatorClient, config::Config, server::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = TranslatorClient::new(config)?;
//!
//!     McpServer::new(client).run_stdio().await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod tools;

pub use client::TranslatorClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
