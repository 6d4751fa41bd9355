//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates its arguments
//! 2. Calls one Translator service through the API client
//! 3. Returns the upstream JSON unmodified

mod ars;
mod resolution;

pub use ars::{SubmitTrapiQueryTool, TrapiResultsTool, TrapiStatusTool, TrapiTool};
pub use resolution::{LookupNameTool, NormalizeNodesTool};

use std::sync::Arc;

use crate::client::TranslatorClient;
use crate::error::ToolResult;

/// Tool execution context.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// API client.
    pub client: Arc<TranslatorClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<TranslatorClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "trapi").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // ARS tools (4)
        Box::new(TrapiTool),
        Box::new(TrapiStatusTool),
        Box::new(TrapiResultsTool),
        Box::new(SubmitTrapiQueryTool),

        // Resolution tools (2)
        Box::new(LookupNameTool),
        Box::new(NormalizeNodesTool),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_registry_names() {
        let names: Vec<&str> = register_all_tools().iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "trapi",
                "trapi_status",
                "trapi_results",
                "submit_trapi_query",
                "lookup_name",
                "normalize_nodes"
            ]
        );
    }

    #[test]
    fn test_registry_names_unique() {
        let tools = register_all_tools();
        let unique: HashSet<&str> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(unique.len(), tools.len());
    }

    #[test]
    fn test_schemas_are_objects() {
        for tool in register_all_tools() {
            let schema = tool.input_schema();
            assert_eq!(schema["type"], "object", "{} schema", tool.name());
            assert!(schema["required"].is_array(), "{} schema", tool.name());
            assert!(!tool.description().is_empty());
        }
    }
}
