//! Identifier tools: lookup_name, normalize_nodes.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::{ToolError, ToolResult};
use crate::models::{LookupNameInput, NormalizeNodesInput};

/// Free text → CURIE lookup.
pub struct LookupNameTool;

#[async_trait::async_trait]
impl McpTool for LookupNameTool {
    fn name(&self) -> &'static str {
        "lookup_name"
    }

    fn description(&self) -> &'static str {
        "Find CURIEs for a name or synonym using the Name Resolution service. \
         Optionally filter by Biolink type, CURIE prefix or taxon."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "string": {
                    "type": "string",
                    "description": "Text to look up (e.g., 'type 2 diabetes')"
                },
                "autocomplete": {
                    "type": "boolean",
                    "default": false,
                    "description": "Treat the last word as a prefix"
                },
                "highlighting": {
                    "type": "boolean",
                    "default": false
                },
                "offset": {
                    "type": "integer",
                    "default": 0,
                    "minimum": 0
                },
                "limit": {
                    "type": "integer",
                    "default": 10,
                    "minimum": 0
                },
                "biolink_type": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Biolink types to restrict to (e.g., biolink:Disease)"
                },
                "only_prefixes": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "CURIE prefixes to restrict to (e.g., MONDO)"
                },
                "exclude_prefixes": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "CURIE prefixes to exclude"
                },
                "only_taxa": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Taxa to restrict to (e.g., NCBITaxon:9606)"
                }
            },
            "required": ["string"]
        })
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: LookupNameInput = serde_json::from_value(input)?;
        ctx.client.lookup_name(&params).await.map_err(ToolError::from)
    }
}

/// CURIE normalization.
pub struct NormalizeNodesTool;

#[async_trait::async_trait]
impl McpTool for NormalizeNodesTool {
    fn name(&self) -> &'static str {
        "normalize_nodes"
    }

    fn description(&self) -> &'static str {
        "Normalize CURIEs to their preferred identifiers, equivalent identifiers and \
         Biolink types using the Node Normalization service. Unknown CURIEs map to null."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "curies": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": 1,
                    "description": "CURIEs to normalize (e.g., MONDO:0005148)"
                },
                "conflate": {
                    "type": "boolean",
                    "default": true,
                    "description": "Conflate genes with their protein products"
                },
                "drug_chemical_conflate": {
                    "type": "boolean",
                    "default": false,
                    "description": "Conflate drugs with their active chemicals"
                },
                "description": {
                    "type": "boolean",
                    "default": false,
                    "description": "Include descriptions"
                },
                "individual_types": {
                    "type": "boolean",
                    "default": false,
                    "description": "Include the Biolink type of each equivalent identifier"
                }
            },
            "required": ["curies"]
        })
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: NormalizeNodesInput = serde_json::from_value(input)?;

        if params.curies.is_empty() {
            return Err(ToolError::validation("curies", "must contain at least one CURIE"));
        }

        ctx.client.normalize_nodes(&params).await.map_err(ToolError::from)
    }
}
