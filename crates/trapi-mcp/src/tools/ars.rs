//! ARS tools: trapi, trapi_status, trapi_results, submit_trapi_query.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::{ToolError, ToolResult};
use crate::models::{JobInput, SubmitQueryInput, TrapiInput, TrapiQuery, ensure_query_graph};

/// Build and submit a one-hop query.
pub struct TrapiTool;

#[async_trait::async_trait]
impl McpTool for TrapiTool {
    fn name(&self) -> &'static str {
        "trapi"
    }

    fn description(&self) -> &'static str {
        "Build a single-edge TRAPI query (subject -predicate-> object) and submit it to the \
         ARS. Leave subject or object empty for an open node. Returns the submission \
         response; keep its 'pk' to poll trapi_status and fetch trapi_results."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "subject": {
                    "type": "string",
                    "default": "",
                    "description": "Subject CURIE (e.g., MONDO:0021117). Empty for an open node."
                },
                "object": {
                    "type": "string",
                    "default": "",
                    "description": "Object CURIE (e.g., HP:0000217). Empty for an open node."
                },
                "predicate": {
                    "type": "string",
                    "description": "Biolink predicate (e.g., biolink:treats)"
                },
                "attributes": {
                    "type": "array",
                    "items": {"type": "object"},
                    "description": "TRAPI attribute objects for the edge"
                },
                "qualifiers": {
                    "type": "array",
                    "items": {"type": "object"},
                    "description": "TRAPI qualifier objects for the edge"
                },
                "subject_categories": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Biolink categories for the subject (e.g., biolink:Disease)"
                },
                "object_categories": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Biolink categories for the object (e.g., biolink:Gene)"
                }
            },
            "required": ["predicate"]
        })
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: TrapiInput = serde_json::from_value(input)?;
        let query = TrapiQuery::one_hop(&params)?.to_value()?;

        tracing::debug!(
            subject = %params.subject,
            object = %params.object,
            predicate = %params.predicate,
            "Built one-hop query"
        );

        ctx.client.submit_query(&query).await.map_err(ToolError::from)
    }
}

/// Poll a submitted job.
pub struct TrapiStatusTool;

#[async_trait::async_trait]
impl McpTool for TrapiStatusTool {
    fn name(&self) -> &'static str {
        "trapi_status"
    }

    fn description(&self) -> &'static str {
        "Check the status of a submitted ARS job by its pk. Inspect fields.status: \
         'Running' means poll again later, 'Done' means results are ready, 'Error' means it failed."
    }

    fn input_schema(&self) -> serde_json::Value {
        pk_schema()
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: JobInput = serde_json::from_value(input)?;
        ctx.client.get_status(&params.pk).await.map_err(ToolError::from)
    }
}

/// Fetch results of a finished job.
pub struct TrapiResultsTool;

#[async_trait::async_trait]
impl McpTool for TrapiResultsTool {
    fn name(&self) -> &'static str {
        "trapi_results"
    }

    fn description(&self) -> &'static str {
        "Fetch the merged results of an ARS job by its pk. Results are under \
         fields.data.message once fields.status is 'Done'."
    }

    fn input_schema(&self) -> serde_json::Value {
        pk_schema()
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: JobInput = serde_json::from_value(input)?;
        ctx.client.get_results(&params.pk).await.map_err(ToolError::from)
    }
}

/// Submit a caller-built TRAPI message.
pub struct SubmitTrapiQueryTool;

#[async_trait::async_trait]
impl McpTool for SubmitTrapiQueryTool {
    fn name(&self) -> &'static str {
        "submit_trapi_query"
    }

    fn description(&self) -> &'static str {
        "Submit a complete TRAPI message ({\"message\": {\"query_graph\": {...}}}) to the ARS. \
         Use this for multi-hop or otherwise custom query graphs."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "object",
                    "description": "TRAPI message with message.query_graph"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: SubmitQueryInput = serde_json::from_value(input)?;
        ensure_query_graph(&params.query)?;

        ctx.client.submit_query(&params.query).await.map_err(ToolError::from)
    }
}

fn pk_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "pk": {
                "type": "string",
                "description": "Primary key returned when the query was submitted"
            }
        },
        "required": ["pk"]
    })
}
