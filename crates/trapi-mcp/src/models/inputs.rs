//! Input models for MCP tool parameters.
//!
//! Field names follow the upstream services' snake_case parameter names so
//! tool arguments map one-to-one onto query parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input for the one-hop `trapi` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrapiInput {
    /// Subject CURIE (e.g., "MONDO:0021117"). Empty for an open node.
    #[serde(default)]
    pub subject: String,

    /// Object CURIE. Empty for an open node.
    #[serde(default, alias = "object_")]
    pub object: String,

    /// Biolink predicate (e.g., "biolink:treats").
    pub predicate: String,

    /// TRAPI attribute objects for the edge.
    #[serde(default)]
    pub attributes: Option<Vec<Value>>,

    /// TRAPI qualifier objects for the edge.
    #[serde(default)]
    pub qualifiers: Option<Vec<Value>>,

    /// Biolink categories for the subject node.
    #[serde(default)]
    pub subject_categories: Option<Vec<String>>,

    /// Biolink categories for the object node.
    #[serde(default)]
    pub object_categories: Option<Vec<String>>,
}

/// Input for tools addressing a submitted ARS job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInput {
    /// Primary key returned by the submission.
    pub pk: String,
}

/// Input for raw query submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQueryInput {
    /// Full TRAPI message object (`{"message": {"query_graph": ...}}`).
    pub query: Value,
}

/// Input for Name Resolution lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupNameInput {
    /// Free text to resolve.
    pub string: String,

    /// Treat the last word as a prefix.
    #[serde(default)]
    pub autocomplete: bool,

    /// Return match highlighting.
    #[serde(default)]
    pub highlighting: bool,

    /// Pagination offset.
    #[serde(default)]
    pub offset: u32,

    /// Maximum matches to return.
    #[serde(default = "default_lookup_limit")]
    pub limit: u32,

    /// Biolink types to restrict to (e.g., ["biolink:Disease"]).
    #[serde(default)]
    pub biolink_type: Option<Vec<String>>,

    /// CURIE prefixes to restrict to (e.g., ["MONDO", "EFO"]).
    #[serde(default)]
    pub only_prefixes: Option<Vec<String>>,

    /// CURIE prefixes to exclude.
    #[serde(default)]
    pub exclude_prefixes: Option<Vec<String>>,

    /// Taxa to restrict to (e.g., ["NCBITaxon:9606"]).
    #[serde(default)]
    pub only_taxa: Option<Vec<String>>,
}

const fn default_lookup_limit() -> u32 {
    10
}

impl LookupNameInput {
    /// Lookup with defaults for everything but the text.
    #[must_use]
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
            autocomplete: false,
            highlighting: false,
            offset: 0,
            limit: default_lookup_limit(),
            biolink_type: None,
            only_prefixes: None,
            exclude_prefixes: None,
            only_taxa: None,
        }
    }
}

/// Input for Node Normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeNodesInput {
    /// CURIEs to normalize.
    pub curies: Vec<String>,

    /// Conflate genes with their protein products.
    #[serde(default = "default_true")]
    pub conflate: bool,

    /// Conflate drugs with their active chemicals.
    #[serde(default)]
    pub drug_chemical_conflate: bool,

    /// Include descriptions.
    #[serde(default)]
    pub description: bool,

    /// Include the type of each equivalent identifier.
    #[serde(default)]
    pub individual_types: bool,
}

const fn default_true() -> bool {
    true
}

impl NormalizeNodesInput {
    /// Normalization with upstream defaults.
    #[must_use]
    pub fn new(curies: Vec<String>) -> Self {
        Self {
            curies,
            conflate: true,
            drug_chemical_conflate: false,
            description: false,
            individual_types: false,
        }
    }
}
