use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::string_constants;

use super::QueryAggregation;

/// Response of `QueryOptions` and `FederatedQueryOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub matching_results: Option<i64>,
    pub results: Option<Vec<QueryResult>>,
    pub aggregations: Option<Vec<QueryAggregation>>,
    pub passages: Option<Vec<QueryPassages>>,
    pub duplicates_removed: Option<i64>,
    /// Token to pass to `CreateEventOptions` for click tracking
    pub session_token: Option<String>,
    pub retrieval_details: Option<RetrievalDetails>,
    /// Spelling suggestion for the natural language query
    pub suggested_query: Option<String>,
}

/// A matched document
///
/// Document fields outside the fixed set land in `fields`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub id: Option<String>,
    pub metadata: Option<BTreeMap<String, Value>>,
    pub collection_id: Option<String>,
    pub result_metadata: Option<QueryResultMetadata>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResultMetadata {
    pub score: Option<f64>,
    /// Only set when relevancy training applies
    pub confidence: Option<f64>,
}

/// How the service answered the query
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalDetails {
    /// `regular`, `trained`, `continuous` or `untrained_fallback`
    pub document_retrieval_strategy: Option<String>,
}

/// A passage extracted from a matching document
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPassages {
    pub document_id: Option<String>,
    pub passage_score: Option<f64>,
    pub passage_text: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
}

/// Response of `QueryNoticesOptions` and `FederatedQueryNoticesOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryNoticesResponse {
    pub matching_results: Option<i64>,
    pub results: Option<Vec<QueryNoticesResult>>,
    pub aggregations: Option<Vec<QueryAggregation>>,
    pub passages: Option<Vec<QueryPassages>>,
    pub duplicates_removed: Option<i64>,
}

/// A document together with the notices raised while ingesting it
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryNoticesResult {
    pub id: Option<String>,
    pub metadata: Option<BTreeMap<String, Value>>,
    pub collection_id: Option<String>,
    pub result_metadata: Option<QueryResultMetadata>,
    pub code: Option<i64>,
    pub filename: Option<String>,
    /// `pdf`, `html`, `word` or `json`
    pub file_type: Option<String>,
    pub sha1: Option<String>,
    pub notices: Option<Vec<Notice>>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

/// A warning or error raised while processing a document or query
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub notice_id: Option<String>,
    pub created: Option<Timestamp>,
    pub document_id: Option<String>,
    pub query_id: Option<String>,
    /// One of [`NoticeSeverity`]
    pub severity: Option<String>,
    /// Ingestion step that raised the notice
    pub step: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeSeverity {
    Warning,
    Error,
}

string_constants!(NoticeSeverity);
