use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Result, string_constants, validate};

/// Passage retrieval settings for a query
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLargePassages {
    pub enabled: Option<bool>,
    /// Group passages under their documents
    pub per_document: Option<bool>,
    pub max_per_document: Option<i64>,
    pub fields: Option<Vec<String>>,
    pub count: Option<i64>,
    /// Approximate passage length
    pub characters: Option<i64>,
    pub find_answers: Option<bool>,
    pub max_answers_per_passage: Option<i64>,
}

impl QueryLargePassages {
    #[must_use]
    pub fn add_field(mut self, field: impl Into<String>) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field.into());
        self
    }
}

/// Table retrieval settings
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLargeTableResults {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
}

/// Suggested refinement settings
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLargeSuggestedRefinements {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
}

/// Find documents similar to a set of example documents
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLargeSimilar {
    enabled: Option<bool>,
    document_ids: Vec<String>,
    fields: Option<Vec<String>>,
}

impl QueryLargeSimilar {
    pub fn builder() -> QueryLargeSimilarBuilder {
        QueryLargeSimilarBuilder::default()
    }

    pub fn to_builder(&self) -> QueryLargeSimilarBuilder {
        QueryLargeSimilarBuilder {
            enabled: self.enabled,
            document_ids: Some(self.document_ids.clone()),
            fields: self.fields.clone(),
        }
    }

    pub const fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Example documents
    pub fn document_ids(&self) -> &[String] {
        &self.document_ids
    }

    /// Fields compared for similarity
    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct QueryLargeSimilarBuilder {
    enabled: Option<bool>,
    document_ids: Option<Vec<String>>,
    fields: Option<Vec<String>>,
}

impl QueryLargeSimilarBuilder {
    pub const fn new(document_ids: Vec<String>) -> Self {
        Self {
            enabled: None,
            document_ids: Some(document_ids),
            fields: None,
        }
    }

    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn document_ids(mut self, document_ids: Vec<String>) -> Self {
        self.document_ids = Some(document_ids);
        self
    }

    pub fn add_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_ids.get_or_insert_with(Vec::new).push(document_id.into());
        self
    }

    pub fn fields(mut self, fields: Vec<String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn add_field(mut self, field: impl Into<String>) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field.into());
        self
    }

    pub fn build(self) -> Result<QueryLargeSimilar> {
        Ok(QueryLargeSimilar {
            enabled: self.enabled,
            document_ids: validate::not_null(self.document_ids, "document_ids")?,
            fields: self.fields,
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultQueryParamsPassages {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
    pub fields: Option<Vec<String>>,
    pub characters: Option<i64>,
    pub per_document: Option<bool>,
    pub max_per_document: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultQueryParamsTableResults {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
    pub per_document: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultQueryParamsSuggestedRefinements {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
}

/// Query settings a project applies when a query leaves them unset
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultQueryParams {
    pub collection_ids: Option<Vec<String>>,
    pub passages: Option<DefaultQueryParamsPassages>,
    pub table_results: Option<DefaultQueryParamsTableResults>,
    pub aggregation: Option<String>,
    pub suggested_refinements: Option<DefaultQueryParamsSuggestedRefinements>,
    pub spelling_suggestions: Option<bool>,
    pub highlight: Option<bool>,
    pub count: Option<i64>,
    pub sort: Option<String>,
    #[serde(rename = "return")]
    pub return_fields: Option<Vec<String>>,
}

/// Query response
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub matching_results: Option<i64>,
    pub results: Option<Vec<QueryResult>>,
    /// Aggregation results in request order
    pub aggregations: Option<Vec<Value>>,
    pub retrieval_details: Option<RetrievalDetails>,
    /// Corrected query text when spelling suggestions are enabled
    pub suggested_query: Option<String>,
    pub suggested_refinements: Option<Vec<QuerySuggestedRefinement>>,
    /// Tables found in the matching documents
    pub table_results: Option<Vec<Value>>,
    pub passages: Option<Vec<QueryResponsePassage>>,
}

/// A matching document
///
/// Document fields requested with `return` land in `fields`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub document_id: Option<String>,
    pub metadata: Option<BTreeMap<String, Value>>,
    pub result_metadata: Option<QueryResultMetadata>,
    pub document_passages: Option<Vec<QueryResultPassage>>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResultMetadata {
    /// One of [`DocumentRetrievalSource`]
    pub document_retrieval_source: Option<String>,
    pub collection_id: Option<String>,
    /// Only set for trained projects
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentRetrievalSource {
    Search,
    Curation,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResultPassage {
    pub passage_text: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalDetails {
    /// One of [`DocumentRetrievalStrategy`]
    pub document_retrieval_strategy: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentRetrievalStrategy {
    Untrained,
    RelevancyTraining,
}

string_constants!(DocumentRetrievalSource, DocumentRetrievalStrategy);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySuggestedRefinement {
    pub text: Option<String>,
}

/// A passage ranked across all matching documents
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponsePassage {
    pub passage_text: Option<String>,
    pub passage_score: Option<f64>,
    pub document_id: Option<String>,
    pub collection_id: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
}
