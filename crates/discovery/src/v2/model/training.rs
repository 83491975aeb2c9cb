use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use watson_core::{Result, validate};

/// A document judged for relevance against a training query
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    document_id: String,
    collection_id: String,
    relevance: i64,
    created: Option<Timestamp>,
    updated: Option<Timestamp>,
}

impl TrainingExample {
    pub fn builder() -> TrainingExampleBuilder {
        TrainingExampleBuilder::default()
    }

    pub fn to_builder(&self) -> TrainingExampleBuilder {
        TrainingExampleBuilder {
            document_id: Some(self.document_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            relevance: Some(self.relevance),
            created: self.created,
            updated: self.updated,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    /// Relevance score, higher is more relevant
    pub const fn relevance(&self) -> i64 {
        self.relevance
    }

    pub const fn created(&self) -> Option<Timestamp> {
        self.created
    }

    pub const fn updated(&self) -> Option<Timestamp> {
        self.updated
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct TrainingExampleBuilder {
    document_id: Option<String>,
    collection_id: Option<String>,
    relevance: Option<i64>,
    created: Option<Timestamp>,
    updated: Option<Timestamp>,
}

impl TrainingExampleBuilder {
    pub fn new(document_id: impl Into<String>, collection_id: impl Into<String>, relevance: i64) -> Self {
        Self {
            document_id: Some(document_id.into()),
            collection_id: Some(collection_id.into()),
            relevance: Some(relevance),
            ..Self::default()
        }
    }

    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    pub const fn relevance(mut self, relevance: i64) -> Self {
        self.relevance = Some(relevance);
        self
    }

    pub const fn created(mut self, created: Timestamp) -> Self {
        self.created = Some(created);
        self
    }

    pub const fn updated(mut self, updated: Timestamp) -> Self {
        self.updated = Some(updated);
        self
    }

    pub fn build(self) -> Result<TrainingExample> {
        Ok(TrainingExample {
            document_id: validate::not_null(self.document_id, "document_id")?,
            collection_id: validate::not_null(self.collection_id, "collection_id")?,
            relevance: validate::not_null(self.relevance, "relevance")?,
            created: self.created,
            updated: self.updated,
        })
    }
}

/// A natural language query with its relevance judgments
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingQuery {
    pub query_id: Option<String>,
    pub natural_language_query: Option<String>,
    pub filter: Option<String>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub examples: Option<Vec<TrainingExample>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingQuerySet {
    pub queries: Option<Vec<TrainingQuery>>,
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use watson_core::JsonModel;

    use super::*;

    #[test]
    fn example_requires_ids_and_relevance() {
        let err = TrainingExample::builder().collection_id("c").relevance(1).build().unwrap_err();
        assert_eq!(err.to_string(), "document_id cannot be null");

        let err = TrainingExample::builder().document_id("d").relevance(1).build().unwrap_err();
        assert_eq!(err.to_string(), "collection_id cannot be null");

        let err = TrainingExample::builder().document_id("d").collection_id("c").build().unwrap_err();
        assert_eq!(err.to_string(), "relevance cannot be null");
    }

    #[test]
    fn example_preserves_fields() {
        let created = "2019-01-01T12:00:00Z".parse().unwrap();
        let example = TrainingExampleBuilder::new("doc", "col", 9).created(created).build().unwrap();

        assert_eq!(example.document_id(), "doc");
        assert_eq!(example.collection_id(), "col");
        assert_eq!(example.relevance(), 9);
        assert_eq!(example.created(), Some(created));
        assert_eq!(example.updated(), None);
        assert_eq!(example.to_builder().build().unwrap(), example);
    }

    #[test]
    fn query_from_service_json() {
        let query = TrainingQuery::from_json(indoc! {r#"
            {
              "query_id": "queryId",
              "natural_language_query": "naturalLanguageQuery",
              "filter": "filter",
              "created": "2019-01-01T12:00:00Z",
              "updated": "2019-01-01T12:00:00Z",
              "examples": [{
                "document_id": "documentId",
                "collection_id": "collectionId",
                "relevance": 9,
                "created": "2019-01-01T12:00:00Z",
                "updated": "2019-01-01T12:00:00Z"
              }]
            }
        "#})
        .unwrap();

        let examples = query.examples.as_deref().unwrap();
        assert_eq!(examples[0].relevance(), 9);
        assert_eq!(TrainingQuery::from_json(&query.to_json().unwrap()).unwrap(), query);
    }
}
