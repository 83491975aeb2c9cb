use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use watson_core::{Operation, Params, Payload, Result, validate};

use crate::v2::model::{
    QueryLargePassages, QueryLargeSimilar, QueryLargeSuggestedRefinements, QueryLargeTableResults,
};

#[skip_serializing_none]
#[derive(Serialize)]
struct QueryBody<'a> {
    collection_ids: Option<&'a [String]>,
    filter: Option<&'a str>,
    query: Option<&'a str>,
    natural_language_query: Option<&'a str>,
    aggregation: Option<&'a str>,
    count: Option<i64>,
    #[serde(rename = "return")]
    return_fields: Option<&'a [String]>,
    offset: Option<i64>,
    sort: Option<&'a str>,
    highlight: Option<bool>,
    spelling_suggestions: Option<bool>,
    table_results: Option<&'a QueryLargeTableResults>,
    suggested_refinements: Option<&'a QueryLargeSuggestedRefinements>,
    passages: Option<&'a QueryLargePassages>,
    similar: Option<&'a QueryLargeSimilar>,
}

/// Search the collections of a project
///
/// Searches every collection of the project when `collection_ids` is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    project_id: String,
    collection_ids: Option<Vec<String>>,
    filter: Option<String>,
    query: Option<String>,
    natural_language_query: Option<String>,
    aggregation: Option<String>,
    count: Option<i64>,
    return_fields: Option<Vec<String>>,
    offset: Option<i64>,
    sort: Option<String>,
    highlight: Option<bool>,
    spelling_suggestions: Option<bool>,
    table_results: Option<QueryLargeTableResults>,
    suggested_refinements: Option<QueryLargeSuggestedRefinements>,
    passages: Option<QueryLargePassages>,
    similar: Option<QueryLargeSimilar>,
}

impl QueryOptions {
    pub fn builder() -> QueryOptionsBuilder {
        QueryOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> QueryOptionsBuilder {
        QueryOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_ids: self.collection_ids.clone(),
            filter: self.filter.clone(),
            query: self.query.clone(),
            natural_language_query: self.natural_language_query.clone(),
            aggregation: self.aggregation.clone(),
            count: self.count,
            return_fields: self.return_fields.clone(),
            offset: self.offset,
            sort: self.sort.clone(),
            highlight: self.highlight,
            spelling_suggestions: self.spelling_suggestions,
            table_results: self.table_results.clone(),
            suggested_refinements: self.suggested_refinements.clone(),
            passages: self.passages.clone(),
            similar: self.similar.clone(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn collection_ids(&self) -> Option<&[String]> {
        self.collection_ids.as_deref()
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn natural_language_query(&self) -> Option<&str> {
        self.natural_language_query.as_deref()
    }

    pub fn aggregation(&self) -> Option<&str> {
        self.aggregation.as_deref()
    }

    pub const fn count(&self) -> Option<i64> {
        self.count
    }

    /// Document fields to return
    pub fn return_fields(&self) -> Option<&[String]> {
        self.return_fields.as_deref()
    }

    pub const fn offset(&self) -> Option<i64> {
        self.offset
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub const fn highlight(&self) -> Option<bool> {
        self.highlight
    }

    pub const fn spelling_suggestions(&self) -> Option<bool> {
        self.spelling_suggestions
    }

    pub const fn table_results(&self) -> Option<&QueryLargeTableResults> {
        self.table_results.as_ref()
    }

    pub const fn suggested_refinements(&self) -> Option<&QueryLargeSuggestedRefinements> {
        self.suggested_refinements.as_ref()
    }

    pub const fn passages(&self) -> Option<&QueryLargePassages> {
        self.passages.as_ref()
    }

    pub const fn similar(&self) -> Option<&QueryLargeSimilar> {
        self.similar.as_ref()
    }
}

impl Operation for QueryOptions {
    fn operation_id(&self) -> &'static str {
        "query"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v2", "projects", &self.project_id, "query"]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&QueryBody {
            collection_ids: self.collection_ids.as_deref(),
            filter: self.filter.as_deref(),
            query: self.query.as_deref(),
            natural_language_query: self.natural_language_query.as_deref(),
            aggregation: self.aggregation.as_deref(),
            count: self.count,
            return_fields: self.return_fields.as_deref(),
            offset: self.offset,
            sort: self.sort.as_deref(),
            highlight: self.highlight,
            spelling_suggestions: self.spelling_suggestions,
            table_results: self.table_results.as_ref(),
            suggested_refinements: self.suggested_refinements.as_ref(),
            passages: self.passages.as_ref(),
            similar: self.similar.as_ref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct QueryOptionsBuilder {
    project_id: Option<String>,
    collection_ids: Option<Vec<String>>,
    filter: Option<String>,
    query: Option<String>,
    natural_language_query: Option<String>,
    aggregation: Option<String>,
    count: Option<i64>,
    return_fields: Option<Vec<String>>,
    offset: Option<i64>,
    sort: Option<String>,
    highlight: Option<bool>,
    spelling_suggestions: Option<bool>,
    table_results: Option<QueryLargeTableResults>,
    suggested_refinements: Option<QueryLargeSuggestedRefinements>,
    passages: Option<QueryLargePassages>,
    similar: Option<QueryLargeSimilar>,
}

impl QueryOptionsBuilder {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn collection_ids(mut self, collection_ids: Vec<String>) -> Self {
        self.collection_ids = Some(collection_ids);
        self
    }

    pub fn add_collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_ids.get_or_insert_with(Vec::new).push(collection_id.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn natural_language_query(mut self, natural_language_query: impl Into<String>) -> Self {
        self.natural_language_query = Some(natural_language_query.into());
        self
    }

    pub fn aggregation(mut self, aggregation: impl Into<String>) -> Self {
        self.aggregation = Some(aggregation.into());
        self
    }

    pub const fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn return_fields(mut self, return_fields: Vec<String>) -> Self {
        self.return_fields = Some(return_fields);
        self
    }

    pub fn add_return_field(mut self, return_field: impl Into<String>) -> Self {
        self.return_fields.get_or_insert_with(Vec::new).push(return_field.into());
        self
    }

    pub const fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub const fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub const fn spelling_suggestions(mut self, spelling_suggestions: bool) -> Self {
        self.spelling_suggestions = Some(spelling_suggestions);
        self
    }

    pub fn table_results(mut self, table_results: QueryLargeTableResults) -> Self {
        self.table_results = Some(table_results);
        self
    }

    pub fn suggested_refinements(mut self, suggested_refinements: QueryLargeSuggestedRefinements) -> Self {
        self.suggested_refinements = Some(suggested_refinements);
        self
    }

    pub fn passages(mut self, passages: QueryLargePassages) -> Self {
        self.passages = Some(passages);
        self
    }

    pub fn similar(mut self, similar: QueryLargeSimilar) -> Self {
        self.similar = Some(similar);
        self
    }

    pub fn build(self) -> Result<QueryOptions> {
        Ok(QueryOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            collection_ids: self.collection_ids,
            filter: self.filter,
            query: self.query,
            natural_language_query: self.natural_language_query,
            aggregation: self.aggregation,
            count: self.count,
            return_fields: self.return_fields,
            offset: self.offset,
            sort: self.sort,
            highlight: self.highlight,
            spelling_suggestions: self.spelling_suggestions,
            table_results: self.table_results,
            suggested_refinements: self.suggested_refinements,
            passages: self.passages,
            similar: self.similar,
        })
    }
}

/// Search the project-level notices raised by relevancy training
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNoticesOptions {
    project_id: String,
    filter: Option<String>,
    query: Option<String>,
    natural_language_query: Option<String>,
    aggregation: Option<String>,
    count: Option<i64>,
    return_fields: Option<Vec<String>>,
    offset: Option<i64>,
    sort: Option<Vec<String>>,
    highlight: Option<bool>,
    spelling_suggestions: Option<bool>,
}

impl QueryNoticesOptions {
    pub fn builder() -> QueryNoticesOptionsBuilder {
        QueryNoticesOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> QueryNoticesOptionsBuilder {
        QueryNoticesOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            filter: self.filter.clone(),
            query: self.query.clone(),
            natural_language_query: self.natural_language_query.clone(),
            aggregation: self.aggregation.clone(),
            count: self.count,
            return_fields: self.return_fields.clone(),
            offset: self.offset,
            sort: self.sort.clone(),
            highlight: self.highlight,
            spelling_suggestions: self.spelling_suggestions,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn natural_language_query(&self) -> Option<&str> {
        self.natural_language_query.as_deref()
    }

    pub fn aggregation(&self) -> Option<&str> {
        self.aggregation.as_deref()
    }

    pub const fn count(&self) -> Option<i64> {
        self.count
    }

    pub fn return_fields(&self) -> Option<&[String]> {
        self.return_fields.as_deref()
    }

    pub const fn offset(&self) -> Option<i64> {
        self.offset
    }

    pub fn sort(&self) -> Option<&[String]> {
        self.sort.as_deref()
    }

    pub const fn highlight(&self) -> Option<bool> {
        self.highlight
    }

    pub const fn spelling_suggestions(&self) -> Option<bool> {
        self.spelling_suggestions
    }
}

impl Operation for QueryNoticesOptions {
    fn operation_id(&self) -> &'static str {
        "query_notices"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v2", "projects", &self.project_id, "notices"]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query
            .push_opt("filter", self.filter.as_deref())
            .push_opt("query", self.query.as_deref())
            .push_opt("natural_language_query", self.natural_language_query.as_deref())
            .push_opt("aggregation", self.aggregation.as_deref())
            .push_opt("count", self.count)
            .push_list("return", self.return_fields.as_deref())
            .push_opt("offset", self.offset)
            .push_list("sort", self.sort.as_deref())
            .push_opt("highlight", self.highlight)
            .push_opt("spelling_suggestions", self.spelling_suggestions);
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct QueryNoticesOptionsBuilder {
    project_id: Option<String>,
    filter: Option<String>,
    query: Option<String>,
    natural_language_query: Option<String>,
    aggregation: Option<String>,
    count: Option<i64>,
    return_fields: Option<Vec<String>>,
    offset: Option<i64>,
    sort: Option<Vec<String>>,
    highlight: Option<bool>,
    spelling_suggestions: Option<bool>,
}

impl QueryNoticesOptionsBuilder {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn natural_language_query(mut self, natural_language_query: impl Into<String>) -> Self {
        self.natural_language_query = Some(natural_language_query.into());
        self
    }

    pub fn aggregation(mut self, aggregation: impl Into<String>) -> Self {
        self.aggregation = Some(aggregation.into());
        self
    }

    pub const fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn return_fields(mut self, return_fields: Vec<String>) -> Self {
        self.return_fields = Some(return_fields);
        self
    }

    pub fn add_return_field(mut self, return_field: impl Into<String>) -> Self {
        self.return_fields.get_or_insert_with(Vec::new).push(return_field.into());
        self
    }

    pub const fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn sort(mut self, sort: Vec<String>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn add_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort.get_or_insert_with(Vec::new).push(sort.into());
        self
    }

    pub const fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub const fn spelling_suggestions(mut self, spelling_suggestions: bool) -> Self {
        self.spelling_suggestions = Some(spelling_suggestions);
        self
    }

    pub fn build(self) -> Result<QueryNoticesOptions> {
        Ok(QueryNoticesOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            filter: self.filter,
            query: self.query,
            natural_language_query: self.natural_language_query,
            aggregation: self.aggregation,
            count: self.count,
            return_fields: self.return_fields,
            offset: self.offset,
            sort: self.sort,
            highlight: self.highlight,
            spelling_suggestions: self.spelling_suggestions,
        })
    }
}

/// Search the ingestion notices of one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCollectionNoticesOptions {
    project_id: String,
    collection_id: String,
    filter: Option<String>,
    query: Option<String>,
    natural_language_query: Option<String>,
    count: Option<i64>,
    offset: Option<i64>,
}

impl QueryCollectionNoticesOptions {
    pub fn builder() -> QueryCollectionNoticesOptionsBuilder {
        QueryCollectionNoticesOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> QueryCollectionNoticesOptionsBuilder {
        QueryCollectionNoticesOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            filter: self.filter.clone(),
            query: self.query.clone(),
            natural_language_query: self.natural_language_query.clone(),
            count: self.count,
            offset: self.offset,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn natural_language_query(&self) -> Option<&str> {
        self.natural_language_query.as_deref()
    }

    pub const fn count(&self) -> Option<i64> {
        self.count
    }

    pub const fn offset(&self) -> Option<i64> {
        self.offset
    }
}

impl Operation for QueryCollectionNoticesOptions {
    fn operation_id(&self) -> &'static str {
        "query_collection_notices"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v2",
            "projects",
            &self.project_id,
            "collections",
            &self.collection_id,
            "notices",
        ]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query
            .push_opt("filter", self.filter.as_deref())
            .push_opt("query", self.query.as_deref())
            .push_opt("natural_language_query", self.natural_language_query.as_deref())
            .push_opt("count", self.count)
            .push_opt("offset", self.offset);
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct QueryCollectionNoticesOptionsBuilder {
    project_id: Option<String>,
    collection_id: Option<String>,
    filter: Option<String>,
    query: Option<String>,
    natural_language_query: Option<String>,
    count: Option<i64>,
    offset: Option<i64>,
}

impl QueryCollectionNoticesOptionsBuilder {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            ..Self::default()
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn natural_language_query(mut self, natural_language_query: impl Into<String>) -> Self {
        self.natural_language_query = Some(natural_language_query.into());
        self
    }

    pub const fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub const fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn build(self) -> Result<QueryCollectionNoticesOptions> {
        Ok(QueryCollectionNoticesOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            collection_id: validate::not_empty(self.collection_id, "collection_id")?,
            filter: self.filter,
            query: self.query,
            natural_language_query: self.natural_language_query,
            count: self.count,
            offset: self.offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn query_requires_project() {
        let err = QueryOptions::builder().query("text:watson").build().unwrap_err();
        assert_eq!(err.to_string(), "project_id cannot be empty");
    }

    #[test]
    fn query_body() {
        let similar = QueryLargeSimilar::builder().add_document_id("doc-1").build().unwrap();
        let options = QueryOptionsBuilder::new("p")
            .add_collection_id("c-1")
            .filter("enriched_text.entities.type:Person")
            .natural_language_query("who founded IBM")
            .aggregation("term(enriched_text.entities.text,count:10)")
            .count(26)
            .add_return_field("title")
            .offset(0)
            .sort("-extracted_metadata.publicationdate")
            .highlight(true)
            .spelling_suggestions(true)
            .table_results(QueryLargeTableResults {
                enabled: Some(true),
                count: Some(26),
            })
            .suggested_refinements(QueryLargeSuggestedRefinements {
                enabled: Some(true),
                count: Some(1),
            })
            .passages(QueryLargePassages {
                enabled: Some(true),
                per_document: Some(true),
                max_per_document: Some(26),
                count: Some(100),
                characters: Some(50),
                ..QueryLargePassages::default()
            }.add_field("text"))
            .similar(similar.clone())
            .build()
            .unwrap();

        assert_eq!(options.collection_ids().map(<[String]>::len), Some(1));
        assert_eq!(options.natural_language_query(), Some("who founded IBM"));
        assert_eq!(options.count(), Some(26));
        assert_eq!(options.highlight(), Some(true));
        assert_eq!(options.similar(), Some(&similar));
        assert_eq!(options.to_builder().build().unwrap(), options);
        assert_eq!(options.method(), Method::POST);

        let payload = options.payload().unwrap();
        let body = payload.as_json().unwrap();
        assert_eq!(body["collection_ids"], json!(["c-1"]));
        assert_eq!(body["return"], json!(["title"]));
        assert_eq!(body["sort"], "-extracted_metadata.publicationdate");
        assert_eq!(body["passages"]["fields"], json!(["text"]));
        assert_eq!(body["similar"], json!({ "document_ids": ["doc-1"] }));
        assert!(body.get("query").is_none());
    }

    #[test]
    fn project_notices_query_string() {
        let options = QueryNoticesOptionsBuilder::new("p")
            .filter("notice_id:xpath_not_found")
            .count(10)
            .add_return_field("notice_id")
            .add_sort("-created")
            .add_sort("severity")
            .build()
            .unwrap();

        assert_eq!(options.path_segments(), ["v2", "projects", "p", "notices"]);
        let query = options.query_params();
        assert_eq!(query.get("filter"), Some("notice_id:xpath_not_found"));
        assert_eq!(query.get("return"), Some("notice_id"));
        assert_eq!(query.get("sort"), Some("-created,severity"));
        assert_eq!(query.get("offset"), None);
        assert_eq!(options.to_builder().build().unwrap(), options);
    }

    #[test]
    fn collection_notices() {
        let err = QueryCollectionNoticesOptions::builder().project_id("p").build().unwrap_err();
        assert_eq!(err.to_string(), "collection_id cannot be empty");

        let options = QueryCollectionNoticesOptionsBuilder::new("p", "c")
            .natural_language_query("conversion errors")
            .offset(5)
            .build()
            .unwrap();

        assert_eq!(options.collection_id(), "c");
        assert_eq!(options.offset(), Some(5));
        assert_eq!(options.path_segments().last(), Some(&"notices"));
        assert_eq!(
            options.query_params().pairs().collect::<Vec<_>>(),
            [("natural_language_query", "conversion errors"), ("offset", "5")]
        );
    }
}
