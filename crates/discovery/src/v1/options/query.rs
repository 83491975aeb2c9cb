use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use watson_core::{Operation, Params, Payload, Result, validate};

const LOGGING_OPT_OUT: &str = "X-Watson-Logging-Opt-Out";

/// JSON body of a single or federated query; list-valued parameters are
/// comma separated strings here
#[skip_serializing_none]
#[derive(Serialize)]
struct QueryBody<'a> {
    collection_ids: Option<&'a str>,
    filter: Option<&'a str>,
    query: Option<&'a str>,
    natural_language_query: Option<&'a str>,
    passages: Option<bool>,
    aggregation: Option<&'a str>,
    count: Option<i64>,
    #[serde(rename = "return")]
    return_fields: Option<&'a str>,
    offset: Option<i64>,
    sort: Option<&'a str>,
    highlight: Option<bool>,
    #[serde(rename = "passages.fields")]
    passages_fields: Option<&'a str>,
    #[serde(rename = "passages.count")]
    passages_count: Option<i64>,
    #[serde(rename = "passages.characters")]
    passages_characters: Option<i64>,
    deduplicate: Option<bool>,
    #[serde(rename = "deduplicate.field")]
    deduplicate_field: Option<&'a str>,
    similar: Option<bool>,
    #[serde(rename = "similar.document_ids")]
    similar_document_ids: Option<&'a str>,
    #[serde(rename = "similar.fields")]
    similar_fields: Option<&'a str>,
    bias: Option<&'a str>,
    spelling_suggestions: Option<bool>,
}

/// Parameters shared by [`QueryOptions`] and [`FederatedQueryOptions`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct QueryFields {
    filter: Option<String>,
    query: Option<String>,
    natural_language_query: Option<String>,
    passages: Option<bool>,
    aggregation: Option<String>,
    count: Option<i64>,
    return_fields: Option<String>,
    offset: Option<i64>,
    sort: Option<String>,
    highlight: Option<bool>,
    passages_fields: Option<String>,
    passages_count: Option<i64>,
    passages_characters: Option<i64>,
    deduplicate: Option<bool>,
    deduplicate_field: Option<String>,
    similar: Option<bool>,
    similar_document_ids: Option<String>,
    similar_fields: Option<String>,
    bias: Option<String>,
    x_watson_logging_opt_out: Option<bool>,
}

impl QueryFields {
    fn body<'a>(&'a self, collection_ids: Option<&'a str>, spelling_suggestions: Option<bool>) -> QueryBody<'a> {
        QueryBody {
            collection_ids,
            filter: self.filter.as_deref(),
            query: self.query.as_deref(),
            natural_language_query: self.natural_language_query.as_deref(),
            passages: self.passages,
            aggregation: self.aggregation.as_deref(),
            count: self.count,
            return_fields: self.return_fields.as_deref(),
            offset: self.offset,
            sort: self.sort.as_deref(),
            highlight: self.highlight,
            passages_fields: self.passages_fields.as_deref(),
            passages_count: self.passages_count,
            passages_characters: self.passages_characters,
            deduplicate: self.deduplicate,
            deduplicate_field: self.deduplicate_field.as_deref(),
            similar: self.similar,
            similar_document_ids: self.similar_document_ids.as_deref(),
            similar_fields: self.similar_fields.as_deref(),
            bias: self.bias.as_deref(),
            spelling_suggestions,
        }
    }

    fn headers(&self) -> Params {
        let mut headers = Params::new();
        headers.push_opt(LOGGING_OPT_OUT, self.x_watson_logging_opt_out);
        headers
    }
}

/// Read accessors for the shared query parameters
macro_rules! query_accessors {
    () => {
        /// Discovery Query Language filter, cached and applied before `query`
        pub fn filter(&self) -> Option<&str> {
            self.fields.filter.as_deref()
        }

        /// Discovery Query Language query
        pub fn query(&self) -> Option<&str> {
            self.fields.query.as_deref()
        }

        pub fn natural_language_query(&self) -> Option<&str> {
            self.fields.natural_language_query.as_deref()
        }

        pub const fn passages(&self) -> Option<bool> {
            self.fields.passages
        }

        pub fn aggregation(&self) -> Option<&str> {
            self.fields.aggregation.as_deref()
        }

        pub const fn count(&self) -> Option<i64> {
            self.fields.count
        }

        /// Comma separated fields to return, sent as `return`
        pub fn return_fields(&self) -> Option<&str> {
            self.fields.return_fields.as_deref()
        }

        pub const fn offset(&self) -> Option<i64> {
            self.fields.offset
        }

        /// Comma separated sort fields, `-` prefix for descending
        pub fn sort(&self) -> Option<&str> {
            self.fields.sort.as_deref()
        }

        pub const fn highlight(&self) -> Option<bool> {
            self.fields.highlight
        }

        pub fn passages_fields(&self) -> Option<&str> {
            self.fields.passages_fields.as_deref()
        }

        pub const fn passages_count(&self) -> Option<i64> {
            self.fields.passages_count
        }

        pub const fn passages_characters(&self) -> Option<i64> {
            self.fields.passages_characters
        }

        pub const fn deduplicate(&self) -> Option<bool> {
            self.fields.deduplicate
        }

        pub fn deduplicate_field(&self) -> Option<&str> {
            self.fields.deduplicate_field.as_deref()
        }

        pub const fn similar(&self) -> Option<bool> {
            self.fields.similar
        }

        pub fn similar_document_ids(&self) -> Option<&str> {
            self.fields.similar_document_ids.as_deref()
        }

        pub fn similar_fields(&self) -> Option<&str> {
            self.fields.similar_fields.as_deref()
        }

        /// Field whose values bias result ranking
        pub fn bias(&self) -> Option<&str> {
            self.fields.bias.as_deref()
        }

        /// Sent as the `X-Watson-Logging-Opt-Out` header
        pub const fn x_watson_logging_opt_out(&self) -> Option<bool> {
            self.fields.x_watson_logging_opt_out
        }
    };
}

/// Setters for the shared query parameters
macro_rules! query_setters {
    () => {
        pub fn filter(mut self, filter: impl Into<String>) -> Self {
            self.fields.filter = Some(filter.into());
            self
        }

        pub fn query(mut self, query: impl Into<String>) -> Self {
            self.fields.query = Some(query.into());
            self
        }

        pub fn natural_language_query(mut self, natural_language_query: impl Into<String>) -> Self {
            self.fields.natural_language_query = Some(natural_language_query.into());
            self
        }

        pub const fn passages(mut self, passages: bool) -> Self {
            self.fields.passages = Some(passages);
            self
        }

        pub fn aggregation(mut self, aggregation: impl Into<String>) -> Self {
            self.fields.aggregation = Some(aggregation.into());
            self
        }

        pub const fn count(mut self, count: i64) -> Self {
            self.fields.count = Some(count);
            self
        }

        pub fn return_fields(mut self, return_fields: impl Into<String>) -> Self {
            self.fields.return_fields = Some(return_fields.into());
            self
        }

        pub const fn offset(mut self, offset: i64) -> Self {
            self.fields.offset = Some(offset);
            self
        }

        pub fn sort(mut self, sort: impl Into<String>) -> Self {
            self.fields.sort = Some(sort.into());
            self
        }

        pub const fn highlight(mut self, highlight: bool) -> Self {
            self.fields.highlight = Some(highlight);
            self
        }

        pub fn passages_fields(mut self, passages_fields: impl Into<String>) -> Self {
            self.fields.passages_fields = Some(passages_fields.into());
            self
        }

        pub const fn passages_count(mut self, passages_count: i64) -> Self {
            self.fields.passages_count = Some(passages_count);
            self
        }

        pub const fn passages_characters(mut self, passages_characters: i64) -> Self {
            self.fields.passages_characters = Some(passages_characters);
            self
        }

        pub const fn deduplicate(mut self, deduplicate: bool) -> Self {
            self.fields.deduplicate = Some(deduplicate);
            self
        }

        pub fn deduplicate_field(mut self, deduplicate_field: impl Into<String>) -> Self {
            self.fields.deduplicate_field = Some(deduplicate_field.into());
            self
        }

        pub const fn similar(mut self, similar: bool) -> Self {
            self.fields.similar = Some(similar);
            self
        }

        pub fn similar_document_ids(mut self, similar_document_ids: impl Into<String>) -> Self {
            self.fields.similar_document_ids = Some(similar_document_ids.into());
            self
        }

        pub fn similar_fields(mut self, similar_fields: impl Into<String>) -> Self {
            self.fields.similar_fields = Some(similar_fields.into());
            self
        }

        pub fn bias(mut self, bias: impl Into<String>) -> Self {
            self.fields.bias = Some(bias.into());
            self
        }

        pub const fn x_watson_logging_opt_out(mut self, opt_out: bool) -> Self {
            self.fields.x_watson_logging_opt_out = Some(opt_out);
            self
        }
    };
}

/// Query one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    environment_id: String,
    collection_id: String,
    fields: QueryFields,
    spelling_suggestions: Option<bool>,
}

impl QueryOptions {
    pub fn builder() -> QueryOptionsBuilder {
        QueryOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> QueryOptionsBuilder {
        QueryOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            fields: self.fields.clone(),
            spelling_suggestions: self.spelling_suggestions,
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    query_accessors!();

    /// Return a spelling suggestion for `natural_language_query`
    pub const fn spelling_suggestions(&self) -> Option<bool> {
        self.spelling_suggestions
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
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "collections",
            &self.collection_id,
            "query",
        ]
    }

    fn headers(&self) -> Params {
        self.fields.headers()
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&self.fields.body(None, self.spelling_suggestions))
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct QueryOptionsBuilder {
    environment_id: Option<String>,
    collection_id: Option<String>,
    fields: QueryFields,
    spelling_suggestions: Option<bool>,
}

impl QueryOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            collection_id: Some(collection_id.into()),
            ..Self::default()
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    query_setters!();

    pub const fn spelling_suggestions(mut self, spelling_suggestions: bool) -> Self {
        self.spelling_suggestions = Some(spelling_suggestions);
        self
    }

    pub fn build(self) -> Result<QueryOptions> {
        Ok(QueryOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            collection_id: validate::not_empty(self.collection_id, "collection_id")?,
            fields: self.fields,
            spelling_suggestions: self.spelling_suggestions,
        })
    }
}

/// Query several collections of one environment at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedQueryOptions {
    environment_id: String,
    collection_ids: String,
    fields: QueryFields,
}

impl FederatedQueryOptions {
    pub fn builder() -> FederatedQueryOptionsBuilder {
        FederatedQueryOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> FederatedQueryOptionsBuilder {
        FederatedQueryOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            collection_ids: Some(self.collection_ids.clone()),
            fields: self.fields.clone(),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// Comma separated collection ids
    pub fn collection_ids(&self) -> &str {
        &self.collection_ids
    }

    query_accessors!();
}

impl Operation for FederatedQueryOptions {
    fn operation_id(&self) -> &'static str {
        "federated_query"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "environments", &self.environment_id, "query"]
    }

    fn headers(&self) -> Params {
        self.fields.headers()
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&self.fields.body(Some(&self.collection_ids), None))
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct FederatedQueryOptionsBuilder {
    environment_id: Option<String>,
    collection_ids: Option<String>,
    fields: QueryFields,
}

impl FederatedQueryOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, collection_ids: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            collection_ids: Some(collection_ids.into()),
            ..Self::default()
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn collection_ids(mut self, collection_ids: impl Into<String>) -> Self {
        self.collection_ids = Some(collection_ids.into());
        self
    }

    query_setters!();

    pub fn build(self) -> Result<FederatedQueryOptions> {
        Ok(FederatedQueryOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            collection_ids: validate::not_null(self.collection_ids, "collection_ids")?,
            fields: self.fields,
        })
    }
}

/// Parameters of a notices query, sent in the query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NoticesFields {
    filter: Option<String>,
    query: Option<String>,
    natural_language_query: Option<String>,
    passages: Option<bool>,
    aggregation: Option<String>,
    count: Option<i64>,
    return_fields: Option<Vec<String>>,
    offset: Option<i64>,
    sort: Option<Vec<String>>,
    highlight: Option<bool>,
    passages_fields: Option<Vec<String>>,
    passages_count: Option<i64>,
    passages_characters: Option<i64>,
    deduplicate_field: Option<String>,
    similar: Option<bool>,
    similar_document_ids: Option<Vec<String>>,
    similar_fields: Option<Vec<String>>,
}

impl NoticesFields {
    fn push_into(&self, query: &mut Params) {
        query
            .push_opt("filter", self.filter.as_deref())
            .push_opt("query", self.query.as_deref())
            .push_opt("natural_language_query", self.natural_language_query.as_deref())
            .push_opt("passages", self.passages)
            .push_opt("aggregation", self.aggregation.as_deref())
            .push_opt("count", self.count)
            .push_list("return", self.return_fields.as_deref())
            .push_opt("offset", self.offset)
            .push_list("sort", self.sort.as_deref())
            .push_opt("highlight", self.highlight)
            .push_list("passages.fields", self.passages_fields.as_deref())
            .push_opt("passages.count", self.passages_count)
            .push_opt("passages.characters", self.passages_characters)
            .push_opt("deduplicate.field", self.deduplicate_field.as_deref())
            .push_opt("similar", self.similar)
            .push_list("similar.document_ids", self.similar_document_ids.as_deref())
            .push_list("similar.fields", self.similar_fields.as_deref());
    }
}

macro_rules! notices_accessors {
    () => {
        pub fn filter(&self) -> Option<&str> {
            self.fields.filter.as_deref()
        }

        pub fn query(&self) -> Option<&str> {
            self.fields.query.as_deref()
        }

        pub fn natural_language_query(&self) -> Option<&str> {
            self.fields.natural_language_query.as_deref()
        }

        pub fn aggregation(&self) -> Option<&str> {
            self.fields.aggregation.as_deref()
        }

        pub const fn count(&self) -> Option<i64> {
            self.fields.count
        }

        pub fn return_fields(&self) -> Option<&[String]> {
            self.fields.return_fields.as_deref()
        }

        pub const fn offset(&self) -> Option<i64> {
            self.fields.offset
        }

        pub fn sort(&self) -> Option<&[String]> {
            self.fields.sort.as_deref()
        }

        pub const fn highlight(&self) -> Option<bool> {
            self.fields.highlight
        }

        pub fn deduplicate_field(&self) -> Option<&str> {
            self.fields.deduplicate_field.as_deref()
        }

        pub const fn similar(&self) -> Option<bool> {
            self.fields.similar
        }

        pub fn similar_document_ids(&self) -> Option<&[String]> {
            self.fields.similar_document_ids.as_deref()
        }

        pub fn similar_fields(&self) -> Option<&[String]> {
            self.fields.similar_fields.as_deref()
        }
    };
}

macro_rules! notices_setters {
    () => {
        pub fn filter(mut self, filter: impl Into<String>) -> Self {
            self.fields.filter = Some(filter.into());
            self
        }

        pub fn query(mut self, query: impl Into<String>) -> Self {
            self.fields.query = Some(query.into());
            self
        }

        pub fn natural_language_query(mut self, natural_language_query: impl Into<String>) -> Self {
            self.fields.natural_language_query = Some(natural_language_query.into());
            self
        }

        pub fn aggregation(mut self, aggregation: impl Into<String>) -> Self {
            self.fields.aggregation = Some(aggregation.into());
            self
        }

        pub const fn count(mut self, count: i64) -> Self {
            self.fields.count = Some(count);
            self
        }

        pub fn return_fields(mut self, return_fields: Vec<String>) -> Self {
            self.fields.return_fields = Some(return_fields);
            self
        }

        pub fn add_return_field(mut self, field: impl Into<String>) -> Self {
            self.fields.return_fields.get_or_insert_with(Vec::new).push(field.into());
            self
        }

        pub const fn offset(mut self, offset: i64) -> Self {
            self.fields.offset = Some(offset);
            self
        }

        pub fn sort(mut self, sort: Vec<String>) -> Self {
            self.fields.sort = Some(sort);
            self
        }

        pub fn add_sort(mut self, sort: impl Into<String>) -> Self {
            self.fields.sort.get_or_insert_with(Vec::new).push(sort.into());
            self
        }

        pub const fn highlight(mut self, highlight: bool) -> Self {
            self.fields.highlight = Some(highlight);
            self
        }

        pub fn deduplicate_field(mut self, deduplicate_field: impl Into<String>) -> Self {
            self.fields.deduplicate_field = Some(deduplicate_field.into());
            self
        }

        pub const fn similar(mut self, similar: bool) -> Self {
            self.fields.similar = Some(similar);
            self
        }

        pub fn similar_document_ids(mut self, similar_document_ids: Vec<String>) -> Self {
            self.fields.similar_document_ids = Some(similar_document_ids);
            self
        }

        pub fn add_similar_document_id(mut self, document_id: impl Into<String>) -> Self {
            self.fields
                .similar_document_ids
                .get_or_insert_with(Vec::new)
                .push(document_id.into());
            self
        }

        pub fn similar_fields(mut self, similar_fields: Vec<String>) -> Self {
            self.fields.similar_fields = Some(similar_fields);
            self
        }

        pub fn add_similar_field(mut self, field: impl Into<String>) -> Self {
            self.fields.similar_fields.get_or_insert_with(Vec::new).push(field.into());
            self
        }
    };
}

/// Query the notices raised while ingesting documents into a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNoticesOptions {
    environment_id: String,
    collection_id: String,
    fields: NoticesFields,
}

impl QueryNoticesOptions {
    pub fn builder() -> QueryNoticesOptionsBuilder {
        QueryNoticesOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> QueryNoticesOptionsBuilder {
        QueryNoticesOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            fields: self.fields.clone(),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    notices_accessors!();

    pub const fn passages(&self) -> Option<bool> {
        self.fields.passages
    }

    pub fn passages_fields(&self) -> Option<&[String]> {
        self.fields.passages_fields.as_deref()
    }

    pub const fn passages_count(&self) -> Option<i64> {
        self.fields.passages_count
    }

    pub const fn passages_characters(&self) -> Option<i64> {
        self.fields.passages_characters
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
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "collections",
            &self.collection_id,
            "notices",
        ]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        self.fields.push_into(&mut query);
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct QueryNoticesOptionsBuilder {
    environment_id: Option<String>,
    collection_id: Option<String>,
    fields: NoticesFields,
}

impl QueryNoticesOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            collection_id: Some(collection_id.into()),
            fields: NoticesFields::default(),
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    notices_setters!();

    pub const fn passages(mut self, passages: bool) -> Self {
        self.fields.passages = Some(passages);
        self
    }

    pub fn passages_fields(mut self, passages_fields: Vec<String>) -> Self {
        self.fields.passages_fields = Some(passages_fields);
        self
    }

    pub fn add_passages_field(mut self, field: impl Into<String>) -> Self {
        self.fields.passages_fields.get_or_insert_with(Vec::new).push(field.into());
        self
    }

    pub const fn passages_count(mut self, passages_count: i64) -> Self {
        self.fields.passages_count = Some(passages_count);
        self
    }

    pub const fn passages_characters(mut self, passages_characters: i64) -> Self {
        self.fields.passages_characters = Some(passages_characters);
        self
    }

    pub fn build(self) -> Result<QueryNoticesOptions> {
        Ok(QueryNoticesOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            collection_id: validate::not_empty(self.collection_id, "collection_id")?,
            fields: self.fields,
        })
    }
}

/// Query notices across several collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedQueryNoticesOptions {
    environment_id: String,
    collection_ids: Vec<String>,
    fields: NoticesFields,
}

impl FederatedQueryNoticesOptions {
    pub fn builder() -> FederatedQueryNoticesOptionsBuilder {
        FederatedQueryNoticesOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> FederatedQueryNoticesOptionsBuilder {
        FederatedQueryNoticesOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            collection_ids: Some(self.collection_ids.clone()),
            fields: self.fields.clone(),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn collection_ids(&self) -> &[String] {
        &self.collection_ids
    }

    notices_accessors!();
}

impl Operation for FederatedQueryNoticesOptions {
    fn operation_id(&self) -> &'static str {
        "federated_query_notices"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "environments", &self.environment_id, "notices"]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query.push_list("collection_ids", Some(self.collection_ids.as_slice()));
        self.fields.push_into(&mut query);
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct FederatedQueryNoticesOptionsBuilder {
    environment_id: Option<String>,
    collection_ids: Option<Vec<String>>,
    fields: NoticesFields,
}

impl FederatedQueryNoticesOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, collection_ids: Vec<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            collection_ids: Some(collection_ids),
            fields: NoticesFields::default(),
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
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

    notices_setters!();

    pub fn build(self) -> Result<FederatedQueryNoticesOptions> {
        Ok(FederatedQueryNoticesOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            collection_ids: validate::not_null(self.collection_ids, "collection_ids")?,
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requires_ids() {
        let err = QueryOptions::builder().collection_id("col").build().unwrap_err();
        assert_eq!(err.to_string(), "environment_id cannot be empty");

        let err = QueryOptionsBuilder::new("env", "").build().unwrap_err();
        assert_eq!(err.to_string(), "collection_id cannot be empty");
    }

    #[test]
    fn query_preserves_fields() {
        let options = QueryOptionsBuilder::new("env", "col")
            .filter("enriched_text.concepts.text:Watson")
            .query("text:IBM")
            .natural_language_query("who created watson")
            .passages(true)
            .aggregation("term(enriched_text.concepts.text,count:10)")
            .count(5)
            .return_fields("title,url")
            .offset(10)
            .sort("-publication_date")
            .highlight(true)
            .passages_fields("text")
            .passages_count(3)
            .passages_characters(200)
            .deduplicate(false)
            .deduplicate_field("title")
            .similar(true)
            .similar_document_ids("doc-1,doc-2")
            .similar_fields("title")
            .bias("publication_date")
            .spelling_suggestions(true)
            .x_watson_logging_opt_out(true)
            .build()
            .unwrap();

        assert_eq!(options.environment_id(), "env");
        assert_eq!(options.collection_id(), "col");
        assert_eq!(options.filter(), Some("enriched_text.concepts.text:Watson"));
        assert_eq!(options.query(), Some("text:IBM"));
        assert_eq!(options.natural_language_query(), Some("who created watson"));
        assert_eq!(options.passages(), Some(true));
        assert_eq!(options.aggregation(), Some("term(enriched_text.concepts.text,count:10)"));
        assert_eq!(options.count(), Some(5));
        assert_eq!(options.return_fields(), Some("title,url"));
        assert_eq!(options.offset(), Some(10));
        assert_eq!(options.sort(), Some("-publication_date"));
        assert_eq!(options.highlight(), Some(true));
        assert_eq!(options.passages_fields(), Some("text"));
        assert_eq!(options.passages_count(), Some(3));
        assert_eq!(options.passages_characters(), Some(200));
        assert_eq!(options.deduplicate(), Some(false));
        assert_eq!(options.deduplicate_field(), Some("title"));
        assert_eq!(options.similar(), Some(true));
        assert_eq!(options.similar_document_ids(), Some("doc-1,doc-2"));
        assert_eq!(options.similar_fields(), Some("title"));
        assert_eq!(options.bias(), Some("publication_date"));
        assert_eq!(options.spelling_suggestions(), Some(true));
        assert_eq!(options.x_watson_logging_opt_out(), Some(true));
        assert_eq!(options.to_builder().build().unwrap(), options);
    }

    #[test]
    fn query_body_uses_dotted_keys() {
        let options = QueryOptionsBuilder::new("env", "col")
            .return_fields("title")
            .passages_fields("text")
            .passages_count(3)
            .deduplicate_field("title")
            .similar_document_ids("doc-1")
            .x_watson_logging_opt_out(false)
            .build()
            .unwrap();

        let payload = options.payload().unwrap();
        let body = payload.as_json().unwrap();
        assert_eq!(body["return"], "title");
        assert_eq!(body["passages.fields"], "text");
        assert_eq!(body["passages.count"], 3);
        assert_eq!(body["deduplicate.field"], "title");
        assert_eq!(body["similar.document_ids"], "doc-1");
        assert!(body.get("filter").is_none());
        assert!(body.get("collection_ids").is_none());

        assert_eq!(options.headers().get("X-Watson-Logging-Opt-Out"), Some("false"));
        assert_eq!(options.path_segments().last(), Some(&"query"));
    }

    #[test]
    fn federated_query_sends_collection_ids() {
        let err = FederatedQueryOptions::builder().environment_id("env").build().unwrap_err();
        assert_eq!(err.to_string(), "collection_ids cannot be null");

        let options = FederatedQueryOptionsBuilder::new("env", "col-1,col-2")
            .natural_language_query("watson")
            .build()
            .unwrap();

        assert_eq!(options.collection_ids(), "col-1,col-2");
        assert_eq!(options.path_segments(), ["v1", "environments", "env", "query"]);
        assert!(options.headers().is_empty());

        let payload = options.payload().unwrap();
        let body = payload.as_json().unwrap();
        assert_eq!(body["collection_ids"], "col-1,col-2");
        assert!(body.get("spelling_suggestions").is_none());
        assert_eq!(options.to_builder().build().unwrap(), options);
    }

    #[test]
    fn notices_use_query_string() {
        let options = QueryNoticesOptionsBuilder::new("env", "col")
            .filter("notices.severity::warning")
            .count(20)
            .add_return_field("notices")
            .add_return_field("filename")
            .add_sort("-notices.created")
            .passages(false)
            .add_passages_field("text")
            .passages_count(1)
            .passages_characters(50)
            .similar(true)
            .add_similar_document_id("doc-1")
            .add_similar_field("title")
            .build()
            .unwrap();

        assert_eq!(options.return_fields().map(<[String]>::len), Some(2));
        assert_eq!(options.passages_fields().map(<[String]>::len), Some(1));
        assert_eq!(options.method(), Method::GET);

        let query = options.query_params();
        assert_eq!(query.get("return"), Some("notices,filename"));
        assert_eq!(query.get("sort"), Some("-notices.created"));
        assert_eq!(query.get("passages"), Some("false"));
        assert_eq!(query.get("passages.fields"), Some("text"));
        assert_eq!(query.get("similar.document_ids"), Some("doc-1"));
        assert_eq!(query.get("count"), Some("20"));
        assert_eq!(query.get("offset"), None);
        assert_eq!(options.to_builder().build().unwrap(), options);
    }

    #[test]
    fn federated_notices_require_collections() {
        let err = FederatedQueryNoticesOptions::builder().environment_id("env").build().unwrap_err();
        assert_eq!(err.to_string(), "collection_ids cannot be null");

        let options = FederatedQueryNoticesOptions::builder()
            .environment_id("env")
            .add_collection_id("col-1")
            .add_collection_id("col-2")
            .query("notices.severity:error")
            .build()
            .unwrap();

        assert_eq!(options.collection_ids(), ["col-1", "col-2"]);
        let query = options.query_params();
        assert_eq!(query.pairs().next(), Some(("collection_ids", "col-1,col-2")));
        assert_eq!(query.get("query"), Some("notices.severity:error"));
    }
}
