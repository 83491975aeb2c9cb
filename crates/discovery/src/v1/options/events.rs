use http::Method;
use serde::Serialize;
use watson_core::{Operation, Params, Payload, Result, validate};

use crate::v1::model::EventData;

#[derive(Serialize)]
struct EventBody<'a> {
    #[serde(rename = "type")]
    event_type: &'a str,
    data: &'a EventData,
}

/// Record a user interaction with a query result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEventOptions {
    event_type: String,
    data: EventData,
}

impl CreateEventOptions {
    pub fn builder() -> CreateEventOptionsBuilder {
        CreateEventOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateEventOptionsBuilder {
        CreateEventOptionsBuilder {
            event_type: Some(self.event_type.clone()),
            data: Some(self.data.clone()),
        }
    }

    /// One of [`EventKind`](crate::v1::EventKind)
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub const fn data(&self) -> &EventData {
        &self.data
    }
}

impl Operation for CreateEventOptions {
    fn operation_id(&self) -> &'static str {
        "create_event"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "events"]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&EventBody {
            event_type: &self.event_type,
            data: &self.data,
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateEventOptionsBuilder {
    event_type: Option<String>,
    data: Option<EventData>,
}

impl CreateEventOptionsBuilder {
    pub fn new(event_type: impl Into<String>, data: EventData) -> Self {
        Self {
            event_type: Some(event_type.into()),
            data: Some(data),
        }
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn data(mut self, data: EventData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn build(self) -> Result<CreateEventOptions> {
        Ok(CreateEventOptions {
            event_type: validate::not_null(self.event_type, "type")?,
            data: validate::not_null(self.data, "data")?,
        })
    }
}

/// Search the query and event log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryLogOptions {
    filter: Option<String>,
    query: Option<String>,
    count: Option<i64>,
    offset: Option<i64>,
    sort: Option<Vec<String>>,
}

impl QueryLogOptions {
    pub fn builder() -> QueryLogOptionsBuilder {
        QueryLogOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> QueryLogOptionsBuilder {
        QueryLogOptionsBuilder {
            filter: self.filter.clone(),
            query: self.query.clone(),
            count: self.count,
            offset: self.offset,
            sort: self.sort.clone(),
        }
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub const fn count(&self) -> Option<i64> {
        self.count
    }

    pub const fn offset(&self) -> Option<i64> {
        self.offset
    }

    pub fn sort(&self) -> Option<&[String]> {
        self.sort.as_deref()
    }
}

impl Operation for QueryLogOptions {
    fn operation_id(&self) -> &'static str {
        "query_log"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "logs"]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query
            .push_opt("filter", self.filter.as_deref())
            .push_opt("query", self.query.as_deref())
            .push_opt("count", self.count)
            .push_opt("offset", self.offset)
            .push_list("sort", self.sort.as_deref());
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct QueryLogOptionsBuilder {
    filter: Option<String>,
    query: Option<String>,
    count: Option<i64>,
    offset: Option<i64>,
    sort: Option<Vec<String>>,
}

impl QueryLogOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
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

    pub fn sort(mut self, sort: Vec<String>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn add_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort.get_or_insert_with(Vec::new).push(sort.into());
        self
    }

    pub fn build(self) -> Result<QueryLogOptions> {
        Ok(QueryLogOptions {
            filter: self.filter,
            query: self.query,
            count: self.count,
            offset: self.offset,
            sort: self.sort,
        })
    }
}
