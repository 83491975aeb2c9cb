use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Result, string_constants, validate};

/// A click on a query result, linked back to the query by its session token
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    environment_id: String,
    session_token: String,
    client_timestamp: Option<Timestamp>,
    display_rank: Option<i64>,
    collection_id: String,
    document_id: String,
    /// Assigned by the service
    query_id: Option<String>,
}

impl EventData {
    pub fn builder() -> EventDataBuilder {
        EventDataBuilder::default()
    }

    pub fn to_builder(&self) -> EventDataBuilder {
        EventDataBuilder {
            environment_id: Some(self.environment_id.clone()),
            session_token: Some(self.session_token.clone()),
            client_timestamp: self.client_timestamp,
            display_rank: self.display_rank,
            collection_id: Some(self.collection_id.clone()),
            document_id: Some(self.document_id.clone()),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// `session_token` returned with the query the event belongs to
    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    pub const fn client_timestamp(&self) -> Option<Timestamp> {
        self.client_timestamp
    }

    /// Rank of the clicked result in the result list
    pub const fn display_rank(&self) -> Option<i64> {
        self.display_rank
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn query_id(&self) -> Option<&str> {
        self.query_id.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct EventDataBuilder {
    environment_id: Option<String>,
    session_token: Option<String>,
    client_timestamp: Option<Timestamp>,
    display_rank: Option<i64>,
    collection_id: Option<String>,
    document_id: Option<String>,
}

impl EventDataBuilder {
    pub fn new(
        environment_id: impl Into<String>,
        session_token: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            session_token: Some(session_token.into()),
            collection_id: Some(collection_id.into()),
            document_id: Some(document_id.into()),
            ..Self::default()
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(session_token.into());
        self
    }

    pub const fn client_timestamp(mut self, client_timestamp: Timestamp) -> Self {
        self.client_timestamp = Some(client_timestamp);
        self
    }

    pub const fn display_rank(mut self, display_rank: i64) -> Self {
        self.display_rank = Some(display_rank);
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn build(self) -> Result<EventData> {
        Ok(EventData {
            environment_id: validate::not_null(self.environment_id, "environment_id")?,
            session_token: validate::not_null(self.session_token, "session_token")?,
            client_timestamp: self.client_timestamp,
            display_rank: self.display_rank,
            collection_id: validate::not_null(self.collection_id, "collection_id")?,
            document_id: validate::not_null(self.document_id, "document_id")?,
            query_id: None,
        })
    }
}

/// Kinds of events accepted by `CreateEventOptions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Click,
}

/// Response of `CreateEventOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventResponse {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub data: Option<EventData>,
}

/// Response of `QueryLogOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQueryResponse {
    pub matching_results: Option<i64>,
    pub results: Option<Vec<LogQueryResponseResult>>,
}

/// One query or event log entry
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQueryResponseResult {
    pub environment_id: Option<String>,
    pub customer_id: Option<String>,
    /// One of [`LogDocumentType`]
    pub document_type: Option<String>,
    pub natural_language_query: Option<String>,
    pub document_results: Option<LogQueryResponseResultDocuments>,
    pub created_timestamp: Option<Timestamp>,
    pub client_timestamp: Option<Timestamp>,
    pub query_id: Option<String>,
    pub session_token: Option<String>,
    pub collection_id: Option<String>,
    pub display_rank: Option<i64>,
    pub document_id: Option<String>,
    /// One of [`LogEventType`]
    pub event_type: Option<String>,
    /// One of [`LogResultType`]
    pub result_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQueryResponseResultDocuments {
    pub results: Option<Vec<LogQueryResponseResultDocumentsResult>>,
    pub count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQueryResponseResultDocumentsResult {
    pub position: Option<i64>,
    pub document_id: Option<String>,
    pub score: Option<f64>,
    pub confidence: Option<f64>,
    pub collection_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LogDocumentType {
    Query,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LogEventType {
    Click,
    Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LogResultType {
    Document,
}

string_constants!(EventKind, LogDocumentType, LogEventType, LogResultType);

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use watson_core::{JsonModel, constants::literals};

    use super::*;

    #[test]
    fn build_requires_fields() {
        let complete = EventDataBuilder::new("env", "token", "col", "doc");
        assert!(complete.clone().build().is_ok());

        let cases = [
            (complete.clone().environment_id_unset(), "environment_id"),
            (complete.clone().session_token_unset(), "session_token"),
            (complete.clone().collection_id_unset(), "collection_id"),
            (complete.document_id_unset(), "document_id"),
        ];
        for (builder, field) in cases {
            let err = builder.build().unwrap_err();
            assert_eq!(err.field(), Some(field));
        }
    }

    impl EventDataBuilder {
        fn environment_id_unset(mut self) -> Self {
            self.environment_id = None;
            self
        }

        fn session_token_unset(mut self) -> Self {
            self.session_token = None;
            self
        }

        fn collection_id_unset(mut self) -> Self {
            self.collection_id = None;
            self
        }

        fn document_id_unset(mut self) -> Self {
            self.document_id = None;
            self
        }
    }

    #[test]
    fn build_preserves_fields() {
        let at: Timestamp = "2019-04-30T12:00:00Z".parse().unwrap();
        let data = EventDataBuilder::new("env", "token", "col", "doc")
            .client_timestamp(at)
            .display_rank(3)
            .build()
            .unwrap();

        assert_eq!(data.environment_id(), "env");
        assert_eq!(data.session_token(), "token");
        assert_eq!(data.collection_id(), "col");
        assert_eq!(data.document_id(), "doc");
        assert_eq!(data.client_timestamp(), Some(at));
        assert_eq!(data.display_rank(), Some(3));
        assert_eq!(data.query_id(), None);
        assert_eq!(data.to_builder().build().unwrap(), data);
    }

    #[test]
    fn event_response_keeps_query_id() {
        let response = CreateEventResponse::from_json(indoc! {r#"
            {
              "type": "click",
              "data": {
                "environment_id": "env",
                "session_token": "token",
                "collection_id": "col",
                "document_id": "doc",
                "query_id": "q-1",
                "client_timestamp": "2019-04-30T12:00:00Z"
              }
            }
        "#})
        .unwrap();

        let data = response.data.as_ref().unwrap();
        assert_eq!(data.query_id(), Some("q-1"));
        assert_eq!(response.event_type.as_deref(), Some("click"));
        assert_eq!(CreateEventResponse::from_json(&response.to_json().unwrap()).unwrap(), response);
    }

    #[test]
    fn log_entries_round_trip() {
        let response = LogQueryResponse {
            matching_results: Some(1),
            results: Some(vec![LogQueryResponseResult {
                document_type: Some(LogDocumentType::Query.into()),
                natural_language_query: Some("watson".to_owned()),
                created_timestamp: Some("2019-04-30T12:00:00Z".parse().unwrap()),
                result_type: Some(LogResultType::Document.into()),
                document_results: Some(LogQueryResponseResultDocuments {
                    results: Some(vec![LogQueryResponseResultDocumentsResult {
                        position: Some(1),
                        document_id: Some("doc".to_owned()),
                        score: Some(2.5),
                        confidence: Some(0.75),
                        collection_id: Some("col".to_owned()),
                    }]),
                    count: Some(1),
                }),
                ..LogQueryResponseResult::default()
            }]),
        };

        let value = response.to_json_value().unwrap();
        assert_eq!(value["results"][0]["created_timestamp"], "2019-04-30T12:00:00Z");
        assert_eq!(LogQueryResponse::from_json_value(value).unwrap(), response);
    }

    #[test]
    fn constant_groups() {
        assert_eq!(literals::<EventKind>(), ["click"]);
        assert_eq!(literals::<LogDocumentType>(), ["query", "event"]);
        assert_eq!(literals::<LogEventType>(), ["click", "query"]);
        assert_eq!(literals::<LogResultType>(), ["document"]);
    }
}
