use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::string_constants;

/// A warning or error raised while ingesting a document or training a project
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub notice_id: Option<String>,
    pub created: Option<Timestamp>,
    pub document_id: Option<String>,
    pub collection_id: Option<String>,
    pub query_id: Option<String>,
    /// One of [`NoticeSeverity`]
    pub severity: Option<String>,
    /// Ingestion or training step that raised the notice
    pub step: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NoticeSeverity {
    Warning,
    Error,
}

string_constants!(NoticeSeverity);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryNoticesResponse {
    pub matching_results: Option<i64>,
    pub notices: Option<Vec<Notice>>,
}
