use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::string_constants;

use super::Notice;

/// Response of `AddDocumentOptions` and `UpdateDocumentOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAccepted {
    pub document_id: Option<String>,
    /// One of [`DocumentAcceptedStatus`]
    pub status: Option<String>,
    pub notices: Option<Vec<Notice>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DocumentAcceptedStatus {
    Processing,
    Pending,
}

/// Response of `GetDocumentStatusOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub document_id: Option<String>,
    pub configuration_id: Option<String>,
    /// One of [`DocumentStatusKind`]
    pub status: Option<String>,
    pub status_description: Option<String>,
    pub filename: Option<String>,
    /// `pdf`, `html`, `word` or `json`
    pub file_type: Option<String>,
    pub sha1: Option<String>,
    pub notices: Option<Vec<Notice>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum DocumentStatusKind {
    #[strum(serialize = "available")]
    Available,
    #[strum(serialize = "available with notices")]
    AvailableWithNotices,
    #[strum(serialize = "failed")]
    Failed,
    #[strum(serialize = "processing")]
    Processing,
    #[strum(serialize = "pending")]
    Pending,
}

/// Response of `DeleteDocumentOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    pub document_id: Option<String>,
    pub status: Option<String>,
}

string_constants!(DocumentAcceptedStatus, DocumentStatusKind);
