use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::string_constants;

/// Response to an add or update document request
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAccepted {
    pub document_id: Option<String>,
    /// One of [`DocumentAcceptedStatus`]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentAcceptedStatus {
    Processing,
    Pending,
}

/// Ingestion state of one document
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDetails {
    pub document_id: Option<String>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    /// One of [`DocumentDetailsStatus`]
    pub status: Option<String>,
    pub notices: Option<Vec<super::Notice>>,
    pub children: Option<DocumentDetailsChildren>,
    pub filename: Option<String>,
    pub file_type: Option<String>,
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentDetailsStatus {
    Available,
    Failed,
    Pending,
    Processing,
}

/// Child documents split from a parent document
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDetailsChildren {
    pub have_notices: Option<bool>,
    pub count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDocumentsResponse {
    pub matching_results: Option<i64>,
    pub documents: Option<Vec<DocumentDetails>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    pub document_id: Option<String>,
    /// Always `deleted`
    pub status: Option<String>,
}

/// Result of analyzing a document without indexing it
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    pub notices: Option<Vec<super::Notice>>,
    pub result: Option<AnalyzedResult>,
}

/// Enriched document; enrichment output is kept under its field names
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedResult {
    pub metadata: Option<BTreeMap<String, Value>>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

string_constants!(DocumentAcceptedStatus, DocumentDetailsStatus);

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use watson_core::{JsonModel, constants::literals};

    use super::*;

    #[test]
    fn details_round_trip() {
        let details = DocumentDetails::from_json(indoc! {r#"
            {
              "document_id": "4ffcfd8052005b99469e632506763bac_1",
              "created": "2020-06-25T17:21:52.315Z",
              "status": "available",
              "children": { "have_notices": false, "count": 2 },
              "filename": "sample.pdf",
              "file_type": "pdf",
              "sha256": "8e2da8e6c1b4cfc1ad0ba5b5c8d2f5a4"
            }
        "#})
        .unwrap();

        assert_eq!(details.status.as_deref(), Some("available"));
        assert_eq!(details.children.as_ref().and_then(|c| c.count), Some(2));
        assert!(details.notices.is_none());

        let list = ListDocumentsResponse {
            matching_results: Some(1),
            documents: Some(vec![details]),
        };
        assert_eq!(ListDocumentsResponse::from_json(&list.to_json().unwrap()).unwrap(), list);
    }

    #[test]
    fn analyzed_result_keeps_enrichments() {
        let analyzed = AnalyzedDocument::from_json(indoc! {r#"
            {
              "notices": [],
              "result": { "metadata": { "parent_document_id": "p-1" }, "enriched_text": [{ "entities": [] }] }
            }
        "#})
        .unwrap();

        let result = analyzed.result.as_ref().unwrap();
        assert!(result.fields.contains_key("enriched_text"));
        assert_eq!(AnalyzedDocument::from_json(&analyzed.to_json().unwrap()).unwrap(), analyzed);
    }

    #[test]
    fn constant_groups() {
        assert_eq!(literals::<DocumentAcceptedStatus>(), ["processing", "pending"]);
        assert_eq!(
            literals::<DocumentDetailsStatus>(),
            ["available", "failed", "pending", "processing"]
        );
    }
}
