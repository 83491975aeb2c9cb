use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Summary entry returned when listing collections
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub collection_id: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCollectionsResponse {
    pub collections: Option<Vec<Collection>>,
}

/// An enrichment applied to a set of collection fields
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEnrichment {
    pub enrichment_id: Option<String>,
    /// Fields the enrichment reads; `text` when unset
    pub fields: Option<Vec<String>>,
}

impl CollectionEnrichment {
    pub fn new(enrichment_id: impl Into<String>) -> Self {
        Self {
            enrichment_id: Some(enrichment_id.into()),
            fields: None,
        }
    }

    #[must_use]
    pub fn add_field(mut self, field: impl Into<String>) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field.into());
        self
    }
}

/// Smart Document Understanding state of a collection
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDetailsSmartDocumentUnderstanding {
    pub enabled: Option<bool>,
    /// `custom`, `pre_trained` or `text_extraction`
    pub model: Option<String>,
}

/// Full collection resource
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDetails {
    pub collection_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<Timestamp>,
    /// ISO 639-1 language code
    pub language: Option<String>,
    pub enrichments: Option<Vec<CollectionEnrichment>>,
    pub smart_document_understanding: Option<CollectionDetailsSmartDocumentUnderstanding>,
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use watson_core::JsonModel;

    use super::*;

    #[test]
    fn details_from_service_json() {
        let details = CollectionDetails::from_json(indoc! {r#"
            {
              "collection_id": "collectionId",
              "name": "name",
              "description": "description",
              "created": "2019-01-01T12:00:00Z",
              "language": "en",
              "enrichments": [{ "enrichment_id": "enrichmentId", "fields": ["fields"] }]
            }
        "#})
        .unwrap();

        assert_eq!(details.collection_id.as_deref(), Some("collectionId"));
        assert_eq!(details.created.map(|t| t.as_second()), Some(1_546_344_000));
        assert_eq!(
            details.enrichments,
            Some(vec![CollectionEnrichment::new("enrichmentId").add_field("fields")])
        );
        assert!(details.smart_document_understanding.is_none());
    }

    #[test]
    fn details_round_trip() {
        let details = CollectionDetails {
            collection_id: Some("c-1".to_owned()),
            name: Some("news".to_owned()),
            enrichments: Some(vec![CollectionEnrichment::new("e-1")]),
            smart_document_understanding: Some(CollectionDetailsSmartDocumentUnderstanding {
                enabled: Some(true),
                model: Some("pre_trained".to_owned()),
            }),
            ..CollectionDetails::default()
        };

        let json = details.to_json().unwrap();
        assert!(!json.contains("description"));
        assert_eq!(CollectionDetails::from_json(&json).unwrap(), details);

        let list = ListCollectionsResponse {
            collections: Some(vec![Collection {
                collection_id: Some("c-1".to_owned()),
                name: Some("news".to_owned()),
            }]),
        };
        assert_eq!(
            ListCollectionsResponse::from_json(&list.to_json().unwrap()).unwrap(),
            list
        );
    }
}
