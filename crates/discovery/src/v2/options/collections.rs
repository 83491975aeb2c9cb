use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use watson_core::{Operation, Payload, Result, validate};

use crate::v2::model::CollectionEnrichment;

#[skip_serializing_none]
#[derive(Serialize)]
struct CollectionBody<'a> {
    name: Option<&'a str>,
    description: Option<&'a str>,
    language: Option<&'a str>,
    enrichments: Option<&'a [CollectionEnrichment]>,
}

/// Create a collection in a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCollectionOptions {
    project_id: String,
    name: String,
    description: Option<String>,
    language: Option<String>,
    enrichments: Option<Vec<CollectionEnrichment>>,
}

impl CreateCollectionOptions {
    pub fn builder() -> CreateCollectionOptionsBuilder {
        CreateCollectionOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateCollectionOptionsBuilder {
        CreateCollectionOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            name: Some(self.name.clone()),
            description: self.description.clone(),
            language: self.language.clone(),
            enrichments: self.enrichments.clone(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// ISO 639-1 code, `en` when unset
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn enrichments(&self) -> Option<&[CollectionEnrichment]> {
        self.enrichments.as_deref()
    }
}

impl Operation for CreateCollectionOptions {
    fn operation_id(&self) -> &'static str {
        "create_collection"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v2", "projects", &self.project_id, "collections"]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&CollectionBody {
            name: Some(&self.name),
            description: self.description.as_deref(),
            language: self.language.as_deref(),
            enrichments: self.enrichments.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateCollectionOptionsBuilder {
    project_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    language: Option<String>,
    enrichments: Option<Vec<CollectionEnrichment>>,
}

impl CreateCollectionOptionsBuilder {
    pub fn new(project_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn enrichments(mut self, enrichments: Vec<CollectionEnrichment>) -> Self {
        self.enrichments = Some(enrichments);
        self
    }

    pub fn add_enrichment(mut self, enrichment: CollectionEnrichment) -> Self {
        self.enrichments.get_or_insert_with(Vec::new).push(enrichment);
        self
    }

    pub fn build(self) -> Result<CreateCollectionOptions> {
        Ok(CreateCollectionOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            name: validate::not_null(self.name, "name")?,
            description: self.description,
            language: self.language,
            enrichments: self.enrichments,
        })
    }
}

/// Rename a collection or change its enrichments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCollectionOptions {
    project_id: String,
    collection_id: String,
    name: Option<String>,
    description: Option<String>,
    enrichments: Option<Vec<CollectionEnrichment>>,
}

impl UpdateCollectionOptions {
    pub fn builder() -> UpdateCollectionOptionsBuilder {
        UpdateCollectionOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateCollectionOptionsBuilder {
        UpdateCollectionOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            enrichments: self.enrichments.clone(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enrichments(&self) -> Option<&[CollectionEnrichment]> {
        self.enrichments.as_deref()
    }
}

impl Operation for UpdateCollectionOptions {
    fn operation_id(&self) -> &'static str {
        "update_collection"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v2", "projects", &self.project_id, "collections", &self.collection_id]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&CollectionBody {
            name: self.name.as_deref(),
            description: self.description.as_deref(),
            language: None,
            enrichments: self.enrichments.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct UpdateCollectionOptionsBuilder {
    project_id: Option<String>,
    collection_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    enrichments: Option<Vec<CollectionEnrichment>>,
}

impl UpdateCollectionOptionsBuilder {
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

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn enrichments(mut self, enrichments: Vec<CollectionEnrichment>) -> Self {
        self.enrichments = Some(enrichments);
        self
    }

    pub fn add_enrichment(mut self, enrichment: CollectionEnrichment) -> Self {
        self.enrichments.get_or_insert_with(Vec::new).push(enrichment);
        self
    }

    pub fn build(self) -> Result<UpdateCollectionOptions> {
        Ok(UpdateCollectionOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            collection_id: validate::not_empty(self.collection_id, "collection_id")?,
            name: self.name,
            description: self.description,
            enrichments: self.enrichments,
        })
    }
}

macro_rules! collection_ref {
    ($options:ident, $builder:ident, $operation_id:literal, $method:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $options {
            project_id: String,
            collection_id: String,
        }

        impl $options {
            pub fn builder() -> $builder {
                $builder::default()
            }

            pub fn to_builder(&self) -> $builder {
                $builder::new(&self.project_id, &self.collection_id)
            }

            pub fn project_id(&self) -> &str {
                &self.project_id
            }

            pub fn collection_id(&self) -> &str {
                &self.collection_id
            }
        }

        impl Operation for $options {
            fn operation_id(&self) -> &'static str {
                $operation_id
            }

            fn method(&self) -> Method {
                Method::$method
            }

            fn path_segments(&self) -> Vec<&str> {
                vec!["v2", "projects", &self.project_id, "collections", &self.collection_id]
            }
        }

        #[derive(Debug, Clone, Default)]
        #[must_use]
        pub struct $builder {
            project_id: Option<String>,
            collection_id: Option<String>,
        }

        impl $builder {
            pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
                Self {
                    project_id: Some(project_id.into()),
                    collection_id: Some(collection_id.into()),
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

            pub fn build(self) -> Result<$options> {
                Ok($options {
                    project_id: validate::not_empty(self.project_id, "project_id")?,
                    collection_id: validate::not_empty(self.collection_id, "collection_id")?,
                })
            }
        }
    };
}

collection_ref!(
    GetCollectionOptions,
    GetCollectionOptionsBuilder,
    "get_collection",
    GET,
    "Fetch the details of a collection"
);
collection_ref!(
    DeleteCollectionOptions,
    DeleteCollectionOptionsBuilder,
    "delete_collection",
    DELETE,
    "Delete a collection and its documents"
);

/// List the collections of a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCollectionsOptions {
    project_id: String,
}

impl ListCollectionsOptions {
    pub fn builder() -> ListCollectionsOptionsBuilder {
        ListCollectionsOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> ListCollectionsOptionsBuilder {
        ListCollectionsOptionsBuilder::new(&self.project_id)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

impl Operation for ListCollectionsOptions {
    fn operation_id(&self) -> &'static str {
        "list_collections"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v2", "projects", &self.project_id, "collections"]
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ListCollectionsOptionsBuilder {
    project_id: Option<String>,
}

impl ListCollectionsOptionsBuilder {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn build(self) -> Result<ListCollectionsOptions> {
        Ok(ListCollectionsOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_requires_project_and_name() {
        let err = CreateCollectionOptions::builder().name("news").build().unwrap_err();
        assert_eq!(err.to_string(), "project_id cannot be empty");

        let err = CreateCollectionOptions::builder().project_id("p").build().unwrap_err();
        assert_eq!(err.to_string(), "name cannot be null");
    }

    #[test]
    fn create_body() {
        let options = CreateCollectionOptionsBuilder::new("p", "news")
            .description("Daily news")
            .language("en")
            .add_enrichment(CollectionEnrichment::new("e-1").add_field("text"))
            .build()
            .unwrap();

        assert_eq!(options.project_id(), "p");
        assert_eq!(options.name(), "news");
        assert_eq!(options.description(), Some("Daily news"));
        assert_eq!(options.language(), Some("en"));
        assert_eq!(options.enrichments().map(<[CollectionEnrichment]>::len), Some(1));
        assert_eq!(options.to_builder().build().unwrap(), options);
        assert_eq!(options.path_segments(), ["v2", "projects", "p", "collections"]);
        assert_eq!(
            options.payload().unwrap().as_json(),
            Some(&json!({
                "name": "news",
                "description": "Daily news",
                "language": "en",
                "enrichments": [{ "enrichment_id": "e-1", "fields": ["text"] }]
            }))
        );
    }

    #[test]
    fn update_posts_changed_fields() {
        let options = UpdateCollectionOptionsBuilder::new("p", "c").name("renamed").build().unwrap();

        assert_eq!(options.method(), Method::POST);
        assert_eq!(options.collection_id(), "c");
        assert_eq!(options.payload().unwrap().as_json(), Some(&json!({ "name": "renamed" })));
        assert!(UpdateCollectionOptions::builder().project_id("p").build().is_err());
    }

    #[test]
    fn collection_lookups() {
        let get = GetCollectionOptionsBuilder::new("p", "c").build().unwrap();
        let delete = DeleteCollectionOptionsBuilder::new("p", "c").build().unwrap();
        assert_eq!(get.path_segments(), ["v2", "projects", "p", "collections", "c"]);
        assert_eq!(get.path_segments(), delete.path_segments());
        assert_eq!(delete.method(), Method::DELETE);
        assert_eq!(get.to_builder().build().unwrap(), get);

        let err = DeleteCollectionOptions::builder().project_id("p").collection_id("").build().unwrap_err();
        assert_eq!(err.to_string(), "collection_id cannot be empty");

        let list = ListCollectionsOptions::builder().project_id("p").build().unwrap();
        assert_eq!(list.operation_id(), "list_collections");
        assert_eq!(list.to_builder().build().unwrap(), list);
    }
}
