use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Result, string_constants, validate};

/// An enrichment whose output feeds the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentClassifierEnrichment {
    pub enrichment_id: String,
    pub fields: Vec<String>,
}

impl DocumentClassifierEnrichment {
    pub fn new(enrichment_id: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            enrichment_id: enrichment_id.into(),
            fields,
        }
    }
}

/// Train one model per value of `field`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierFederatedModel {
    pub field: String,
}

impl ClassifierFederatedModel {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }
}

/// Classifier definition sent when creating a document classifier
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDocumentClassifier {
    name: String,
    description: Option<String>,
    language: String,
    answer_field: String,
    enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    federated_classification: Option<ClassifierFederatedModel>,
}

impl CreateDocumentClassifier {
    pub fn builder() -> CreateDocumentClassifierBuilder {
        CreateDocumentClassifierBuilder::default()
    }

    pub fn to_builder(&self) -> CreateDocumentClassifierBuilder {
        CreateDocumentClassifierBuilder {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            language: Some(self.language.clone()),
            answer_field: Some(self.answer_field.clone()),
            enrichments: self.enrichments.clone(),
            federated_classification: self.federated_classification.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// ISO 639-1 language of the training data
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Training data column holding the class labels
    pub fn answer_field(&self) -> &str {
        &self.answer_field
    }

    pub fn enrichments(&self) -> Option<&[DocumentClassifierEnrichment]> {
        self.enrichments.as_deref()
    }

    pub const fn federated_classification(&self) -> Option<&ClassifierFederatedModel> {
        self.federated_classification.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateDocumentClassifierBuilder {
    name: Option<String>,
    description: Option<String>,
    language: Option<String>,
    answer_field: Option<String>,
    enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    federated_classification: Option<ClassifierFederatedModel>,
}

impl CreateDocumentClassifierBuilder {
    pub fn new(name: impl Into<String>, language: impl Into<String>, answer_field: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            language: Some(language.into()),
            answer_field: Some(answer_field.into()),
            ..Self::default()
        }
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

    pub fn answer_field(mut self, answer_field: impl Into<String>) -> Self {
        self.answer_field = Some(answer_field.into());
        self
    }

    pub fn enrichments(mut self, enrichments: Vec<DocumentClassifierEnrichment>) -> Self {
        self.enrichments = Some(enrichments);
        self
    }

    pub fn add_enrichment(mut self, enrichment: DocumentClassifierEnrichment) -> Self {
        self.enrichments.get_or_insert_with(Vec::new).push(enrichment);
        self
    }

    pub fn federated_classification(mut self, federated_classification: ClassifierFederatedModel) -> Self {
        self.federated_classification = Some(federated_classification);
        self
    }

    pub fn build(self) -> Result<CreateDocumentClassifier> {
        Ok(CreateDocumentClassifier {
            name: validate::not_null(self.name, "name")?,
            description: self.description,
            language: validate::not_null(self.language, "language")?,
            answer_field: validate::not_null(self.answer_field, "answer_field")?,
            enrichments: self.enrichments,
            federated_classification: self.federated_classification,
        })
    }
}

/// Fields changed by an update document classifier request
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDocumentClassifier {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Document classifier resource
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentClassifier {
    pub classifier_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<Timestamp>,
    pub language: Option<String>,
    pub enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    /// Columns found in the training data
    pub recognized_fields: Option<Vec<String>>,
    pub answer_field: Option<String>,
    pub training_data_file: Option<String>,
    pub test_data_file: Option<String>,
    pub federated_classification: Option<ClassifierFederatedModel>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentClassifiers {
    pub classifiers: Option<Vec<DocumentClassifier>>,
}

/// A trained model of a document classifier
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassifierModel {
    pub model_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub training_data_file: Option<String>,
    pub test_data_file: Option<String>,
    /// One of [`DocumentClassifierModelStatus`]
    pub status: Option<String>,
    /// Precision, recall and F1 figures computed on the test data
    pub evaluation: Option<Value>,
    /// Enrichment created from this model
    pub enrichment_id: Option<String>,
    pub deployed_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentClassifierModelStatus {
    Training,
    Available,
    Failed,
}

string_constants!(DocumentClassifierModelStatus);

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassifierModels {
    pub models: Option<Vec<DocumentClassifierModel>>,
}
