use bytes::Bytes;
use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use watson_core::{FormPart, Operation, Payload, Result, validate};

use crate::v2::model::{CreateDocumentClassifier, UpdateDocumentClassifier};

const TEXT_CSV: &str = "text/csv";

fn csv_part(name: &str, data: &Bytes) -> FormPart {
    FormPart::file(name, data.clone(), Some("filename"), Some(TEXT_CSV))
}

/// Create a document classifier from CSV training data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDocumentClassifierOptions {
    project_id: String,
    training_data: Bytes,
    classifier: CreateDocumentClassifier,
    test_data: Option<Bytes>,
}

impl CreateDocumentClassifierOptions {
    pub fn builder() -> CreateDocumentClassifierOptionsBuilder {
        CreateDocumentClassifierOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateDocumentClassifierOptionsBuilder {
        CreateDocumentClassifierOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            training_data: Some(self.training_data.clone()),
            classifier: Some(self.classifier.clone()),
            test_data: self.test_data.clone(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// CSV with one column per field plus the answer column
    pub const fn training_data(&self) -> &Bytes {
        &self.training_data
    }

    pub const fn classifier(&self) -> &CreateDocumentClassifier {
        &self.classifier
    }

    /// CSV used to evaluate trained models
    pub const fn test_data(&self) -> Option<&Bytes> {
        self.test_data.as_ref()
    }
}

impl Operation for CreateDocumentClassifierOptions {
    fn operation_id(&self) -> &'static str {
        "create_document_classifier"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v2", "projects", &self.project_id, "document_classifiers"]
    }

    fn payload(&self) -> Result<Payload> {
        let mut parts = vec![
            csv_part("training_data", &self.training_data),
            FormPart::json("classifier", &self.classifier)?,
        ];
        if let Some(ref test_data) = self.test_data {
            parts.push(csv_part("test_data", test_data));
        }
        Ok(Payload::Multipart(parts))
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateDocumentClassifierOptionsBuilder {
    project_id: Option<String>,
    training_data: Option<Bytes>,
    classifier: Option<CreateDocumentClassifier>,
    test_data: Option<Bytes>,
}

impl CreateDocumentClassifierOptionsBuilder {
    pub fn new(
        project_id: impl Into<String>,
        training_data: impl Into<Bytes>,
        classifier: CreateDocumentClassifier,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            training_data: Some(training_data.into()),
            classifier: Some(classifier),
            test_data: None,
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn training_data(mut self, training_data: impl Into<Bytes>) -> Self {
        self.training_data = Some(training_data.into());
        self
    }

    pub fn classifier(mut self, classifier: CreateDocumentClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn test_data(mut self, test_data: impl Into<Bytes>) -> Self {
        self.test_data = Some(test_data.into());
        self
    }

    pub fn build(self) -> Result<CreateDocumentClassifierOptions> {
        Ok(CreateDocumentClassifierOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            training_data: validate::not_null(self.training_data, "training_data")?,
            classifier: validate::not_null(self.classifier, "classifier")?,
            test_data: self.test_data,
        })
    }
}

/// Rename a document classifier or replace its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDocumentClassifierOptions {
    project_id: String,
    classifier_id: String,
    classifier: UpdateDocumentClassifier,
    training_data: Option<Bytes>,
    test_data: Option<Bytes>,
}

impl UpdateDocumentClassifierOptions {
    pub fn builder() -> UpdateDocumentClassifierOptionsBuilder {
        UpdateDocumentClassifierOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateDocumentClassifierOptionsBuilder {
        UpdateDocumentClassifierOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
            classifier: Some(self.classifier.clone()),
            training_data: self.training_data.clone(),
            test_data: self.test_data.clone(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }

    pub const fn classifier(&self) -> &UpdateDocumentClassifier {
        &self.classifier
    }

    pub const fn training_data(&self) -> Option<&Bytes> {
        self.training_data.as_ref()
    }

    pub const fn test_data(&self) -> Option<&Bytes> {
        self.test_data.as_ref()
    }
}

impl Operation for UpdateDocumentClassifierOptions {
    fn operation_id(&self) -> &'static str {
        "update_document_classifier"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v2",
            "projects",
            &self.project_id,
            "document_classifiers",
            &self.classifier_id,
        ]
    }

    fn payload(&self) -> Result<Payload> {
        let mut parts = vec![FormPart::json("classifier", &self.classifier)?];
        if let Some(ref training_data) = self.training_data {
            parts.push(csv_part("training_data", training_data));
        }
        if let Some(ref test_data) = self.test_data {
            parts.push(csv_part("test_data", test_data));
        }
        Ok(Payload::Multipart(parts))
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct UpdateDocumentClassifierOptionsBuilder {
    project_id: Option<String>,
    classifier_id: Option<String>,
    classifier: Option<UpdateDocumentClassifier>,
    training_data: Option<Bytes>,
    test_data: Option<Bytes>,
}

impl UpdateDocumentClassifierOptionsBuilder {
    pub fn new(
        project_id: impl Into<String>,
        classifier_id: impl Into<String>,
        classifier: UpdateDocumentClassifier,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
            classifier: Some(classifier),
            ..Self::default()
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn classifier_id(mut self, classifier_id: impl Into<String>) -> Self {
        self.classifier_id = Some(classifier_id.into());
        self
    }

    pub fn classifier(mut self, classifier: UpdateDocumentClassifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn training_data(mut self, training_data: impl Into<Bytes>) -> Self {
        self.training_data = Some(training_data.into());
        self
    }

    pub fn test_data(mut self, test_data: impl Into<Bytes>) -> Self {
        self.test_data = Some(test_data.into());
        self
    }

    pub fn build(self) -> Result<UpdateDocumentClassifierOptions> {
        Ok(UpdateDocumentClassifierOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            classifier_id: validate::not_empty(self.classifier_id, "classifier_id")?,
            classifier: validate::not_null(self.classifier, "classifier")?,
            training_data: self.training_data,
            test_data: self.test_data,
        })
    }
}

#[skip_serializing_none]
#[derive(Serialize)]
struct ModelBody<'a> {
    name: &'a str,
    description: Option<&'a str>,
    learning_rate: Option<f64>,
    l1_regularization_strengths: Option<&'a [f64]>,
    l2_regularization_strengths: Option<&'a [f64]>,
    training_max_steps: Option<i64>,
    improvement_ratio: Option<f64>,
}

/// Train a new model of a document classifier
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDocumentClassifierModelOptions {
    project_id: String,
    classifier_id: String,
    name: String,
    description: Option<String>,
    learning_rate: Option<f64>,
    l1_regularization_strengths: Option<Vec<f64>>,
    l2_regularization_strengths: Option<Vec<f64>>,
    training_max_steps: Option<i64>,
    improvement_ratio: Option<f64>,
}

impl CreateDocumentClassifierModelOptions {
    pub fn builder() -> CreateDocumentClassifierModelOptionsBuilder {
        CreateDocumentClassifierModelOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateDocumentClassifierModelOptionsBuilder {
        CreateDocumentClassifierModelOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            classifier_id: Some(self.classifier_id.clone()),
            name: Some(self.name.clone()),
            description: self.description.clone(),
            learning_rate: self.learning_rate,
            l1_regularization_strengths: self.l1_regularization_strengths.clone(),
            l2_regularization_strengths: self.l2_regularization_strengths.clone(),
            training_max_steps: self.training_max_steps,
            improvement_ratio: self.improvement_ratio,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn classifier_id(&self) -> &str {
        &self.classifier_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Gradient step size, 0 to 1
    pub const fn learning_rate(&self) -> Option<f64> {
        self.learning_rate
    }

    pub fn l1_regularization_strengths(&self) -> Option<&[f64]> {
        self.l1_regularization_strengths.as_deref()
    }

    pub fn l2_regularization_strengths(&self) -> Option<&[f64]> {
        self.l2_regularization_strengths.as_deref()
    }

    pub const fn training_max_steps(&self) -> Option<i64> {
        self.training_max_steps
    }

    /// Stop training once improvement falls below this ratio
    pub const fn improvement_ratio(&self) -> Option<f64> {
        self.improvement_ratio
    }
}

impl Operation for CreateDocumentClassifierModelOptions {
    fn operation_id(&self) -> &'static str {
        "create_document_classifier_model"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v2",
            "projects",
            &self.project_id,
            "document_classifiers",
            &self.classifier_id,
            "models",
        ]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&ModelBody {
            name: &self.name,
            description: self.description.as_deref(),
            learning_rate: self.learning_rate,
            l1_regularization_strengths: self.l1_regularization_strengths.as_deref(),
            l2_regularization_strengths: self.l2_regularization_strengths.as_deref(),
            training_max_steps: self.training_max_steps,
            improvement_ratio: self.improvement_ratio,
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateDocumentClassifierModelOptionsBuilder {
    project_id: Option<String>,
    classifier_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    learning_rate: Option<f64>,
    l1_regularization_strengths: Option<Vec<f64>>,
    l2_regularization_strengths: Option<Vec<f64>>,
    training_max_steps: Option<i64>,
    improvement_ratio: Option<f64>,
}

impl CreateDocumentClassifierModelOptionsBuilder {
    pub fn new(project_id: impl Into<String>, classifier_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            classifier_id: Some(classifier_id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn classifier_id(mut self, classifier_id: impl Into<String>) -> Self {
        self.classifier_id = Some(classifier_id.into());
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

    pub const fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = Some(learning_rate);
        self
    }

    pub fn l1_regularization_strengths(mut self, strengths: Vec<f64>) -> Self {
        self.l1_regularization_strengths = Some(strengths);
        self
    }

    pub fn add_l1_regularization_strength(mut self, strength: f64) -> Self {
        self.l1_regularization_strengths.get_or_insert_with(Vec::new).push(strength);
        self
    }

    pub fn l2_regularization_strengths(mut self, strengths: Vec<f64>) -> Self {
        self.l2_regularization_strengths = Some(strengths);
        self
    }

    pub fn add_l2_regularization_strength(mut self, strength: f64) -> Self {
        self.l2_regularization_strengths.get_or_insert_with(Vec::new).push(strength);
        self
    }

    pub const fn training_max_steps(mut self, training_max_steps: i64) -> Self {
        self.training_max_steps = Some(training_max_steps);
        self
    }

    pub const fn improvement_ratio(mut self, improvement_ratio: f64) -> Self {
        self.improvement_ratio = Some(improvement_ratio);
        self
    }

    pub fn build(self) -> Result<CreateDocumentClassifierModelOptions> {
        Ok(CreateDocumentClassifierModelOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            classifier_id: validate::not_empty(self.classifier_id, "classifier_id")?,
            name: validate::not_null(self.name, "name")?,
            description: self.description,
            learning_rate: self.learning_rate,
            l1_regularization_strengths: self.l1_regularization_strengths,
            l2_regularization_strengths: self.l2_regularization_strengths,
            training_max_steps: self.training_max_steps,
            improvement_ratio: self.improvement_ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::v2::model::{CreateDocumentClassifierBuilder, DocumentClassifierEnrichment};

    const TRAINING_CSV: &[u8] = b"text,label\n\"printer jams\",hardware\n";

    fn classifier() -> CreateDocumentClassifier {
        CreateDocumentClassifierBuilder::new("tickets", "en", "label")
            .add_enrichment(DocumentClassifierEnrichment::new("e-1", vec!["text".to_owned()]))
            .build()
            .unwrap()
    }

    #[test]
    fn create_requires_training_data_and_classifier() {
        let err = CreateDocumentClassifierOptions::builder()
            .project_id("p")
            .classifier(classifier())
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "training_data cannot be null");

        let err = CreateDocumentClassifierOptions::builder()
            .project_id("p")
            .training_data(TRAINING_CSV)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "classifier cannot be null");
    }

    #[test]
    fn create_form_parts() {
        let options = CreateDocumentClassifierOptionsBuilder::new("p", TRAINING_CSV, classifier())
            .test_data(TRAINING_CSV)
            .build()
            .unwrap();

        assert_eq!(options.training_data().as_ref(), TRAINING_CSV);
        assert_eq!(options.classifier(), &classifier());
        assert!(options.test_data().is_some());
        assert_eq!(options.to_builder().build().unwrap(), options);
        assert_eq!(options.path_segments(), ["v2", "projects", "p", "document_classifiers"]);

        let payload = options.payload().unwrap();
        let names: Vec<_> = payload.parts().unwrap().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["training_data", "classifier", "test_data"]);

        let classifier_part = &payload.parts().unwrap()[1];
        let sent: serde_json::Value = serde_json::from_slice(&classifier_part.data).unwrap();
        assert_eq!(sent["answer_field"], "label");
        assert_eq!(payload.parts().unwrap()[0].content_type.as_deref(), Some(TEXT_CSV));
    }

    #[test]
    fn update_sends_classifier_first() {
        let err = UpdateDocumentClassifierOptions::builder()
            .project_id("p")
            .classifier_id("cl")
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "classifier cannot be null");

        let update = UpdateDocumentClassifier {
            name: Some("renamed".to_owned()),
            description: None,
        };
        let options = UpdateDocumentClassifierOptionsBuilder::new("p", "cl", update.clone())
            .training_data(TRAINING_CSV)
            .build()
            .unwrap();

        assert_eq!(options.classifier(), &update);
        assert_eq!(options.classifier_id(), "cl");
        assert!(options.test_data().is_none());
        assert_eq!(options.method(), Method::POST);

        let payload = options.payload().unwrap();
        let parts = payload.parts().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text_value(), Some(r#"{"name":"renamed"}"#));
    }

    #[test]
    fn model_body() {
        let err = CreateDocumentClassifierModelOptions::builder()
            .project_id("p")
            .classifier_id("cl")
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "name cannot be null");

        let options = CreateDocumentClassifierModelOptionsBuilder::new("p", "cl", "v1")
            .description("first model")
            .learning_rate(0.1)
            .add_l1_regularization_strength(1.0e-4)
            .add_l2_regularization_strength(1.0e-4)
            .training_max_steps(10_000)
            .improvement_ratio(1.0e-6)
            .build()
            .unwrap();

        assert_eq!(options.name(), "v1");
        assert_eq!(options.learning_rate(), Some(0.1));
        assert_eq!(options.training_max_steps(), Some(10_000));
        assert_eq!(options.to_builder().build().unwrap(), options);
        assert_eq!(options.path_segments().last(), Some(&"models"));
        assert_eq!(
            options.payload().unwrap().as_json(),
            Some(&json!({
                "name": "v1",
                "description": "first model",
                "learning_rate": 0.1,
                "l1_regularization_strengths": [0.0001],
                "l2_regularization_strengths": [0.0001],
                "training_max_steps": 10000,
                "improvement_ratio": 0.000_001
            }))
        );
    }
}
