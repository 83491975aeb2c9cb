use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use watson_core::{Operation, Payload, Result, validate};

use crate::v2::model::TrainingExample;

#[skip_serializing_none]
#[derive(Serialize)]
struct TrainingQueryBody<'a> {
    natural_language_query: &'a str,
    examples: &'a [TrainingExample],
    filter: Option<&'a str>,
}

/// Replace a training query and its examples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTrainingQueryOptions {
    project_id: String,
    query_id: String,
    natural_language_query: String,
    examples: Vec<TrainingExample>,
    filter: Option<String>,
}

impl UpdateTrainingQueryOptions {
    pub fn builder() -> UpdateTrainingQueryOptionsBuilder {
        UpdateTrainingQueryOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateTrainingQueryOptionsBuilder {
        UpdateTrainingQueryOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            query_id: Some(self.query_id.clone()),
            natural_language_query: Some(self.natural_language_query.clone()),
            examples: Some(self.examples.clone()),
            filter: self.filter.clone(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    pub fn natural_language_query(&self) -> &str {
        &self.natural_language_query
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl Operation for UpdateTrainingQueryOptions {
    fn operation_id(&self) -> &'static str {
        "update_training_query"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v2",
            "projects",
            &self.project_id,
            "training_data",
            "queries",
            &self.query_id,
        ]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&TrainingQueryBody {
            natural_language_query: &self.natural_language_query,
            examples: &self.examples,
            filter: self.filter.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct UpdateTrainingQueryOptionsBuilder {
    project_id: Option<String>,
    query_id: Option<String>,
    natural_language_query: Option<String>,
    examples: Option<Vec<TrainingExample>>,
    filter: Option<String>,
}

impl UpdateTrainingQueryOptionsBuilder {
    pub fn new(
        project_id: impl Into<String>,
        query_id: impl Into<String>,
        natural_language_query: impl Into<String>,
        examples: Vec<TrainingExample>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            query_id: Some(query_id.into()),
            natural_language_query: Some(natural_language_query.into()),
            examples: Some(examples),
            filter: None,
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn query_id(mut self, query_id: impl Into<String>) -> Self {
        self.query_id = Some(query_id.into());
        self
    }

    pub fn natural_language_query(mut self, natural_language_query: impl Into<String>) -> Self {
        self.natural_language_query = Some(natural_language_query.into());
        self
    }

    pub fn examples(mut self, examples: Vec<TrainingExample>) -> Self {
        self.examples = Some(examples);
        self
    }

    pub fn add_example(mut self, example: TrainingExample) -> Self {
        self.examples.get_or_insert_with(Vec::new).push(example);
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn build(self) -> Result<UpdateTrainingQueryOptions> {
        Ok(UpdateTrainingQueryOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            query_id: validate::not_empty(self.query_id, "query_id")?,
            natural_language_query: validate::not_null(self.natural_language_query, "natural_language_query")?,
            examples: validate::not_null(self.examples, "examples")?,
            filter: self.filter,
        })
    }
}
