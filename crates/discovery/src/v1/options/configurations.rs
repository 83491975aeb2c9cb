use bytes::Bytes;
use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{FormPart, Operation, Params, Payload, Result, string_constants, validate};

use crate::v1::model::{Configuration, Conversions, Enrichment, NormalizationOperation, Source};

#[skip_serializing_none]
#[derive(Serialize)]
struct ConfigurationBody<'a> {
    name: &'a str,
    description: Option<&'a str>,
    conversions: Option<&'a Conversions>,
    enrichments: Option<&'a [Enrichment]>,
    normalizations: Option<&'a [NormalizationOperation]>,
    source: Option<&'a Source>,
}

/// Fields shared by the create and update configuration builders
#[derive(Debug, Clone, Default, PartialEq)]
struct ConfigurationFields {
    name: Option<String>,
    description: Option<String>,
    conversions: Option<Conversions>,
    enrichments: Option<Vec<Enrichment>>,
    normalizations: Option<Vec<NormalizationOperation>>,
    source: Option<Source>,
}

impl ConfigurationFields {
    fn copy_from(&mut self, configuration: &Configuration) {
        self.name = Some(configuration.name().to_owned());
        self.description = configuration.description().map(ToOwned::to_owned);
        self.conversions = configuration.conversions().cloned();
        self.enrichments = configuration.enrichments().map(<[Enrichment]>::to_vec);
        self.normalizations = configuration.normalizations().map(<[NormalizationOperation]>::to_vec);
        self.source = configuration.source().cloned();
    }
}

/// Create a configuration in an environment
#[derive(Debug, Clone, PartialEq)]
pub struct CreateConfigurationOptions {
    environment_id: String,
    name: String,
    description: Option<String>,
    conversions: Option<Conversions>,
    enrichments: Option<Vec<Enrichment>>,
    normalizations: Option<Vec<NormalizationOperation>>,
    source: Option<Source>,
}

impl CreateConfigurationOptions {
    pub fn builder() -> CreateConfigurationOptionsBuilder {
        CreateConfigurationOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateConfigurationOptionsBuilder {
        CreateConfigurationOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            fields: ConfigurationFields {
                name: Some(self.name.clone()),
                description: self.description.clone(),
                conversions: self.conversions.clone(),
                enrichments: self.enrichments.clone(),
                normalizations: self.normalizations.clone(),
                source: self.source.clone(),
            },
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub const fn conversions(&self) -> Option<&Conversions> {
        self.conversions.as_ref()
    }

    pub fn enrichments(&self) -> Option<&[Enrichment]> {
        self.enrichments.as_deref()
    }

    pub fn normalizations(&self) -> Option<&[NormalizationOperation]> {
        self.normalizations.as_deref()
    }

    pub const fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    fn body(&self) -> ConfigurationBody<'_> {
        ConfigurationBody {
            name: &self.name,
            description: self.description.as_deref(),
            conversions: self.conversions.as_ref(),
            enrichments: self.enrichments.as_deref(),
            normalizations: self.normalizations.as_deref(),
            source: self.source.as_ref(),
        }
    }
}

impl Operation for CreateConfigurationOptions {
    fn operation_id(&self) -> &'static str {
        "create_configuration"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "environments", &self.environment_id, "configurations"]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&self.body())
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateConfigurationOptionsBuilder {
    environment_id: Option<String>,
    fields: ConfigurationFields,
}

impl CreateConfigurationOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            fields: ConfigurationFields {
                name: Some(name.into()),
                ..ConfigurationFields::default()
            },
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.fields.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.fields.description = Some(description.into());
        self
    }

    pub fn conversions(mut self, conversions: Conversions) -> Self {
        self.fields.conversions = Some(conversions);
        self
    }

    pub fn enrichments(mut self, enrichments: Vec<Enrichment>) -> Self {
        self.fields.enrichments = Some(enrichments);
        self
    }

    pub fn add_enrichment(mut self, enrichment: Enrichment) -> Self {
        self.fields.enrichments.get_or_insert_with(Vec::new).push(enrichment);
        self
    }

    pub fn normalizations(mut self, normalizations: Vec<NormalizationOperation>) -> Self {
        self.fields.normalizations = Some(normalizations);
        self
    }

    pub fn add_normalization(mut self, normalization: NormalizationOperation) -> Self {
        self.fields.normalizations.get_or_insert_with(Vec::new).push(normalization);
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.fields.source = Some(source);
        self
    }

    /// Copy name, description, conversions, enrichments, normalizations and
    /// source from an existing configuration
    pub fn configuration(mut self, configuration: &Configuration) -> Self {
        self.fields.copy_from(configuration);
        self
    }

    pub fn build(self) -> Result<CreateConfigurationOptions> {
        Ok(CreateConfigurationOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            name: validate::not_null(self.fields.name, "name")?,
            description: self.fields.description,
            conversions: self.fields.conversions,
            enrichments: self.fields.enrichments,
            normalizations: self.fields.normalizations,
            source: self.fields.source,
        })
    }
}

/// Replace an existing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateConfigurationOptions {
    environment_id: String,
    configuration_id: String,
    name: String,
    description: Option<String>,
    conversions: Option<Conversions>,
    enrichments: Option<Vec<Enrichment>>,
    normalizations: Option<Vec<NormalizationOperation>>,
    source: Option<Source>,
}

impl UpdateConfigurationOptions {
    pub fn builder() -> UpdateConfigurationOptionsBuilder {
        UpdateConfigurationOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateConfigurationOptionsBuilder {
        UpdateConfigurationOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            configuration_id: Some(self.configuration_id.clone()),
            fields: ConfigurationFields {
                name: Some(self.name.clone()),
                description: self.description.clone(),
                conversions: self.conversions.clone(),
                enrichments: self.enrichments.clone(),
                normalizations: self.normalizations.clone(),
                source: self.source.clone(),
            },
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn configuration_id(&self) -> &str {
        &self.configuration_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub const fn conversions(&self) -> Option<&Conversions> {
        self.conversions.as_ref()
    }

    pub fn enrichments(&self) -> Option<&[Enrichment]> {
        self.enrichments.as_deref()
    }

    pub fn normalizations(&self) -> Option<&[NormalizationOperation]> {
        self.normalizations.as_deref()
    }

    pub const fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    fn body(&self) -> ConfigurationBody<'_> {
        ConfigurationBody {
            name: &self.name,
            description: self.description.as_deref(),
            conversions: self.conversions.as_ref(),
            enrichments: self.enrichments.as_deref(),
            normalizations: self.normalizations.as_deref(),
            source: self.source.as_ref(),
        }
    }
}

impl Operation for UpdateConfigurationOptions {
    fn operation_id(&self) -> &'static str {
        "update_configuration"
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "configurations",
            &self.configuration_id,
        ]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&self.body())
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct UpdateConfigurationOptionsBuilder {
    environment_id: Option<String>,
    configuration_id: Option<String>,
    fields: ConfigurationFields,
}

impl UpdateConfigurationOptionsBuilder {
    pub fn new(
        environment_id: impl Into<String>,
        configuration_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            configuration_id: Some(configuration_id.into()),
            fields: ConfigurationFields {
                name: Some(name.into()),
                ..ConfigurationFields::default()
            },
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.fields.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.fields.description = Some(description.into());
        self
    }

    pub fn conversions(mut self, conversions: Conversions) -> Self {
        self.fields.conversions = Some(conversions);
        self
    }

    pub fn enrichments(mut self, enrichments: Vec<Enrichment>) -> Self {
        self.fields.enrichments = Some(enrichments);
        self
    }

    pub fn add_enrichment(mut self, enrichment: Enrichment) -> Self {
        self.fields.enrichments.get_or_insert_with(Vec::new).push(enrichment);
        self
    }

    pub fn normalizations(mut self, normalizations: Vec<NormalizationOperation>) -> Self {
        self.fields.normalizations = Some(normalizations);
        self
    }

    pub fn add_normalization(mut self, normalization: NormalizationOperation) -> Self {
        self.fields.normalizations.get_or_insert_with(Vec::new).push(normalization);
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.fields.source = Some(source);
        self
    }

    /// Copy name, description, conversions, enrichments, normalizations and
    /// source from an existing configuration; the target id is left alone
    pub fn configuration(mut self, configuration: &Configuration) -> Self {
        self.fields.copy_from(configuration);
        self
    }

    pub fn build(self) -> Result<UpdateConfigurationOptions> {
        Ok(UpdateConfigurationOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            configuration_id: validate::not_empty(self.configuration_id, "configuration_id")?,
            name: validate::not_null(self.fields.name, "name")?,
            description: self.fields.description,
            conversions: self.fields.conversions,
            enrichments: self.fields.enrichments,
            normalizations: self.fields.normalizations,
            source: self.fields.source,
        })
    }
}

/// Fetch one configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetConfigurationOptions {
    environment_id: String,
    configuration_id: String,
}

impl GetConfigurationOptions {
    pub fn builder() -> GetConfigurationOptionsBuilder {
        GetConfigurationOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> GetConfigurationOptionsBuilder {
        GetConfigurationOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            configuration_id: Some(self.configuration_id.clone()),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn configuration_id(&self) -> &str {
        &self.configuration_id
    }
}

impl Operation for GetConfigurationOptions {
    fn operation_id(&self) -> &'static str {
        "get_configuration"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "configurations",
            &self.configuration_id,
        ]
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct GetConfigurationOptionsBuilder {
    environment_id: Option<String>,
    configuration_id: Option<String>,
}

impl GetConfigurationOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, configuration_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            configuration_id: Some(configuration_id.into()),
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    pub fn build(self) -> Result<GetConfigurationOptions> {
        Ok(GetConfigurationOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            configuration_id: validate::not_empty(self.configuration_id, "configuration_id")?,
        })
    }
}

/// Delete a configuration
///
/// Collections still using it keep working with the deleted settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfigurationOptions {
    environment_id: String,
    configuration_id: String,
}

impl DeleteConfigurationOptions {
    pub fn builder() -> DeleteConfigurationOptionsBuilder {
        DeleteConfigurationOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> DeleteConfigurationOptionsBuilder {
        DeleteConfigurationOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            configuration_id: Some(self.configuration_id.clone()),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn configuration_id(&self) -> &str {
        &self.configuration_id
    }
}

impl Operation for DeleteConfigurationOptions {
    fn operation_id(&self) -> &'static str {
        "delete_configuration"
    }

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "configurations",
            &self.configuration_id,
        ]
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct DeleteConfigurationOptionsBuilder {
    environment_id: Option<String>,
    configuration_id: Option<String>,
}

impl DeleteConfigurationOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, configuration_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            configuration_id: Some(configuration_id.into()),
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    pub fn build(self) -> Result<DeleteConfigurationOptions> {
        Ok(DeleteConfigurationOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            configuration_id: validate::not_empty(self.configuration_id, "configuration_id")?,
        })
    }
}

/// List the configurations of an environment, optionally by exact name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfigurationsOptions {
    environment_id: String,
    name: Option<String>,
}

impl ListConfigurationsOptions {
    pub fn builder() -> ListConfigurationsOptionsBuilder {
        ListConfigurationsOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> ListConfigurationsOptionsBuilder {
        ListConfigurationsOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            name: self.name.clone(),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Operation for ListConfigurationsOptions {
    fn operation_id(&self) -> &'static str {
        "list_configurations"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "environments", &self.environment_id, "configurations"]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query.push_opt("name", self.name.as_deref());
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ListConfigurationsOptionsBuilder {
    environment_id: Option<String>,
    name: Option<String>,
}

impl ListConfigurationsOptionsBuilder {
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            name: None,
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<ListConfigurationsOptions> {
        Ok(ListConfigurationsOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            name: self.name,
        })
    }
}

/// Processing step whose output a configuration preview returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PreviewStep {
    HtmlInput,
    HtmlOutput,
    JsonOutput,
    JsonNormalizationsOutput,
    EnrichmentsOutput,
    NormalizationsOutput,
}

string_constants!(PreviewStep);

/// Run a sample document through a configuration without indexing it
///
/// The configuration is given either inline as JSON text or by
/// `configuration_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfigurationInEnvironmentOptions {
    environment_id: String,
    configuration: Option<String>,
    file: Option<Bytes>,
    filename: Option<String>,
    file_content_type: Option<String>,
    metadata: Option<String>,
    step: Option<String>,
    configuration_id: Option<String>,
}

impl TestConfigurationInEnvironmentOptions {
    pub fn builder() -> TestConfigurationInEnvironmentOptionsBuilder {
        TestConfigurationInEnvironmentOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> TestConfigurationInEnvironmentOptionsBuilder {
        TestConfigurationInEnvironmentOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            configuration: self.configuration.clone(),
            file: self.file.clone(),
            filename: self.filename.clone(),
            file_content_type: self.file_content_type.clone(),
            metadata: self.metadata.clone(),
            step: self.step.clone(),
            configuration_id: self.configuration_id.clone(),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// Configuration as JSON text
    pub fn configuration(&self) -> Option<&str> {
        self.configuration.as_deref()
    }

    pub const fn file(&self) -> Option<&Bytes> {
        self.file.as_ref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn file_content_type(&self) -> Option<&str> {
        self.file_content_type.as_deref()
    }

    /// Document metadata as JSON text
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// One of [`PreviewStep`]
    pub fn step(&self) -> Option<&str> {
        self.step.as_deref()
    }

    pub fn configuration_id(&self) -> Option<&str> {
        self.configuration_id.as_deref()
    }
}

impl Operation for TestConfigurationInEnvironmentOptions {
    fn operation_id(&self) -> &'static str {
        "test_configuration_in_environment"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "environments", &self.environment_id, "preview"]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query
            .push_opt("step", self.step.as_deref())
            .push_opt("configuration_id", self.configuration_id.as_deref());
        query
    }

    fn payload(&self) -> Result<Payload> {
        let mut parts = Vec::new();
        if let Some(ref configuration) = self.configuration {
            parts.push(FormPart::text("configuration", configuration.as_str()));
        }
        if let Some(ref file) = self.file {
            parts.push(FormPart::file(
                "file",
                file.clone(),
                self.filename.as_deref(),
                self.file_content_type.as_deref(),
            ));
        }
        if let Some(ref metadata) = self.metadata {
            parts.push(FormPart::text("metadata", metadata.as_str()));
        }
        Ok(Payload::Multipart(parts))
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct TestConfigurationInEnvironmentOptionsBuilder {
    environment_id: Option<String>,
    configuration: Option<String>,
    file: Option<Bytes>,
    filename: Option<String>,
    file_content_type: Option<String>,
    metadata: Option<String>,
    step: Option<String>,
    configuration_id: Option<String>,
}

impl TestConfigurationInEnvironmentOptionsBuilder {
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            ..Self::default()
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    pub fn file(mut self, file: impl Into<Bytes>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn file_content_type(mut self, file_content_type: impl Into<String>) -> Self {
        self.file_content_type = Some(file_content_type.into());
        self
    }

    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.step = Some(step.into());
        self
    }

    pub fn configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    pub fn build(self) -> Result<TestConfigurationInEnvironmentOptions> {
        let environment_id = validate::not_empty(self.environment_id, "environment_id")?;
        validate::file_has_name(self.file.as_ref(), self.filename.as_deref())?;

        Ok(TestConfigurationInEnvironmentOptions {
            environment_id,
            configuration: self.configuration,
            file: self.file,
            filename: self.filename,
            file_content_type: self.file_content_type,
            metadata: self.metadata,
            step: self.step,
            configuration_id: self.configuration_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use watson_core::{JsonModel, constants::literals};

    use super::*;
    use crate::v1::model::{ConfigurationBuilder, EnrichmentBuilder, NormalizationOperationKind};

    fn configuration() -> Configuration {
        ConfigurationBuilder::new("news")
            .configuration_id("cfg-1")
            .description("default news settings")
            .conversions(Conversions {
                image_text_recognition: Some(true),
                ..Conversions::default()
            })
            .add_enrichment(
                EnrichmentBuilder::new("enriched_text", "text", "natural_language_understanding")
                    .build()
                    .unwrap(),
            )
            .add_normalization(NormalizationOperation {
                operation: Some(NormalizationOperationKind::RemoveNulls.into()),
                ..NormalizationOperation::default()
            })
            .build()
            .unwrap()
    }

    #[test]
    fn create_requires_environment_and_name() {
        let err = CreateConfigurationOptions::builder().name("news").build().unwrap_err();
        assert_eq!(err.to_string(), "environment_id cannot be empty");

        let err = CreateConfigurationOptions::builder().environment_id("").name("news").build().unwrap_err();
        assert_eq!(err.to_string(), "environment_id cannot be empty");

        let err = CreateConfigurationOptions::builder().environment_id("env").build().unwrap_err();
        assert_eq!(err.to_string(), "name cannot be null");
    }

    #[test]
    fn create_copies_configuration() {
        let source = configuration();
        let options = CreateConfigurationOptionsBuilder::default()
            .environment_id("env")
            .configuration(&source)
            .build()
            .unwrap();

        assert_eq!(options.environment_id(), "env");
        assert_eq!(options.name(), "news");
        assert_eq!(options.description(), Some("default news settings"));
        assert_eq!(options.conversions(), source.conversions());
        assert_eq!(options.enrichments(), source.enrichments());
        assert_eq!(options.normalizations(), source.normalizations());
        assert_eq!(options.source(), None);
        assert_eq!(options.to_builder().build().unwrap(), options);
    }

    #[test]
    fn create_body_omits_server_fields() {
        let options = CreateConfigurationOptionsBuilder::new("env", "placeholder")
            .configuration(&configuration())
            .build()
            .unwrap();
        let payload = options.payload().unwrap();
        let body = payload.as_json().unwrap();

        assert_eq!(body["name"], "news");
        assert!(body.get("configuration_id").is_none());
        assert!(body.get("source").is_none());
        assert_eq!(body["normalizations"][0]["operation"], "remove_nulls");
        assert_eq!(options.path_segments(), ["v1", "environments", "env", "configurations"]);
    }

    #[test]
    fn update_keeps_target_id() {
        let options = UpdateConfigurationOptionsBuilder::new("env", "cfg-2", "draft")
            .configuration(&configuration())
            .add_enrichment(EnrichmentBuilder::new("elements", "html", "elements").build().unwrap())
            .build()
            .unwrap();

        assert_eq!(options.configuration_id(), "cfg-2");
        assert_eq!(options.name(), "news");
        assert_eq!(options.enrichments().map(<[Enrichment]>::len), Some(2));
        assert_eq!(options.method(), Method::PUT);
        assert_eq!(options.path_segments().last(), Some(&"cfg-2"));

        let err = UpdateConfigurationOptions::builder()
            .environment_id("env")
            .name("news")
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "configuration_id cannot be empty");
    }

    #[test]
    fn get_and_delete_require_ids() {
        let get = GetConfigurationOptionsBuilder::new("env", "cfg").build().unwrap();
        assert_eq!(get.configuration_id(), "cfg");
        assert_eq!(get.method(), Method::GET);

        let delete = DeleteConfigurationOptions::builder()
            .environment_id("env")
            .configuration_id("cfg")
            .build()
            .unwrap();
        assert_eq!(delete.method(), Method::DELETE);
        assert_eq!(delete.to_builder().build().unwrap(), delete);

        assert!(GetConfigurationOptions::builder().environment_id("env").build().is_err());
        assert!(DeleteConfigurationOptionsBuilder::new("env", "").build().is_err());
    }

    #[test]
    fn list_sends_name_filter() {
        let options = ListConfigurationsOptionsBuilder::new("env").build().unwrap();
        assert!(options.query_params().is_empty());

        let options = options.to_builder().name("news").build().unwrap();
        assert_eq!(options.query_params().get("name"), Some("news"));
    }

    #[test]
    fn preview_requires_filename_with_file() {
        let err = TestConfigurationInEnvironmentOptionsBuilder::new("env")
            .file(&b"<html></html>"[..])
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "filename cannot be null if file is not null.");
    }

    #[test]
    fn preview_builds_form() {
        let configuration = configuration().to_json().unwrap();
        let options = TestConfigurationInEnvironmentOptionsBuilder::new("env")
            .configuration(configuration.clone())
            .file(&b"<html></html>"[..])
            .filename("page.html")
            .file_content_type("text/html")
            .metadata(r#"{"source":"web"}"#)
            .step(PreviewStep::EnrichmentsOutput)
            .configuration_id("cfg-1")
            .build()
            .unwrap();

        assert_eq!(options.configuration(), Some(configuration.as_str()));
        assert_eq!(options.file().map(Bytes::len), Some(13));
        assert_eq!(options.filename(), Some("page.html"));
        assert_eq!(options.file_content_type(), Some("text/html"));
        assert_eq!(options.metadata(), Some(r#"{"source":"web"}"#));
        assert_eq!(options.step(), Some("enrichments_output"));
        assert_eq!(options.configuration_id(), Some("cfg-1"));

        let query = options.query_params();
        assert_eq!(query.get("step"), Some("enrichments_output"));
        assert_eq!(query.get("configuration_id"), Some("cfg-1"));

        let payload = options.payload().unwrap();
        let names: Vec<_> = payload.parts().unwrap().iter().map(|part| part.name.as_str()).collect();
        assert_eq!(names, ["configuration", "file", "metadata"]);
        assert_eq!(payload.parts().unwrap()[1].content_type.as_deref(), Some("text/html"));
        assert_eq!(options.to_builder().build().unwrap(), options);
    }

    #[test]
    fn preview_steps() {
        assert_eq!(
            literals::<PreviewStep>(),
            [
                "html_input",
                "html_output",
                "json_output",
                "json_normalizations_output",
                "enrichments_output",
                "normalizations_output"
            ]
        );
    }
}
