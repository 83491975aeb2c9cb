use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Result, string_constants, validate};

use super::{Enrichment, Notice, Source};

/// A configuration describing how documents are converted, enriched and
/// normalized before they are indexed
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    configuration_id: Option<String>,
    name: String,
    created: Option<Timestamp>,
    updated: Option<Timestamp>,
    description: Option<String>,
    conversions: Option<Conversions>,
    enrichments: Option<Vec<Enrichment>>,
    normalizations: Option<Vec<NormalizationOperation>>,
    source: Option<Source>,
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Builder seeded with this configuration's values
    pub fn to_builder(&self) -> ConfigurationBuilder {
        ConfigurationBuilder {
            configuration_id: self.configuration_id.clone(),
            name: Some(self.name.clone()),
            created: self.created,
            updated: self.updated,
            description: self.description.clone(),
            conversions: self.conversions.clone(),
            enrichments: self.enrichments.clone(),
            normalizations: self.normalizations.clone(),
            source: self.source.clone(),
        }
    }

    /// Identifier assigned by the service
    pub fn configuration_id(&self) -> Option<&str> {
        self.configuration_id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn created(&self) -> Option<Timestamp> {
        self.created
    }

    pub const fn updated(&self) -> Option<Timestamp> {
        self.updated
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Document conversion settings
    pub const fn conversions(&self) -> Option<&Conversions> {
        self.conversions.as_ref()
    }

    /// Enrichment steps, applied in order
    pub fn enrichments(&self) -> Option<&[Enrichment]> {
        self.enrichments.as_deref()
    }

    /// Normalizations applied after enrichment
    pub fn normalizations(&self) -> Option<&[NormalizationOperation]> {
        self.normalizations.as_deref()
    }

    /// Connected source to crawl
    pub const fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ConfigurationBuilder {
    configuration_id: Option<String>,
    name: Option<String>,
    created: Option<Timestamp>,
    updated: Option<Timestamp>,
    description: Option<String>,
    conversions: Option<Conversions>,
    enrichments: Option<Vec<Enrichment>>,
    normalizations: Option<Vec<NormalizationOperation>>,
    source: Option<Source>,
}

impl ConfigurationBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn configuration_id(mut self, configuration_id: impl Into<String>) -> Self {
        self.configuration_id = Some(configuration_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub const fn created(mut self, created: Timestamp) -> Self {
        self.created = Some(created);
        self
    }

    pub const fn updated(mut self, updated: Timestamp) -> Self {
        self.updated = Some(updated);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn conversions(mut self, conversions: Conversions) -> Self {
        self.conversions = Some(conversions);
        self
    }

    pub fn enrichments(mut self, enrichments: Vec<Enrichment>) -> Self {
        self.enrichments = Some(enrichments);
        self
    }

    /// Append one enrichment
    pub fn add_enrichment(mut self, enrichment: Enrichment) -> Self {
        self.enrichments.get_or_insert_with(Vec::new).push(enrichment);
        self
    }

    pub fn normalizations(mut self, normalizations: Vec<NormalizationOperation>) -> Self {
        self.normalizations = Some(normalizations);
        self
    }

    /// Append one normalization
    pub fn add_normalization(mut self, normalization: NormalizationOperation) -> Self {
        self.normalizations.get_or_insert_with(Vec::new).push(normalization);
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(self) -> Result<Configuration> {
        Ok(Configuration {
            configuration_id: self.configuration_id,
            name: validate::not_null(self.name, "name")?,
            created: self.created,
            updated: self.updated,
            description: self.description,
            conversions: self.conversions,
            enrichments: self.enrichments,
            normalizations: self.normalizations,
            source: self.source,
        })
    }
}

// -- Conversion settings --

/// Document conversion settings
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversions {
    /// PDF conversion settings
    pub pdf: Option<PdfSettings>,
    /// Microsoft Word conversion settings
    pub word: Option<WordSettings>,
    /// HTML conversion settings
    pub html: Option<HtmlSettings>,
    /// Settings for splitting documents into segments
    pub segment: Option<SegmentSettings>,
    /// Normalizations applied to JSON input or converted output
    pub json_normalizations: Option<Vec<NormalizationOperation>>,
    /// Run optical character recognition on embedded images
    pub image_text_recognition: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfSettings {
    pub heading: Option<PdfHeadingDetection>,
}

/// Font settings used to detect headings in PDF documents
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfHeadingDetection {
    pub fonts: Option<Vec<FontSetting>>,
}

/// Font attributes that map text to a heading level
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSetting {
    /// HTML heading level (`h1` is 1)
    pub level: Option<i64>,
    /// Smallest font size in points
    pub min_size: Option<i64>,
    /// Largest font size in points
    pub max_size: Option<i64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    /// Font name
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSettings {
    pub heading: Option<WordHeadingDetection>,
}

/// Font and style settings used to detect headings in Word documents
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordHeadingDetection {
    pub fonts: Option<Vec<FontSetting>>,
    pub styles: Option<Vec<WordStyle>>,
}

/// Word style names that map to a heading level
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStyle {
    pub level: Option<i64>,
    pub names: Option<Vec<String>>,
}

/// HTML conversion settings
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlSettings {
    /// Tags removed together with their content
    pub exclude_tags_completely: Option<Vec<String>>,
    /// Tags removed while their content is kept
    pub exclude_tags_keep_content: Option<Vec<String>>,
    pub keep_content: Option<XPathPatterns>,
    pub exclude_content: Option<XPathPatterns>,
    pub keep_tag_attributes: Option<Vec<String>>,
    pub exclude_tag_attributes: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XPathPatterns {
    pub xpaths: Option<Vec<String>>,
}

/// Settings for splitting documents at headings or selected tags
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSettings {
    pub enabled: Option<bool>,
    /// Heading tags that start a new segment
    pub selector_tags: Option<Vec<String>>,
    /// Custom fields that start a new segment
    pub annotated_fields: Option<Vec<String>>,
}

// -- Normalization --

/// A field operation applied during normalization
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOperation {
    /// One of [`NormalizationOperationKind`]
    pub operation: Option<String>,
    pub source_field: Option<String>,
    pub destination_field: Option<String>,
}

/// Operations available in a [`NormalizationOperation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NormalizationOperationKind {
    /// Copy the source field, overwriting the destination
    Copy,
    /// Rename the source field to the destination
    Move,
    /// Merge the source field into the destination as an array
    Merge,
    /// Delete the source field
    Remove,
    /// Delete every empty field
    RemoveNulls,
}

string_constants!(NormalizationOperationKind);

/// Response of `ListConfigurationsOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListConfigurationsResponse {
    pub configurations: Option<Vec<Configuration>>,
}

/// Response of `DeleteConfigurationOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfigurationResponse {
    pub configuration_id: Option<String>,
    /// Always `deleted`
    pub status: Option<String>,
    /// Collections still referencing the configuration
    pub notices: Option<Vec<Notice>>,
}
