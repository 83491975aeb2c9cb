use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Result, string_constants, validate};

/// An enrichment step applied to one field of every ingested document
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    description: Option<String>,
    destination_field: String,
    source_field: String,
    overwrite: Option<bool>,
    enrichment: String,
    ignore_downstream_errors: Option<bool>,
    options: Option<EnrichmentOptions>,
}

impl Enrichment {
    pub fn builder() -> EnrichmentBuilder {
        EnrichmentBuilder::default()
    }

    pub fn to_builder(&self) -> EnrichmentBuilder {
        EnrichmentBuilder {
            description: self.description.clone(),
            destination_field: Some(self.destination_field.clone()),
            source_field: Some(self.source_field.clone()),
            overwrite: self.overwrite,
            enrichment: Some(self.enrichment.clone()),
            ignore_downstream_errors: self.ignore_downstream_errors,
            options: self.options.clone(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Field the enrichment output is written to
    pub fn destination_field(&self) -> &str {
        &self.destination_field
    }

    /// Field whose text is enriched
    pub fn source_field(&self) -> &str {
        &self.source_field
    }

    pub const fn overwrite(&self) -> Option<bool> {
        self.overwrite
    }

    /// Enrichment name, e.g. `natural_language_understanding` or `elements`
    pub fn enrichment(&self) -> &str {
        &self.enrichment
    }

    pub const fn ignore_downstream_errors(&self) -> Option<bool> {
        self.ignore_downstream_errors
    }

    pub const fn options(&self) -> Option<&EnrichmentOptions> {
        self.options.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct EnrichmentBuilder {
    description: Option<String>,
    destination_field: Option<String>,
    source_field: Option<String>,
    overwrite: Option<bool>,
    enrichment: Option<String>,
    ignore_downstream_errors: Option<bool>,
    options: Option<EnrichmentOptions>,
}

impl EnrichmentBuilder {
    pub fn new(
        destination_field: impl Into<String>,
        source_field: impl Into<String>,
        enrichment: impl Into<String>,
    ) -> Self {
        Self {
            destination_field: Some(destination_field.into()),
            source_field: Some(source_field.into()),
            enrichment: Some(enrichment.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destination_field(mut self, destination_field: impl Into<String>) -> Self {
        self.destination_field = Some(destination_field.into());
        self
    }

    pub fn source_field(mut self, source_field: impl Into<String>) -> Self {
        self.source_field = Some(source_field.into());
        self
    }

    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    pub fn enrichment(mut self, enrichment: impl Into<String>) -> Self {
        self.enrichment = Some(enrichment.into());
        self
    }

    pub const fn ignore_downstream_errors(mut self, ignore: bool) -> Self {
        self.ignore_downstream_errors = Some(ignore);
        self
    }

    pub fn options(mut self, options: EnrichmentOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn build(self) -> Result<Enrichment> {
        Ok(Enrichment {
            description: self.description,
            destination_field: validate::not_null(self.destination_field, "destination_field")?,
            source_field: validate::not_null(self.source_field, "source_field")?,
            overwrite: self.overwrite,
            enrichment: validate::not_null(self.enrichment, "enrichment")?,
            ignore_downstream_errors: self.ignore_downstream_errors,
            options: self.options,
        })
    }
}

/// Options for an [`Enrichment`]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentOptions {
    /// Natural Language Understanding features to extract
    pub features: Option<NluEnrichmentFeatures>,
    /// ISO 639-1 code of the source text; one of [`EnrichmentLanguage`]
    pub language: Option<String>,
    /// Model id for the `elements` enrichment
    pub model: Option<String>,
}

/// Languages accepted by [`EnrichmentOptions::language`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum EnrichmentLanguage {
    Ar,
    En,
    Es,
    De,
    Fr,
    It,
    Ja,
    Ko,
    Pt,
    Zh,
}

string_constants!(EnrichmentLanguage);

/// Natural Language Understanding features extracted by an enrichment
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NluEnrichmentFeatures {
    pub keywords: Option<NluEnrichmentKeywords>,
    pub entities: Option<NluEnrichmentEntities>,
    pub sentiment: Option<NluEnrichmentSentiment>,
    pub emotion: Option<NluEnrichmentEmotion>,
    /// Categories take no options; the service expects an empty object
    pub categories: Option<BTreeMap<String, Value>>,
    pub semantic_roles: Option<NluEnrichmentSemanticRoles>,
    pub relations: Option<NluEnrichmentRelations>,
    pub concepts: Option<NluEnrichmentConcepts>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NluEnrichmentKeywords {
    pub sentiment: Option<bool>,
    pub emotion: Option<bool>,
    pub limit: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NluEnrichmentEntities {
    pub sentiment: Option<bool>,
    pub emotion: Option<bool>,
    pub limit: Option<i64>,
    /// Return entity mentions
    pub mentions: Option<bool>,
    /// Return the types of entity mentions
    pub mention_types: Option<bool>,
    /// Return sentence locations of entity mentions
    pub sentence_locations: Option<bool>,
    /// Custom entity model id
    pub model: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NluEnrichmentSentiment {
    pub document: Option<bool>,
    pub targets: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NluEnrichmentEmotion {
    pub document: Option<bool>,
    pub targets: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NluEnrichmentSemanticRoles {
    pub entities: Option<bool>,
    pub keywords: Option<bool>,
    pub limit: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NluEnrichmentRelations {
    pub model: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NluEnrichmentConcepts {
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use watson_core::{JsonModel, constants::literals};

    use super::*;

    fn features() -> NluEnrichmentFeatures {
        NluEnrichmentFeatures {
            keywords: Some(NluEnrichmentKeywords {
                sentiment: Some(true),
                emotion: Some(false),
                limit: Some(50),
            }),
            entities: Some(NluEnrichmentEntities {
                mentions: Some(true),
                model: Some("WKS-model-id".to_owned()),
                ..NluEnrichmentEntities::default()
            }),
            sentiment: Some(NluEnrichmentSentiment {
                document: Some(true),
                targets: Some(vec!["IBM".to_owned()]),
            }),
            categories: Some(BTreeMap::new()),
            semantic_roles: Some(NluEnrichmentSemanticRoles {
                entities: Some(true),
                keywords: Some(true),
                limit: Some(50),
            }),
            relations: Some(NluEnrichmentRelations { model: None }),
            concepts: Some(NluEnrichmentConcepts { limit: Some(8) }),
            emotion: None,
        }
    }

    #[test]
    fn build_requires_fields() {
        let err = Enrichment::builder().source_field("text").enrichment("elements").build().unwrap_err();
        assert_eq!(err.to_string(), "destination_field cannot be null");

        let err = Enrichment::builder().destination_field("out").enrichment("elements").build().unwrap_err();
        assert_eq!(err.to_string(), "source_field cannot be null");

        let err = Enrichment::builder().destination_field("out").source_field("text").build().unwrap_err();
        assert_eq!(err.to_string(), "enrichment cannot be null");
    }

    #[test]
    fn build_preserves_fields() {
        let options = EnrichmentOptions {
            features: Some(features()),
            language: Some(EnrichmentLanguage::En.into()),
            model: None,
        };

        let enrichment = EnrichmentBuilder::new("enriched_text", "text", "natural_language_understanding")
            .description("NLU on text")
            .overwrite(false)
            .ignore_downstream_errors(true)
            .options(options.clone())
            .build()
            .unwrap();

        assert_eq!(enrichment.destination_field(), "enriched_text");
        assert_eq!(enrichment.source_field(), "text");
        assert_eq!(enrichment.enrichment(), "natural_language_understanding");
        assert_eq!(enrichment.description(), Some("NLU on text"));
        assert_eq!(enrichment.overwrite(), Some(false));
        assert_eq!(enrichment.ignore_downstream_errors(), Some(true));
        assert_eq!(enrichment.options(), Some(&options));
        assert_eq!(enrichment.to_builder().build().unwrap(), enrichment);
    }

    #[test]
    fn json_round_trip() {
        let enrichment = EnrichmentBuilder::new("enriched_text", "text", "natural_language_understanding")
            .options(EnrichmentOptions {
                features: Some(features()),
                ..EnrichmentOptions::default()
            })
            .build()
            .unwrap();

        let value = enrichment.to_json_value().unwrap();
        assert_eq!(value["options"]["features"]["categories"], serde_json::json!({}));
        assert!(value["options"]["features"].get("emotion").is_none());

        assert_eq!(Enrichment::from_json_value(value).unwrap(), enrichment);
    }

    #[test]
    fn languages() {
        assert_eq!(
            literals::<EnrichmentLanguage>(),
            ["ar", "en", "es", "de", "fr", "it", "ja", "ko", "pt", "zh"]
        );
    }
}
