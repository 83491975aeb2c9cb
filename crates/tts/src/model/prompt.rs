use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Result, string_constants, validate};

/// Processing state of a custom prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PromptStatus {
    Processing,
    Available,
    Failed,
}

string_constants!(PromptStatus);

/// A custom prompt stored with a custom model
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Text the prompt speaks
    pub prompt: Option<String>,
    pub prompt_id: Option<String>,
    /// One of [`PromptStatus`]
    pub status: Option<String>,
    pub error: Option<String>,
    pub speaker_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompts {
    pub prompts: Option<Vec<Prompt>>,
}

/// Metadata sent alongside a prompt recording
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMetadata {
    prompt_text: String,
    speaker_id: Option<String>,
}

impl PromptMetadata {
    pub fn builder() -> PromptMetadataBuilder {
        PromptMetadataBuilder::default()
    }

    pub fn to_builder(&self) -> PromptMetadataBuilder {
        PromptMetadataBuilder {
            prompt_text: Some(self.prompt_text.clone()),
            speaker_id: self.speaker_id.clone(),
        }
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn speaker_id(&self) -> Option<&str> {
        self.speaker_id.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct PromptMetadataBuilder {
    prompt_text: Option<String>,
    speaker_id: Option<String>,
}

impl PromptMetadataBuilder {
    pub fn new(prompt_text: impl Into<String>) -> Self {
        Self {
            prompt_text: Some(prompt_text.into()),
            speaker_id: None,
        }
    }

    pub fn prompt_text(mut self, prompt_text: impl Into<String>) -> Self {
        self.prompt_text = Some(prompt_text.into());
        self
    }

    pub fn speaker_id(mut self, speaker_id: impl Into<String>) -> Self {
        self.speaker_id = Some(speaker_id.into());
        self
    }

    pub fn build(self) -> Result<PromptMetadata> {
        Ok(PromptMetadata {
            prompt_text: validate::not_null(self.prompt_text, "prompt_text")?,
            speaker_id: self.speaker_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use watson_core::{JsonModel, constants::literals};

    use super::*;

    #[test]
    fn metadata_requires_prompt_text() {
        let err = PromptMetadata::builder().speaker_id("spk").build().unwrap_err();
        assert_eq!(err.to_string(), "prompt_text cannot be null");
    }

    #[test]
    fn metadata_serializes_set_fields() {
        let metadata = PromptMetadataBuilder::new("Thank you and good-bye!").build().unwrap();
        assert_eq!(
            metadata.to_json_value().unwrap(),
            json!({ "prompt_text": "Thank you and good-bye!" })
        );

        let metadata = metadata.to_builder().speaker_id("spk").build().unwrap();
        assert_eq!(metadata.speaker_id(), Some("spk"));
        assert_eq!(PromptMetadata::from_json(&metadata.to_json().unwrap()).unwrap(), metadata);
    }

    #[test]
    fn reads_failed_prompt() {
        let prompts = Prompts::from_json_value(json!({
            "prompts": [{ "prompt": "Hello", "prompt_id": "greeting", "status": "failed", "error": "bad audio" }]
        }))
        .unwrap();

        let prompt = &prompts.prompts.as_deref().unwrap()[0];
        assert_eq!(prompt.status.as_deref(), Some(PromptStatus::Failed.as_ref()));
        assert_eq!(prompt.error.as_deref(), Some("bad audio"));
        assert_eq!(prompt.speaker_id, None);
    }

    #[test]
    fn status_literals() {
        assert_eq!(literals::<PromptStatus>(), ["processing", "available", "failed"]);
    }
}
