//! Custom models, their words and their prompts

use bytes::Bytes;
use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use watson_core::{FormPart, Operation, Payload, Result, validate};

use crate::model::{PromptMetadata, Word};

#[skip_serializing_none]
#[derive(Serialize)]
struct CustomModelBody<'a> {
    name: Option<&'a str>,
    language: Option<&'a str>,
    description: Option<&'a str>,
    words: Option<&'a [Word]>,
}

/// Create an empty custom model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomModelOptions {
    name: String,
    language: Option<String>,
    description: Option<String>,
}

impl CreateCustomModelOptions {
    pub fn builder() -> CreateCustomModelOptionsBuilder {
        CreateCustomModelOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateCustomModelOptionsBuilder {
        CreateCustomModelOptionsBuilder {
            name: Some(self.name.clone()),
            language: self.language.clone(),
            description: self.description.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Language code such as `en-US`
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Operation for CreateCustomModelOptions {
    fn operation_id(&self) -> &'static str {
        "create_custom_model"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "customizations"]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&CustomModelBody {
            name: Some(&self.name),
            language: self.language.as_deref(),
            description: self.description.as_deref(),
            words: None,
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateCustomModelOptionsBuilder {
    name: Option<String>,
    language: Option<String>,
    description: Option<String>,
}

impl CreateCustomModelOptionsBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build(self) -> Result<CreateCustomModelOptions> {
        Ok(CreateCustomModelOptions {
            name: validate::not_null(self.name, "name")?,
            language: self.language,
            description: self.description,
        })
    }
}

/// Rename a custom model or add words to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomModelOptions {
    customization_id: String,
    name: Option<String>,
    description: Option<String>,
    words: Option<Vec<Word>>,
}

impl UpdateCustomModelOptions {
    pub fn builder() -> UpdateCustomModelOptionsBuilder {
        UpdateCustomModelOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateCustomModelOptionsBuilder {
        UpdateCustomModelOptionsBuilder {
            customization_id: Some(self.customization_id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            words: self.words.clone(),
        }
    }

    pub fn customization_id(&self) -> &str {
        &self.customization_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn words(&self) -> Option<&[Word]> {
        self.words.as_deref()
    }
}

impl Operation for UpdateCustomModelOptions {
    fn operation_id(&self) -> &'static str {
        "update_custom_model"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "customizations", &self.customization_id]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&CustomModelBody {
            name: self.name.as_deref(),
            language: None,
            description: self.description.as_deref(),
            words: self.words.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct UpdateCustomModelOptionsBuilder {
    customization_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    words: Option<Vec<Word>>,
}

impl UpdateCustomModelOptionsBuilder {
    pub fn new(customization_id: impl Into<String>) -> Self {
        Self {
            customization_id: Some(customization_id.into()),
            ..Self::default()
        }
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
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

    pub fn words(mut self, words: Vec<Word>) -> Self {
        self.words = Some(words);
        self
    }

    pub fn add_word(mut self, word: Word) -> Self {
        self.words.get_or_insert_with(Vec::new).push(word);
        self
    }

    pub fn build(self) -> Result<UpdateCustomModelOptions> {
        Ok(UpdateCustomModelOptions {
            customization_id: validate::not_empty(self.customization_id, "customization_id")?,
            name: self.name,
            description: self.description,
            words: self.words,
        })
    }
}

#[skip_serializing_none]
#[derive(Serialize)]
struct TranslationBody<'a> {
    translation: &'a str,
    part_of_speech: Option<&'a str>,
}

/// Add or replace a single word in a custom model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddWordOptions {
    customization_id: String,
    word: String,
    translation: String,
    part_of_speech: Option<String>,
}

impl AddWordOptions {
    pub fn builder() -> AddWordOptionsBuilder {
        AddWordOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> AddWordOptionsBuilder {
        AddWordOptionsBuilder {
            customization_id: Some(self.customization_id.clone()),
            word: Some(self.word.clone()),
            translation: Some(self.translation.clone()),
            part_of_speech: self.part_of_speech.clone(),
        }
    }

    pub fn customization_id(&self) -> &str {
        &self.customization_id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// One of [`PartOfSpeech`](crate::model::PartOfSpeech)
    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }
}

impl Operation for AddWordOptions {
    fn operation_id(&self) -> &'static str {
        "add_word"
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "customizations", &self.customization_id, "words", &self.word]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&TranslationBody {
            translation: &self.translation,
            part_of_speech: self.part_of_speech.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddWordOptionsBuilder {
    customization_id: Option<String>,
    word: Option<String>,
    translation: Option<String>,
    part_of_speech: Option<String>,
}

impl AddWordOptionsBuilder {
    pub fn new(customization_id: impl Into<String>, word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            customization_id: Some(customization_id.into()),
            word: Some(word.into()),
            translation: Some(translation.into()),
            part_of_speech: None,
        }
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
        self
    }

    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    pub fn translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = Some(part_of_speech.into());
        self
    }

    pub fn build(self) -> Result<AddWordOptions> {
        Ok(AddWordOptions {
            customization_id: validate::not_empty(self.customization_id, "customization_id")?,
            word: validate::not_empty(self.word, "word")?,
            translation: validate::not_null(self.translation, "translation")?,
            part_of_speech: self.part_of_speech,
        })
    }
}

/// Upload a recorded prompt to a custom model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCustomPromptOptions {
    customization_id: String,
    prompt_id: String,
    metadata: PromptMetadata,
    file: Bytes,
}

impl AddCustomPromptOptions {
    pub fn builder() -> AddCustomPromptOptionsBuilder {
        AddCustomPromptOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> AddCustomPromptOptionsBuilder {
        AddCustomPromptOptionsBuilder {
            customization_id: Some(self.customization_id.clone()),
            prompt_id: Some(self.prompt_id.clone()),
            metadata: Some(self.metadata.clone()),
            file: Some(self.file.clone()),
        }
    }

    pub fn customization_id(&self) -> &str {
        &self.customization_id
    }

    pub fn prompt_id(&self) -> &str {
        &self.prompt_id
    }

    pub const fn metadata(&self) -> &PromptMetadata {
        &self.metadata
    }

    /// WAV recording of the prompt
    pub const fn file(&self) -> &Bytes {
        &self.file
    }
}

impl Operation for AddCustomPromptOptions {
    fn operation_id(&self) -> &'static str {
        "add_custom_prompt"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "customizations", &self.customization_id, "prompts", &self.prompt_id]
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Multipart(vec![
            FormPart::json("metadata", &self.metadata)?,
            FormPart::file("file", self.file.clone(), Some("filename"), Some("audio/wav")),
        ]))
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddCustomPromptOptionsBuilder {
    customization_id: Option<String>,
    prompt_id: Option<String>,
    metadata: Option<PromptMetadata>,
    file: Option<Bytes>,
}

impl AddCustomPromptOptionsBuilder {
    pub fn new(
        customization_id: impl Into<String>,
        prompt_id: impl Into<String>,
        metadata: PromptMetadata,
        file: Bytes,
    ) -> Self {
        Self {
            customization_id: Some(customization_id.into()),
            prompt_id: Some(prompt_id.into()),
            metadata: Some(metadata),
            file: Some(file),
        }
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
        self
    }

    pub fn prompt_id(mut self, prompt_id: impl Into<String>) -> Self {
        self.prompt_id = Some(prompt_id.into());
        self
    }

    pub fn metadata(mut self, metadata: PromptMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn file(mut self, file: Bytes) -> Self {
        self.file = Some(file);
        self
    }

    pub fn build(self) -> Result<AddCustomPromptOptions> {
        Ok(AddCustomPromptOptions {
            customization_id: validate::not_empty(self.customization_id, "customization_id")?,
            prompt_id: validate::not_empty(self.prompt_id, "prompt_id")?,
            metadata: validate::not_null(self.metadata, "metadata")?,
            file: validate::not_null(self.file, "file")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{PartOfSpeech, PromptMetadataBuilder, WordBuilder};

    #[test]
    fn create_requires_name() {
        let err = CreateCustomModelOptions::builder().language("en-US").build().unwrap_err();
        assert_eq!(err.to_string(), "name cannot be null");

        let options = CreateCustomModelOptionsBuilder::new("acronyms")
            .language("en-US")
            .description("IT acronyms")
            .build()
            .unwrap();
        assert_eq!(options.to_builder().build().unwrap(), options);
        assert_eq!(
            options.payload().unwrap().as_json(),
            Some(&json!({ "name": "acronyms", "language": "en-US", "description": "IT acronyms" }))
        );
    }

    #[test]
    fn update_collects_words() {
        let err = UpdateCustomModelOptionsBuilder::new("").build().unwrap_err();
        assert_eq!(err.to_string(), "customization_id cannot be empty");

        let options = UpdateCustomModelOptionsBuilder::new("cust")
            .name("renamed")
            .add_word(WordBuilder::new("IEEE", "I triple E").build().unwrap())
            .add_word(WordBuilder::new("NCAA", "N C double A").build().unwrap())
            .build()
            .unwrap();

        assert_eq!(options.words().map(<[_]>::len), Some(2));
        assert_eq!(options.method(), Method::POST);
        assert_eq!(options.path_segments(), ["v1", "customizations", "cust"]);
        assert_eq!(
            options.payload().unwrap().as_json(),
            Some(&json!({
                "name": "renamed",
                "words": [
                    { "word": "IEEE", "translation": "I triple E" },
                    { "word": "NCAA", "translation": "N C double A" }
                ]
            }))
        );
    }

    #[test]
    fn add_word_puts_translation() {
        let err = AddWordOptions::builder().customization_id("cust").word("ibm").build().unwrap_err();
        assert_eq!(err.to_string(), "translation cannot be null");

        let options = AddWordOptionsBuilder::new("cust", "ibm", "アイビーエム")
            .part_of_speech(PartOfSpeech::Koyu)
            .build()
            .unwrap();

        assert_eq!(options.method(), Method::PUT);
        assert_eq!(options.path_segments(), ["v1", "customizations", "cust", "words", "ibm"]);
        assert_eq!(
            options.payload().unwrap().as_json(),
            Some(&json!({ "translation": "アイビーエム", "part_of_speech": "Koyu" }))
        );
        assert_eq!(options.to_builder().build().unwrap(), options);
    }

    #[test]
    fn custom_prompt_requires_metadata_and_file() {
        let metadata = PromptMetadataBuilder::new("Goodbye").build().unwrap();

        let err = AddCustomPromptOptions::builder()
            .customization_id("cust")
            .prompt_id("goodbye")
            .file(Bytes::from_static(b"RIFF"))
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "metadata cannot be null");

        let err = AddCustomPromptOptions::builder()
            .customization_id("cust")
            .prompt_id("goodbye")
            .metadata(metadata)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "file cannot be null");
    }

    #[test]
    fn custom_prompt_is_multipart() {
        let metadata = PromptMetadataBuilder::new("Goodbye").speaker_id("spk").build().unwrap();
        let options = AddCustomPromptOptionsBuilder::new("cust", "goodbye", metadata.clone(), Bytes::from_static(b"RIFF"))
            .build()
            .unwrap();

        assert_eq!(options.metadata(), &metadata);
        assert_eq!(options.path_segments(), ["v1", "customizations", "cust", "prompts", "goodbye"]);

        let payload = options.payload().unwrap();
        let parts = payload.parts().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].name, "metadata");
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(parts[0].text_value().unwrap()).unwrap(),
            json!({ "prompt_text": "Goodbye", "speaker_id": "spk" })
        );
        assert_eq!(parts[1].content_type.as_deref(), Some("audio/wav"));
        assert_eq!(parts[1].data, Bytes::from_static(b"RIFF"));
    }
}
