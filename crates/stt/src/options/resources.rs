//! Corpora, words, grammars and audio added to custom models

use bytes::Bytes;
use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Operation, Params, Payload, Result, string_constants, validate};

/// Grammar formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum GrammarContentType {
    /// Augmented Backus-Naur Form
    #[strum(serialize = "application/srgs")]
    Srgs,
    #[strum(serialize = "application/srgs+xml")]
    SrgsXml,
}

string_constants!(GrammarContentType);

fn overwrite_query(allow_overwrite: Option<bool>) -> Params {
    let mut query = Params::new();
    query.push_opt("allow_overwrite", allow_overwrite);
    query
}

/// Add a plain text corpus to a custom language model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCorpusOptions {
    customization_id: String,
    corpus_name: String,
    corpus_file: Bytes,
    allow_overwrite: Option<bool>,
}

impl AddCorpusOptions {
    pub fn builder() -> AddCorpusOptionsBuilder {
        AddCorpusOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> AddCorpusOptionsBuilder {
        AddCorpusOptionsBuilder {
            customization_id: Some(self.customization_id.clone()),
            corpus_name: Some(self.corpus_name.clone()),
            corpus_file: Some(self.corpus_file.clone()),
            allow_overwrite: self.allow_overwrite,
        }
    }

    pub fn customization_id(&self) -> &str {
        &self.customization_id
    }

    pub fn corpus_name(&self) -> &str {
        &self.corpus_name
    }

    pub const fn corpus_file(&self) -> &Bytes {
        &self.corpus_file
    }

    pub const fn allow_overwrite(&self) -> Option<bool> {
        self.allow_overwrite
    }
}

impl Operation for AddCorpusOptions {
    fn operation_id(&self) -> &'static str {
        "add_corpus"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "customizations", &self.customization_id, "corpora", &self.corpus_name]
    }

    fn query_params(&self) -> Params {
        overwrite_query(self.allow_overwrite)
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Binary {
            content_type: "text/plain".to_owned(),
            data: self.corpus_file.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddCorpusOptionsBuilder {
    customization_id: Option<String>,
    corpus_name: Option<String>,
    corpus_file: Option<Bytes>,
    allow_overwrite: Option<bool>,
}

impl AddCorpusOptionsBuilder {
    pub fn new(customization_id: impl Into<String>, corpus_name: impl Into<String>, corpus_file: impl Into<Bytes>) -> Self {
        Self {
            customization_id: Some(customization_id.into()),
            corpus_name: Some(corpus_name.into()),
            corpus_file: Some(corpus_file.into()),
            allow_overwrite: None,
        }
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
        self
    }

    pub fn corpus_name(mut self, corpus_name: impl Into<String>) -> Self {
        self.corpus_name = Some(corpus_name.into());
        self
    }

    pub fn corpus_file(mut self, corpus_file: impl Into<Bytes>) -> Self {
        self.corpus_file = Some(corpus_file.into());
        self
    }

    pub const fn allow_overwrite(mut self, allow_overwrite: bool) -> Self {
        self.allow_overwrite = Some(allow_overwrite);
        self
    }

    pub fn build(self) -> Result<AddCorpusOptions> {
        Ok(AddCorpusOptions {
            customization_id: validate::not_empty(self.customization_id, "customization_id")?,
            corpus_name: validate::not_empty(self.corpus_name, "corpus_name")?,
            corpus_file: validate::not_null(self.corpus_file, "corpus_file")?,
            allow_overwrite: self.allow_overwrite,
        })
    }
}

#[skip_serializing_none]
#[derive(Serialize)]
struct WordBody<'a> {
    word: Option<&'a str>,
    sounds_like: Option<&'a [String]>,
    display_as: Option<&'a str>,
}

/// Add or replace a custom word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddWordOptions {
    customization_id: String,
    word_name: String,
    word: Option<String>,
    sounds_like: Option<Vec<String>>,
    display_as: Option<String>,
}

impl AddWordOptions {
    pub fn builder() -> AddWordOptionsBuilder {
        AddWordOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> AddWordOptionsBuilder {
        AddWordOptionsBuilder {
            customization_id: Some(self.customization_id.clone()),
            word_name: Some(self.word_name.clone()),
            word: self.word.clone(),
            sounds_like: self.sounds_like.clone(),
            display_as: self.display_as.clone(),
        }
    }

    pub fn customization_id(&self) -> &str {
        &self.customization_id
    }

    pub fn word_name(&self) -> &str {
        &self.word_name
    }

    /// Spelling of the word when it differs from `word_name`
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Pronunciations, each written as it sounds
    pub fn sounds_like(&self) -> Option<&[String]> {
        self.sounds_like.as_deref()
    }

    /// Spelling used in transcripts
    pub fn display_as(&self) -> Option<&str> {
        self.display_as.as_deref()
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
        vec!["v1", "customizations", &self.customization_id, "words", &self.word_name]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&WordBody {
            word: self.word.as_deref(),
            sounds_like: self.sounds_like.as_deref(),
            display_as: self.display_as.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddWordOptionsBuilder {
    customization_id: Option<String>,
    word_name: Option<String>,
    word: Option<String>,
    sounds_like: Option<Vec<String>>,
    display_as: Option<String>,
}

impl AddWordOptionsBuilder {
    pub fn new(customization_id: impl Into<String>, word_name: impl Into<String>) -> Self {
        Self {
            customization_id: Some(customization_id.into()),
            word_name: Some(word_name.into()),
            ..Self::default()
        }
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
        self
    }

    pub fn word_name(mut self, word_name: impl Into<String>) -> Self {
        self.word_name = Some(word_name.into());
        self
    }

    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    pub fn sounds_like(mut self, sounds_like: Vec<String>) -> Self {
        self.sounds_like = Some(sounds_like);
        self
    }

    pub fn add_sounds_like(mut self, sounds_like: impl Into<String>) -> Self {
        self.sounds_like.get_or_insert_with(Vec::new).push(sounds_like.into());
        self
    }

    pub fn display_as(mut self, display_as: impl Into<String>) -> Self {
        self.display_as = Some(display_as.into());
        self
    }

    pub fn build(self) -> Result<AddWordOptions> {
        Ok(AddWordOptions {
            customization_id: validate::not_empty(self.customization_id, "customization_id")?,
            word_name: validate::not_empty(self.word_name, "word_name")?,
            word: self.word,
            sounds_like: self.sounds_like,
            display_as: self.display_as,
        })
    }
}

/// Add a grammar to a custom language model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddGrammarOptions {
    customization_id: String,
    grammar_name: String,
    grammar_file: Bytes,
    content_type: String,
    allow_overwrite: Option<bool>,
}

impl AddGrammarOptions {
    pub fn builder() -> AddGrammarOptionsBuilder {
        AddGrammarOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> AddGrammarOptionsBuilder {
        AddGrammarOptionsBuilder {
            customization_id: Some(self.customization_id.clone()),
            grammar_name: Some(self.grammar_name.clone()),
            grammar_file: Some(self.grammar_file.clone()),
            content_type: Some(self.content_type.clone()),
            allow_overwrite: self.allow_overwrite,
        }
    }

    pub fn customization_id(&self) -> &str {
        &self.customization_id
    }

    pub fn grammar_name(&self) -> &str {
        &self.grammar_name
    }

    pub const fn grammar_file(&self) -> &Bytes {
        &self.grammar_file
    }

    /// One of [`GrammarContentType`]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub const fn allow_overwrite(&self) -> Option<bool> {
        self.allow_overwrite
    }
}

impl Operation for AddGrammarOptions {
    fn operation_id(&self) -> &'static str {
        "add_grammar"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "customizations", &self.customization_id, "grammars", &self.grammar_name]
    }

    fn query_params(&self) -> Params {
        overwrite_query(self.allow_overwrite)
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Binary {
            content_type: self.content_type.clone(),
            data: self.grammar_file.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddGrammarOptionsBuilder {
    customization_id: Option<String>,
    grammar_name: Option<String>,
    grammar_file: Option<Bytes>,
    content_type: Option<String>,
    allow_overwrite: Option<bool>,
}

impl AddGrammarOptionsBuilder {
    pub fn new(
        customization_id: impl Into<String>,
        grammar_name: impl Into<String>,
        grammar_file: impl Into<Bytes>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            customization_id: Some(customization_id.into()),
            grammar_name: Some(grammar_name.into()),
            grammar_file: Some(grammar_file.into()),
            content_type: Some(content_type.into()),
            allow_overwrite: None,
        }
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
        self
    }

    pub fn grammar_name(mut self, grammar_name: impl Into<String>) -> Self {
        self.grammar_name = Some(grammar_name.into());
        self
    }

    pub fn grammar_file(mut self, grammar_file: impl Into<Bytes>) -> Self {
        self.grammar_file = Some(grammar_file.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub const fn allow_overwrite(mut self, allow_overwrite: bool) -> Self {
        self.allow_overwrite = Some(allow_overwrite);
        self
    }

    pub fn build(self) -> Result<AddGrammarOptions> {
        Ok(AddGrammarOptions {
            customization_id: validate::not_empty(self.customization_id, "customization_id")?,
            grammar_name: validate::not_empty(self.grammar_name, "grammar_name")?,
            grammar_file: validate::not_null(self.grammar_file, "grammar_file")?,
            content_type: validate::not_null(self.content_type, "content_type")?,
            allow_overwrite: self.allow_overwrite,
        })
    }
}

/// Add audio to a custom acoustic model
///
/// `content_type` names the audio format, or `application/zip` or
/// `application/gzip` for an archive whose members share
/// `contained_content_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAudioOptions {
    customization_id: String,
    audio_name: String,
    audio_resource: Bytes,
    content_type: Option<String>,
    contained_content_type: Option<String>,
    allow_overwrite: Option<bool>,
}

impl AddAudioOptions {
    pub fn builder() -> AddAudioOptionsBuilder {
        AddAudioOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> AddAudioOptionsBuilder {
        AddAudioOptionsBuilder {
            customization_id: Some(self.customization_id.clone()),
            audio_name: Some(self.audio_name.clone()),
            audio_resource: Some(self.audio_resource.clone()),
            content_type: self.content_type.clone(),
            contained_content_type: self.contained_content_type.clone(),
            allow_overwrite: self.allow_overwrite,
        }
    }

    pub fn customization_id(&self) -> &str {
        &self.customization_id
    }

    pub fn audio_name(&self) -> &str {
        &self.audio_name
    }

    pub const fn audio_resource(&self) -> &Bytes {
        &self.audio_resource
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// One of [`AudioContentType`](super::AudioContentType)
    pub fn contained_content_type(&self) -> Option<&str> {
        self.contained_content_type.as_deref()
    }

    pub const fn allow_overwrite(&self) -> Option<bool> {
        self.allow_overwrite
    }
}

impl Operation for AddAudioOptions {
    fn operation_id(&self) -> &'static str {
        "add_audio"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "acoustic_customizations", &self.customization_id, "audio", &self.audio_name]
    }

    fn query_params(&self) -> Params {
        overwrite_query(self.allow_overwrite)
    }

    fn headers(&self) -> Params {
        let mut headers = Params::new();
        headers.push_opt("Contained-Content-Type", self.contained_content_type.as_deref());
        headers
    }

    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Binary {
            content_type: self
                .content_type
                .as_deref()
                .unwrap_or("application/octet-stream")
                .to_owned(),
            data: self.audio_resource.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddAudioOptionsBuilder {
    customization_id: Option<String>,
    audio_name: Option<String>,
    audio_resource: Option<Bytes>,
    content_type: Option<String>,
    contained_content_type: Option<String>,
    allow_overwrite: Option<bool>,
}

impl AddAudioOptionsBuilder {
    pub fn new(
        customization_id: impl Into<String>,
        audio_name: impl Into<String>,
        audio_resource: impl Into<Bytes>,
    ) -> Self {
        Self {
            customization_id: Some(customization_id.into()),
            audio_name: Some(audio_name.into()),
            audio_resource: Some(audio_resource.into()),
            ..Self::default()
        }
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
        self
    }

    pub fn audio_name(mut self, audio_name: impl Into<String>) -> Self {
        self.audio_name = Some(audio_name.into());
        self
    }

    pub fn audio_resource(mut self, audio_resource: impl Into<Bytes>) -> Self {
        self.audio_resource = Some(audio_resource.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn contained_content_type(mut self, contained_content_type: impl Into<String>) -> Self {
        self.contained_content_type = Some(contained_content_type.into());
        self
    }

    pub const fn allow_overwrite(mut self, allow_overwrite: bool) -> Self {
        self.allow_overwrite = Some(allow_overwrite);
        self
    }

    pub fn build(self) -> Result<AddAudioOptions> {
        Ok(AddAudioOptions {
            customization_id: validate::not_empty(self.customization_id, "customization_id")?,
            audio_name: validate::not_empty(self.audio_name, "audio_name")?,
            audio_resource: validate::not_null(self.audio_resource, "audio_resource")?,
            content_type: self.content_type,
            contained_content_type: self.contained_content_type,
            allow_overwrite: self.allow_overwrite,
        })
    }
}
