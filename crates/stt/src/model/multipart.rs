use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Result, string_constants, validate};

/// Audio formats for the parts of a multipart recognition request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum PartContentType {
    #[strum(serialize = "audio/basic")]
    Basic,
    #[strum(serialize = "audio/flac")]
    Flac,
    #[strum(serialize = "audio/l16")]
    L16,
    #[strum(serialize = "audio/mp3")]
    Mp3,
    #[strum(serialize = "audio/mpeg")]
    Mpeg,
    #[strum(serialize = "audio/mulaw")]
    Mulaw,
    #[strum(serialize = "audio/ogg")]
    Ogg,
    #[strum(serialize = "audio/ogg;codecs=opus")]
    OggCodecsOpus,
    #[strum(serialize = "audio/ogg;codecs=vorbis")]
    OggCodecsVorbis,
    #[strum(serialize = "audio/wav")]
    Wav,
    #[strum(serialize = "audio/webm")]
    Webm,
    #[strum(serialize = "audio/webm;codecs=opus")]
    WebmCodecsOpus,
    #[strum(serialize = "audio/webm;codecs=vorbis")]
    WebmCodecsVorbis,
}

string_constants!(PartContentType);

/// Metadata part of a multipart recognition request
///
/// Describes the audio parts that follow it and carries the recognition
/// parameters that would otherwise travel in the query string.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipartRecognition {
    part_content_type: String,
    data_parts_count: Option<i64>,
    sequence_id: Option<i64>,
    inactivity_timeout: Option<i64>,
    keywords: Option<Vec<String>>,
    keywords_threshold: Option<f64>,
    max_alternatives: Option<i64>,
    word_alternatives_threshold: Option<f64>,
    word_confidence: Option<bool>,
    timestamps: Option<bool>,
    profanity_filter: Option<bool>,
    smart_formatting: Option<bool>,
    speaker_labels: Option<bool>,
}

impl MultipartRecognition {
    pub fn builder() -> MultipartRecognitionBuilder {
        MultipartRecognitionBuilder::default()
    }

    pub fn to_builder(&self) -> MultipartRecognitionBuilder {
        MultipartRecognitionBuilder {
            part_content_type: Some(self.part_content_type.clone()),
            data_parts_count: self.data_parts_count,
            sequence_id: self.sequence_id,
            inactivity_timeout: self.inactivity_timeout,
            keywords: self.keywords.clone(),
            keywords_threshold: self.keywords_threshold,
            max_alternatives: self.max_alternatives,
            word_alternatives_threshold: self.word_alternatives_threshold,
            word_confidence: self.word_confidence,
            timestamps: self.timestamps,
            profanity_filter: self.profanity_filter,
            smart_formatting: self.smart_formatting,
            speaker_labels: self.speaker_labels,
        }
    }

    /// One of [`PartContentType`]
    pub fn part_content_type(&self) -> &str {
        &self.part_content_type
    }

    pub const fn data_parts_count(&self) -> Option<i64> {
        self.data_parts_count
    }

    pub const fn sequence_id(&self) -> Option<i64> {
        self.sequence_id
    }

    pub const fn inactivity_timeout(&self) -> Option<i64> {
        self.inactivity_timeout
    }

    pub fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }

    pub const fn keywords_threshold(&self) -> Option<f64> {
        self.keywords_threshold
    }

    pub const fn max_alternatives(&self) -> Option<i64> {
        self.max_alternatives
    }

    pub const fn word_alternatives_threshold(&self) -> Option<f64> {
        self.word_alternatives_threshold
    }

    pub const fn word_confidence(&self) -> Option<bool> {
        self.word_confidence
    }

    pub const fn timestamps(&self) -> Option<bool> {
        self.timestamps
    }

    pub const fn profanity_filter(&self) -> Option<bool> {
        self.profanity_filter
    }

    pub const fn smart_formatting(&self) -> Option<bool> {
        self.smart_formatting
    }

    pub const fn speaker_labels(&self) -> Option<bool> {
        self.speaker_labels
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct MultipartRecognitionBuilder {
    part_content_type: Option<String>,
    data_parts_count: Option<i64>,
    sequence_id: Option<i64>,
    inactivity_timeout: Option<i64>,
    keywords: Option<Vec<String>>,
    keywords_threshold: Option<f64>,
    max_alternatives: Option<i64>,
    word_alternatives_threshold: Option<f64>,
    word_confidence: Option<bool>,
    timestamps: Option<bool>,
    profanity_filter: Option<bool>,
    smart_formatting: Option<bool>,
    speaker_labels: Option<bool>,
}

impl MultipartRecognitionBuilder {
    pub fn new(part_content_type: impl Into<String>) -> Self {
        Self {
            part_content_type: Some(part_content_type.into()),
            ..Self::default()
        }
    }

    pub fn part_content_type(mut self, part_content_type: impl Into<String>) -> Self {
        self.part_content_type = Some(part_content_type.into());
        self
    }

    pub const fn data_parts_count(mut self, data_parts_count: i64) -> Self {
        self.data_parts_count = Some(data_parts_count);
        self
    }

    pub const fn sequence_id(mut self, sequence_id: i64) -> Self {
        self.sequence_id = Some(sequence_id);
        self
    }

    pub const fn inactivity_timeout(mut self, inactivity_timeout: i64) -> Self {
        self.inactivity_timeout = Some(inactivity_timeout);
        self
    }

    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn add_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.get_or_insert_with(Vec::new).push(keyword.into());
        self
    }

    pub const fn keywords_threshold(mut self, keywords_threshold: f64) -> Self {
        self.keywords_threshold = Some(keywords_threshold);
        self
    }

    pub const fn max_alternatives(mut self, max_alternatives: i64) -> Self {
        self.max_alternatives = Some(max_alternatives);
        self
    }

    pub const fn word_alternatives_threshold(mut self, word_alternatives_threshold: f64) -> Self {
        self.word_alternatives_threshold = Some(word_alternatives_threshold);
        self
    }

    pub const fn word_confidence(mut self, word_confidence: bool) -> Self {
        self.word_confidence = Some(word_confidence);
        self
    }

    pub const fn timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = Some(timestamps);
        self
    }

    pub const fn profanity_filter(mut self, profanity_filter: bool) -> Self {
        self.profanity_filter = Some(profanity_filter);
        self
    }

    pub const fn smart_formatting(mut self, smart_formatting: bool) -> Self {
        self.smart_formatting = Some(smart_formatting);
        self
    }

    pub const fn speaker_labels(mut self, speaker_labels: bool) -> Self {
        self.speaker_labels = Some(speaker_labels);
        self
    }

    pub fn build(self) -> Result<MultipartRecognition> {
        Ok(MultipartRecognition {
            part_content_type: validate::not_null(self.part_content_type, "part_content_type")?,
            data_parts_count: self.data_parts_count,
            sequence_id: self.sequence_id,
            inactivity_timeout: self.inactivity_timeout,
            keywords: self.keywords,
            keywords_threshold: self.keywords_threshold,
            max_alternatives: self.max_alternatives,
            word_alternatives_threshold: self.word_alternatives_threshold,
            word_confidence: self.word_confidence,
            timestamps: self.timestamps,
            profanity_filter: self.profanity_filter,
            smart_formatting: self.smart_formatting,
            speaker_labels: self.speaker_labels,
        })
    }
}
