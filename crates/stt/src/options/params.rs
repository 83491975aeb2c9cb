//! Recognition parameters shared by the recognize, websocket and job options

use serde::Serialize;
use serde_with::skip_serializing_none;
use watson_core::Params;

/// Query parameters common to every recognition request
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecognitionParams {
    pub language_customization_id: Option<String>,
    pub acoustic_customization_id: Option<String>,
    pub base_model_version: Option<String>,
    pub customization_weight: Option<f64>,
    pub inactivity_timeout: Option<i64>,
    pub keywords: Option<Vec<String>>,
    pub keywords_threshold: Option<f64>,
    pub max_alternatives: Option<i64>,
    pub word_alternatives_threshold: Option<f64>,
    pub word_confidence: Option<bool>,
    pub timestamps: Option<bool>,
    pub profanity_filter: Option<bool>,
    pub smart_formatting: Option<bool>,
    pub smart_formatting_version: Option<i64>,
    pub speaker_labels: Option<bool>,
    pub grammar_name: Option<String>,
    pub redaction: Option<bool>,
    pub audio_metrics: Option<bool>,
    pub end_of_phrase_silence_time: Option<f64>,
    pub split_transcript_at_phrase_end: Option<bool>,
    pub speech_detector_sensitivity: Option<f64>,
    pub background_audio_suppression: Option<f64>,
    pub low_latency: Option<bool>,
    pub character_insertion_bias: Option<f64>,
}

impl RecognitionParams {
    pub fn push_query(&self, query: &mut Params) {
        query
            .push_opt("language_customization_id", self.language_customization_id.as_deref())
            .push_opt("acoustic_customization_id", self.acoustic_customization_id.as_deref())
            .push_opt("base_model_version", self.base_model_version.as_deref())
            .push_opt("customization_weight", self.customization_weight)
            .push_opt("inactivity_timeout", self.inactivity_timeout)
            .push_list("keywords", self.keywords.as_deref())
            .push_opt("keywords_threshold", self.keywords_threshold)
            .push_opt("max_alternatives", self.max_alternatives)
            .push_opt("word_alternatives_threshold", self.word_alternatives_threshold)
            .push_opt("word_confidence", self.word_confidence)
            .push_opt("timestamps", self.timestamps)
            .push_opt("profanity_filter", self.profanity_filter)
            .push_opt("smart_formatting", self.smart_formatting)
            .push_opt("smart_formatting_version", self.smart_formatting_version)
            .push_opt("speaker_labels", self.speaker_labels)
            .push_opt("grammar_name", self.grammar_name.as_deref())
            .push_opt("redaction", self.redaction)
            .push_opt("audio_metrics", self.audio_metrics)
            .push_opt("end_of_phrase_silence_time", self.end_of_phrase_silence_time)
            .push_opt("split_transcript_at_phrase_end", self.split_transcript_at_phrase_end)
            .push_opt("speech_detector_sensitivity", self.speech_detector_sensitivity)
            .push_opt("background_audio_suppression", self.background_audio_suppression)
            .push_opt("low_latency", self.low_latency)
            .push_opt("character_insertion_bias", self.character_insertion_bias);
    }
}

macro_rules! recognition_accessors {
    () => {
        /// Custom language model to apply
        pub fn language_customization_id(&self) -> Option<&str> {
            self.params.language_customization_id.as_deref()
        }

        /// Custom acoustic model to apply
        pub fn acoustic_customization_id(&self) -> Option<&str> {
            self.params.acoustic_customization_id.as_deref()
        }

        pub fn base_model_version(&self) -> Option<&str> {
            self.params.base_model_version.as_deref()
        }

        /// Weight of the custom language model, 0.0 to 1.0
        pub const fn customization_weight(&self) -> Option<f64> {
            self.params.customization_weight
        }

        /// Seconds of silence before the session closes, -1 for no limit
        pub const fn inactivity_timeout(&self) -> Option<i64> {
            self.params.inactivity_timeout
        }

        /// Keywords to spot
        pub fn keywords(&self) -> Option<&[String]> {
            self.params.keywords.as_deref()
        }

        pub const fn keywords_threshold(&self) -> Option<f64> {
            self.params.keywords_threshold
        }

        pub const fn max_alternatives(&self) -> Option<i64> {
            self.params.max_alternatives
        }

        pub const fn word_alternatives_threshold(&self) -> Option<f64> {
            self.params.word_alternatives_threshold
        }

        pub const fn word_confidence(&self) -> Option<bool> {
            self.params.word_confidence
        }

        pub const fn timestamps(&self) -> Option<bool> {
            self.params.timestamps
        }

        pub const fn profanity_filter(&self) -> Option<bool> {
            self.params.profanity_filter
        }

        pub const fn smart_formatting(&self) -> Option<bool> {
            self.params.smart_formatting
        }

        pub const fn smart_formatting_version(&self) -> Option<i64> {
            self.params.smart_formatting_version
        }

        pub const fn speaker_labels(&self) -> Option<bool> {
            self.params.speaker_labels
        }

        pub fn grammar_name(&self) -> Option<&str> {
            self.params.grammar_name.as_deref()
        }

        pub const fn redaction(&self) -> Option<bool> {
            self.params.redaction
        }

        pub const fn audio_metrics(&self) -> Option<bool> {
            self.params.audio_metrics
        }

        /// Pause in seconds that ends a phrase
        pub const fn end_of_phrase_silence_time(&self) -> Option<f64> {
            self.params.end_of_phrase_silence_time
        }

        pub const fn split_transcript_at_phrase_end(&self) -> Option<bool> {
            self.params.split_transcript_at_phrase_end
        }

        pub const fn speech_detector_sensitivity(&self) -> Option<f64> {
            self.params.speech_detector_sensitivity
        }

        pub const fn background_audio_suppression(&self) -> Option<f64> {
            self.params.background_audio_suppression
        }

        pub const fn low_latency(&self) -> Option<bool> {
            self.params.low_latency
        }

        pub const fn character_insertion_bias(&self) -> Option<f64> {
            self.params.character_insertion_bias
        }
    };
}

macro_rules! recognition_setters {
    () => {
        pub fn language_customization_id(mut self, language_customization_id: impl Into<String>) -> Self {
            self.params.language_customization_id = Some(language_customization_id.into());
            self
        }

        pub fn acoustic_customization_id(mut self, acoustic_customization_id: impl Into<String>) -> Self {
            self.params.acoustic_customization_id = Some(acoustic_customization_id.into());
            self
        }

        pub fn base_model_version(mut self, base_model_version: impl Into<String>) -> Self {
            self.params.base_model_version = Some(base_model_version.into());
            self
        }

        pub const fn customization_weight(mut self, customization_weight: f64) -> Self {
            self.params.customization_weight = Some(customization_weight);
            self
        }

        pub const fn inactivity_timeout(mut self, inactivity_timeout: i64) -> Self {
            self.params.inactivity_timeout = Some(inactivity_timeout);
            self
        }

        pub fn keywords(mut self, keywords: Vec<String>) -> Self {
            self.params.keywords = Some(keywords);
            self
        }

        pub fn add_keyword(mut self, keyword: impl Into<String>) -> Self {
            self.params.keywords.get_or_insert_with(Vec::new).push(keyword.into());
            self
        }

        pub const fn keywords_threshold(mut self, keywords_threshold: f64) -> Self {
            self.params.keywords_threshold = Some(keywords_threshold);
            self
        }

        pub const fn max_alternatives(mut self, max_alternatives: i64) -> Self {
            self.params.max_alternatives = Some(max_alternatives);
            self
        }

        pub const fn word_alternatives_threshold(mut self, word_alternatives_threshold: f64) -> Self {
            self.params.word_alternatives_threshold = Some(word_alternatives_threshold);
            self
        }

        pub const fn word_confidence(mut self, word_confidence: bool) -> Self {
            self.params.word_confidence = Some(word_confidence);
            self
        }

        pub const fn timestamps(mut self, timestamps: bool) -> Self {
            self.params.timestamps = Some(timestamps);
            self
        }

        pub const fn profanity_filter(mut self, profanity_filter: bool) -> Self {
            self.params.profanity_filter = Some(profanity_filter);
            self
        }

        pub const fn smart_formatting(mut self, smart_formatting: bool) -> Self {
            self.params.smart_formatting = Some(smart_formatting);
            self
        }

        pub const fn smart_formatting_version(mut self, smart_formatting_version: i64) -> Self {
            self.params.smart_formatting_version = Some(smart_formatting_version);
            self
        }

        pub const fn speaker_labels(mut self, speaker_labels: bool) -> Self {
            self.params.speaker_labels = Some(speaker_labels);
            self
        }

        pub fn grammar_name(mut self, grammar_name: impl Into<String>) -> Self {
            self.params.grammar_name = Some(grammar_name.into());
            self
        }

        pub const fn redaction(mut self, redaction: bool) -> Self {
            self.params.redaction = Some(redaction);
            self
        }

        pub const fn audio_metrics(mut self, audio_metrics: bool) -> Self {
            self.params.audio_metrics = Some(audio_metrics);
            self
        }

        pub const fn end_of_phrase_silence_time(mut self, end_of_phrase_silence_time: f64) -> Self {
            self.params.end_of_phrase_silence_time = Some(end_of_phrase_silence_time);
            self
        }

        pub const fn split_transcript_at_phrase_end(mut self, split_transcript_at_phrase_end: bool) -> Self {
            self.params.split_transcript_at_phrase_end = Some(split_transcript_at_phrase_end);
            self
        }

        pub const fn speech_detector_sensitivity(mut self, speech_detector_sensitivity: f64) -> Self {
            self.params.speech_detector_sensitivity = Some(speech_detector_sensitivity);
            self
        }

        pub const fn background_audio_suppression(mut self, background_audio_suppression: f64) -> Self {
            self.params.background_audio_suppression = Some(background_audio_suppression);
            self
        }

        pub const fn low_latency(mut self, low_latency: bool) -> Self {
            self.params.low_latency = Some(low_latency);
            self
        }

        pub const fn character_insertion_bias(mut self, character_insertion_bias: f64) -> Self {
            self.params.character_insertion_bias = Some(character_insertion_bias);
            self
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_skips_unset_parameters() {
        let params = RecognitionParams {
            acoustic_customization_id: Some("ac".to_owned()),
            keywords: Some(vec!["hail".to_owned(), "tornado".to_owned()]),
            keywords_threshold: Some(0.5),
            smart_formatting: Some(true),
            ..RecognitionParams::default()
        };

        let mut query = Params::new();
        params.push_query(&mut query);

        assert_eq!(
            query.pairs().collect::<Vec<_>>(),
            [
                ("acoustic_customization_id", "ac"),
                ("keywords", "hail,tornado"),
                ("keywords_threshold", "0.5"),
                ("smart_formatting", "true"),
            ]
        );
    }
}
