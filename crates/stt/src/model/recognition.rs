use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::string_constants;

/// Why the service ended an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum EndOfUtterance {
    EndOfData,
    FullStop,
    Reset,
    Silence,
}

string_constants!(EndOfUtterance);

/// Transcription of an audio stream
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechRecognitionResults {
    pub results: Option<Vec<SpeechRecognitionResult>>,
    /// Index of the first result in `results` within the whole session
    pub result_index: Option<i64>,
    pub speaker_labels: Option<Vec<SpeakerLabelsResult>>,
    pub processing_metrics: Option<Value>,
    pub audio_metrics: Option<Value>,
    pub warnings: Option<Vec<String>>,
}

/// One utterance, interim or final
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechRecognitionResult {
    #[serde(rename = "final")]
    pub final_results: Option<bool>,
    pub alternatives: Option<Vec<SpeechRecognitionAlternative>>,
    /// Spotted keywords keyed by the requested keyword
    pub keywords_result: Option<BTreeMap<String, Vec<KeywordResult>>>,
    pub word_alternatives: Option<Vec<WordAlternativeResults>>,
    /// One of [`EndOfUtterance`]
    pub end_of_utterance: Option<String>,
}

/// `[word, start, end]` as sent by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTimestamp(pub String, pub f64, pub f64);

impl WordTimestamp {
    pub fn word(&self) -> &str {
        &self.0
    }

    /// Seconds from the start of the audio
    pub const fn start_time(&self) -> f64 {
        self.1
    }

    pub const fn end_time(&self) -> f64 {
        self.2
    }
}

/// `[word, confidence]` as sent by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordConfidence(pub String, pub f64);

impl WordConfidence {
    pub fn word(&self) -> &str {
        &self.0
    }

    pub const fn confidence(&self) -> f64 {
        self.1
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechRecognitionAlternative {
    pub transcript: Option<String>,
    pub confidence: Option<f64>,
    pub timestamps: Option<Vec<WordTimestamp>>,
    pub word_confidence: Option<Vec<WordConfidence>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordResult {
    pub normalized_text: Option<String>,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub confidence: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordAlternativeResult {
    pub confidence: Option<f64>,
    pub word: Option<String>,
}

/// Candidate words for one time span
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordAlternativeResults {
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub alternatives: Option<Vec<WordAlternativeResult>>,
}

/// Speaker attributed to a span of audio
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeakerLabelsResult {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub speaker: Option<i64>,
    pub confidence: Option<f64>,
    #[serde(rename = "final")]
    pub final_results: Option<bool>,
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use watson_core::{JsonModel, constants::literals};

    use super::*;

    const RECOGNITION: &str = indoc! {r#"
        {
          "result_index": 0,
          "results": [{
            "final": true,
            "alternatives": [{
              "transcript": "thunderstorms could produce large hail ",
              "confidence": 0.96,
              "timestamps": [["thunderstorms", 1.49, 2.32], ["could", 2.32, 2.54]],
              "word_confidence": [["thunderstorms", 0.95], ["could", 1.0]]
            }],
            "keywords_result": {
              "hail": [{ "normalized_text": "hail", "start_time": 3.5, "end_time": 3.9, "confidence": 0.99 }]
            },
            "end_of_utterance": "end_of_data"
          }],
          "speaker_labels": [{ "from": 1.49, "to": 2.32, "speaker": 0, "confidence": 0.5, "final": false }]
        }
    "#};

    #[test]
    fn reads_recognition_results() {
        let results = SpeechRecognitionResults::from_json(RECOGNITION).unwrap();
        let result = &results.results.as_deref().unwrap()[0];
        let alternative = &result.alternatives.as_deref().unwrap()[0];

        assert_eq!(result.final_results, Some(true));
        assert_eq!(result.end_of_utterance.as_deref(), Some(EndOfUtterance::EndOfData.as_ref()));

        let timestamps = alternative.timestamps.as_deref().unwrap();
        assert_eq!(timestamps[0].word(), "thunderstorms");
        assert!((timestamps[0].start_time() - 1.49).abs() < f64::EPSILON);
        assert!((timestamps[1].end_time() - 2.54).abs() < f64::EPSILON);
        assert_eq!(alternative.word_confidence.as_deref().unwrap()[1].word(), "could");

        let hail = &result.keywords_result.as_ref().unwrap()["hail"][0];
        assert_eq!(hail.normalized_text.as_deref(), Some("hail"));

        let speaker = &results.speaker_labels.as_deref().unwrap()[0];
        assert_eq!(speaker.speaker, Some(0));
        assert_eq!(speaker.final_results, Some(false));
    }

    #[test]
    fn results_survive_round_trip() {
        let results = SpeechRecognitionResults::from_json(RECOGNITION).unwrap();
        let json = results.to_json_value().unwrap();

        assert_eq!(json["results"][0]["final"], true);
        assert_eq!(json["results"][0]["alternatives"][0]["timestamps"][0][0], "thunderstorms");
        assert_eq!(SpeechRecognitionResults::from_json_value(json).unwrap(), results);
    }

    #[test]
    fn end_of_utterance_literals() {
        assert_eq!(literals::<EndOfUtterance>(), ["end_of_data", "full_stop", "reset", "silence"]);
    }
}
