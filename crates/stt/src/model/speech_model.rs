use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Customization features a base model supports
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFeatures {
    pub custom_language_model: Option<bool>,
    pub custom_acoustic_model: Option<bool>,
    pub speaker_labels: Option<bool>,
    pub low_latency: Option<bool>,
}

/// A base model available for recognition
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechModel {
    pub name: Option<String>,
    pub language: Option<String>,
    /// Minimum sampling rate in Hz
    pub rate: Option<i64>,
    pub url: Option<String>,
    pub supported_features: Option<SupportedFeatures>,
    pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechModels {
    pub models: Option<Vec<SpeechModel>>,
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use watson_core::JsonModel;

    use super::*;

    #[test]
    fn reads_model_listing() {
        let models = SpeechModels::from_json(indoc! {r#"
            {
              "models": [{
                "name": "en-US_BroadbandModel",
                "language": "en-US",
                "rate": 16000,
                "url": "https://example.com/v1/models/en-US_BroadbandModel",
                "supported_features": {
                  "custom_language_model": true,
                  "custom_acoustic_model": true,
                  "speaker_labels": true
                },
                "description": "US English broadband model."
              }]
            }
        "#})
        .unwrap();

        let model = &models.models.as_deref().unwrap()[0];
        assert_eq!(model.rate, Some(16000));
        assert_eq!(model.supported_features.as_ref().unwrap().speaker_labels, Some(true));
        assert_eq!(model.supported_features.as_ref().unwrap().low_latency, None);
        assert_eq!(SpeechModels::from_json(&models.to_json().unwrap()).unwrap(), models);
    }
}
