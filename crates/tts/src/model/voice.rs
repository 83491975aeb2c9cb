use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::CustomModel;

/// Customization features a voice supports
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFeatures {
    pub custom_pronunciation: Option<bool>,
    pub voice_transformation: Option<bool>,
}

/// A synthesis voice
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub url: Option<String>,
    pub gender: Option<String>,
    pub name: Option<String>,
    pub language: Option<String>,
    pub description: Option<String>,
    pub customizable: Option<bool>,
    pub supported_features: Option<SupportedFeatures>,
    /// Present when the voice was fetched with a `customization_id`
    pub customization: Option<CustomModel>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voices {
    pub voices: Option<Vec<Voice>>,
}

/// Pronunciation of a word in the requested notation
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub pronunciation: Option<String>,
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use watson_core::JsonModel;

    use super::*;

    #[test]
    fn reads_voice_with_customization() {
        let voices = Voices::from_json(indoc! {r#"
            {
              "voices": [{
                "url": "https://example.com/v1/voices/en-US_AllisonV3Voice",
                "gender": "female",
                "name": "en-US_AllisonV3Voice",
                "language": "en-US",
                "description": "Allison: American English female voice.",
                "customizable": true,
                "supported_features": { "custom_pronunciation": true, "voice_transformation": false },
                "customization": {
                  "customization_id": "cust",
                  "name": "Support",
                  "words": [{ "word": "IEEE", "translation": "I triple E" }]
                }
              }]
            }
        "#})
        .unwrap();

        let voice = &voices.voices.as_deref().unwrap()[0];
        assert_eq!(voice.gender.as_deref(), Some("female"));
        assert_eq!(voice.supported_features.as_ref().unwrap().voice_transformation, Some(false));

        let customization = voice.customization.as_ref().unwrap();
        assert_eq!(customization.words.as_deref().unwrap()[0].translation(), "I triple E");
        assert_eq!(Voices::from_json(&voices.to_json().unwrap()).unwrap(), voices);
    }

    #[test]
    fn pronunciation_round_trip() {
        let pronunciation = Pronunciation {
            pronunciation: Some(".ˈaɪ .ˈtrɪ.pəl .ˈi".to_owned()),
        };
        let json = pronunciation.to_json().unwrap();

        assert_eq!(Pronunciation::from_json(&json).unwrap(), pronunciation);
        assert_eq!(Pronunciation::from_json("{}").unwrap(), Pronunciation::default());
    }
}
