use http::Method;
use watson_core::{Operation, Params, Result, validate};

/// List the available voices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVoicesOptions;

impl Operation for ListVoicesOptions {
    fn operation_id(&self) -> &'static str {
        "list_voices"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "voices"]
    }
}

/// Fetch one voice, optionally with a custom model's details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetVoiceOptions {
    voice: String,
    customization_id: Option<String>,
}

impl GetVoiceOptions {
    pub fn builder() -> GetVoiceOptionsBuilder {
        GetVoiceOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> GetVoiceOptionsBuilder {
        GetVoiceOptionsBuilder {
            voice: Some(self.voice.clone()),
            customization_id: self.customization_id.clone(),
        }
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn customization_id(&self) -> Option<&str> {
        self.customization_id.as_deref()
    }
}

impl Operation for GetVoiceOptions {
    fn operation_id(&self) -> &'static str {
        "get_voice"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "voices", &self.voice]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query.push_opt("customization_id", self.customization_id.as_deref());
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct GetVoiceOptionsBuilder {
    voice: Option<String>,
    customization_id: Option<String>,
}

impl GetVoiceOptionsBuilder {
    pub fn new(voice: impl Into<String>) -> Self {
        Self {
            voice: Some(voice.into()),
            customization_id: None,
        }
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn customization_id(mut self, customization_id: impl Into<String>) -> Self {
        self.customization_id = Some(customization_id.into());
        self
    }

    pub fn build(self) -> Result<GetVoiceOptions> {
        Ok(GetVoiceOptions {
            voice: validate::not_empty(self.voice, "voice")?,
            customization_id: self.customization_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SynthesizeVoice;

    #[test]
    fn requires_voice() {
        let err = GetVoiceOptions::builder().customization_id("cust").build().unwrap_err();
        assert_eq!(err.to_string(), "voice cannot be empty");
        assert!(GetVoiceOptionsBuilder::new("").build().is_err());
    }

    #[test]
    fn gets_voice_with_customization() {
        let options = GetVoiceOptionsBuilder::new(SynthesizeVoice::FrFrNicolasV3Voice)
            .customization_id("cust")
            .build()
            .unwrap();

        assert_eq!(options.voice(), "fr-FR_NicolasV3Voice");
        assert_eq!(options.path_segments(), ["v1", "voices", "fr-FR_NicolasV3Voice"]);
        assert_eq!(options.query_params().get("customization_id"), Some("cust"));
        assert_eq!(options.to_builder().build().unwrap(), options);
        assert_eq!(ListVoicesOptions.path_segments(), ["v1", "voices"]);
        assert!(ListVoicesOptions.query_params().is_empty());
    }
}
