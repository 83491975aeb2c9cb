use http::Request;
use url::Url;
use watson_config::ServiceConfig;
use watson_core::{Operation, Payload, Result, ServiceClient};

pub const SERVICE_NAME: &str = "text_to_speech";

/// Public `us-south` endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.text-to-speech.watson.cloud.ibm.com";

/// Text to Speech v1 service
#[derive(Debug, Clone)]
pub struct TextToSpeech {
    client: ServiceClient,
}

impl TextToSpeech {
    pub fn new() -> Result<Self> {
        tracing::debug!("Initialized {SERVICE_NAME} client for {DEFAULT_SERVICE_URL}");
        Ok(Self {
            client: ServiceClient::parse(SERVICE_NAME, DEFAULT_SERVICE_URL)?,
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            client: ServiceClient::from_config(SERVICE_NAME, DEFAULT_SERVICE_URL, config)?,
        })
    }

    #[must_use]
    pub fn with_service_url(mut self, url: Url) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    pub const fn client(&self) -> &ServiceClient {
        &self.client
    }

    /// Describe the HTTP request for `operation`
    pub fn prepare<O: Operation + ?Sized>(&self, operation: &O) -> Result<Request<Payload>> {
        self.client.prepare(operation)
    }
}

#[cfg(test)]
mod tests {
    use http::{Method, header};

    use super::*;
    use crate::options::{GetVoiceOptionsBuilder, SynthesizeAccept, SynthesizeOptionsBuilder, SynthesizeVoice};

    #[test]
    fn prepares_synthesis() {
        let service = TextToSpeech::new().unwrap();
        let options = SynthesizeOptionsBuilder::new("Hello world")
            .accept(SynthesizeAccept::Wav)
            .voice(SynthesizeVoice::EnUsMichaelV3Voice)
            .build()
            .unwrap();

        let request = service.prepare(&options).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.uri().to_string(),
            "https://api.us-south.text-to-speech.watson.cloud.ibm.com/v1/synthesize?voice=en-US_MichaelV3Voice"
        );
        assert_eq!(request.headers()[header::ACCEPT], "audio/wav");
        assert_eq!(request.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn service_url_override() {
        let service = TextToSpeech::new()
            .unwrap()
            .with_service_url(Url::parse("https://tts.internal.example/api").unwrap());
        let options = GetVoiceOptionsBuilder::new("en-US_LisaV3Voice").build().unwrap();

        let request = service.prepare(&options).unwrap();
        assert_eq!(
            request.uri().to_string(),
            "https://tts.internal.example/api/v1/voices/en-US_LisaV3Voice"
        );
    }

    #[test]
    fn config_version_is_sent() {
        let config = ServiceConfig {
            version: Some("2024-01-01".to_owned()),
            ..ServiceConfig::default()
        };
        let service = TextToSpeech::from_config(&config).unwrap();

        let url = service.client().url_for(&crate::options::ListVoicesOptions).unwrap();
        assert_eq!(url.query(), Some("version=2024-01-01"));
    }
}
