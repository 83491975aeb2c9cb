use http::Request;
use url::Url;
use watson_config::ServiceConfig;
use watson_core::{Error, Operation, Payload, Result, ServiceClient};

use crate::options::RecognizeWithWebsocketsOptions;

/// Service name used in logs and configuration
pub const SERVICE_NAME: &str = "speech_to_text";

/// Public `us-south` endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.speech-to-text.watson.cloud.ibm.com";

/// Speech to Text v1 service
///
/// The API is not versioned by date, so no `version` parameter is sent
/// unless a config section supplies one.
#[derive(Debug, Clone)]
pub struct SpeechToText {
    client: ServiceClient,
}

impl SpeechToText {
    /// Service at the public endpoint
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

    /// Point the service at another URL, e.g. a dedicated instance
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

    /// `ws`/`wss` URL that opens a streaming recognition session
    pub fn websocket_url(&self, options: &RecognizeWithWebsocketsOptions) -> Result<Url> {
        let mut url = self.client.url_for(options)?;
        let scheme = match url.scheme() {
            "https" => "wss",
            "http" => "ws",
            other => return Err(Error::InvalidUrl(format!("{other} cannot carry a websocket session"))),
        };
        url.set_scheme(scheme)
            .map_err(|()| Error::InvalidUrl(format!("{url}: cannot switch to {scheme}")))?;

        tracing::debug!("Prepared recognize session {} for {SERVICE_NAME}", url.path());

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::{Method, header};

    use super::*;
    use crate::options::{
        AddGrammarOptionsBuilder, GrammarContentType, RecognizeOptionsBuilder, RecognizeWithWebsocketsOptionsBuilder,
    };

    #[test]
    fn prepares_grammar_upload() {
        let service = SpeechToText::new().unwrap();
        let options = AddGrammarOptionsBuilder::new("cust", "commands", Bytes::from_static(b"#ABNF 1.0;"), GrammarContentType::Srgs)
            .allow_overwrite(true)
            .build()
            .unwrap();

        let request = service.prepare(&options).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(
            request.uri().to_string(),
            "https://api.us-south.speech-to-text.watson.cloud.ibm.com/v1/customizations/cust/grammars/commands?allow_overwrite=true"
        );
        assert_eq!(request.headers()[header::CONTENT_TYPE], "application/srgs");
    }

    #[test]
    fn websocket_url_switches_scheme() {
        let service = SpeechToText::new()
            .unwrap()
            .with_service_url(Url::parse("http://localhost:1080/speech").unwrap());
        let recognize = RecognizeOptionsBuilder::new(Bytes::from_static(b"RIFF"))
            .model("en-US_Telephony")
            .build()
            .unwrap();
        let options = RecognizeWithWebsocketsOptionsBuilder::new(recognize).build().unwrap();

        let url = service.websocket_url(&options).unwrap();
        assert_eq!(url.as_str(), "ws://localhost:1080/speech/v1/recognize?model=en-US_Telephony");

        let url = SpeechToText::new().unwrap().websocket_url(&options).unwrap();
        assert_eq!(url.scheme(), "wss");
    }

    #[test]
    fn config_headers_apply() {
        let mut config = ServiceConfig::default();
        config.headers.insert("X-Watson-Learning-Opt-Out".to_owned(), "true".to_owned());
        let service = SpeechToText::from_config(&config).unwrap();

        let recognize = RecognizeOptionsBuilder::new(Bytes::from_static(b"fLaC")).build().unwrap();
        let request = service.prepare(&recognize).unwrap();

        assert_eq!(request.headers()["x-watson-learning-opt-out"], "true");
        assert_eq!(
            request.uri().to_string(),
            "https://api.us-south.speech-to-text.watson.cloud.ibm.com/v1/recognize"
        );
    }
}
