use http::Method;
use serde_json::{Map, Value, json};
use watson_core::{Operation, Params, Result, validate};

use super::RecognizeOptions;

/// Parameters that select the session endpoint rather than configure it
const SESSION_QUERY: [&str; 3] = ["language_customization_id", "acoustic_customization_id", "base_model_version"];

/// Recognize over a websocket session
///
/// The endpoint parameters go in the session URL; everything else is sent
/// in the `start` message, followed by the audio and a `stop` message.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizeWithWebsocketsOptions {
    recognize: RecognizeOptions,
    interim_results: Option<bool>,
    processing_metrics: Option<bool>,
    processing_metrics_interval: Option<f64>,
}

impl RecognizeWithWebsocketsOptions {
    pub fn builder() -> RecognizeWithWebsocketsOptionsBuilder {
        RecognizeWithWebsocketsOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> RecognizeWithWebsocketsOptionsBuilder {
        RecognizeWithWebsocketsOptionsBuilder {
            recognize: Some(self.recognize.clone()),
            interim_results: self.interim_results,
            processing_metrics: self.processing_metrics,
            processing_metrics_interval: self.processing_metrics_interval,
        }
    }

    /// Audio and recognition parameters
    pub const fn recognize(&self) -> &RecognizeOptions {
        &self.recognize
    }

    pub const fn interim_results(&self) -> Option<bool> {
        self.interim_results
    }

    pub const fn processing_metrics(&self) -> Option<bool> {
        self.processing_metrics
    }

    /// Seconds between processing metrics
    pub const fn processing_metrics_interval(&self) -> Option<f64> {
        self.processing_metrics_interval
    }

    /// Message that opens recognition on a connected session
    pub fn start_message(&self) -> Result<Value> {
        let mut message = match serde_json::to_value(&self.recognize.params)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for name in SESSION_QUERY {
            message.remove(name);
        }

        if let Some(content_type) = self.recognize.content_type() {
            message.insert("content-type".to_owned(), json!(content_type));
        }
        if let Some(interim_results) = self.interim_results {
            message.insert("interim_results".to_owned(), json!(interim_results));
        }
        if let Some(processing_metrics) = self.processing_metrics {
            message.insert("processing_metrics".to_owned(), json!(processing_metrics));
        }
        if let Some(interval) = self.processing_metrics_interval {
            message.insert("processing_metrics_interval".to_owned(), json!(interval));
        }
        message.insert("action".to_owned(), json!("start"));

        Ok(Value::Object(message))
    }

    /// Message that ends recognition after the last audio frame
    pub fn stop_message() -> Value {
        json!({ "action": "stop" })
    }
}

impl Operation for RecognizeWithWebsocketsOptions {
    fn operation_id(&self) -> &'static str {
        "recognize_using_websocket"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "recognize"]
    }

    fn query_params(&self) -> Params {
        let params = &self.recognize.params;
        let mut query = Params::new();
        query
            .push_opt("model", self.recognize.model())
            .push_opt("language_customization_id", params.language_customization_id.as_deref())
            .push_opt("acoustic_customization_id", params.acoustic_customization_id.as_deref())
            .push_opt("base_model_version", params.base_model_version.as_deref());
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct RecognizeWithWebsocketsOptionsBuilder {
    recognize: Option<RecognizeOptions>,
    interim_results: Option<bool>,
    processing_metrics: Option<bool>,
    processing_metrics_interval: Option<f64>,
}

impl RecognizeWithWebsocketsOptionsBuilder {
    pub fn new(recognize: RecognizeOptions) -> Self {
        Self {
            recognize: Some(recognize),
            ..Self::default()
        }
    }

    pub fn recognize(mut self, recognize: RecognizeOptions) -> Self {
        self.recognize = Some(recognize);
        self
    }

    pub const fn interim_results(mut self, interim_results: bool) -> Self {
        self.interim_results = Some(interim_results);
        self
    }

    pub const fn processing_metrics(mut self, processing_metrics: bool) -> Self {
        self.processing_metrics = Some(processing_metrics);
        self
    }

    pub const fn processing_metrics_interval(mut self, processing_metrics_interval: f64) -> Self {
        self.processing_metrics_interval = Some(processing_metrics_interval);
        self
    }

    pub fn build(self) -> Result<RecognizeWithWebsocketsOptions> {
        Ok(RecognizeWithWebsocketsOptions {
            recognize: validate::not_null(self.recognize, "recognize")?,
            interim_results: self.interim_results,
            processing_metrics: self.processing_metrics,
            processing_metrics_interval: self.processing_metrics_interval,
        })
    }
}
