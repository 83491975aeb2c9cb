#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod logging;
pub mod service;

use serde::Deserialize;

pub use logging::*;
pub use service::*;

/// Top-level configuration for the Watson service clients
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Discovery service endpoint
    #[serde(default)]
    pub discovery: Option<ServiceConfig>,
    /// Speech to Text service endpoint
    #[serde(default)]
    pub speech_to_text: Option<ServiceConfig>,
    /// Text to Speech service endpoint
    #[serde(default)]
    pub text_to_speech: Option<ServiceConfig>,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Configured services paired with their section names
    pub fn services(&self) -> impl Iterator<Item = (&'static str, &ServiceConfig)> {
        [
            ("discovery", self.discovery.as_ref()),
            ("speech_to_text", self.speech_to_text.as_ref()),
            ("text_to_speech", self.text_to_speech.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, service)| service.map(|service| (name, service)))
    }
}
