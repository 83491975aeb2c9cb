#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Models for the Watson Speech to Text service
//!
//! Option objects for recognition, asynchronous jobs and model
//! customization, plus the result and resource models the service returns.
//! [`SpeechToText`] turns options into `http::Request` descriptions;
//! [`RecognizeWithWebsocketsOptions`] also builds the control messages of a
//! streaming session.

pub mod model;
pub mod options;
mod service;

pub use model::*;
pub use options::*;
pub use service::{DEFAULT_SERVICE_URL, SERVICE_NAME, SpeechToText};
pub use watson_core::{Error, JsonModel, Result};
