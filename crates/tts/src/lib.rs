#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Models for the Watson Text to Speech service
//!
//! Synthesis and pronunciation options, voices, and the custom models,
//! words and prompts that tailor them.

pub mod model;
pub mod options;
mod service;

pub use model::*;
pub use options::*;
pub use service::{DEFAULT_SERVICE_URL, SERVICE_NAME, TextToSpeech};
pub use watson_core::{Error, JsonModel, Result};
