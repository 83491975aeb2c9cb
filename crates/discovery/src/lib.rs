#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Models for the Watson Discovery service
//!
//! [`v1`] covers environments, collections, configurations, credentials
//! and query logs. [`v2`] covers projects, collections, document
//! classifiers and training data. Each version has a service type that
//! turns option objects into `http::Request` descriptions.

mod service;
pub mod v1;
pub mod v2;

pub use service::{DEFAULT_SERVICE_URL, SERVICE_NAME};
pub use watson_core::{Error, JsonModel, Result};
