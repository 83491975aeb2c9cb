#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Shared building blocks for the Watson service crates
//!
//! Validation helpers used by model builders, JSON conversion, string
//! constant groups and the request description layer that turns option
//! objects into `http::Request` values.

pub mod constants;
mod error;
pub mod json;
pub mod request;
pub mod validate;

pub use error::{Error, Result};
pub use json::JsonModel;
pub use request::{FormPart, Operation, Params, Payload, ServiceClient};
