//! Speech to Text resource and result models

mod custom;
mod jobs;
mod multipart;
mod recognition;
mod speech_model;

pub use custom::*;
pub use jobs::*;
pub use multipart::*;
pub use recognition::*;
pub use speech_model::*;
