//! Text to Speech resource models

mod custom;
mod prompt;
mod voice;

pub use custom::*;
pub use prompt::*;
pub use voice::*;
