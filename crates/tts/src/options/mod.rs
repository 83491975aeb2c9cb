//! Text to Speech option objects

mod customization;
mod synthesize;
mod voices;

pub use customization::*;
pub use synthesize::*;
pub use voices::*;
