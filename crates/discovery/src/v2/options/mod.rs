//! Discovery v2 option objects

mod classifiers;
mod collections;
mod documents;
mod query;
mod training;

pub use classifiers::*;
pub use collections::*;
pub use documents::*;
pub use query::*;
pub use training::*;
