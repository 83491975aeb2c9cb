//! Discovery v2 resource models

mod classifier;
mod collection;
mod documents;
mod notices;
mod query;
mod training;

pub use classifier::*;
pub use collection::*;
pub use documents::*;
pub use notices::*;
pub use query::*;
pub use training::*;
