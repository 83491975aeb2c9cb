//! Discovery v1 option objects, one per API call

mod configurations;
mod credentials;
mod documents;
mod events;
mod query;

pub use configurations::*;
pub use credentials::*;
pub use documents::*;
pub use events::*;
pub use query::*;
