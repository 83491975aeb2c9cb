//! Discovery v1 resource and request body models

mod aggregation;
mod configuration;
mod credentials;
mod documents;
mod enrichment;
mod events;
mod query;
mod source;

pub use aggregation::*;
pub use configuration::*;
pub use credentials::*;
pub use documents::*;
pub use enrichment::*;
pub use events::*;
pub use query::*;
pub use source::*;
