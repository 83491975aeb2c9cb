//! Speech to Text option objects

#[macro_use]
mod params;

mod customization;
mod jobs;
mod models;
mod recognize;
mod resources;
mod websocket;

pub use customization::*;
pub use jobs::*;
pub use models::*;
pub use recognize::*;
pub use resources::*;
pub use websocket::*;
