//! Discovery v1: environments, collections, configurations and credentials

pub mod model;
pub mod options;

use http::Request;
use url::Url;
use watson_config::ServiceConfig;
use watson_core::{Operation, Payload, Result, ServiceClient};

pub use model::*;
pub use options::*;

/// Discovery v1 service
///
/// Every request carries the `version` query parameter.
#[derive(Debug, Clone)]
pub struct Discovery {
    client: ServiceClient,
}

impl Discovery {
    /// Service at the public endpoint for API version `version` (`YYYY-MM-DD`)
    pub fn new(version: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: crate::service::client(version.into())?,
        })
    }

    /// Service described by a config section
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            client: crate::service::client_from_config(config)?,
        })
    }

    /// Point the service at another URL, e.g. a dedicated instance
    #[must_use]
    pub fn with_service_url(mut self, url: Url) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    pub const fn client(&self) -> &ServiceClient {
        &self.client
    }

    /// Describe the HTTP request for `operation`
    pub fn prepare<O: Operation + ?Sized>(&self, operation: &O) -> Result<Request<Payload>> {
        self.client.prepare(operation)
    }
}
