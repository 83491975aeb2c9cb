use watson_config::ServiceConfig;
use watson_core::{Result, ServiceClient, validate};

/// Service name used in logs and configuration
pub const SERVICE_NAME: &str = "discovery";

/// Public `us-south` endpoint
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.discovery.watson.cloud.ibm.com";

/// Client for the default endpoint pinned to an API version
pub(crate) fn client(version: String) -> Result<ServiceClient> {
    let version = validate::not_empty(Some(version), "version")?;
    tracing::debug!("Initialized {SERVICE_NAME} client for API version {version}");
    Ok(ServiceClient::parse(SERVICE_NAME, DEFAULT_SERVICE_URL)?.with_version(version))
}

/// Client from a config section, which must carry a version
pub(crate) fn client_from_config(config: &ServiceConfig) -> Result<ServiceClient> {
    validate::not_empty(config.version.clone(), "version")?;
    ServiceClient::from_config(SERVICE_NAME, DEFAULT_SERVICE_URL, config)
}
