use indexmap::IndexMap;
use serde::Deserialize;
use url::Url;

/// Endpoint settings for one service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Service URL override; the public `us-south` endpoint is used when unset
    #[serde(default)]
    pub url: Option<Url>,
    /// API version date (`YYYY-MM-DD`)
    #[serde(default)]
    pub version: Option<String>,
    /// Headers sent with every request
    #[serde(default)]
    pub headers: IndexMap<String, String>,
}

impl ServiceConfig {
    /// Read `<PREFIX>_URL` and `<PREFIX>_VERSION` from the environment
    ///
    /// The prefix is the service name in upper case, e.g. `DISCOVERY` or
    /// `SPEECH_TO_TEXT`, matching the `ibm-credentials.env` naming.
    /// Returns `None` when neither variable is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL variable is not a valid URL
    pub fn from_env(prefix: &str) -> anyhow::Result<Option<Self>> {
        let prefix = prefix.to_ascii_uppercase();
        let url = read_var(&format!("{prefix}_URL"));
        let version = read_var(&format!("{prefix}_VERSION"));

        if url.is_none() && version.is_none() {
            return Ok(None);
        }

        let url = url
            .map(|raw| Url::parse(&raw).map_err(|e| anyhow::anyhow!("invalid {prefix}_URL '{raw}': {e}")))
            .transpose()?;

        tracing::debug!("Loaded {prefix} service settings from environment");

        Ok(Some(Self {
            url,
            version,
            headers: IndexMap::new(),
        }))
    }

    /// Configured URL, or `default` when none is set
    ///
    /// # Errors
    ///
    /// Returns an error if `default` is not a valid URL
    pub fn url_or(&self, default: &str) -> anyhow::Result<Url> {
        match self.url {
            Some(ref url) => Ok(url.clone()),
            None => Url::parse(default).map_err(|e| anyhow::anyhow!("invalid default URL '{default}': {e}")),
        }
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
