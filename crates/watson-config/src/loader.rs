use std::path::Path;

use crate::{Config, ServiceConfig};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, the TOML is malformed, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`], minus the file access
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        tracing::debug!("Loaded configuration for {} service(s)", config.services().count());

        Ok(config)
    }

    /// Build configuration from `<SERVICE>_URL` / `<SERVICE>_VERSION` variables
    ///
    /// # Errors
    ///
    /// Returns an error if a URL variable is malformed or validation fails
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self {
            discovery: ServiceConfig::from_env("DISCOVERY")?,
            speech_to_text: ServiceConfig::from_env("SPEECH_TO_TEXT")?,
            text_to_speech: ServiceConfig::from_env("TEXT_TO_SPEECH")?,
            logging: crate::LoggingConfig::default(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if no service is configured or a service section
    /// has a bad URL scheme, version date, or header
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.services().next().is_none() {
            anyhow::bail!("at least one service must be configured (discovery, speech_to_text, or text_to_speech)");
        }

        for (name, service) in self.services() {
            validate_service(name, service)?;
        }

        if let Some(ref discovery) = self.discovery
            && discovery.version.is_none()
        {
            anyhow::bail!("discovery.version is required");
        }

        Ok(())
    }
}

fn validate_service(name: &str, service: &ServiceConfig) -> anyhow::Result<()> {
    if let Some(ref url) = service.url
        && !matches!(url.scheme(), "http" | "https")
    {
        anyhow::bail!("{name}.url must use http or https, got '{}'", url.scheme());
    }

    if let Some(ref version) = service.version {
        // `YYYY-MM-DD` exactly; jiff also accepts other ISO 8601 spellings
        if version.len() != 10 {
            anyhow::bail!("{name}.version must be a YYYY-MM-DD date, got '{version}'");
        }
        version
            .parse::<jiff::civil::Date>()
            .map_err(|e| anyhow::anyhow!("{name}.version must be a YYYY-MM-DD date, got '{version}': {e}"))?;
    }

    for (header, value) in &service.headers {
        http::HeaderName::from_bytes(header.as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid header name '{header}' for {name}: {e}"))?;
        http::HeaderValue::from_str(value)
            .map_err(|e| anyhow::anyhow!("invalid value for header '{header}' on {name}: {e}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use indoc::indoc;

    use crate::LogFormat;

    use super::*;

    #[test]
    fn parse_all_services() {
        let config = Config::parse(indoc! {r#"
            [discovery]
            version = "2019-04-30"

            [speech_to_text]
            url = "https://api.eu-gb.speech-to-text.watson.cloud.ibm.com"

            [text_to_speech]
            headers = { X-Watson-Learning-Opt-Out = "true" }

            [logging]
            format = "json"
        "#})
        .unwrap();

        assert_eq!(config.services().count(), 3);
        assert_eq!(config.discovery.unwrap().version.as_deref(), Some("2019-04-30"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.text_to_speech.unwrap().headers["X-Watson-Learning-Opt-Out"], "true");
    }

    #[test]
    fn requires_a_service() {
        let err = Config::parse("[logging]\nfilter = \"debug\"").unwrap_err();
        assert!(err.to_string().contains("at least one service"));
    }

    #[test]
    fn discovery_requires_version() {
        let err = Config::parse("[discovery]").unwrap_err();
        assert_eq!(err.to_string(), "discovery.version is required");
    }

    #[test]
    fn rejects_malformed_version() {
        for version in ["2019-4-30", "2019-02-30", "yesterday", "2019-04-30T00:00:00"] {
            let raw = format!("[speech_to_text]\nversion = \"{version}\"");
            let err = Config::parse(&raw).unwrap_err();
            assert!(err.to_string().contains("YYYY-MM-DD"), "{version}: {err}");
        }
    }

    #[test]
    fn rejects_non_http_url() {
        let err = Config::parse("[text_to_speech]\nurl = \"ftp://example.com\"").unwrap_err();
        assert!(err.to_string().contains("must use http or https"));
    }

    #[test]
    fn rejects_invalid_header() {
        let err = Config::parse("[text_to_speech]\nheaders = { \"bad name\" = \"x\" }").unwrap_err();
        assert!(err.to_string().contains("invalid header name"));
    }

    #[test]
    fn rejects_unknown_section() {
        let err = Config::parse("[assistant]\nversion = \"2021-06-14\"").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn load_expands_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            indoc! {r#"
                [discovery]
                url = "{{ env.WATSON_LOADER_URL }}"
                version = "{{ env.WATSON_LOADER_VERSION | default("2023-03-31") }}"
            "#}
            .as_bytes(),
        )
        .unwrap();

        temp_env::with_vars(
            [
                ("WATSON_LOADER_URL", Some("https://discovery.example.com/instances/7")),
                ("WATSON_LOADER_VERSION", None),
            ],
            || {
                let config = Config::load(file.path()).unwrap();
                let discovery = config.discovery.unwrap();
                assert_eq!(discovery.url.unwrap().path(), "/instances/7");
                assert_eq!(discovery.version.as_deref(), Some("2023-03-31"));
            },
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("watson.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn from_env_collects_services() {
        temp_env::with_vars(
            [
                ("DISCOVERY_URL", None),
                ("DISCOVERY_VERSION", Some("2019-04-30")),
                ("SPEECH_TO_TEXT_URL", None),
                ("SPEECH_TO_TEXT_VERSION", None),
                ("TEXT_TO_SPEECH_URL", Some("https://tts.example.com")),
                ("TEXT_TO_SPEECH_VERSION", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                let names: Vec<_> = config.services().map(|(name, _)| name).collect();
                assert_eq!(names, ["discovery", "text_to_speech"]);
            },
        );
    }
}
