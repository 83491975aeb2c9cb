//! Request descriptions for service operations
//!
//! Option objects implement [`Operation`]. A [`ServiceClient`] combines an
//! operation with the service URL, API version and default headers into an
//! `http::Request<Payload>`. Sending it is left to the caller.

use std::fmt::Display;

use bytes::Bytes;
use http::{
    HeaderMap, Method, Request,
    header::{self, HeaderName, HeaderValue},
};
use serde::Serialize;
use url::Url;
use watson_config::ServiceConfig;

use crate::{Error, Result};

const APPLICATION_JSON: &str = "application/json";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Body of a prepared request
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No body
    Empty,
    /// JSON document
    Json(serde_json::Value),
    /// Raw bytes such as audio
    Binary {
        /// MIME type of `data`
        content_type: String,
        /// Body bytes
        data: Bytes,
    },
    /// Multipart form
    Multipart(Vec<FormPart>),
}

impl Payload {
    /// Serialize a body struct into a JSON payload
    pub fn json<T: Serialize + ?Sized>(body: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(body)?))
    }

    /// Content type implied by the payload
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some(APPLICATION_JSON),
            Self::Binary { content_type, .. } => Some(content_type.as_str()),
            Self::Multipart(_) => Some(MULTIPART_FORM_DATA),
        }
    }

    /// JSON body, if any
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Form parts, if any
    pub fn parts(&self) -> Option<&[FormPart]> {
        match self {
            Self::Multipart(parts) => Some(parts),
            _ => None,
        }
    }
}

/// One part of a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    /// Form field name
    pub name: String,
    /// File name reported to the service
    pub filename: Option<String>,
    /// MIME type of the part
    pub content_type: Option<String>,
    /// Part contents
    pub data: Bytes,
}

impl FormPart {
    /// Plain text field
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: Some("text/plain".to_owned()),
            data: Bytes::from(value.into()),
        }
    }

    /// JSON field serialized from `value`
    pub fn json<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            filename: None,
            content_type: Some(APPLICATION_JSON.to_owned()),
            data: Bytes::from(serde_json::to_vec(value)?),
        })
    }

    /// File field
    pub fn file(
        name: impl Into<String>,
        data: Bytes,
        filename: Option<&str>,
        content_type: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            filename: filename.map(ToOwned::to_owned),
            content_type: Some(content_type.unwrap_or("application/octet-stream").to_owned()),
            data,
        }
    }

    /// Part contents as UTF-8 text
    pub fn text_value(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}

/// Ordered name/value pairs for query strings and headers
///
/// Unset values are skipped, lists are joined with commas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value
    pub fn push(&mut self, name: &'static str, value: impl Display) -> &mut Self {
        self.0.push((name, value.to_string()));
        self
    }

    /// Append a value when it is set
    pub fn push_opt<T: Display>(&mut self, name: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Append a comma separated list when it is set
    pub fn push_list(&mut self, name: &'static str, values: Option<&[String]>) -> &mut Self {
        if let Some(values) = values {
            self.push(name, values.join(","));
        }
        self
    }

    /// Value for `name`, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs in insertion order
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// A single API call described by an option object
pub trait Operation {
    /// Operation name used in logs
    fn operation_id(&self) -> &'static str;

    /// HTTP method
    fn method(&self) -> Method;

    /// Unencoded path segments below the service URL
    fn path_segments(&self) -> Vec<&str>;

    /// Query parameters other than `version`
    fn query_params(&self) -> Params {
        Params::new()
    }

    /// Headers specific to this call
    fn headers(&self) -> Params {
        Params::new()
    }

    /// Request body
    fn payload(&self) -> Result<Payload> {
        Ok(Payload::Empty)
    }
}

/// Endpoint settings for one service
#[derive(Debug, Clone)]
pub struct ServiceClient {
    service: &'static str,
    base_url: Url,
    version: Option<String>,
    headers: HeaderMap,
}

impl ServiceClient {
    /// Create a client for `service` rooted at `base_url`
    pub fn new(service: &'static str, base_url: Url) -> Self {
        Self {
            service,
            base_url,
            version: None,
            headers: HeaderMap::new(),
        }
    }

    /// Create a client from a URL string
    pub fn parse(service: &'static str, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self::new(service, base_url))
    }

    /// Create a client from a config section
    ///
    /// Falls back to `default_url` when the section has no URL. Configured
    /// headers become default headers.
    pub fn from_config(service: &'static str, default_url: &str, config: &ServiceConfig) -> Result<Self> {
        let mut client = match config.url {
            Some(ref url) => Self::new(service, url.clone()),
            None => Self::parse(service, default_url)?,
        };

        if let Some(ref version) = config.version {
            client = client.with_version(version.as_str());
        }

        for (name, value) in &config.headers {
            client = client.with_header(name, value)?;
        }

        tracing::debug!("Initialized {service} client for {}", client.base_url);

        Ok(client)
    }

    /// Set the API version date sent as the `version` query parameter
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Replace the service URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let (name, value) = header_pair(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub const fn service(&self) -> &'static str {
        self.service
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub const fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Full URL for an operation, including the query string
    pub fn url_for<O: Operation + ?Sized>(&self, operation: &O) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(operation.path_segments());

        let query = operation.query_params();
        if self.version.is_some() || !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if let Some(ref version) = self.version {
                pairs.append_pair("version", version);
            }
            for (name, value) in query.pairs() {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    /// Describe the HTTP request for an operation
    pub fn prepare<O: Operation + ?Sized>(&self, operation: &O) -> Result<Request<Payload>> {
        let url = self.url_for(operation)?;
        let payload = operation.payload()?;

        let mut request = Request::new(Payload::Empty);
        *request.method_mut() = operation.method();
        *request.uri_mut() = url
            .as_str()
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;

        let headers = request.headers_mut();
        headers.insert(header::ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if let Some(content_type) = payload.content_type() {
            let value = HeaderValue::from_str(content_type)
                .map_err(|e| Error::InvalidHeader(format!("content type {content_type}: {e}")))?;
            headers.insert(header::CONTENT_TYPE, value);
        }
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
        for (name, value) in operation.headers().pairs() {
            let (name, value) = header_pair(name, value)?;
            headers.insert(name, value);
        }

        *request.body_mut() = payload;

        tracing::debug!(
            "Prepared {} request {} {} for {}",
            operation.operation_id(),
            request.method(),
            url.path(),
            self.service
        );

        Ok(request)
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| Error::InvalidHeader(format!("{name}: {e}")))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader(format!("{name}: {e}")))?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GetDocument {
        collection_id: String,
        document_id: String,
    }

    impl Operation for GetDocument {
        fn operation_id(&self) -> &'static str {
            "get_document"
        }

        fn method(&self) -> Method {
            Method::GET
        }

        fn path_segments(&self) -> Vec<&str> {
            vec!["v1", "collections", &self.collection_id, "documents", &self.document_id]
        }

        fn query_params(&self) -> Params {
            let mut query = Params::new();
            query.push("count", 10).push_opt::<u8>("offset", None);
            query
        }

        fn headers(&self) -> Params {
            let mut headers = Params::new();
            headers.push("X-Watson-Logging-Opt-Out", true);
            headers
        }
    }

    struct Upload;

    impl Operation for Upload {
        fn operation_id(&self) -> &'static str {
            "upload"
        }

        fn method(&self) -> Method {
            Method::POST
        }

        fn path_segments(&self) -> Vec<&str> {
            vec!["v1", "recognize"]
        }

        fn headers(&self) -> Params {
            let mut headers = Params::new();
            headers.push("Accept", "audio/wav");
            headers
        }

        fn payload(&self) -> Result<Payload> {
            Ok(Payload::Binary {
                content_type: "audio/flac".to_owned(),
                data: Bytes::from_static(b"fLaC"),
            })
        }
    }

    fn operation() -> GetDocument {
        GetDocument {
            collection_id: "news".to_owned(),
            document_id: "a b/c".to_owned(),
        }
    }

    #[test]
    fn builds_url_with_version_first() {
        let client = ServiceClient::parse("discovery", "https://example.com/instances/42/")
            .unwrap()
            .with_version("2019-04-30");

        let url = client.url_for(&operation()).unwrap();

        assert_eq!(
            url.as_str(),
            "https://example.com/instances/42/v1/collections/news/documents/a%20b%2Fc?version=2019-04-30&count=10"
        );
    }

    #[test]
    fn omits_empty_query() {
        let client = ServiceClient::parse("speech_to_text", "https://example.com").unwrap();
        let url = client.url_for(&Upload).unwrap();

        assert_eq!(url.as_str(), "https://example.com/v1/recognize");
    }

    #[test]
    fn prepare_sets_headers() {
        let client = ServiceClient::parse("discovery", "https://example.com")
            .unwrap()
            .with_header("X-Custom", "yes")
            .unwrap();

        let request = client.prepare(&operation()).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.headers()["accept"], "application/json");
        assert_eq!(request.headers()["x-custom"], "yes");
        assert_eq!(request.headers()["x-watson-logging-opt-out"], "true");
        assert!(request.headers().get(header::CONTENT_TYPE).is_none());
        assert_eq!(request.body(), &Payload::Empty);
    }

    #[test]
    fn operation_headers_override_defaults() {
        let client = ServiceClient::parse("text_to_speech", "https://example.com").unwrap();
        let request = client.prepare(&Upload).unwrap();

        assert_eq!(request.headers()["accept"], "audio/wav");
        assert_eq!(request.headers()["content-type"], "audio/flac");
    }

    #[test]
    fn from_config_applies_section() {
        let mut config = ServiceConfig {
            version: Some("2021-08-01".to_owned()),
            ..ServiceConfig::default()
        };
        config.headers.insert("X-Watson-Learning-Opt-Out".to_owned(), "true".to_owned());

        let client = ServiceClient::from_config("speech_to_text", "https://stt.example.com", &config).unwrap();

        assert_eq!(client.base_url().as_str(), "https://stt.example.com/");
        assert_eq!(client.version(), Some("2021-08-01"));
        assert_eq!(client.default_headers()["x-watson-learning-opt-out"], "true");
    }

    #[test]
    fn from_config_prefers_configured_url() {
        let config = ServiceConfig {
            url: Some(Url::parse("https://eu.example.com/instances/9").unwrap()),
            ..ServiceConfig::default()
        };

        let client = ServiceClient::from_config("text_to_speech", "https://us.example.com", &config).unwrap();

        assert_eq!(client.base_url().as_str(), "https://eu.example.com/instances/9");
        assert_eq!(client.version(), None);
    }

    #[test]
    fn rejects_invalid_header() {
        let result = ServiceClient::parse("discovery", "https://example.com")
            .unwrap()
            .with_header("bad header", "x");

        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn rejects_non_base_url() {
        let client = ServiceClient::parse("discovery", "mailto:someone@example.com").unwrap();
        assert!(matches!(client.url_for(&Upload), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn params_skip_unset_values() {
        let mut params = Params::new();
        params
            .push_opt("a", Some(1))
            .push_opt::<i32>("b", None)
            .push_list("c", Some(&["x".to_owned(), "y".to_owned()][..]))
            .push_list("d", None);

        assert_eq!(params.pairs().collect::<Vec<_>>(), [("a", "1"), ("c", "x,y")]);
        assert_eq!(params.get("c"), Some("x,y"));
    }

    #[test]
    fn form_parts() {
        let part = FormPart::file("file", Bytes::from_static(b"%PDF"), Some("a.pdf"), None);
        assert_eq!(part.content_type.as_deref(), Some("application/octet-stream"));
        assert_eq!(part.filename.as_deref(), Some("a.pdf"));

        let metadata = FormPart::json("metadata", &serde_json::json!({"k": "v"})).unwrap();
        assert_eq!(metadata.text_value(), Some(r#"{"k":"v"}"#));
    }
}
