use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{Result, string_constants, validate};

/// A connected source the collection crawls
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// One of [`SourceType`]
    #[serde(rename = "type")]
    pub source_type: Option<String>,
    /// Credentials used to connect, see `CreateCredentialsOptions`
    pub credential_id: Option<String>,
    pub schedule: Option<SourceSchedule>,
    pub options: Option<SourceOptions>,
}

/// Kinds of connected sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SourceType {
    Box,
    Salesforce,
    Sharepoint,
    WebCrawl,
    CloudObjectStorage,
}

/// When the source is crawled
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSchedule {
    pub enabled: Option<bool>,
    /// IANA time zone, e.g. `America/New_York`
    pub time_zone: Option<String>,
    /// One of [`SourceScheduleFrequency`]
    pub frequency: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SourceScheduleFrequency {
    Daily,
    Weekly,
    Monthly,
    FiveMinutes,
    Hourly,
}

string_constants!(SourceType, SourceScheduleFrequency);

/// What to crawl; only the list matching the source type applies
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOptions {
    /// Box folders
    pub folders: Option<Vec<SourceOptionsFolder>>,
    /// Salesforce objects
    pub objects: Option<Vec<SourceOptionsObject>>,
    /// SharePoint site collections
    pub site_collections: Option<Vec<SourceOptionsSiteColl>>,
    /// Web crawl start points
    pub urls: Option<Vec<SourceOptionsWebCrawl>>,
    /// Cloud Object Storage buckets
    pub buckets: Option<Vec<SourceOptionsBuckets>>,
    pub crawl_all_buckets: Option<bool>,
}

impl SourceOptions {
    #[must_use]
    pub fn add_folder(mut self, folder: SourceOptionsFolder) -> Self {
        self.folders.get_or_insert_with(Vec::new).push(folder);
        self
    }

    #[must_use]
    pub fn add_object(mut self, object: SourceOptionsObject) -> Self {
        self.objects.get_or_insert_with(Vec::new).push(object);
        self
    }

    #[must_use]
    pub fn add_site_collection(mut self, site_collection: SourceOptionsSiteColl) -> Self {
        self.site_collections.get_or_insert_with(Vec::new).push(site_collection);
        self
    }

    #[must_use]
    pub fn add_url(mut self, url: SourceOptionsWebCrawl) -> Self {
        self.urls.get_or_insert_with(Vec::new).push(url);
        self
    }

    #[must_use]
    pub fn add_bucket(mut self, bucket: SourceOptionsBuckets) -> Self {
        self.buckets.get_or_insert_with(Vec::new).push(bucket);
        self
    }
}

/// A Box folder to crawl
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOptionsFolder {
    pub owner_user_id: String,
    pub folder_id: String,
    /// Maximum documents to crawl
    pub limit: Option<i64>,
}

impl SourceOptionsFolder {
    pub fn new(owner_user_id: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            owner_user_id: owner_user_id.into(),
            folder_id: folder_id.into(),
            limit: None,
        }
    }
}

/// A Salesforce object to crawl
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOptionsObject {
    pub name: String,
    pub limit: Option<i64>,
}

impl SourceOptionsObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit: None,
        }
    }
}

/// A SharePoint site collection to crawl
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOptionsSiteColl {
    /// Server-relative path, e.g. `/sites/TestSiteA`
    pub site_collection_path: String,
    pub limit: Option<i64>,
}

impl SourceOptionsSiteColl {
    pub fn new(site_collection_path: impl Into<String>) -> Self {
        Self {
            site_collection_path: site_collection_path.into(),
            limit: None,
        }
    }
}

/// A Cloud Object Storage bucket to crawl
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOptionsBuckets {
    pub name: String,
    pub limit: Option<i64>,
}

impl SourceOptionsBuckets {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit: None,
        }
    }
}

/// A web site to crawl
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOptionsWebCrawl {
    url: String,
    limit_to_starting_hosts: Option<bool>,
    crawl_speed: Option<String>,
    allow_untrusted_certificate: Option<bool>,
    maximum_hops: Option<i64>,
    request_timeout: Option<i64>,
    override_robots_txt: Option<bool>,
    blacklist: Option<Vec<String>>,
}

impl SourceOptionsWebCrawl {
    pub fn builder() -> SourceOptionsWebCrawlBuilder {
        SourceOptionsWebCrawlBuilder::default()
    }

    pub fn to_builder(&self) -> SourceOptionsWebCrawlBuilder {
        SourceOptionsWebCrawlBuilder {
            url: Some(self.url.clone()),
            limit_to_starting_hosts: self.limit_to_starting_hosts,
            crawl_speed: self.crawl_speed.clone(),
            allow_untrusted_certificate: self.allow_untrusted_certificate,
            maximum_hops: self.maximum_hops,
            request_timeout: self.request_timeout,
            override_robots_txt: self.override_robots_txt,
            blacklist: self.blacklist.clone(),
        }
    }

    /// Starting URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Only follow links to the starting host
    pub const fn limit_to_starting_hosts(&self) -> Option<bool> {
        self.limit_to_starting_hosts
    }

    /// One of [`CrawlSpeed`]
    pub fn crawl_speed(&self) -> Option<&str> {
        self.crawl_speed.as_deref()
    }

    pub const fn allow_untrusted_certificate(&self) -> Option<bool> {
        self.allow_untrusted_certificate
    }

    pub const fn maximum_hops(&self) -> Option<i64> {
        self.maximum_hops
    }

    /// Milliseconds before a page request is abandoned
    pub const fn request_timeout(&self) -> Option<i64> {
        self.request_timeout
    }

    pub const fn override_robots_txt(&self) -> Option<bool> {
        self.override_robots_txt
    }

    /// URL prefixes never crawled
    pub fn blacklist(&self) -> Option<&[String]> {
        self.blacklist.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct SourceOptionsWebCrawlBuilder {
    url: Option<String>,
    limit_to_starting_hosts: Option<bool>,
    crawl_speed: Option<String>,
    allow_untrusted_certificate: Option<bool>,
    maximum_hops: Option<i64>,
    request_timeout: Option<i64>,
    override_robots_txt: Option<bool>,
    blacklist: Option<Vec<String>>,
}

impl SourceOptionsWebCrawlBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub const fn limit_to_starting_hosts(mut self, limit: bool) -> Self {
        self.limit_to_starting_hosts = Some(limit);
        self
    }

    pub fn crawl_speed(mut self, crawl_speed: impl Into<String>) -> Self {
        self.crawl_speed = Some(crawl_speed.into());
        self
    }

    pub const fn allow_untrusted_certificate(mut self, allow: bool) -> Self {
        self.allow_untrusted_certificate = Some(allow);
        self
    }

    pub const fn maximum_hops(mut self, hops: i64) -> Self {
        self.maximum_hops = Some(hops);
        self
    }

    pub const fn request_timeout(mut self, millis: i64) -> Self {
        self.request_timeout = Some(millis);
        self
    }

    pub const fn override_robots_txt(mut self, override_robots_txt: bool) -> Self {
        self.override_robots_txt = Some(override_robots_txt);
        self
    }

    pub fn blacklist(mut self, blacklist: Vec<String>) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    pub fn add_blacklist(mut self, prefix: impl Into<String>) -> Self {
        self.blacklist.get_or_insert_with(Vec::new).push(prefix.into());
        self
    }

    pub fn build(self) -> Result<SourceOptionsWebCrawl> {
        Ok(SourceOptionsWebCrawl {
            url: validate::not_null(self.url, "url")?,
            limit_to_starting_hosts: self.limit_to_starting_hosts,
            crawl_speed: self.crawl_speed,
            allow_untrusted_certificate: self.allow_untrusted_certificate,
            maximum_hops: self.maximum_hops,
            request_timeout: self.request_timeout,
            override_robots_txt: self.override_robots_txt,
            blacklist: self.blacklist,
        })
    }
}

/// How fast a web crawl requests pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CrawlSpeed {
    Gentle,
    Normal,
    Aggressive,
}

string_constants!(CrawlSpeed);

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use watson_core::{JsonModel, constants::literals};

    use super::*;

    #[test]
    fn web_crawl_requires_url() {
        let err = SourceOptionsWebCrawl::builder().maximum_hops(2).build().unwrap_err();
        assert_eq!(err.to_string(), "url cannot be null");
    }

    #[test]
    fn web_crawl_preserves_fields() {
        let crawl = SourceOptionsWebCrawlBuilder::new("https://www.ibm.com")
            .limit_to_starting_hosts(true)
            .crawl_speed(CrawlSpeed::Aggressive)
            .allow_untrusted_certificate(false)
            .maximum_hops(3)
            .request_timeout(30_000)
            .override_robots_txt(false)
            .add_blacklist("https://www.ibm.com/private")
            .add_blacklist("https://www.ibm.com/archive")
            .build()
            .unwrap();

        assert_eq!(crawl.url(), "https://www.ibm.com");
        assert_eq!(crawl.limit_to_starting_hosts(), Some(true));
        assert_eq!(crawl.crawl_speed(), Some("aggressive"));
        assert_eq!(crawl.allow_untrusted_certificate(), Some(false));
        assert_eq!(crawl.maximum_hops(), Some(3));
        assert_eq!(crawl.request_timeout(), Some(30_000));
        assert_eq!(crawl.override_robots_txt(), Some(false));
        assert_eq!(crawl.blacklist().map(<[String]>::len), Some(2));
        assert_eq!(crawl.to_builder().build().unwrap(), crawl);
    }

    #[test]
    fn source_json_round_trip() {
        let source = Source {
            source_type: Some(SourceType::WebCrawl.into()),
            credential_id: Some("cred-1".to_owned()),
            schedule: Some(SourceSchedule {
                enabled: Some(true),
                time_zone: Some("America/New_York".to_owned()),
                frequency: Some(SourceScheduleFrequency::FiveMinutes.into()),
            }),
            options: Some(
                SourceOptions::default()
                    .add_url(SourceOptionsWebCrawlBuilder::new("https://example.com").build().unwrap())
                    .add_folder(SourceOptionsFolder::new("user", "folder"))
                    .add_bucket(SourceOptionsBuckets::new("docs"))
                    .add_object(SourceOptionsObject::new("Account"))
                    .add_site_collection(SourceOptionsSiteColl::new("/sites/TestSiteA")),
            ),
        };

        let value = source.to_json_value().unwrap();
        assert_eq!(value["type"], "web_crawl");
        assert_eq!(value["schedule"]["frequency"], "five_minutes");

        assert_eq!(Source::from_json_value(value).unwrap(), source);
    }

    #[test]
    fn folder_requires_ids_on_the_wire() {
        let err = Source::from_json(indoc! {r#"
            { "type": "box", "options": { "folders": [{ "folder_id": "123" }] } }
        "#})
        .unwrap_err();
        assert!(err.to_string().contains("owner_user_id"));
    }

    #[test]
    fn constant_groups() {
        assert_eq!(
            literals::<SourceType>(),
            ["box", "salesforce", "sharepoint", "web_crawl", "cloud_object_storage"]
        );
        assert_eq!(
            literals::<SourceScheduleFrequency>(),
            ["daily", "weekly", "monthly", "five_minutes", "hourly"]
        );
        assert_eq!(literals::<CrawlSpeed>(), ["gentle", "normal", "aggressive"]);
    }
}
