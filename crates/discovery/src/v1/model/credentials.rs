use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::string_constants;

/// Authentication details for a connected source
///
/// Which fields apply depends on `credential_type` and the source type.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDetails {
    /// One of [`CredentialType`]
    pub credential_type: Option<String>,
    pub client_id: Option<String>,
    pub enterprise_id: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub organization_url: Option<String>,
    #[serde(rename = "site_collection.path")]
    pub site_collection_path: Option<String>,
    pub client_secret: Option<String>,
    pub public_key_id: Option<String>,
    pub private_key: Option<String>,
    pub passphrase: Option<String>,
    pub password: Option<String>,
    pub gateway_id: Option<String>,
    /// One of [`SourceVersion`]
    pub source_version: Option<String>,
    pub web_application_url: Option<String>,
    pub domain: Option<String>,
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CredentialType {
    #[strum(serialize = "oauth2")]
    Oauth2,
    Saml,
    UsernamePassword,
    Noauth,
    Basic,
    #[strum(serialize = "ntlm_v1")]
    NtlmV1,
    #[strum(serialize = "aws4_hmac")]
    Aws4Hmac,
}

/// SharePoint deployment flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum SourceVersion {
    Online,
}

/// A stored credential set
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub credential_id: Option<String>,
    /// One of [`SourceType`](super::SourceType)
    pub source_type: Option<String>,
    pub credential_details: Option<CredentialDetails>,
    /// One of [`CredentialsStatus`]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CredentialsStatus {
    Connected,
    Invalid,
}

string_constants!(CredentialType, SourceVersion, CredentialsStatus);

/// Response of `ListCredentialsOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsList {
    pub credentials: Option<Vec<Credentials>>,
}

/// Response of `DeleteCredentialsOptions`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCredentials {
    pub credential_id: Option<String>,
    pub status: Option<String>,
}
