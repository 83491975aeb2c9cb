use http::Method;
use serde::Serialize;
use serde_with::skip_serializing_none;
use watson_core::{Operation, Payload, Result, validate};

use crate::v1::model::CredentialDetails;

#[skip_serializing_none]
#[derive(Serialize)]
struct CredentialsBody<'a> {
    source_type: Option<&'a str>,
    credential_details: Option<&'a CredentialDetails>,
    status: Option<&'a str>,
}

/// Store credentials for a connected source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCredentialsOptions {
    environment_id: String,
    source_type: Option<String>,
    credential_details: Option<CredentialDetails>,
    status: Option<String>,
}

impl CreateCredentialsOptions {
    pub fn builder() -> CreateCredentialsOptionsBuilder {
        CreateCredentialsOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> CreateCredentialsOptionsBuilder {
        CreateCredentialsOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            source_type: self.source_type.clone(),
            credential_details: self.credential_details.clone(),
            status: self.status.clone(),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    /// One of [`SourceType`](crate::v1::SourceType)
    pub fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }

    pub const fn credential_details(&self) -> Option<&CredentialDetails> {
        self.credential_details.as_ref()
    }

    /// One of [`CredentialsStatus`](crate::v1::CredentialsStatus)
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Operation for CreateCredentialsOptions {
    fn operation_id(&self) -> &'static str {
        "create_credentials"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "environments", &self.environment_id, "credentials"]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&CredentialsBody {
            source_type: self.source_type.as_deref(),
            credential_details: self.credential_details.as_ref(),
            status: self.status.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateCredentialsOptionsBuilder {
    environment_id: Option<String>,
    source_type: Option<String>,
    credential_details: Option<CredentialDetails>,
    status: Option<String>,
}

impl CreateCredentialsOptionsBuilder {
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            ..Self::default()
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    pub fn credential_details(mut self, credential_details: CredentialDetails) -> Self {
        self.credential_details = Some(credential_details);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn build(self) -> Result<CreateCredentialsOptions> {
        Ok(CreateCredentialsOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            source_type: self.source_type,
            credential_details: self.credential_details,
            status: self.status,
        })
    }
}

/// Replace stored credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCredentialsOptions {
    environment_id: String,
    credential_id: String,
    source_type: Option<String>,
    credential_details: Option<CredentialDetails>,
    status: Option<String>,
}

impl UpdateCredentialsOptions {
    pub fn builder() -> UpdateCredentialsOptionsBuilder {
        UpdateCredentialsOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateCredentialsOptionsBuilder {
        UpdateCredentialsOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            credential_id: Some(self.credential_id.clone()),
            source_type: self.source_type.clone(),
            credential_details: self.credential_details.clone(),
            status: self.status.clone(),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }

    pub fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }

    pub const fn credential_details(&self) -> Option<&CredentialDetails> {
        self.credential_details.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Operation for UpdateCredentialsOptions {
    fn operation_id(&self) -> &'static str {
        "update_credentials"
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "credentials",
            &self.credential_id,
        ]
    }

    fn payload(&self) -> Result<Payload> {
        Payload::json(&CredentialsBody {
            source_type: self.source_type.as_deref(),
            credential_details: self.credential_details.as_ref(),
            status: self.status.as_deref(),
        })
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct UpdateCredentialsOptionsBuilder {
    environment_id: Option<String>,
    credential_id: Option<String>,
    source_type: Option<String>,
    credential_details: Option<CredentialDetails>,
    status: Option<String>,
}

impl UpdateCredentialsOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, credential_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            credential_id: Some(credential_id.into()),
            ..Self::default()
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn credential_id(mut self, credential_id: impl Into<String>) -> Self {
        self.credential_id = Some(credential_id.into());
        self
    }

    pub fn source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    pub fn credential_details(mut self, credential_details: CredentialDetails) -> Self {
        self.credential_details = Some(credential_details);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn build(self) -> Result<UpdateCredentialsOptions> {
        Ok(UpdateCredentialsOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            credential_id: validate::not_empty(self.credential_id, "credential_id")?,
            source_type: self.source_type,
            credential_details: self.credential_details,
            status: self.status,
        })
    }
}

/// Fetch stored credentials; secrets are never returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCredentialsOptions {
    environment_id: String,
    credential_id: String,
}

impl GetCredentialsOptions {
    pub fn builder() -> GetCredentialsOptionsBuilder {
        GetCredentialsOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> GetCredentialsOptionsBuilder {
        GetCredentialsOptionsBuilder::new(&self.environment_id, &self.credential_id)
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }
}

impl Operation for GetCredentialsOptions {
    fn operation_id(&self) -> &'static str {
        "get_credentials"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "credentials",
            &self.credential_id,
        ]
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct GetCredentialsOptionsBuilder {
    environment_id: Option<String>,
    credential_id: Option<String>,
}

impl GetCredentialsOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, credential_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            credential_id: Some(credential_id.into()),
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn credential_id(mut self, credential_id: impl Into<String>) -> Self {
        self.credential_id = Some(credential_id.into());
        self
    }

    pub fn build(self) -> Result<GetCredentialsOptions> {
        Ok(GetCredentialsOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            credential_id: validate::not_empty(self.credential_id, "credential_id")?,
        })
    }
}

/// Delete stored credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCredentialsOptions {
    environment_id: String,
    credential_id: String,
}

impl DeleteCredentialsOptions {
    pub fn builder() -> DeleteCredentialsOptionsBuilder {
        DeleteCredentialsOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> DeleteCredentialsOptionsBuilder {
        DeleteCredentialsOptionsBuilder::new(&self.environment_id, &self.credential_id)
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }
}

impl Operation for DeleteCredentialsOptions {
    fn operation_id(&self) -> &'static str {
        "delete_credentials"
    }

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "credentials",
            &self.credential_id,
        ]
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct DeleteCredentialsOptionsBuilder {
    environment_id: Option<String>,
    credential_id: Option<String>,
}

impl DeleteCredentialsOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, credential_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            credential_id: Some(credential_id.into()),
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn credential_id(mut self, credential_id: impl Into<String>) -> Self {
        self.credential_id = Some(credential_id.into());
        self
    }

    pub fn build(self) -> Result<DeleteCredentialsOptions> {
        Ok(DeleteCredentialsOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
            credential_id: validate::not_empty(self.credential_id, "credential_id")?,
        })
    }
}

/// List the credentials stored in an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCredentialsOptions {
    environment_id: String,
}

impl ListCredentialsOptions {
    pub fn builder() -> ListCredentialsOptionsBuilder {
        ListCredentialsOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> ListCredentialsOptionsBuilder {
        ListCredentialsOptionsBuilder::new(&self.environment_id)
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }
}

impl Operation for ListCredentialsOptions {
    fn operation_id(&self) -> &'static str {
        "list_credentials"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["v1", "environments", &self.environment_id, "credentials"]
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ListCredentialsOptionsBuilder {
    environment_id: Option<String>,
}

impl ListCredentialsOptionsBuilder {
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn build(self) -> Result<ListCredentialsOptions> {
        Ok(ListCredentialsOptions {
            environment_id: validate::not_empty(self.environment_id, "environment_id")?,
        })
    }
}
