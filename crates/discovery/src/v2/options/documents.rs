use bytes::Bytes;
use http::Method;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use watson_core::{FormPart, Operation, Params, Payload, Result, string_constants, validate};

const FORCE_HEADER: &str = "X-Watson-Discovery-Force";

/// Content types accepted for uploaded documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum DocumentContentType {
    #[strum(serialize = "application/json")]
    Json,
    #[strum(serialize = "application/msword")]
    Msword,
    #[strum(serialize = "application/vnd.openxmlformats-officedocument.wordprocessingml.document")]
    Docx,
    #[strum(serialize = "application/pdf")]
    Pdf,
    #[strum(serialize = "text/html")]
    Html,
    #[strum(serialize = "application/xhtml+xml")]
    Xhtml,
}

/// Document states accepted by the `status` filter of [`ListDocumentsOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ListDocumentsStatus {
    Available,
    Failed,
    Pending,
    Processing,
}

string_constants!(DocumentContentType, ListDocumentsStatus);

/// File and metadata parts shared by the upload options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Upload {
    file: Option<Bytes>,
    filename: Option<String>,
    file_content_type: Option<String>,
    metadata: Option<String>,
}

impl Upload {
    fn check(&self) -> Result<()> {
        validate::file_has_name(self.file.as_ref(), self.filename.as_deref())?;
        validate::file_or_metadata(self.file.as_ref(), self.metadata.as_deref())
    }

    fn form(&self) -> Payload {
        let mut parts = Vec::new();
        if let Some(ref file) = self.file {
            parts.push(FormPart::file(
                "file",
                file.clone(),
                self.filename.as_deref(),
                self.file_content_type.as_deref(),
            ));
        }
        if let Some(ref metadata) = self.metadata {
            parts.push(FormPart::text("metadata", metadata.as_str()));
        }
        Payload::Multipart(parts)
    }
}

fn force_header(force: Option<bool>) -> Params {
    let mut headers = Params::new();
    headers.push_opt(FORCE_HEADER, force);
    headers
}

macro_rules! upload_accessors {
    () => {
        pub const fn file(&self) -> Option<&Bytes> {
            self.upload.file.as_ref()
        }

        pub fn filename(&self) -> Option<&str> {
            self.upload.filename.as_deref()
        }

        /// One of [`DocumentContentType`]
        pub fn file_content_type(&self) -> Option<&str> {
            self.upload.file_content_type.as_deref()
        }

        /// JSON object as text
        pub fn metadata(&self) -> Option<&str> {
            self.upload.metadata.as_deref()
        }
    };
}

macro_rules! upload_setters {
    () => {
        pub fn file(mut self, file: impl Into<Bytes>) -> Self {
            self.upload.file = Some(file.into());
            self
        }

        pub fn filename(mut self, filename: impl Into<String>) -> Self {
            self.upload.filename = Some(filename.into());
            self
        }

        pub fn file_content_type(mut self, file_content_type: impl Into<String>) -> Self {
            self.upload.file_content_type = Some(file_content_type.into());
            self
        }

        pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
            self.upload.metadata = Some(metadata.into());
            self
        }
    };
}

/// List the documents of a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDocumentsOptions {
    project_id: String,
    collection_id: String,
    count: Option<i64>,
    status: Option<String>,
    has_notices: Option<bool>,
    is_parent: Option<bool>,
    parent_document_id: Option<String>,
    sha256: Option<String>,
}

impl ListDocumentsOptions {
    pub fn builder() -> ListDocumentsOptionsBuilder {
        ListDocumentsOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> ListDocumentsOptionsBuilder {
        ListDocumentsOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            count: self.count,
            status: self.status.clone(),
            has_notices: self.has_notices,
            is_parent: self.is_parent,
            parent_document_id: self.parent_document_id.clone(),
            sha256: self.sha256.clone(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub const fn count(&self) -> Option<i64> {
        self.count
    }

    /// Comma separated [`ListDocumentsStatus`] values
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub const fn has_notices(&self) -> Option<bool> {
        self.has_notices
    }

    pub const fn is_parent(&self) -> Option<bool> {
        self.is_parent
    }

    pub fn parent_document_id(&self) -> Option<&str> {
        self.parent_document_id.as_deref()
    }

    pub fn sha256(&self) -> Option<&str> {
        self.sha256.as_deref()
    }
}

impl Operation for ListDocumentsOptions {
    fn operation_id(&self) -> &'static str {
        "list_documents"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v2",
            "projects",
            &self.project_id,
            "collections",
            &self.collection_id,
            "documents",
        ]
    }

    fn query_params(&self) -> Params {
        let mut query = Params::new();
        query
            .push_opt("count", self.count)
            .push_opt("status", self.status.as_deref())
            .push_opt("has_notices", self.has_notices)
            .push_opt("is_parent", self.is_parent)
            .push_opt("parent_document_id", self.parent_document_id.as_deref())
            .push_opt("sha256", self.sha256.as_deref());
        query
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ListDocumentsOptionsBuilder {
    project_id: Option<String>,
    collection_id: Option<String>,
    count: Option<i64>,
    status: Option<String>,
    has_notices: Option<bool>,
    is_parent: Option<bool>,
    parent_document_id: Option<String>,
    sha256: Option<String>,
}

impl ListDocumentsOptionsBuilder {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            ..Self::default()
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    pub const fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub const fn has_notices(mut self, has_notices: bool) -> Self {
        self.has_notices = Some(has_notices);
        self
    }

    pub const fn is_parent(mut self, is_parent: bool) -> Self {
        self.is_parent = Some(is_parent);
        self
    }

    pub fn parent_document_id(mut self, parent_document_id: impl Into<String>) -> Self {
        self.parent_document_id = Some(parent_document_id.into());
        self
    }

    pub fn sha256(mut self, sha256: impl Into<String>) -> Self {
        self.sha256 = Some(sha256.into());
        self
    }

    pub fn build(self) -> Result<ListDocumentsOptions> {
        Ok(ListDocumentsOptions {
            project_id: validate::not_empty(self.project_id, "project_id")?,
            collection_id: validate::not_empty(self.collection_id, "collection_id")?,
            count: self.count,
            status: self.status,
            has_notices: self.has_notices,
            is_parent: self.is_parent,
            parent_document_id: self.parent_document_id,
            sha256: self.sha256,
        })
    }
}

/// Upload a document to a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDocumentOptions {
    project_id: String,
    collection_id: String,
    upload: Upload,
    x_watson_discovery_force: Option<bool>,
}

impl AddDocumentOptions {
    pub fn builder() -> AddDocumentOptionsBuilder {
        AddDocumentOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> AddDocumentOptionsBuilder {
        AddDocumentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            upload: self.upload.clone(),
            x_watson_discovery_force: self.x_watson_discovery_force,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    upload_accessors!();

    /// Replace an existing document with the same content hash
    pub const fn x_watson_discovery_force(&self) -> Option<bool> {
        self.x_watson_discovery_force
    }
}

impl Operation for AddDocumentOptions {
    fn operation_id(&self) -> &'static str {
        "add_document"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v2",
            "projects",
            &self.project_id,
            "collections",
            &self.collection_id,
            "documents",
        ]
    }

    fn headers(&self) -> Params {
        force_header(self.x_watson_discovery_force)
    }

    fn payload(&self) -> Result<Payload> {
        Ok(self.upload.form())
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddDocumentOptionsBuilder {
    project_id: Option<String>,
    collection_id: Option<String>,
    upload: Upload,
    x_watson_discovery_force: Option<bool>,
}

impl AddDocumentOptionsBuilder {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            ..Self::default()
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    upload_setters!();

    pub const fn x_watson_discovery_force(mut self, force: bool) -> Self {
        self.x_watson_discovery_force = Some(force);
        self
    }

    pub fn build(self) -> Result<AddDocumentOptions> {
        let project_id = validate::not_empty(self.project_id, "project_id")?;
        let collection_id = validate::not_empty(self.collection_id, "collection_id")?;
        self.upload.check()?;

        Ok(AddDocumentOptions {
            project_id,
            collection_id,
            upload: self.upload,
            x_watson_discovery_force: self.x_watson_discovery_force,
        })
    }
}

/// Replace a document, or add it under the given id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDocumentOptions {
    project_id: String,
    collection_id: String,
    document_id: String,
    upload: Upload,
    x_watson_discovery_force: Option<bool>,
}

impl UpdateDocumentOptions {
    pub fn builder() -> UpdateDocumentOptionsBuilder {
        UpdateDocumentOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateDocumentOptionsBuilder {
        UpdateDocumentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            document_id: Some(self.document_id.clone()),
            upload: self.upload.clone(),
            x_watson_discovery_force: self.x_watson_discovery_force,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    upload_accessors!();

    pub const fn x_watson_discovery_force(&self) -> Option<bool> {
        self.x_watson_discovery_force
    }
}

impl Operation for UpdateDocumentOptions {
    fn operation_id(&self) -> &'static str {
        "update_document"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v2",
            "projects",
            &self.project_id,
            "collections",
            &self.collection_id,
            "documents",
            &self.document_id,
        ]
    }

    fn headers(&self) -> Params {
        force_header(self.x_watson_discovery_force)
    }

    fn payload(&self) -> Result<Payload> {
        Ok(self.upload.form())
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct UpdateDocumentOptionsBuilder {
    project_id: Option<String>,
    collection_id: Option<String>,
    document_id: Option<String>,
    upload: Upload,
    x_watson_discovery_force: Option<bool>,
}

impl UpdateDocumentOptionsBuilder {
    pub fn new(
        project_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            document_id: Some(document_id.into()),
            ..Self::default()
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    upload_setters!();

    pub const fn x_watson_discovery_force(mut self, force: bool) -> Self {
        self.x_watson_discovery_force = Some(force);
        self
    }

    pub fn build(self) -> Result<UpdateDocumentOptions> {
        let project_id = validate::not_empty(self.project_id, "project_id")?;
        let collection_id = validate::not_empty(self.collection_id, "collection_id")?;
        let document_id = validate::not_empty(self.document_id, "document_id")?;
        self.upload.check()?;

        Ok(UpdateDocumentOptions {
            project_id,
            collection_id,
            document_id,
            upload: self.upload,
            x_watson_discovery_force: self.x_watson_discovery_force,
        })
    }
}

/// Run a document through the collection's enrichments without indexing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeDocumentOptions {
    project_id: String,
    collection_id: String,
    upload: Upload,
}

impl AnalyzeDocumentOptions {
    pub fn builder() -> AnalyzeDocumentOptionsBuilder {
        AnalyzeDocumentOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> AnalyzeDocumentOptionsBuilder {
        AnalyzeDocumentOptionsBuilder {
            project_id: Some(self.project_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            upload: self.upload.clone(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    upload_accessors!();
}

impl Operation for AnalyzeDocumentOptions {
    fn operation_id(&self) -> &'static str {
        "analyze_document"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v2",
            "projects",
            &self.project_id,
            "collections",
            &self.collection_id,
            "analyze",
        ]
    }

    fn payload(&self) -> Result<Payload> {
        Ok(self.upload.form())
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AnalyzeDocumentOptionsBuilder {
    project_id: Option<String>,
    collection_id: Option<String>,
    upload: Upload,
}

impl AnalyzeDocumentOptionsBuilder {
    pub fn new(project_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            collection_id: Some(collection_id.into()),
            upload: Upload::default(),
        }
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    upload_setters!();

    pub fn build(self) -> Result<AnalyzeDocumentOptions> {
        let project_id = validate::not_empty(self.project_id, "project_id")?;
        let collection_id = validate::not_empty(self.collection_id, "collection_id")?;
        self.upload.check()?;

        Ok(AnalyzeDocumentOptions {
            project_id,
            collection_id,
            upload: self.upload,
        })
    }
}
