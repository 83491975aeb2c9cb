use bytes::Bytes;
use http::Method;
use watson_core::{FormPart, Operation, Payload, Result, validate};

fn document_form(
    file: Option<&Bytes>,
    filename: Option<&str>,
    file_content_type: Option<&str>,
    metadata: Option<&str>,
) -> Payload {
    let mut parts = Vec::new();
    if let Some(file) = file {
        parts.push(FormPart::file("file", file.clone(), filename, file_content_type));
    }
    if let Some(metadata) = metadata {
        parts.push(FormPart::text("metadata", metadata));
    }
    Payload::Multipart(parts)
}

/// Upload a document to a collection
///
/// Metadata is a JSON object as text, e.g. `{"Creator": "Johnny Appleseed"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDocumentOptions {
    environment_id: String,
    collection_id: String,
    file: Option<Bytes>,
    filename: Option<String>,
    file_content_type: Option<String>,
    metadata: Option<String>,
}

impl AddDocumentOptions {
    pub fn builder() -> AddDocumentOptionsBuilder {
        AddDocumentOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> AddDocumentOptionsBuilder {
        AddDocumentOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            file: self.file.clone(),
            filename: self.filename.clone(),
            file_content_type: self.file_content_type.clone(),
            metadata: self.metadata.clone(),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub const fn file(&self) -> Option<&Bytes> {
        self.file.as_ref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn file_content_type(&self) -> Option<&str> {
        self.file_content_type.as_deref()
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
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
            "v1",
            "environments",
            &self.environment_id,
            "collections",
            &self.collection_id,
            "documents",
        ]
    }

    fn payload(&self) -> Result<Payload> {
        Ok(document_form(
            self.file.as_ref(),
            self.filename.as_deref(),
            self.file_content_type.as_deref(),
            self.metadata.as_deref(),
        ))
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddDocumentOptionsBuilder {
    environment_id: Option<String>,
    collection_id: Option<String>,
    file: Option<Bytes>,
    filename: Option<String>,
    file_content_type: Option<String>,
    metadata: Option<String>,
}

impl AddDocumentOptionsBuilder {
    pub fn new(environment_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            collection_id: Some(collection_id.into()),
            ..Self::default()
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.collection_id = Some(collection_id.into());
        self
    }

    pub fn file(mut self, file: impl Into<Bytes>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn file_content_type(mut self, file_content_type: impl Into<String>) -> Self {
        self.file_content_type = Some(file_content_type.into());
        self
    }

    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn build(self) -> Result<AddDocumentOptions> {
        let environment_id = validate::not_empty(self.environment_id, "environment_id")?;
        let collection_id = validate::not_empty(self.collection_id, "collection_id")?;
        validate::file_has_name(self.file.as_ref(), self.filename.as_deref())?;
        validate::file_or_metadata(self.file.as_ref(), self.metadata.as_deref())?;

        Ok(AddDocumentOptions {
            environment_id,
            collection_id,
            file: self.file,
            filename: self.filename,
            file_content_type: self.file_content_type,
            metadata: self.metadata,
        })
    }
}

/// Replace a document, or add it under the given id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDocumentOptions {
    environment_id: String,
    collection_id: String,
    document_id: String,
    file: Option<Bytes>,
    filename: Option<String>,
    file_content_type: Option<String>,
    metadata: Option<String>,
}

impl UpdateDocumentOptions {
    pub fn builder() -> UpdateDocumentOptionsBuilder {
        UpdateDocumentOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> UpdateDocumentOptionsBuilder {
        UpdateDocumentOptionsBuilder {
            environment_id: Some(self.environment_id.clone()),
            collection_id: Some(self.collection_id.clone()),
            document_id: Some(self.document_id.clone()),
            file: self.file.clone(),
            filename: self.filename.clone(),
            file_content_type: self.file_content_type.clone(),
            metadata: self.metadata.clone(),
        }
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub const fn file(&self) -> Option<&Bytes> {
        self.file.as_ref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn file_content_type(&self) -> Option<&str> {
        self.file_content_type.as_deref()
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
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
            "v1",
            "environments",
            &self.environment_id,
            "collections",
            &self.collection_id,
            "documents",
            &self.document_id,
        ]
    }

    fn payload(&self) -> Result<Payload> {
        Ok(document_form(
            self.file.as_ref(),
            self.filename.as_deref(),
            self.file_content_type.as_deref(),
            self.metadata.as_deref(),
        ))
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct UpdateDocumentOptionsBuilder {
    environment_id: Option<String>,
    collection_id: Option<String>,
    document_id: Option<String>,
    file: Option<Bytes>,
    filename: Option<String>,
    file_content_type: Option<String>,
    metadata: Option<String>,
}

impl UpdateDocumentOptionsBuilder {
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            collection_id: Some(collection_id.into()),
            document_id: Some(document_id.into()),
            ..Self::default()
        }
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
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

    pub fn file(mut self, file: impl Into<Bytes>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn file_content_type(mut self, file_content_type: impl Into<String>) -> Self {
        self.file_content_type = Some(file_content_type.into());
        self
    }

    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn build(self) -> Result<UpdateDocumentOptions> {
        let environment_id = validate::not_empty(self.environment_id, "environment_id")?;
        let collection_id = validate::not_empty(self.collection_id, "collection_id")?;
        let document_id = validate::not_empty(self.document_id, "document_id")?;
        validate::file_has_name(self.file.as_ref(), self.filename.as_deref())?;
        validate::file_or_metadata(self.file.as_ref(), self.metadata.as_deref())?;

        Ok(UpdateDocumentOptions {
            environment_id,
            collection_id,
            document_id,
            file: self.file,
            filename: self.filename,
            file_content_type: self.file_content_type,
            metadata: self.metadata,
        })
    }
}

/// Identifies one document in a collection
#[derive(Debug, Clone, Default)]
struct DocumentRefBuilder {
    environment_id: Option<String>,
    collection_id: Option<String>,
    document_id: Option<String>,
}

impl DocumentRefBuilder {
    fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            collection_id: Some(collection_id.into()),
            document_id: Some(document_id.into()),
        }
    }

    fn validate(self) -> Result<(String, String, String)> {
        Ok((
            validate::not_empty(self.environment_id, "environment_id")?,
            validate::not_empty(self.collection_id, "collection_id")?,
            validate::not_empty(self.document_id, "document_id")?,
        ))
    }
}

/// Fetch the processing status of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDocumentStatusOptions {
    environment_id: String,
    collection_id: String,
    document_id: String,
}

impl GetDocumentStatusOptions {
    pub fn builder() -> GetDocumentStatusOptionsBuilder {
        GetDocumentStatusOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> GetDocumentStatusOptionsBuilder {
        GetDocumentStatusOptionsBuilder::new(&self.environment_id, &self.collection_id, &self.document_id)
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}

impl Operation for GetDocumentStatusOptions {
    fn operation_id(&self) -> &'static str {
        "get_document_status"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "collections",
            &self.collection_id,
            "documents",
            &self.document_id,
        ]
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct GetDocumentStatusOptionsBuilder(DocumentRefBuilder);

impl GetDocumentStatusOptionsBuilder {
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self(DocumentRefBuilder::new(environment_id, collection_id, document_id))
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.0.environment_id = Some(environment_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.0.collection_id = Some(collection_id.into());
        self
    }

    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.0.document_id = Some(document_id.into());
        self
    }

    pub fn build(self) -> Result<GetDocumentStatusOptions> {
        let (environment_id, collection_id, document_id) = self.0.validate()?;
        Ok(GetDocumentStatusOptions {
            environment_id,
            collection_id,
            document_id,
        })
    }
}

/// Delete a document from a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDocumentOptions {
    environment_id: String,
    collection_id: String,
    document_id: String,
}

impl DeleteDocumentOptions {
    pub fn builder() -> DeleteDocumentOptionsBuilder {
        DeleteDocumentOptionsBuilder::default()
    }

    pub fn to_builder(&self) -> DeleteDocumentOptionsBuilder {
        DeleteDocumentOptionsBuilder::new(&self.environment_id, &self.collection_id, &self.document_id)
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}

impl Operation for DeleteDocumentOptions {
    fn operation_id(&self) -> &'static str {
        "delete_document"
    }

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path_segments(&self) -> Vec<&str> {
        vec![
            "v1",
            "environments",
            &self.environment_id,
            "collections",
            &self.collection_id,
            "documents",
            &self.document_id,
        ]
    }
}

#[derive(Debug, Clone, Default)]
#[must_use]
pub struct DeleteDocumentOptionsBuilder(DocumentRefBuilder);

impl DeleteDocumentOptionsBuilder {
    pub fn new(
        environment_id: impl Into<String>,
        collection_id: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self(DocumentRefBuilder::new(environment_id, collection_id, document_id))
    }

    pub fn environment_id(mut self, environment_id: impl Into<String>) -> Self {
        self.0.environment_id = Some(environment_id.into());
        self
    }

    pub fn collection_id(mut self, collection_id: impl Into<String>) -> Self {
        self.0.collection_id = Some(collection_id.into());
        self
    }

    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.0.document_id = Some(document_id.into());
        self
    }

    pub fn build(self) -> Result<DeleteDocumentOptions> {
        let (environment_id, collection_id, document_id) = self.0.validate()?;
        Ok(DeleteDocumentOptions {
            environment_id,
            collection_id,
            document_id,
        })
    }
}
