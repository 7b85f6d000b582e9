use super::SsmClient;
use crate::error::Error;
use crate::models::{
    CreateDocumentRequest, CreateDocumentResult, DeleteDocumentRequest, DeleteDocumentResult,
    DescribeDocumentRequest, DescribeDocumentResult, GetDocumentRequest, GetDocumentResult,
};

impl SsmClient {
    /// Registers a new document from its content.
    pub fn create_document(
        &self,
        request: &CreateDocumentRequest,
    ) -> Result<CreateDocumentResult, Error> {
        self.call("CreateDocument", request)
    }

    /// Fetches a document's content and attachments.
    pub fn get_document(&self, request: &GetDocumentRequest) -> Result<GetDocumentResult, Error> {
        self.call("GetDocument", request)
    }

    /// Fetches a document's metadata without its content.
    pub fn describe_document(
        &self,
        request: &DescribeDocumentRequest,
    ) -> Result<DescribeDocumentResult, Error> {
        self.call("DescribeDocument", request)
    }

    /// Deletes a document and all of its versions.
    pub fn delete_document(
        &self,
        request: &DeleteDocumentRequest,
    ) -> Result<DeleteDocumentResult, Error> {
        self.call("DeleteDocument", request)
    }
}
