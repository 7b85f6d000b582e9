use super::SsmClient;
use crate::error::Error;
use crate::models::{
    CreateAssociationBatchRequest, CreateAssociationBatchResult, CreateAssociationRequest,
    CreateAssociationResult, DeleteAssociationRequest, DeleteAssociationResult,
    DescribeAssociationRequest, DescribeAssociationResult, UpdateAssociationRequest,
    UpdateAssociationResult,
};

impl SsmClient {
    /// Associates a document with targets so its state gets applied.
    pub fn create_association(
        &self,
        request: &CreateAssociationRequest,
    ) -> Result<CreateAssociationResult, Error> {
        self.call("CreateAssociation", request)
    }

    /// Creates several associations in one call. Entries that fail come
    /// back in the result's failed list.
    pub fn create_association_batch(
        &self,
        request: &CreateAssociationBatchRequest,
    ) -> Result<CreateAssociationBatchResult, Error> {
        self.call("CreateAssociationBatch", request)
    }

    /// Describes an association by id, or by document name plus
    /// instance id.
    pub fn describe_association(
        &self,
        request: &DescribeAssociationRequest,
    ) -> Result<DescribeAssociationResult, Error> {
        self.call("DescribeAssociation", request)
    }

    /// Updates an association. Omitted fields keep their stored values.
    pub fn update_association(
        &self,
        request: &UpdateAssociationRequest,
    ) -> Result<UpdateAssociationResult, Error> {
        self.call("UpdateAssociation", request)
    }

    /// Deletes an association.
    pub fn delete_association(
        &self,
        request: &DeleteAssociationRequest,
    ) -> Result<DeleteAssociationResult, Error> {
        self.call("DeleteAssociation", request)
    }
}
