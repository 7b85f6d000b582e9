use super::SsmClient;
use crate::error::Error;
use crate::models::{
    CreateOpsItemRequest, CreateOpsItemResult, GetOpsItemRequest, GetOpsItemResult,
    UpdateOpsItemRequest, UpdateOpsItemResult,
};

impl SsmClient {
    /// Opens a new ops item.
    pub fn create_ops_item(
        &self,
        request: &CreateOpsItemRequest,
    ) -> Result<CreateOpsItemResult, Error> {
        self.call("CreateOpsItem", request)
    }

    /// Retrieves an ops item by id.
    pub fn get_ops_item(&self, request: &GetOpsItemRequest) -> Result<GetOpsItemResult, Error> {
        self.call("GetOpsItem", request)
    }

    /// Edits an ops item's fields or transitions its status.
    pub fn update_ops_item(
        &self,
        request: &UpdateOpsItemRequest,
    ) -> Result<UpdateOpsItemResult, Error> {
        self.call("UpdateOpsItem", request)
    }
}
