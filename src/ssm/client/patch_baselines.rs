use super::SsmClient;
use crate::error::Error;
use crate::models::{
    CreatePatchBaselineRequest, CreatePatchBaselineResult, DeletePatchBaselineRequest,
    DeletePatchBaselineResult, GetPatchBaselineRequest, GetPatchBaselineResult,
    UpdatePatchBaselineRequest, UpdatePatchBaselineResult,
};

impl SsmClient {
    /// Creates a patch baseline for one operating system.
    pub fn create_patch_baseline(
        &self,
        request: &CreatePatchBaselineRequest,
    ) -> Result<CreatePatchBaselineResult, Error> {
        self.call("CreatePatchBaseline", request)
    }

    /// Retrieves a patch baseline.
    pub fn get_patch_baseline(
        &self,
        request: &GetPatchBaselineRequest,
    ) -> Result<GetPatchBaselineResult, Error> {
        self.call("GetPatchBaseline", request)
    }

    /// Modifies a patch baseline.
    pub fn update_patch_baseline(
        &self,
        request: &UpdatePatchBaselineRequest,
    ) -> Result<UpdatePatchBaselineResult, Error> {
        self.call("UpdatePatchBaseline", request)
    }

    /// Deletes a patch baseline.
    pub fn delete_patch_baseline(
        &self,
        request: &DeletePatchBaselineRequest,
    ) -> Result<DeletePatchBaselineResult, Error> {
        self.call("DeletePatchBaseline", request)
    }
}
