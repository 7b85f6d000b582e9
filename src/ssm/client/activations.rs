use super::SsmClient;
use crate::error::Error;
use crate::models::{
    CreateActivationRequest, CreateActivationResult, DeleteActivationRequest,
    DeleteActivationResult, DescribeActivationsRequest, DescribeActivationsResult,
};

impl SsmClient {
    /// Creates an activation for registering on-premises machines. The
    /// activation code in the result is only returned once.
    pub fn create_activation(
        &self,
        request: &CreateActivationRequest,
    ) -> Result<CreateActivationResult, Error> {
        self.call("CreateActivation", request)
    }

    /// Lists activations, optionally filtered.
    pub fn describe_activations(
        &self,
        request: &DescribeActivationsRequest,
    ) -> Result<DescribeActivationsResult, Error> {
        self.call("DescribeActivations", request)
    }

    /// Deletes an activation. Instances already registered with it stay
    /// registered.
    pub fn delete_activation(
        &self,
        request: &DeleteActivationRequest,
    ) -> Result<DeleteActivationResult, Error> {
        self.call("DeleteActivation", request)
    }
}
