use super::SsmClient;
use crate::error::Error;
use crate::models::{
    DeleteParameterRequest, DeleteParameterResult, GetParameterRequest, GetParameterResult,
    GetParametersByPathRequest, GetParametersByPathResult, GetParametersRequest,
    GetParametersResult, LabelParameterVersionRequest, LabelParameterVersionResult,
    PutParameterRequest, PutParameterResult,
};

impl SsmClient {
    /// Creates or overwrites a parameter.
    pub fn put_parameter(&self, request: &PutParameterRequest) -> Result<PutParameterResult, Error> {
        self.call("PutParameter", request)
    }

    /// Retrieves one parameter by name, optionally decrypting
    /// `SecureString` values.
    pub fn get_parameter(&self, request: &GetParameterRequest) -> Result<GetParameterResult, Error> {
        self.call("GetParameter", request)
    }

    /// Retrieves up to ten parameters by name. Names that do not exist
    /// come back in the result's invalid list rather than failing the
    /// call.
    pub fn get_parameters(
        &self,
        request: &GetParametersRequest,
    ) -> Result<GetParametersResult, Error> {
        self.call("GetParameters", request)
    }

    /// Lists parameters under a hierarchy path.
    pub fn get_parameters_by_path(
        &self,
        request: &GetParametersByPathRequest,
    ) -> Result<GetParametersByPathResult, Error> {
        self.call("GetParametersByPath", request)
    }

    /// Deletes a parameter.
    pub fn delete_parameter(
        &self,
        request: &DeleteParameterRequest,
    ) -> Result<DeleteParameterResult, Error> {
        self.call("DeleteParameter", request)
    }

    /// Attaches labels to a specific parameter version.
    pub fn label_parameter_version(
        &self,
        request: &LabelParameterVersionRequest,
    ) -> Result<LabelParameterVersionResult, Error> {
        self.call("LabelParameterVersion", request)
    }
}
