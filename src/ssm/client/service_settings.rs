use super::SsmClient;
use crate::error::Error;
use crate::models::{
    GetServiceSettingRequest, GetServiceSettingResult, ResetServiceSettingRequest,
    ResetServiceSettingResult, UpdateServiceSettingRequest, UpdateServiceSettingResult,
};

impl SsmClient {
    /// Reads an account-level setting.
    pub fn get_service_setting(
        &self,
        request: &GetServiceSettingRequest,
    ) -> Result<GetServiceSettingResult, Error> {
        self.call("GetServiceSetting", request)
    }

    /// Overrides an account-level setting.
    pub fn update_service_setting(
        &self,
        request: &UpdateServiceSettingRequest,
    ) -> Result<UpdateServiceSettingResult, Error> {
        self.call("UpdateServiceSetting", request)
    }

    /// Restores an account-level setting to its service default.
    pub fn reset_service_setting(
        &self,
        request: &ResetServiceSettingRequest,
    ) -> Result<ResetServiceSettingResult, Error> {
        self.call("ResetServiceSetting", request)
    }
}
