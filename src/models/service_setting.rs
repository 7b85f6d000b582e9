use serde::{Deserialize, Serialize};

/// Account-level setting state, including who changed it last and
/// whether it still holds the service default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServiceSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_user: Option<String>,
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// `Default`, `Customized`, or `PendingUpdate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetServiceSettingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_id: Option<String>,
}

impl GetServiceSettingRequest {
    pub fn with_setting_id(mut self, setting_id: impl Into<String>) -> Self {
        self.setting_id = Some(setting_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetServiceSettingResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_setting: Option<ServiceSetting>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateServiceSettingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_value: Option<String>,
}

impl UpdateServiceSettingRequest {
    pub fn with_setting_id(mut self, setting_id: impl Into<String>) -> Self {
        self.setting_id = Some(setting_id.into());
        self
    }

    pub fn with_setting_value(mut self, setting_value: impl Into<String>) -> Self {
        self.setting_value = Some(setting_value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateServiceSettingResult {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResetServiceSettingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_id: Option<String>,
}

impl ResetServiceSettingRequest {
    pub fn with_setting_id(mut self, setting_id: impl Into<String>) -> Self {
        self.setting_id = Some(setting_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResetServiceSettingResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_setting: Option<ServiceSetting>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_uses_upper_case_arn_member() {
        let setting = ServiceSetting {
            setting_id: Some("/ssm/parameter-store/high-throughput-enabled".to_string()),
            arn: Some("arn:aws:ssm:us-east-1:111:servicesetting/ssm".to_string()),
            status: Some("Customized".to_string()),
            ..ServiceSetting::default()
        };
        let json = serde_json::to_value(&setting).expect("serialize");
        assert_eq!(json["ARN"], "arn:aws:ssm:us-east-1:111:servicesetting/ssm");
        assert!(json.get("Arn").is_none());
        assert!(json.get("SettingValue").is_none());
    }

    #[test]
    fn update_request_round_trips() {
        let request = UpdateServiceSettingRequest::default()
            .with_setting_id("/ssm/parameter-store/high-throughput-enabled")
            .with_setting_value("true");
        let json = serde_json::to_string(&request).expect("serialize");
        let restored: UpdateServiceSettingRequest =
            serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, request);
    }
}
