use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::common::Tag;
use crate::error::UnknownEnumValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    Windows,
    AmazonLinux,
    AmazonLinux2,
    Ubuntu,
    RedhatEnterpriseLinux,
    Suse,
    Centos,
    OracleLinux,
    Debian,
}

impl OperatingSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "WINDOWS",
            OperatingSystem::AmazonLinux => "AMAZON_LINUX",
            OperatingSystem::AmazonLinux2 => "AMAZON_LINUX_2",
            OperatingSystem::Ubuntu => "UBUNTU",
            OperatingSystem::RedhatEnterpriseLinux => "REDHAT_ENTERPRISE_LINUX",
            OperatingSystem::Suse => "SUSE",
            OperatingSystem::Centos => "CENTOS",
            OperatingSystem::OracleLinux => "ORACLE_LINUX",
            OperatingSystem::Debian => "DEBIAN",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<OperatingSystem> for String {
    fn from(value: OperatingSystem) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for OperatingSystem {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WINDOWS" => Ok(OperatingSystem::Windows),
            "AMAZON_LINUX" => Ok(OperatingSystem::AmazonLinux),
            "AMAZON_LINUX_2" => Ok(OperatingSystem::AmazonLinux2),
            "UBUNTU" => Ok(OperatingSystem::Ubuntu),
            "REDHAT_ENTERPRISE_LINUX" => Ok(OperatingSystem::RedhatEnterpriseLinux),
            "SUSE" => Ok(OperatingSystem::Suse),
            "CENTOS" => Ok(OperatingSystem::Centos),
            "ORACLE_LINUX" => Ok(OperatingSystem::OracleLinux),
            "DEBIAN" => Ok(OperatingSystem::Debian),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

/// What happens to a rejected patch that another patch depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchAction {
    AllowAsDependency,
    Block,
}

impl PatchAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchAction::AllowAsDependency => "ALLOW_AS_DEPENDENCY",
            PatchAction::Block => "BLOCK",
        }
    }
}

impl fmt::Display for PatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PatchAction> for String {
    fn from(value: PatchAction) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for PatchAction {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALLOW_AS_DEPENDENCY" => Ok(PatchAction::AllowAsDependency),
            "BLOCK" => Ok(PatchAction::Block),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchComplianceLevel {
    Critical,
    High,
    Medium,
    Low,
    Informational,
    Unspecified,
}

impl PatchComplianceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchComplianceLevel::Critical => "CRITICAL",
            PatchComplianceLevel::High => "HIGH",
            PatchComplianceLevel::Medium => "MEDIUM",
            PatchComplianceLevel::Low => "LOW",
            PatchComplianceLevel::Informational => "INFORMATIONAL",
            PatchComplianceLevel::Unspecified => "UNSPECIFIED",
        }
    }
}

impl fmt::Display for PatchComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PatchComplianceLevel> for String {
    fn from(value: PatchComplianceLevel) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for PatchComplianceLevel {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" => Ok(PatchComplianceLevel::Critical),
            "HIGH" => Ok(PatchComplianceLevel::High),
            "MEDIUM" => Ok(PatchComplianceLevel::Medium),
            "LOW" => Ok(PatchComplianceLevel::Low),
            "INFORMATIONAL" => Ok(PatchComplianceLevel::Informational),
            "UNSPECIFIED" => Ok(PatchComplianceLevel::Unspecified),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PatchFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl PatchFilter {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PatchFilterGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_filters: Option<Vec<PatchFilter>>,
}

impl PatchFilterGroup {
    pub fn with_patch_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = PatchFilter>,
    {
        self.patch_filters
            .get_or_insert_with(Vec::new)
            .extend(filters);
        self
    }
}

/// One auto-approval rule inside a baseline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PatchRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_filter_group: Option<PatchFilterGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approve_after_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_non_security: Option<bool>,
}

impl PatchRule {
    pub fn with_patch_filter_group(mut self, group: PatchFilterGroup) -> Self {
        self.patch_filter_group = Some(group);
        self
    }

    /// Accepts a [`PatchComplianceLevel`] constant or a raw string.
    pub fn with_compliance_level(mut self, level: impl Into<String>) -> Self {
        self.compliance_level = Some(level.into());
        self
    }

    pub fn with_approve_after_days(mut self, days: i32) -> Self {
        self.approve_after_days = Some(days);
        self
    }

    pub fn with_enable_non_security(mut self, enable: bool) -> Self {
        self.enable_non_security = Some(enable);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PatchRuleGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_rules: Option<Vec<PatchRule>>,
}

impl PatchRuleGroup {
    pub fn with_patch_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = PatchRule>,
    {
        self.patch_rules.get_or_insert_with(Vec::new).extend(rules);
        self
    }
}

/// Alternate patch repository for Linux baselines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PatchSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
}

impl PatchSource {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products
            .get_or_insert_with(Vec::new)
            .extend(products.into_iter().map(Into::into));
        self
    }

    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreatePatchBaselineRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_filters: Option<PatchFilterGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rules: Option<PatchRuleGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_compliance_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_enable_non_security: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<PatchSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreatePatchBaselineRequest {
    pub fn with_operating_system(mut self, operating_system: impl Into<String>) -> Self {
        self.operating_system = Some(operating_system.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_global_filters(mut self, filters: PatchFilterGroup) -> Self {
        self.global_filters = Some(filters);
        self
    }

    pub fn with_approval_rules(mut self, rules: PatchRuleGroup) -> Self {
        self.approval_rules = Some(rules);
        self
    }

    pub fn with_approved_patches<I, S>(mut self, patches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.approved_patches
            .get_or_insert_with(Vec::new)
            .extend(patches.into_iter().map(Into::into));
        self
    }

    pub fn with_approved_patches_compliance_level(mut self, level: impl Into<String>) -> Self {
        self.approved_patches_compliance_level = Some(level.into());
        self
    }

    pub fn with_approved_patches_enable_non_security(mut self, enable: bool) -> Self {
        self.approved_patches_enable_non_security = Some(enable);
        self
    }

    pub fn with_rejected_patches<I, S>(mut self, patches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rejected_patches
            .get_or_insert_with(Vec::new)
            .extend(patches.into_iter().map(Into::into));
        self
    }

    pub fn with_rejected_patches_action(mut self, action: impl Into<String>) -> Self {
        self.rejected_patches_action = Some(action.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = PatchSource>,
    {
        self.sources.get_or_insert_with(Vec::new).extend(sources);
        self
    }

    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
        self
    }

    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreatePatchBaselineResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetPatchBaselineRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<String>,
}

impl GetPatchBaselineRequest {
    pub fn with_baseline_id(mut self, baseline_id: impl Into<String>) -> Self {
        self.baseline_id = Some(baseline_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetPatchBaselineResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_filters: Option<PatchFilterGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rules: Option<PatchRuleGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_compliance_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_enable_non_security: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<PatchSource>>,
}

impl GetPatchBaselineResult {
    pub fn operating_system_enum(&self) -> Option<Result<OperatingSystem, UnknownEnumValue>> {
        self.operating_system.as_deref().map(str::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdatePatchBaselineRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_filters: Option<PatchFilterGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rules: Option<PatchRuleGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_compliance_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_enable_non_security: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<PatchSource>>,
    /// When true, unset optional request fields reset the stored
    /// baseline fields instead of leaving them unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
}

impl UpdatePatchBaselineRequest {
    pub fn with_baseline_id(mut self, baseline_id: impl Into<String>) -> Self {
        self.baseline_id = Some(baseline_id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_global_filters(mut self, filters: PatchFilterGroup) -> Self {
        self.global_filters = Some(filters);
        self
    }

    pub fn with_approval_rules(mut self, rules: PatchRuleGroup) -> Self {
        self.approval_rules = Some(rules);
        self
    }

    pub fn with_approved_patches<I, S>(mut self, patches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.approved_patches
            .get_or_insert_with(Vec::new)
            .extend(patches.into_iter().map(Into::into));
        self
    }

    pub fn with_approved_patches_compliance_level(mut self, level: impl Into<String>) -> Self {
        self.approved_patches_compliance_level = Some(level.into());
        self
    }

    pub fn with_approved_patches_enable_non_security(mut self, enable: bool) -> Self {
        self.approved_patches_enable_non_security = Some(enable);
        self
    }

    pub fn with_rejected_patches<I, S>(mut self, patches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rejected_patches
            .get_or_insert_with(Vec::new)
            .extend(patches.into_iter().map(Into::into));
        self
    }

    pub fn with_rejected_patches_action(mut self, action: impl Into<String>) -> Self {
        self.rejected_patches_action = Some(action.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = PatchSource>,
    {
        self.sources.get_or_insert_with(Vec::new).extend(sources);
        self
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdatePatchBaselineResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_filters: Option<PatchFilterGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rules: Option<PatchRuleGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_compliance_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_patches_enable_non_security: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_patches_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<PatchSource>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeletePatchBaselineRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<String>,
}

impl DeletePatchBaselineRequest {
    pub fn with_baseline_id(mut self, baseline_id: impl Into<String>) -> Self {
        self.baseline_id = Some(baseline_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeletePatchBaselineResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_rule_group_serializes_with_wire_names() {
        let request = CreatePatchBaselineRequest::default()
            .with_name("prod-linux")
            .with_operating_system(OperatingSystem::AmazonLinux2)
            .with_approval_rules(PatchRuleGroup::default().with_patch_rules([PatchRule::default()
                .with_patch_filter_group(PatchFilterGroup::default().with_patch_filters([
                    PatchFilter::default()
                        .with_key("CLASSIFICATION")
                        .with_values(["Security"]),
                ]))
                .with_compliance_level(PatchComplianceLevel::Critical)
                .with_approve_after_days(7)]));
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["OperatingSystem"], "AMAZON_LINUX_2");
        let rule = &json["ApprovalRules"]["PatchRules"][0];
        assert_eq!(rule["ComplianceLevel"], "CRITICAL");
        assert_eq!(rule["ApproveAfterDays"], 7);
        assert_eq!(
            rule["PatchFilterGroup"]["PatchFilters"][0]["Key"],
            "CLASSIFICATION"
        );
        assert!(json.get("Description").is_none());
    }

    #[test]
    fn enum_and_string_actions_compare_equal() {
        let typed = UpdatePatchBaselineRequest::default()
            .with_rejected_patches_action(PatchAction::Block);
        let raw = UpdatePatchBaselineRequest::default().with_rejected_patches_action("BLOCK");
        assert_eq!(typed, raw);
    }

    #[test]
    fn baseline_result_parses_operating_system() {
        let result: GetPatchBaselineResult = serde_json::from_str(
            r#"{"BaselineId":"pb-0c1","OperatingSystem":"UBUNTU","CreatedDate":1.5E9}"#,
        )
        .expect("deserialize");
        assert_eq!(
            result.operating_system_enum(),
            Some(Ok(OperatingSystem::Ubuntu))
        );
        assert_eq!(result.created_date, Some(1.5e9));
    }
}
