use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::common::{InstanceAssociationOutputLocation, Target};
use crate::error::{Error, UnknownEnumValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationComplianceSeverity {
    Critical,
    High,
    Medium,
    Low,
    Unspecified,
}

impl AssociationComplianceSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssociationComplianceSeverity::Critical => "CRITICAL",
            AssociationComplianceSeverity::High => "HIGH",
            AssociationComplianceSeverity::Medium => "MEDIUM",
            AssociationComplianceSeverity::Low => "LOW",
            AssociationComplianceSeverity::Unspecified => "UNSPECIFIED",
        }
    }
}

impl fmt::Display for AssociationComplianceSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AssociationComplianceSeverity> for String {
    fn from(value: AssociationComplianceSeverity) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for AssociationComplianceSeverity {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" => Ok(AssociationComplianceSeverity::Critical),
            "HIGH" => Ok(AssociationComplianceSeverity::High),
            "MEDIUM" => Ok(AssociationComplianceSeverity::Medium),
            "LOW" => Ok(AssociationComplianceSeverity::Low),
            "UNSPECIFIED" => Ok(AssociationComplianceSeverity::Unspecified),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationSyncCompliance {
    Auto,
    Manual,
}

impl AssociationSyncCompliance {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssociationSyncCompliance::Auto => "AUTO",
            AssociationSyncCompliance::Manual => "MANUAL",
        }
    }
}

impl fmt::Display for AssociationSyncCompliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AssociationSyncCompliance> for String {
    fn from(value: AssociationSyncCompliance) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for AssociationSyncCompliance {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUTO" => Ok(AssociationSyncCompliance::Auto),
            "MANUAL" => Ok(AssociationSyncCompliance::Manual),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_compliance: Option<String>,
    /// When true, runs only on the cron schedule, not immediately on
    /// creation or update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_only_at_cron_interval: Option<bool>,
}

impl CreateAssociationRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
        self
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: Vec<String>,
    ) -> Result<Self, Error> {
        let key = key.into();
        let parameters = self.parameters.get_or_insert_with(HashMap::new);
        if parameters.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        parameters.insert(key, value);
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters = None;
        self
    }

    pub fn with_targets<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = Target>,
    {
        self.targets.get_or_insert_with(Vec::new).extend(targets);
        self
    }

    pub fn with_schedule_expression(mut self, expression: impl Into<String>) -> Self {
        self.schedule_expression = Some(expression.into());
        self
    }

    pub fn with_output_location(mut self, location: InstanceAssociationOutputLocation) -> Self {
        self.output_location = Some(location);
        self
    }

    pub fn with_association_name(mut self, name: impl Into<String>) -> Self {
        self.association_name = Some(name.into());
        self
    }

    pub fn with_automation_target_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.automation_target_parameter_name = Some(name.into());
        self
    }

    pub fn with_max_errors(mut self, max_errors: impl Into<String>) -> Self {
        self.max_errors = Some(max_errors.into());
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: impl Into<String>) -> Self {
        self.max_concurrency = Some(max_concurrency.into());
        self
    }

    /// Accepts an [`AssociationComplianceSeverity`] constant or a raw string.
    pub fn with_compliance_severity(mut self, severity: impl Into<String>) -> Self {
        self.compliance_severity = Some(severity.into());
        self
    }

    /// Accepts an [`AssociationSyncCompliance`] constant or a raw string.
    pub fn with_sync_compliance(mut self, sync_compliance: impl Into<String>) -> Self {
        self.sync_compliance = Some(sync_compliance.into());
        self
    }

    pub fn with_apply_only_at_cron_interval(mut self, apply: bool) -> Self {
        self.apply_only_at_cron_interval = Some(apply);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AssociationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl AssociationStatus {
    pub fn with_date(mut self, date: f64) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AssociationOverview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_status_aggregated_count: Option<HashMap<String, i32>>,
}

/// Full description of an association version.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AssociationDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_association_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssociationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<AssociationOverview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_execution_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_successful_execution_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_compliance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_only_at_cron_interval: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_description: Option<AssociationDescription>,
}

/// One association to create within a `create_association_batch` call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateAssociationBatchRequestEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_compliance: Option<String>,
}

impl CreateAssociationBatchRequestEntry {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: Vec<String>,
    ) -> Result<Self, Error> {
        let key = key.into();
        let parameters = self.parameters.get_or_insert_with(HashMap::new);
        if parameters.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        parameters.insert(key, value);
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters = None;
        self
    }

    pub fn with_targets<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = Target>,
    {
        self.targets.get_or_insert_with(Vec::new).extend(targets);
        self
    }

    pub fn with_schedule_expression(mut self, expression: impl Into<String>) -> Self {
        self.schedule_expression = Some(expression.into());
        self
    }

    pub fn with_association_name(mut self, name: impl Into<String>) -> Self {
        self.association_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateAssociationBatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<CreateAssociationBatchRequestEntry>>,
}

impl CreateAssociationBatchRequest {
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = CreateAssociationBatchRequestEntry>,
    {
        self.entries.get_or_insert_with(Vec::new).extend(entries);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FailedCreateAssociation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<CreateAssociationBatchRequestEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Which side owns the failure: `Client`, `Server` or `Unknown`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateAssociationBatchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful: Option<Vec<AssociationDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<Vec<FailedCreateAssociation>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_version: Option<String>,
}

impl DescribeAssociationRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    pub fn with_association_id(mut self, association_id: impl Into<String>) -> Self {
        self.association_id = Some(association_id.into());
        self
    }

    pub fn with_association_version(mut self, version: impl Into<String>) -> Self {
        self.association_version = Some(version.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_description: Option<AssociationDescription>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_name: Option<String>,
    /// Version to update; `$LATEST` updates the latest version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_compliance: Option<String>,
}

impl UpdateAssociationRequest {
    pub fn with_association_id(mut self, association_id: impl Into<String>) -> Self {
        self.association_id = Some(association_id.into());
        self
    }

    pub fn add_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: Vec<String>,
    ) -> Result<Self, Error> {
        let key = key.into();
        let parameters = self.parameters.get_or_insert_with(HashMap::new);
        if parameters.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        parameters.insert(key, value);
        Ok(self)
    }

    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters = None;
        self
    }

    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
        self
    }

    pub fn with_schedule_expression(mut self, expression: impl Into<String>) -> Self {
        self.schedule_expression = Some(expression.into());
        self
    }

    pub fn with_output_location(mut self, location: InstanceAssociationOutputLocation) -> Self {
        self.output_location = Some(location);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_targets<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = Target>,
    {
        self.targets.get_or_insert_with(Vec::new).extend(targets);
        self
    }

    pub fn with_association_name(mut self, name: impl Into<String>) -> Self {
        self.association_name = Some(name.into());
        self
    }

    pub fn with_association_version(mut self, version: impl Into<String>) -> Self {
        self.association_version = Some(version.into());
        self
    }

    pub fn with_compliance_severity(mut self, severity: impl Into<String>) -> Self {
        self.compliance_severity = Some(severity.into());
        self
    }

    pub fn with_sync_compliance(mut self, sync_compliance: impl Into<String>) -> Self {
        self.sync_compliance = Some(sync_compliance.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_description: Option<AssociationDescription>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
}

impl DeleteAssociationRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    pub fn with_association_id(mut self, association_id: impl Into<String>) -> Self {
        self.association_id = Some(association_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteAssociationResult {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_severity_enum_and_string_are_interchangeable() {
        let typed = CreateAssociationRequest::default()
            .with_compliance_severity(AssociationComplianceSeverity::Critical);
        let raw = CreateAssociationRequest::default().with_compliance_severity("CRITICAL");
        assert_eq!(typed, raw);
        assert_eq!(
            "AUTO".parse::<AssociationSyncCompliance>(),
            Ok(AssociationSyncCompliance::Auto)
        );
    }

    #[test]
    fn duplicate_parameter_key_names_the_key_and_keeps_first_value() {
        let request = UpdateAssociationRequest::default()
            .add_parameters_entry("version", vec!["1".to_string()])
            .expect("insert");
        let err = request
            .clone()
            .add_parameters_entry("version", vec!["2".to_string()])
            .expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateKey(key) if key == "version"));
        assert_eq!(
            request.parameters.as_ref().and_then(|p| p.get("version")),
            Some(&vec!["1".to_string()])
        );
    }

    #[test]
    fn batch_entries_append_in_order() {
        let request = CreateAssociationBatchRequest::default()
            .with_entries([
                CreateAssociationBatchRequestEntry::default().with_name("AWS-UpdateSSMAgent")
            ])
            .with_entries([
                CreateAssociationBatchRequestEntry::default().with_name("AWS-GatherSoftwareInventory")
            ]);
        let names: Vec<_> = request
            .entries
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|e| e.name.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(names, ["AWS-UpdateSSMAgent", "AWS-GatherSoftwareInventory"]);
    }

    #[test]
    fn description_round_trips_with_nested_status() {
        let description = AssociationDescription {
            association_id: Some("assoc-1".to_string()),
            status: Some(
                AssociationStatus::default()
                    .with_date(1_589_852_400.0)
                    .with_name("Pending")
                    .with_message("queued"),
            ),
            overview: Some(AssociationOverview {
                status: Some("Pending".to_string()),
                detailed_status: None,
                association_status_aggregated_count: Some(HashMap::from([(
                    "Pending".to_string(),
                    1,
                )])),
            }),
            ..AssociationDescription::default()
        };
        let json = serde_json::to_string(&description).expect("serialize");
        let restored: AssociationDescription = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, description);
    }
}
