use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::common::{ResolvedTargets, Target};
use crate::error::UnknownEnumValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationExecutionStatus {
    Pending,
    InProgress,
    Waiting,
    Success,
    TimedOut,
    Cancelling,
    Cancelled,
    Failed,
}

impl AutomationExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutomationExecutionStatus::Pending => "Pending",
            AutomationExecutionStatus::InProgress => "InProgress",
            AutomationExecutionStatus::Waiting => "Waiting",
            AutomationExecutionStatus::Success => "Success",
            AutomationExecutionStatus::TimedOut => "TimedOut",
            AutomationExecutionStatus::Cancelling => "Cancelling",
            AutomationExecutionStatus::Cancelled => "Cancelled",
            AutomationExecutionStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for AutomationExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AutomationExecutionStatus> for String {
    fn from(value: AutomationExecutionStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for AutomationExecutionStatus {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(AutomationExecutionStatus::Pending),
            "InProgress" => Ok(AutomationExecutionStatus::InProgress),
            "Waiting" => Ok(AutomationExecutionStatus::Waiting),
            "Success" => Ok(AutomationExecutionStatus::Success),
            "TimedOut" => Ok(AutomationExecutionStatus::TimedOut),
            "Cancelling" => Ok(AutomationExecutionStatus::Cancelling),
            "Cancelled" => Ok(AutomationExecutionStatus::Cancelled),
            "Failed" => Ok(AutomationExecutionStatus::Failed),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Auto,
    Interactive,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Auto => "Auto",
            ExecutionMode::Interactive => "Interactive",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExecutionMode> for String {
    fn from(value: ExecutionMode) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ExecutionMode {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Auto" => Ok(ExecutionMode::Auto),
            "Interactive" => Ok(ExecutionMode::Interactive),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

/// Summary of one automation execution, as listed by
/// `describe_automation_executions`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutomationExecutionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_start_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_end_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_automation_execution_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_maps: Option<Vec<HashMap<String, Vec<String>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_targets: Option<ResolvedTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// `CrossAccount` when the execution fans out to other accounts,
    /// otherwise `Local`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_type: Option<String>,
}

impl AutomationExecutionMetadata {
    pub fn execution_status(&self) -> Option<Result<AutomationExecutionStatus, UnknownEnumValue>> {
        self.automation_execution_status.as_deref().map(str::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutomationExecutionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl AutomationExecutionFilter {
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
pub struct DescribeAutomationExecutionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<AutomationExecutionFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeAutomationExecutionsRequest {
    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = AutomationExecutionFilter>,
    {
        self.filters.get_or_insert_with(Vec::new).extend(filters);
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeAutomationExecutionsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_execution_metadata_list: Option<Vec<AutomationExecutionMetadata>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_round_trips_with_outputs_map() {
        let metadata = AutomationExecutionMetadata {
            automation_execution_id: Some("exec-1".to_string()),
            automation_execution_status: Some("Success".to_string()),
            outputs: Some(HashMap::from([(
                "InstanceId".to_string(),
                vec!["i-1".to_string()],
            )])),
            mode: Some(ExecutionMode::Auto.into()),
            ..AutomationExecutionMetadata::default()
        };
        let json = serde_json::to_string(&metadata).expect("serialize");
        let restored: AutomationExecutionMetadata =
            serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, metadata);
        assert_eq!(
            restored.execution_status(),
            Some(Ok(AutomationExecutionStatus::Success))
        );
        assert_eq!(restored.mode.as_deref(), Some("Auto"));
    }

    #[test]
    fn filter_values_append() {
        let filter = AutomationExecutionFilter::default()
            .with_key("DocumentNamePrefix")
            .with_values(["AWS-"]);
        assert_eq!(filter.values, Some(vec!["AWS-".to_string()]));
    }
}
