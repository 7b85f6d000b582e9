use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::common::{CloudWatchOutputConfig, LoggingInfo, NotificationConfig, Target};
use crate::error::{Error, UnknownEnumValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceWindowTaskType {
    RunCommand,
    Automation,
    StepFunctions,
    Lambda,
}

impl MaintenanceWindowTaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceWindowTaskType::RunCommand => "RUN_COMMAND",
            MaintenanceWindowTaskType::Automation => "AUTOMATION",
            MaintenanceWindowTaskType::StepFunctions => "STEP_FUNCTIONS",
            MaintenanceWindowTaskType::Lambda => "LAMBDA",
        }
    }
}

impl fmt::Display for MaintenanceWindowTaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MaintenanceWindowTaskType> for String {
    fn from(value: MaintenanceWindowTaskType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for MaintenanceWindowTaskType {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN_COMMAND" => Ok(MaintenanceWindowTaskType::RunCommand),
            "AUTOMATION" => Ok(MaintenanceWindowTaskType::Automation),
            "STEP_FUNCTIONS" => Ok(MaintenanceWindowTaskType::StepFunctions),
            "LAMBDA" => Ok(MaintenanceWindowTaskType::Lambda),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

/// Values for one task parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceWindowTaskParameterValueExpression {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl MaintenanceWindowTaskParameterValueExpression {
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

/// A task registered with a maintenance window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceWindowTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_task_id: Option<String>,
    /// Document name, automation document, Step Functions state machine
    /// ARN or Lambda function ARN, depending on the task type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_parameters:
        Option<HashMap<String, MaintenanceWindowTaskParameterValueExpression>>,
    /// Lower numbers run earlier; equal priorities run in parallel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_info: Option<LoggingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MaintenanceWindowTask {
    pub fn task_type(&self) -> Option<Result<MaintenanceWindowTaskType, UnknownEnumValue>> {
        self.type_.as_deref().map(str::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceWindowRunCommandParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_config: Option<CloudWatchOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_hash_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_key_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
}

impl MaintenanceWindowRunCommandParameters {
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
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

    pub fn with_timeout_seconds(mut self, timeout_seconds: i32) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceWindowAutomationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Vec<String>>>,
}

impl MaintenanceWindowAutomationParameters {
    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
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
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceWindowStepFunctionsParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceWindowLambdaParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    /// Base64-encoded payload, as carried on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

/// Type-specific parameters for one task invocation; at most one member
/// is set, matching the task type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MaintenanceWindowTaskInvocationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_command: Option<MaintenanceWindowRunCommandParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation: Option<MaintenanceWindowAutomationParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_functions: Option<MaintenanceWindowStepFunctionsParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda: Option<MaintenanceWindowLambdaParameters>,
}

impl MaintenanceWindowTaskInvocationParameters {
    pub fn with_run_command(mut self, parameters: MaintenanceWindowRunCommandParameters) -> Self {
        self.run_command = Some(parameters);
        self
    }

    pub fn with_automation(mut self, parameters: MaintenanceWindowAutomationParameters) -> Self {
        self.automation = Some(parameters);
        self
    }

    pub fn with_step_functions(
        mut self,
        parameters: MaintenanceWindowStepFunctionsParameters,
    ) -> Self {
        self.step_functions = Some(parameters);
        self
    }

    pub fn with_lambda(mut self, parameters: MaintenanceWindowLambdaParameters) -> Self {
        self.lambda = Some(parameters);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RegisterTaskWithMaintenanceWindowRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_parameters:
        Option<HashMap<String, MaintenanceWindowTaskParameterValueExpression>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_invocation_parameters: Option<MaintenanceWindowTaskInvocationParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_info: Option<LoggingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

impl RegisterTaskWithMaintenanceWindowRequest {
    pub fn with_window_id(mut self, window_id: impl Into<String>) -> Self {
        self.window_id = Some(window_id.into());
        self
    }

    pub fn with_targets<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = Target>,
    {
        self.targets.get_or_insert_with(Vec::new).extend(targets);
        self
    }

    pub fn with_task_arn(mut self, task_arn: impl Into<String>) -> Self {
        self.task_arn = Some(task_arn.into());
        self
    }

    pub fn with_service_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.service_role_arn = Some(arn.into());
        self
    }

    /// Accepts a [`MaintenanceWindowTaskType`] constant or a raw string.
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    pub fn add_task_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: MaintenanceWindowTaskParameterValueExpression,
    ) -> Result<Self, Error> {
        let key = key.into();
        let task_parameters = self.task_parameters.get_or_insert_with(HashMap::new);
        if task_parameters.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        task_parameters.insert(key, value);
        Ok(self)
    }

    pub fn clear_task_parameters_entries(mut self) -> Self {
        self.task_parameters = None;
        self
    }

    pub fn with_task_invocation_parameters(
        mut self,
        parameters: MaintenanceWindowTaskInvocationParameters,
    ) -> Self {
        self.task_invocation_parameters = Some(parameters);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: impl Into<String>) -> Self {
        self.max_concurrency = Some(max_concurrency.into());
        self
    }

    pub fn with_max_errors(mut self, max_errors: impl Into<String>) -> Self {
        self.max_errors = Some(max_errors.into());
        self
    }

    pub fn with_logging_info(mut self, logging_info: LoggingInfo) -> Self {
        self.logging_info = Some(logging_info);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RegisterTaskWithMaintenanceWindowResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_task_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMaintenanceWindowTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_task_id: Option<String>,
}

impl GetMaintenanceWindowTaskRequest {
    pub fn with_window_id(mut self, window_id: impl Into<String>) -> Self {
        self.window_id = Some(window_id.into());
        self
    }

    pub fn with_window_task_id(mut self, window_task_id: impl Into<String>) -> Self {
        self.window_task_id = Some(window_task_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMaintenanceWindowTaskResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_parameters:
        Option<HashMap<String, MaintenanceWindowTaskParameterValueExpression>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_invocation_parameters: Option<MaintenanceWindowTaskInvocationParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_info: Option<LoggingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateMaintenanceWindowTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_parameters:
        Option<HashMap<String, MaintenanceWindowTaskParameterValueExpression>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_invocation_parameters: Option<MaintenanceWindowTaskInvocationParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_info: Option<LoggingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When true, unset request fields clear the stored values instead
    /// of leaving them unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
}

impl UpdateMaintenanceWindowTaskRequest {
    pub fn with_window_id(mut self, window_id: impl Into<String>) -> Self {
        self.window_id = Some(window_id.into());
        self
    }

    pub fn with_window_task_id(mut self, window_task_id: impl Into<String>) -> Self {
        self.window_task_id = Some(window_task_id.into());
        self
    }

    pub fn with_targets<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = Target>,
    {
        self.targets.get_or_insert_with(Vec::new).extend(targets);
        self
    }

    pub fn with_task_arn(mut self, task_arn: impl Into<String>) -> Self {
        self.task_arn = Some(task_arn.into());
        self
    }

    pub fn with_service_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.service_role_arn = Some(arn.into());
        self
    }

    pub fn add_task_parameters_entry(
        mut self,
        key: impl Into<String>,
        value: MaintenanceWindowTaskParameterValueExpression,
    ) -> Result<Self, Error> {
        let key = key.into();
        let task_parameters = self.task_parameters.get_or_insert_with(HashMap::new);
        if task_parameters.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        task_parameters.insert(key, value);
        Ok(self)
    }

    pub fn clear_task_parameters_entries(mut self) -> Self {
        self.task_parameters = None;
        self
    }

    pub fn with_task_invocation_parameters(
        mut self,
        parameters: MaintenanceWindowTaskInvocationParameters,
    ) -> Self {
        self.task_invocation_parameters = Some(parameters);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: impl Into<String>) -> Self {
        self.max_concurrency = Some(max_concurrency.into());
        self
    }

    pub fn with_max_errors(mut self, max_errors: impl Into<String>) -> Self {
        self.max_errors = Some(max_errors.into());
        self
    }

    pub fn with_logging_info(mut self, logging_info: LoggingInfo) -> Self {
        self.logging_info = Some(logging_info);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateMaintenanceWindowTaskResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_parameters:
        Option<HashMap<String, MaintenanceWindowTaskParameterValueExpression>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_invocation_parameters: Option<MaintenanceWindowTaskInvocationParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_info: Option<LoggingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeregisterTaskFromMaintenanceWindowRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_task_id: Option<String>,
}

impl DeregisterTaskFromMaintenanceWindowRequest {
    pub fn with_window_id(mut self, window_id: impl Into<String>) -> Self {
        self.window_id = Some(window_id.into());
        self
    }

    pub fn with_window_task_id(mut self, window_task_id: impl Into<String>) -> Self {
        self.window_task_id = Some(window_task_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeregisterTaskFromMaintenanceWindowResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_task_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_task_parameter_key_is_rejected_and_first_value_kept() {
        let first = MaintenanceWindowTaskParameterValueExpression::default().with_values(["a"]);
        let second = MaintenanceWindowTaskParameterValueExpression::default().with_values(["b"]);
        let request = RegisterTaskWithMaintenanceWindowRequest::default()
            .add_task_parameters_entry("commands", first.clone())
            .expect("insert");
        let err = request
            .clone()
            .add_task_parameters_entry("commands", second)
            .expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateKey(key) if key == "commands"));
        assert_eq!(
            request
                .task_parameters
                .as_ref()
                .and_then(|p| p.get("commands")),
            Some(&first)
        );
    }

    #[test]
    fn task_type_wire_form_is_screaming_snake_case() {
        let request = RegisterTaskWithMaintenanceWindowRequest::default()
            .with_task_type(MaintenanceWindowTaskType::RunCommand);
        assert_eq!(request.task_type.as_deref(), Some("RUN_COMMAND"));
        assert_eq!(
            "LAMBDA".parse::<MaintenanceWindowTaskType>(),
            Ok(MaintenanceWindowTaskType::Lambda)
        );
    }

    #[test]
    fn invocation_parameters_round_trip() {
        let invocation = MaintenanceWindowTaskInvocationParameters::default().with_run_command(
            MaintenanceWindowRunCommandParameters::default()
                .with_comment("patch window")
                .add_parameters_entry("commands", vec!["yum update -y".to_string()])
                .expect("insert")
                .with_timeout_seconds(3600),
        );
        let json = serde_json::to_string(&invocation).expect("serialize");
        let restored: MaintenanceWindowTaskInvocationParameters =
            serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, invocation);
        assert!(restored.automation.is_none());
    }

    #[test]
    fn task_serializes_type_member_as_type() {
        let task = MaintenanceWindowTask {
            type_: Some("AUTOMATION".to_string()),
            ..MaintenanceWindowTask::default()
        };
        let json = serde_json::to_value(&task).expect("serialize");
        assert_eq!(json["Type"], "AUTOMATION");
        assert_eq!(
            task.task_type(),
            Some(Ok(MaintenanceWindowTaskType::Automation))
        );
    }
}
