use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::common::{CloudWatchOutputConfig, NotificationConfig, Target};
use crate::error::{Error, UnknownEnumValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Pending,
    InProgress,
    Success,
    Cancelled,
    Failed,
    TimedOut,
    Cancelling,
}

impl CommandStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandStatus::Pending => "Pending",
            CommandStatus::InProgress => "InProgress",
            CommandStatus::Success => "Success",
            CommandStatus::Cancelled => "Cancelled",
            CommandStatus::Failed => "Failed",
            CommandStatus::TimedOut => "TimedOut",
            CommandStatus::Cancelling => "Cancelling",
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CommandStatus> for String {
    fn from(value: CommandStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for CommandStatus {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(CommandStatus::Pending),
            "InProgress" => Ok(CommandStatus::InProgress),
            "Success" => Ok(CommandStatus::Success),
            "Cancelled" => Ok(CommandStatus::Cancelled),
            "Failed" => Ok(CommandStatus::Failed),
            "TimedOut" => Ok(CommandStatus::TimedOut),
            "Cancelling" => Ok(CommandStatus::Cancelling),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendCommandRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    /// When set, the agent verifies the document against this hash
    /// before running it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_hash_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_key_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_config: Option<CloudWatchOutputConfig>,
}

impl SendCommandRequest {
    /// Appends instance ids, initializing the list on first use.
    pub fn with_instance_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instance_ids
            .get_or_insert_with(Vec::new)
            .extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_targets<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = Target>,
    {
        self.targets.get_or_insert_with(Vec::new).extend(targets);
        self
    }

    pub fn with_document_name(mut self, name: impl Into<String>) -> Self {
        self.document_name = Some(name.into());
        self
    }

    pub fn with_document_version(mut self, version: impl Into<String>) -> Self {
        self.document_version = Some(version.into());
        self
    }

    pub fn with_document_hash(mut self, hash: impl Into<String>) -> Self {
        self.document_hash = Some(hash.into());
        self
    }

    /// Accepts a [`DocumentHashType`](super::DocumentHashType) constant
    /// or a raw string.
    pub fn with_document_hash_type(mut self, hash_type: impl Into<String>) -> Self {
        self.document_hash_type = Some(hash_type.into());
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: i32) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Adds one document parameter, rejecting keys that are already
    /// present. The first value for a key always wins.
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

    /// Resets the parameter map to unset (not empty).
    pub fn clear_parameters_entries(mut self) -> Self {
        self.parameters = None;
        self
    }

    pub fn with_output_s3_region(mut self, region: impl Into<String>) -> Self {
        self.output_s3_region = Some(region.into());
        self
    }

    pub fn with_output_s3_bucket_name(mut self, bucket: impl Into<String>) -> Self {
        self.output_s3_bucket_name = Some(bucket.into());
        self
    }

    pub fn with_output_s3_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_s3_key_prefix = Some(prefix.into());
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

    pub fn with_service_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.service_role_arn = Some(arn.into());
        self
    }

    pub fn with_notification_config(mut self, config: NotificationConfig) -> Self {
        self.notification_config = Some(config);
        self
    }

    pub fn with_cloud_watch_output_config(mut self, config: CloudWatchOutputConfig) -> Self {
        self.cloud_watch_output_config = Some(config);
        self
    }
}

/// A command as tracked by the service across all of its targets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Command {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_date_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_key_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_timed_out_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_config: Option<CloudWatchOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
}

impl Command {
    pub fn command_status(&self) -> Option<Result<CommandStatus, UnknownEnumValue>> {
        self.status.as_deref().map(str::parse)
    }
}

/// Per-plugin execution record within a command invocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CommandPlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_start_date_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_finish_date_time: Option<f64>,
    /// First 2500 characters of the plugin output; the full output
    /// lives in S3 when an output location was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_key_prefix: Option<String>,
}

/// One command delivery to one instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CommandInvocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_date_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_plugins: Option<Vec<CommandPlugin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_config: Option<CloudWatchOutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendCommandResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetCommandInvocationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_name: Option<String>,
}

impl GetCommandInvocationRequest {
    pub fn with_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = Some(command_id.into());
        self
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    pub fn with_plugin_name(mut self, plugin_name: impl Into<String>) -> Self {
        self.plugin_name = Some(plugin_name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetCommandInvocationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_start_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_elapsed_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_end_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_output_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_config: Option<CloudWatchOutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CommandFilter {
    #[serde(rename = "key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl CommandFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListCommandsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<CommandFilter>>,
}

impl ListCommandsRequest {
    pub fn with_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = Some(command_id.into());
        self
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
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

    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = CommandFilter>,
    {
        self.filters.get_or_insert_with(Vec::new).extend(filters);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListCommandsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<Command>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListCommandInvocationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<CommandFilter>>,
    /// When true, each invocation includes its per-plugin records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<bool>,
}

impl ListCommandInvocationsRequest {
    pub fn with_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = Some(command_id.into());
        self
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
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

    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = CommandFilter>,
    {
        self.filters.get_or_insert_with(Vec::new).extend(filters);
        self
    }

    pub fn with_details(mut self, details: bool) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListCommandInvocationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_invocations: Option<Vec<CommandInvocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelCommandRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
}

impl CancelCommandRequest {
    pub fn with_command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = Some(command_id.into());
        self
    }

    pub fn with_instance_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instance_ids
            .get_or_insert_with(Vec::new)
            .extend(ids.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelCommandResult {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_parameter_key_is_rejected_and_first_value_wins() {
        let request = SendCommandRequest::default()
            .add_parameters_entry("commands", vec!["uptime".to_string()])
            .expect("first insert");
        let err = request
            .clone()
            .add_parameters_entry("commands", vec!["reboot".to_string()])
            .expect_err("duplicate key must fail");
        match err {
            Error::DuplicateKey(key) => assert_eq!(key, "commands"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            request.parameters.as_ref().and_then(|p| p.get("commands")),
            Some(&vec!["uptime".to_string()])
        );
    }

    #[test]
    fn clear_parameters_resets_to_unset() {
        let request = SendCommandRequest::default()
            .add_parameters_entry("commands", vec!["uptime".to_string()])
            .expect("insert")
            .clear_parameters_entries();
        assert!(request.parameters.is_none());
        assert_eq!(request, SendCommandRequest::default());
    }

    #[test]
    fn instance_ids_append_and_lazily_initialize() {
        let request = SendCommandRequest::default()
            .with_instance_ids(["i-1"])
            .with_instance_ids(["i-2", "i-3"]);
        assert_eq!(
            request.instance_ids,
            Some(vec![
                "i-1".to_string(),
                "i-2".to_string(),
                "i-3".to_string()
            ])
        );
    }

    #[test]
    fn command_filter_uses_lower_case_wire_names() {
        let filter = CommandFilter::new("Status", "Pending");
        let json = serde_json::to_value(&filter).expect("serialize");
        assert_eq!(json["key"], "Status");
        assert_eq!(json["value"], "Pending");
    }

    #[test]
    fn send_command_request_serializes_only_set_fields() {
        let request = SendCommandRequest::default()
            .with_document_name("AWS-RunShellScript")
            .with_instance_ids(["i-1234567890abcdef0"])
            .with_timeout_seconds(600);
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["DocumentName"], "AWS-RunShellScript");
        assert_eq!(json["InstanceIds"][0], "i-1234567890abcdef0");
        assert_eq!(json["TimeoutSeconds"], 600);
        assert!(json.get("Comment").is_none());
        assert!(json.get("Parameters").is_none());
    }

    #[test]
    fn command_round_trip_preserves_map_parameters() {
        let mut parameters = HashMap::new();
        parameters.insert("commands".to_string(), vec!["uptime".to_string()]);
        let command = Command {
            command_id: Some("cid-1".to_string()),
            status: Some("InProgress".to_string()),
            parameters: Some(parameters),
            requested_date_time: Some(1_589_852_400.0),
            ..Command::default()
        };
        let json = serde_json::to_string(&command).expect("serialize");
        let restored: Command = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, command);
        assert_eq!(
            restored.command_status(),
            Some(Ok(CommandStatus::InProgress))
        );
    }
}
