use serde::{Deserialize, Serialize};

/// Key/value metadata attached to SSM resources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Instance selection criteria for commands, associations and
/// maintenance-window tasks. `key` is a tag key (`tag:Name`), a tag
/// group, or `InstanceIds`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Target {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Appends values, initializing the list on first use.
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
pub struct S3OutputLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_s3_key_prefix: Option<String>,
}

impl S3OutputLocation {
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
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstanceAssociationOutputLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_location: Option<S3OutputLocation>,
}

impl InstanceAssociationOutputLocation {
    pub fn with_s3_location(mut self, location: S3OutputLocation) -> Self {
        self.s3_location = Some(location);
        self
    }
}

/// SNS notification settings for command state changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NotificationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,
}

impl NotificationConfig {
    pub fn with_notification_arn(mut self, arn: impl Into<String>) -> Self {
        self.notification_arn = Some(arn.into());
        self
    }

    pub fn with_notification_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notification_events
            .get_or_insert_with(Vec::new)
            .extend(events.into_iter().map(Into::into));
        self
    }

    pub fn with_notification_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = Some(notification_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CloudWatchOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_output_enabled: Option<bool>,
}

impl CloudWatchOutputConfig {
    pub fn with_cloud_watch_log_group_name(mut self, name: impl Into<String>) -> Self {
        self.cloud_watch_log_group_name = Some(name.into());
        self
    }

    pub fn with_cloud_watch_output_enabled(mut self, enabled: bool) -> Self {
        self.cloud_watch_output_enabled = Some(enabled);
        self
    }
}

/// Targets resolved from a target parameter during automation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResolvedTargets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LoggingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_key_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_region: Option<String>,
}

impl LoggingInfo {
    pub fn with_s3_bucket_name(mut self, bucket: impl Into<String>) -> Self {
        self.s3_bucket_name = Some(bucket.into());
        self
    }

    pub fn with_s3_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.s3_key_prefix = Some(prefix.into());
        self
    }

    pub fn with_s3_region(mut self, region: impl Into<String>) -> Self {
        self.s3_region = Some(region.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_values_append_across_calls() {
        let target = Target::default()
            .with_key("tag:Environment")
            .with_values(["staging"])
            .with_values(vec!["production".to_string()]);
        assert_eq!(
            target.values,
            Some(vec!["staging".to_string(), "production".to_string()])
        );
    }

    #[test]
    fn fluent_and_direct_construction_are_equal() {
        let fluent = Tag::new("Team", "platform");
        let mut direct = Tag::default();
        direct.key = Some("Team".to_string());
        direct.value = Some("platform".to_string());
        assert_eq!(fluent, direct);
    }

    #[test]
    fn serialization_uses_wire_member_names() {
        let target = Target::default().with_key("InstanceIds").with_values(["i-1234"]);
        let json = serde_json::to_value(&target).expect("serialize");
        assert_eq!(json["Key"], "InstanceIds");
        assert_eq!(json["Values"][0], "i-1234");
    }

    #[test]
    fn unset_fields_are_omitted_from_serialization() {
        let config = CloudWatchOutputConfig::default().with_cloud_watch_output_enabled(true);
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("CloudWatchOutputEnabled"));
        assert!(!json.contains("CloudWatchLogGroupName"));
    }
}
