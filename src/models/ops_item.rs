use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::common::Tag;
use crate::error::{Error, UnknownEnumValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpsItemStatus {
    Open,
    InProgress,
    Resolved,
}

impl OpsItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpsItemStatus::Open => "Open",
            OpsItemStatus::InProgress => "InProgress",
            OpsItemStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for OpsItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<OpsItemStatus> for String {
    fn from(value: OpsItemStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for OpsItemStatus {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(OpsItemStatus::Open),
            "InProgress" => Ok(OpsItemStatus::InProgress),
            "Resolved" => Ok(OpsItemStatus::Resolved),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpsItemDataType {
    SearchableString,
    String,
}

impl OpsItemDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpsItemDataType::SearchableString => "SearchableString",
            OpsItemDataType::String => "String",
        }
    }
}

impl fmt::Display for OpsItemDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<OpsItemDataType> for String {
    fn from(value: OpsItemDataType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for OpsItemDataType {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SearchableString" => Ok(OpsItemDataType::SearchableString),
            "String" => Ok(OpsItemDataType::String),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpsItemDataValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

impl OpsItemDataValue {
    pub fn new(value: impl Into<String>, type_: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            type_: Some(type_.into()),
        }
    }
}

/// SNS topic notified on ops item changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpsItemNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl OpsItemNotification {
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RelatedOpsItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_item_id: Option<String>,
}

impl RelatedOpsItem {
    pub fn with_ops_item_id(mut self, ops_item_id: impl Into<String>) -> Self {
        self.ops_item_id = Some(ops_item_id.into());
        self
    }
}

/// An operational work item as stored by OpsCenter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpsItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<OpsItemNotification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_ops_items: Option<Vec<RelatedOpsItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_data: Option<HashMap<String, OpsItemDataValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl OpsItem {
    pub fn ops_item_status(&self) -> Option<Result<OpsItemStatus, UnknownEnumValue>> {
        self.status.as_deref().map(str::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateOpsItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_data: Option<HashMap<String, OpsItemDataValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<OpsItemNotification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_ops_items: Option<Vec<RelatedOpsItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl CreateOpsItemRequest {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_operational_data_entry(
        mut self,
        key: impl Into<String>,
        value: OpsItemDataValue,
    ) -> Result<Self, Error> {
        let key = key.into();
        let operational_data = self.operational_data.get_or_insert_with(HashMap::new);
        if operational_data.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        operational_data.insert(key, value);
        Ok(self)
    }

    pub fn clear_operational_data_entries(mut self) -> Self {
        self.operational_data = None;
        self
    }

    pub fn with_notifications<I>(mut self, notifications: I) -> Self
    where
        I: IntoIterator<Item = OpsItemNotification>,
    {
        self.notifications
            .get_or_insert_with(Vec::new)
            .extend(notifications);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_related_ops_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = RelatedOpsItem>,
    {
        self.related_ops_items
            .get_or_insert_with(Vec::new)
            .extend(items);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateOpsItemResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_item_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetOpsItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_item_id: Option<String>,
}

impl GetOpsItemRequest {
    pub fn with_ops_item_id(mut self, ops_item_id: impl Into<String>) -> Self {
        self.ops_item_id = Some(ops_item_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetOpsItemResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_item: Option<OpsItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateOpsItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_data: Option<HashMap<String, OpsItemDataValue>>,
    /// Keys to remove from the stored operational data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_data_to_delete: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<OpsItemNotification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_ops_items: Option<Vec<RelatedOpsItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops_item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl UpdateOpsItemRequest {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_operational_data_entry(
        mut self,
        key: impl Into<String>,
        value: OpsItemDataValue,
    ) -> Result<Self, Error> {
        let key = key.into();
        let operational_data = self.operational_data.get_or_insert_with(HashMap::new);
        if operational_data.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        operational_data.insert(key, value);
        Ok(self)
    }

    pub fn clear_operational_data_entries(mut self) -> Self {
        self.operational_data = None;
        self
    }

    pub fn with_operational_data_to_delete<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operational_data_to_delete
            .get_or_insert_with(Vec::new)
            .extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_notifications<I>(mut self, notifications: I) -> Self
    where
        I: IntoIterator<Item = OpsItemNotification>,
    {
        self.notifications
            .get_or_insert_with(Vec::new)
            .extend(notifications);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_related_ops_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = RelatedOpsItem>,
    {
        self.related_ops_items
            .get_or_insert_with(Vec::new)
            .extend(items);
        self
    }

    /// Accepts an [`OpsItemStatus`] constant or a raw string.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_ops_item_id(mut self, ops_item_id: impl Into<String>) -> Self {
        self.ops_item_id = Some(ops_item_id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateOpsItemResult {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operational_data_rejects_duplicate_keys() {
        let request = UpdateOpsItemRequest::default()
            .add_operational_data_entry(
                "/aws/resources",
                OpsItemDataValue::new("[]", OpsItemDataType::SearchableString),
            )
            .expect("insert");
        let err = request
            .clone()
            .add_operational_data_entry("/aws/resources", OpsItemDataValue::new("{}", "String"))
            .expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateKey(key) if key == "/aws/resources"));
        let kept = request
            .operational_data
            .as_ref()
            .and_then(|data| data.get("/aws/resources"))
            .and_then(|value| value.value.as_deref());
        assert_eq!(kept, Some("[]"));
    }

    #[test]
    fn status_enum_and_string_normalize_identically() {
        let typed = UpdateOpsItemRequest::default().with_status(OpsItemStatus::Resolved);
        let raw = UpdateOpsItemRequest::default().with_status("Resolved");
        assert_eq!(typed, raw);
    }

    #[test]
    fn update_request_serializes_only_set_fields() {
        let request = UpdateOpsItemRequest::default()
            .with_ops_item_id("oi-1234")
            .with_status(OpsItemStatus::InProgress)
            .with_operational_data_to_delete(["/aws/stale"]);
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["OpsItemId"], "oi-1234");
        assert_eq!(json["Status"], "InProgress");
        assert_eq!(json["OperationalDataToDelete"][0], "/aws/stale");
        assert!(json.get("Title").is_none());
        assert!(json.get("OperationalData").is_none());
    }
}
