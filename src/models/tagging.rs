use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::common::Tag;
use crate::error::UnknownEnumValue;

/// Resource kinds that accept tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceTypeForTagging {
    Document,
    ManagedInstance,
    MaintenanceWindow,
    Parameter,
    PatchBaseline,
    OpsItem,
}

impl ResourceTypeForTagging {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceTypeForTagging::Document => "Document",
            ResourceTypeForTagging::ManagedInstance => "ManagedInstance",
            ResourceTypeForTagging::MaintenanceWindow => "MaintenanceWindow",
            ResourceTypeForTagging::Parameter => "Parameter",
            ResourceTypeForTagging::PatchBaseline => "PatchBaseline",
            ResourceTypeForTagging::OpsItem => "OpsItem",
        }
    }
}

impl fmt::Display for ResourceTypeForTagging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ResourceTypeForTagging> for String {
    fn from(value: ResourceTypeForTagging) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ResourceTypeForTagging {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Document" => Ok(ResourceTypeForTagging::Document),
            "ManagedInstance" => Ok(ResourceTypeForTagging::ManagedInstance),
            "MaintenanceWindow" => Ok(ResourceTypeForTagging::MaintenanceWindow),
            "Parameter" => Ok(ResourceTypeForTagging::Parameter),
            "PatchBaseline" => Ok(ResourceTypeForTagging::PatchBaseline),
            "OpsItem" => Ok(ResourceTypeForTagging::OpsItem),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AddTagsToResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl AddTagsToResourceRequest {
    /// Accepts a [`ResourceTypeForTagging`] constant or a raw string.
    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
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
pub struct AddTagsToResourceResult {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RemoveTagsFromResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}

impl RemoveTagsFromResourceRequest {
    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn with_tag_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_keys
            .get_or_insert_with(Vec::new)
            .extend(keys.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RemoveTagsFromResourceResult {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListTagsForResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl ListTagsForResourceRequest {
    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListTagsForResourceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<Vec<Tag>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tags_accepts_enum_or_string_resource_type() {
        let typed = AddTagsToResourceRequest::default()
            .with_resource_type(ResourceTypeForTagging::Parameter)
            .with_resource_id("db-password")
            .with_tags([Tag::new("env", "prod")]);
        let raw = AddTagsToResourceRequest::default()
            .with_resource_type("Parameter")
            .with_resource_id("db-password")
            .with_tags([Tag::new("env", "prod")]);
        assert_eq!(typed, raw);
    }

    #[test]
    fn tag_keys_append_across_calls() {
        let request = RemoveTagsFromResourceRequest::default()
            .with_tag_keys(["env"])
            .with_tag_keys(["team", "owner"]);
        assert_eq!(
            request.tag_keys,
            Some(vec![
                "env".to_string(),
                "team".to_string(),
                "owner".to_string()
            ])
        );
    }

    #[test]
    fn unknown_resource_type_fails_to_parse() {
        let err = "Pipeline".parse::<ResourceTypeForTagging>().expect_err("unknown");
        assert_eq!(err.0, "Pipeline");
    }
}
