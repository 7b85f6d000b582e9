use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::common::Tag;
use crate::error::UnknownEnumValue;

/// Known parameter value types. The service may introduce values this
/// enum does not know; model fields therefore store the raw string and
/// this type only provides the canonical spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    String,
    StringList,
    SecureString,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "String",
            ParameterType::StringList => "StringList",
            ParameterType::SecureString => "SecureString",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ParameterType> for String {
    fn from(value: ParameterType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ParameterType {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(ParameterType::String),
            "StringList" => Ok(ParameterType::StringList),
            "SecureString" => Ok(ParameterType::SecureString),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterTier {
    Standard,
    Advanced,
    IntelligentTiering,
}

impl ParameterTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterTier::Standard => "Standard",
            ParameterTier::Advanced => "Advanced",
            ParameterTier::IntelligentTiering => "Intelligent-Tiering",
        }
    }
}

impl fmt::Display for ParameterTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ParameterTier> for String {
    fn from(value: ParameterTier) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ParameterTier {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(ParameterTier::Standard),
            "Advanced" => Ok(ParameterTier::Advanced),
            "Intelligent-Tiering" => Ok(ParameterTier::IntelligentTiering),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

/// A Parameter Store entry as returned by the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Version label or version number used to select this parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<f64>,
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl Parameter {
    /// Typed view of `type_`; `Err` carries unknown service values.
    pub fn parameter_type(&self) -> Option<Result<ParameterType, UnknownEnumValue>> {
        self.type_.as_deref().map(str::parse)
    }
}

/// Filter for `get_parameters_by_path`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ParameterStringFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl ParameterStringFilter {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.option = Some(option.into());
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
pub struct PutParameterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// KMS key id; only meaningful for `SecureString` parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl PutParameterRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Accepts a [`ParameterType`] constant or a raw string.
    pub fn with_type(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    pub fn with_allowed_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.allowed_pattern = Some(pattern.into());
        self
    }

    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

    /// Accepts a [`ParameterTier`] constant or a raw string.
    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    pub fn with_policies(mut self, policies: impl Into<String>) -> Self {
        self.policies = Some(policies.into());
        self
    }

    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PutParameterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetParameterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_decryption: Option<bool>,
}

impl GetParameterRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_with_decryption(mut self, with_decryption: bool) -> Self {
        self.with_decryption = Some(with_decryption);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetParameterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetParametersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_decryption: Option<bool>,
}

impl GetParametersRequest {
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_with_decryption(mut self, with_decryption: bool) -> Self {
        self.with_decryption = Some(with_decryption);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetParametersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    /// Names that could not be resolved; never an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_parameters: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetParametersByPathRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_filters: Option<Vec<ParameterStringFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_decryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetParametersByPathRequest {
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    pub fn with_parameter_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = ParameterStringFilter>,
    {
        self.parameter_filters
            .get_or_insert_with(Vec::new)
            .extend(filters);
        self
    }

    pub fn with_with_decryption(mut self, with_decryption: bool) -> Self {
        self.with_decryption = Some(with_decryption);
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
pub struct GetParametersByPathResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteParameterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeleteParameterRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteParameterResult {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LabelParameterVersionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl LabelParameterVersionRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_parameter_version(mut self, version: i64) -> Self {
        self.parameter_version = Some(version);
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels
            .get_or_insert_with(Vec::new)
            .extend(labels.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LabelParameterVersionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_version: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_and_raw_string_normalize_identically() {
        let typed = PutParameterRequest::default().with_type(ParameterType::SecureString);
        let raw = PutParameterRequest::default().with_type("SecureString");
        assert_eq!(typed, raw);
        assert_eq!(typed.type_.as_deref(), Some("SecureString"));
        assert_eq!(
            serde_json::to_string(&typed).expect("serialize"),
            serde_json::to_string(&raw).expect("serialize"),
        );
    }

    #[test]
    fn tier_spelling_uses_canonical_hyphenated_form() {
        let request = PutParameterRequest::default().with_tier(ParameterTier::IntelligentTiering);
        assert_eq!(request.tier.as_deref(), Some("Intelligent-Tiering"));
        assert_eq!(
            "Intelligent-Tiering".parse::<ParameterTier>(),
            Ok(ParameterTier::IntelligentTiering)
        );
    }

    #[test]
    fn unknown_enum_value_is_reported() {
        let err = "Binary".parse::<ParameterType>().expect_err("should fail");
        assert_eq!(err, UnknownEnumValue("Binary".to_string()));
    }

    #[test]
    fn wither_chain_matches_direct_field_assignment() {
        let fluent = PutParameterRequest::default()
            .with_name("/app/db/password")
            .with_value("s3cr3t")
            .with_type(ParameterType::SecureString)
            .with_overwrite(true);

        let mut direct = PutParameterRequest::default();
        direct.name = Some("/app/db/password".to_string());
        direct.value = Some("s3cr3t".to_string());
        direct.type_ = Some("SecureString".to_string());
        direct.overwrite = Some(true);

        assert_eq!(fluent, direct);
    }

    #[test]
    fn unset_and_empty_collections_are_distinct() {
        let unset = GetParametersRequest::default();
        let empty = GetParametersRequest {
            names: Some(Vec::new()),
            ..GetParametersRequest::default()
        };
        assert!(unset.names.is_none());
        assert_eq!(empty.names.as_deref(), Some(&[][..]));
        assert_ne!(unset, empty);

        assert_eq!(serde_json::to_string(&unset).expect("serialize"), "{}");
        assert_eq!(
            serde_json::to_string(&empty).expect("serialize"),
            r#"{"Names":[]}"#
        );
    }

    #[test]
    fn parameter_uses_explicit_wire_renames() {
        let parameter = Parameter {
            type_: Some("String".to_string()),
            arn: Some("arn:aws:ssm:us-east-1:123456789012:parameter/x".to_string()),
            ..Parameter::default()
        };
        let json = serde_json::to_value(&parameter).expect("serialize");
        assert_eq!(json["Type"], "String");
        assert!(json.get("ARN").is_some());
        assert!(json.get("Arn").is_none());
    }

    #[test]
    fn round_trip_restores_an_equal_instance() {
        let request = GetParametersByPathRequest::default()
            .with_path("/app")
            .with_recursive(true)
            .with_parameter_filters([ParameterStringFilter::default()
                .with_key("Type")
                .with_option("Equals")
                .with_values(["SecureString"])])
            .with_max_results(10);
        let json = serde_json::to_string(&request).expect("serialize");
        let restored: GetParametersByPathRequest =
            serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, request);
    }

    #[test]
    fn typed_view_of_parameter_type() {
        let parameter = Parameter {
            type_: Some("StringList".to_string()),
            ..Parameter::default()
        };
        assert_eq!(
            parameter.parameter_type(),
            Some(Ok(ParameterType::StringList))
        );
        assert_eq!(Parameter::default().parameter_type(), None);
    }
}
