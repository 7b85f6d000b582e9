use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::common::Tag;
use crate::error::UnknownEnumValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Command,
    Policy,
    Automation,
    Session,
    Package,
    ApplicationConfiguration,
    ApplicationConfigurationSchema,
    DeploymentStrategy,
    ChangeCalendar,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Command => "Command",
            DocumentType::Policy => "Policy",
            DocumentType::Automation => "Automation",
            DocumentType::Session => "Session",
            DocumentType::Package => "Package",
            DocumentType::ApplicationConfiguration => "ApplicationConfiguration",
            DocumentType::ApplicationConfigurationSchema => "ApplicationConfigurationSchema",
            DocumentType::DeploymentStrategy => "DeploymentStrategy",
            DocumentType::ChangeCalendar => "ChangeCalendar",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DocumentType> for String {
    fn from(value: DocumentType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for DocumentType {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Command" => Ok(DocumentType::Command),
            "Policy" => Ok(DocumentType::Policy),
            "Automation" => Ok(DocumentType::Automation),
            "Session" => Ok(DocumentType::Session),
            "Package" => Ok(DocumentType::Package),
            "ApplicationConfiguration" => Ok(DocumentType::ApplicationConfiguration),
            "ApplicationConfigurationSchema" => Ok(DocumentType::ApplicationConfigurationSchema),
            "DeploymentStrategy" => Ok(DocumentType::DeploymentStrategy),
            "ChangeCalendar" => Ok(DocumentType::ChangeCalendar),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Text,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "YAML",
            DocumentFormat::Json => "JSON",
            DocumentFormat::Text => "TEXT",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DocumentFormat> for String {
    fn from(value: DocumentFormat) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for DocumentFormat {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YAML" => Ok(DocumentFormat::Yaml),
            "JSON" => Ok(DocumentFormat::Json),
            "TEXT" => Ok(DocumentFormat::Text),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentHashType {
    Sha256,
    Sha1,
}

impl DocumentHashType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentHashType::Sha256 => "Sha256",
            DocumentHashType::Sha1 => "Sha1",
        }
    }
}

impl fmt::Display for DocumentHashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DocumentHashType> for String {
    fn from(value: DocumentHashType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for DocumentHashType {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sha256" => Ok(DocumentHashType::Sha256),
            "Sha1" => Ok(DocumentHashType::Sha1),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Creating,
    Active,
    Updating,
    Deleting,
    Failed,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Creating => "Creating",
            DocumentStatus::Active => "Active",
            DocumentStatus::Updating => "Updating",
            DocumentStatus::Deleting => "Deleting",
            DocumentStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DocumentStatus> for String {
    fn from(value: DocumentStatus) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for DocumentStatus {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Creating" => Ok(DocumentStatus::Creating),
            "Active" => Ok(DocumentStatus::Active),
            "Updating" => Ok(DocumentStatus::Updating),
            "Deleting" => Ok(DocumentStatus::Deleting),
            "Failed" => Ok(DocumentStatus::Failed),
            other => Err(UnknownEnumValue(other.to_string())),
        }
    }
}

/// A document this document depends on (`ApplicationConfiguration`
/// documents require their schema document).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DocumentRequires {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl DocumentRequires {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AttachmentsSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AttachmentsSource {
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

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AttachmentInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AttachmentContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DocumentParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// Full description of a document version as stored by the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DocumentDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<DocumentParameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments_information: Option<Vec<AttachmentInformation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<Vec<DocumentRequires>>,
}

impl DocumentDescription {
    pub fn document_status(&self) -> Option<Result<DocumentStatus, UnknownEnumValue>> {
        self.status.as_deref().map(str::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<Vec<DocumentRequires>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentsSource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_format: Option<String>,
    /// Resource type the document runs against, e.g. `/AWS::EC2::Instance`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateDocumentRequest {
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_requires<I>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = DocumentRequires>,
    {
        self.requires.get_or_insert_with(Vec::new).extend(requires);
        self
    }

    pub fn with_attachments<I>(mut self, attachments: I) -> Self
    where
        I: IntoIterator<Item = AttachmentsSource>,
    {
        self.attachments
            .get_or_insert_with(Vec::new)
            .extend(attachments);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version_name(mut self, version_name: impl Into<String>) -> Self {
        self.version_name = Some(version_name.into());
        self
    }

    /// Accepts a [`DocumentType`] constant or a raw string.
    pub fn with_document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = Some(document_type.into());
        self
    }

    /// Accepts a [`DocumentFormat`] constant or a raw string.
    pub fn with_document_format(mut self, document_format: impl Into<String>) -> Self {
        self.document_format = Some(document_format.into());
        self
    }

    pub fn with_target_type(mut self, target_type: impl Into<String>) -> Self {
        self.target_type = Some(target_type.into());
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
pub struct CreateDocumentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_description: Option<DocumentDescription>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_format: Option<String>,
}

impl GetDocumentRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version_name(mut self, version_name: impl Into<String>) -> Self {
        self.version_name = Some(version_name.into());
        self
    }

    pub fn with_document_version(mut self, document_version: impl Into<String>) -> Self {
        self.document_version = Some(document_version.into());
        self
    }

    pub fn with_document_format(mut self, document_format: impl Into<String>) -> Self {
        self.document_format = Some(document_format.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetDocumentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<Vec<DocumentRequires>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments_content: Option<Vec<AttachmentContent>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
}

impl DescribeDocumentRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_document_version(mut self, document_version: impl Into<String>) -> Self {
        self.document_version = Some(document_version.into());
        self
    }

    pub fn with_version_name(mut self, version_name: impl Into<String>) -> Self {
        self.version_name = Some(version_name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeDocumentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentDescription>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

impl DeleteDocumentRequest {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_document_version(mut self, document_version: impl Into<String>) -> Self {
        self.document_version = Some(document_version.into());
        self
    }

    pub fn with_version_name(mut self, version_name: impl Into<String>) -> Self {
        self.version_name = Some(version_name.into());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteDocumentResult {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluent_create_request_matches_setter_construction() {
        let fluent = CreateDocumentRequest::default()
            .with_name("my-doc")
            .with_content("{}")
            .with_document_type("Command");

        let mut direct = CreateDocumentRequest::default();
        direct.name = Some("my-doc".to_string());
        direct.content = Some("{}".to_string());
        direct.document_type = Some("Command".to_string());

        assert_eq!(fluent.name.as_deref(), Some("my-doc"));
        assert_eq!(fluent.content.as_deref(), Some("{}"));
        assert_eq!(fluent.document_type.as_deref(), Some("Command"));
        assert_eq!(fluent, direct);
    }

    #[test]
    fn document_type_enum_matches_raw_string() {
        let typed = CreateDocumentRequest::default().with_document_type(DocumentType::Command);
        let raw = CreateDocumentRequest::default().with_document_type("Command");
        assert_eq!(typed, raw);
    }

    #[test]
    fn document_format_uses_upper_case_wire_names() {
        assert_eq!(DocumentFormat::Yaml.as_str(), "YAML");
        assert_eq!("TEXT".parse::<DocumentFormat>(), Ok(DocumentFormat::Text));
        assert!("yaml".parse::<DocumentFormat>().is_err());
    }

    #[test]
    fn unset_fields_do_not_appear_in_rendering() {
        let request = CreateDocumentRequest::default().with_name("my-doc");
        let json = serde_json::to_string(&request).expect("serialize");
        assert!(json.contains(r#""Name":"my-doc""#));
        assert!(!json.contains("Content"));
        assert!(!json.contains("DocumentType"));
    }

    #[test]
    fn description_round_trips_through_wire_form() {
        let description = DocumentDescription {
            name: Some("my-doc".to_string()),
            status: Some("Active".to_string()),
            document_version: Some("1".to_string()),
            platform_types: Some(vec!["Linux".to_string()]),
            created_date: Some(1_589_852_400.0),
            ..DocumentDescription::default()
        };
        let json = serde_json::to_string(&description).expect("serialize");
        let restored: DocumentDescription = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, description);
        assert_eq!(restored.document_status(), Some(Ok(DocumentStatus::Active)));
    }
}
