use serde::{Deserialize, Serialize};

use super::common::Tag;

/// Registration record letting on-premises machines enroll as managed
/// instances.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Activation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrations_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateActivationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateActivationRequest {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_instance_name(mut self, name: impl Into<String>) -> Self {
        self.default_instance_name = Some(name.into());
        self
    }

    pub fn with_iam_role(mut self, iam_role: impl Into<String>) -> Self {
        self.iam_role = Some(iam_role.into());
        self
    }

    pub fn with_registration_limit(mut self, limit: i32) -> Self {
        self.registration_limit = Some(limit);
        self
    }

    /// Epoch seconds after which the activation code stops working.
    pub fn with_expiration_date(mut self, expiration_date: f64) -> Self {
        self.expiration_date = Some(expiration_date);
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
pub struct CreateActivationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteActivationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_id: Option<String>,
}

impl DeleteActivationRequest {
    pub fn with_activation_id(mut self, activation_id: impl Into<String>) -> Self {
        self.activation_id = Some(activation_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteActivationResult {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeActivationsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_values: Option<Vec<String>>,
}

impl DescribeActivationsFilter {
    pub fn with_filter_key(mut self, key: impl Into<String>) -> Self {
        self.filter_key = Some(key.into());
        self
    }

    pub fn with_filter_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_values
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DescribeActivationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<DescribeActivationsFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeActivationsRequest {
    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = DescribeActivationsFilter>,
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
pub struct DescribeActivationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_list: Option<Vec<Activation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_serializes_only_set_fields() {
        let request = CreateActivationRequest::default()
            .with_iam_role("SsmServiceRole")
            .with_registration_limit(10)
            .with_expiration_date(1.7e9);
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["IamRole"], "SsmServiceRole");
        assert_eq!(json["RegistrationLimit"], 10);
        assert!(json.get("Description").is_none());
        assert!(json.get("Tags").is_none());
    }

    #[test]
    fn activation_list_round_trips() {
        let result: DescribeActivationsResult = serde_json::from_str(
            r#"{"ActivationList":[{"ActivationId":"act-1","Expired":false,"Tags":[{"Key":"env","Value":"prod"}]}],"NextToken":"t1"}"#,
        )
        .expect("deserialize");
        let activation = &result.activation_list.as_ref().expect("list")[0];
        assert_eq!(activation.activation_id.as_deref(), Some("act-1"));
        assert_eq!(activation.expired, Some(false));
        assert_eq!(result.next_token.as_deref(), Some("t1"));
    }
}
