use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Error document returned by the service for a failed operation.
///
/// The JSON 1.1 protocol reports the error kind in `__type`, either bare
/// (`ParameterNotFound`) or namespace-qualified
/// (`com.amazonaws.ssm#ParameterNotFound`). `code` carries the HTTP
/// status and `request_id` the `x-amzn-RequestId` header, both filled in
/// by the client after parsing the body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceError {
    #[serde(skip)]
    pub code: i32,
    #[serde(rename = "__type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(rename = "message", alias = "Message", default)]
    pub message: Option<String>,
    #[serde(skip)]
    pub request_id: Option<String>,
}

impl ServiceError {
    /// Returns the error type with any `namespace#` qualifier stripped.
    pub fn error_code(&self) -> Option<&str> {
        self.error_type
            .as_deref()
            .map(|t| t.rsplit('#').next().unwrap_or(t))
    }

    /// True when the error type matches the given bare code.
    pub fn is_code(&self, code: &str) -> bool {
        self.error_code() == Some(code)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code={}", self.code)?;
        if let Some(code) = self.error_code() {
            write!(f, ", type={}", code)?;
        }
        if let Some(ref message) = self.message {
            if !message.is_empty() {
                write!(f, ", message={}", message)?;
            }
        }
        if let Some(ref request_id) = self.request_id {
            write!(f, ", request-id={}", request_id)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("duplicated key provided: {0}")]
    DuplicateKey(String),
    #[error("ssm api error: {0}")]
    Api(ServiceError),
}

impl Error {
    /// Returns the service error when this is an API failure.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Error for parsing a string into one of the closed enum types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized enum value: {0}")]
pub struct UnknownEnumValue(pub String);

pub(crate) fn read_body_with_limit(
    resp: &mut reqwest::blocking::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    resp.take(limit as u64).read_to_end(&mut body)?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_strips_namespace_qualifier() {
        let err = ServiceError {
            code: 400,
            error_type: Some("com.amazonaws.ssm#ParameterNotFound".to_string()),
            message: None,
            request_id: None,
        };
        assert_eq!(err.error_code(), Some("ParameterNotFound"));
        assert!(err.is_code("ParameterNotFound"));
    }

    #[test]
    fn error_code_passes_bare_type_through() {
        let err = ServiceError {
            error_type: Some("ThrottlingException".to_string()),
            ..ServiceError::default()
        };
        assert_eq!(err.error_code(), Some("ThrottlingException"));
    }

    #[test]
    fn display_includes_type_and_message() {
        let err = ServiceError {
            code: 400,
            error_type: Some("com.amazonaws.ssm#ParameterAlreadyExists".to_string()),
            message: Some("The parameter already exists.".to_string()),
            request_id: Some("abc-123".to_string()),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("code=400"));
        assert!(rendered.contains("type=ParameterAlreadyExists"));
        assert!(rendered.contains("message=The parameter already exists."));
        assert!(rendered.contains("request-id=abc-123"));
    }
}
