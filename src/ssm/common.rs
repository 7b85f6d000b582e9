use crate::error::{Error, ServiceError};
use reqwest::blocking::RequestBuilder;
use reqwest::StatusCode;

pub(crate) enum AuthProvider {
    StaticHeader { header: String, value: String },
}

pub(crate) fn apply_auth(req: RequestBuilder, auth: &Option<AuthProvider>) -> RequestBuilder {
    let Some(auth) = auth else {
        return req;
    };
    match auth {
        AuthProvider::StaticHeader { header, value } => req.header(header, value),
    }
}

/// Builds an [`Error::Api`] from a non-2xx response body.
///
/// The body is expected to be a JSON 1.1 error document carrying
/// `__type` and `message`. Anything else (HTML from a proxy, an empty
/// body) falls back to the raw body text so the caller still sees what
/// came over the wire.
pub(crate) fn parse_error_from_body(
    status: StatusCode,
    body: &[u8],
    request_id: Option<String>,
) -> Error {
    let mut err = serde_json::from_slice::<ServiceError>(body).unwrap_or_default();
    err.code = status.as_u16() as i32;
    err.request_id = request_id;
    if err.error_type.is_none() && err.message.is_none() {
        let raw = String::from_utf8_lossy(body).trim().to_string();
        if !raw.is_empty() {
            err.message = Some(raw);
        }
    }
    Error::Api(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_type_and_message_are_extracted() {
        let body = br#"{"__type":"com.amazonaws.ssm#ParameterNotFound","message":"no such name"}"#;
        let err = parse_error_from_body(
            StatusCode::BAD_REQUEST,
            body,
            Some("req-1".to_string()),
        );
        let service = err.as_service_error().expect("api error");
        assert_eq!(service.code, 400);
        assert_eq!(service.error_code(), Some("ParameterNotFound"));
        assert_eq!(service.message.as_deref(), Some("no such name"));
        assert_eq!(service.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn non_json_body_becomes_fallback_message() {
        let err = parse_error_from_body(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>", None);
        let service = err.as_service_error().expect("api error");
        assert_eq!(service.code, 502);
        assert_eq!(service.error_code(), None);
        assert_eq!(service.message.as_deref(), Some("<html>bad gateway</html>"));
    }

    #[test]
    fn empty_body_keeps_status_only() {
        let err = parse_error_from_body(StatusCode::INTERNAL_SERVER_ERROR, b"", None);
        let service = err.as_service_error().expect("api error");
        assert_eq!(service.code, 500);
        assert_eq!(service.message, None);
    }
}
