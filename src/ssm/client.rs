use crate::client_defaults::{
    AMZ_JSON_CONTENT_TYPE, DEFAULT_TIMEOUT, REQUEST_ID_HEADER, TARGET_PREFIX,
};
use crate::error::{read_body_with_limit, Error, MAX_ERROR_BODY_BYTES};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::Certificate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use super::common;

mod activations;
mod associations;
mod automation;
mod commands;
mod documents;
mod maintenance_windows;
mod ops_items;
mod parameters;
mod patch_baselines;
mod service_settings;
mod tagging;

pub struct SsmClientBuilder {
    endpoint: Url,
    timeout: Option<Duration>,
    ca_certs: Vec<Certificate>,
    auth: Option<common::AuthProvider>,
}

impl SsmClientBuilder {
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(Error::InvalidEndpoint(endpoint.to_string()));
        }
        if endpoint.host_str().is_none() {
            return Err(Error::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(Self {
            endpoint,
            timeout: Some(DEFAULT_TIMEOUT),
            ca_certs: Vec::new(),
            auth: None,
        })
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn add_ca_cert_pem(mut self, ca_pem: &[u8]) -> Result<Self, Error> {
        self.ca_certs.push(Certificate::from_pem(ca_pem)?);
        Ok(self)
    }

    /// Sends the given header verbatim with every request. Useful when a
    /// proxy or gateway in front of the service handles request signing.
    pub fn static_header_auth(
        mut self,
        header: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.auth = Some(common::AuthProvider::StaticHeader {
            header: header.into(),
            value: value.into(),
        });
        self
    }

    pub fn build(self) -> Result<SsmClient, Error> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        for cert in self.ca_certs {
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build()?;
        Ok(SsmClient {
            endpoint: self.endpoint,
            http,
            auth: self.auth,
        })
    }
}

pub struct SsmClient {
    endpoint: Url,
    http: HttpClient,
    auth: Option<common::AuthProvider>,
}

impl SsmClient {
    pub fn builder(endpoint: impl AsRef<str>) -> Result<SsmClientBuilder, Error> {
        SsmClientBuilder::new(endpoint)
    }

    /// Builder preconfigured with the regional endpoint, e.g.
    /// `https://ssm.us-east-1.amazonaws.com/`.
    pub fn builder_for_region(region: &str) -> Result<SsmClientBuilder, Error> {
        SsmClientBuilder::new(format!("https://ssm.{region}.amazonaws.com/"))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts one JSON 1.1 operation and decodes the response shape.
    ///
    /// Operations that return an empty body (the service does this for
    /// results with no members) decode as the shape's default.
    pub(crate) fn call<Req, Res>(&self, operation: &str, request: &Req) -> Result<Res, Error>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let target = format!("{}.{}", TARGET_PREFIX, operation);
        let body = serde_json::to_vec(request)?;
        let mut req = self
            .http
            .post(self.endpoint.clone())
            .header("X-Amz-Target", &target)
            .header(CONTENT_TYPE, AMZ_JSON_CONTENT_TYPE)
            .body(body);
        req = common::apply_auth(req, &self.auth);
        let mut resp = req.send()?;
        let status = resp.status();
        let request_id = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        log::debug!(
            "{} -> {} (request-id: {})",
            target,
            status,
            request_id.as_deref().unwrap_or("-")
        );
        if status.is_success() {
            let text = resp.text()?;
            if text.trim().is_empty() {
                serde_json::from_str("{}").map_err(Error::from)
            } else {
                serde_json::from_str(&text).map_err(Error::from)
            }
        } else {
            let body = read_body_with_limit(&mut resp, MAX_ERROR_BODY_BYTES)?;
            Err(common::parse_error_from_body(status, &body, request_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::client_defaults::DEFAULT_TIMEOUT;
    use crate::error::Error;
    use crate::models::{CancelCommandRequest, GetParameterRequest, SendCommandRequest};
    use crate::ssm::SsmClient;
    use std::collections::HashMap;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn call_posts_json_with_target_header() {
        let body = r#"{"Parameter":{"Name":"db-password","Value":"hunter2","Type":"SecureString"}}"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/x-amz-json-1.1\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        let (base_url, rx, handle) = serve_once(response);
        let client = SsmClient::builder(&base_url)
            .expect("builder")
            .build()
            .expect("build");

        let result = client
            .get_parameter(
                &GetParameterRequest::default()
                    .with_name("db-password")
                    .with_with_decryption(true),
            )
            .expect("request");
        let parameter = result.parameter.expect("parameter");
        assert_eq!(parameter.value.as_deref(), Some("hunter2"));

        let req = rx.recv().expect("request");
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/");
        assert_eq!(
            req.headers.get("x-amz-target").map(String::as_str),
            Some("AmazonSSM.GetParameter")
        );
        assert_eq!(
            req.headers.get("content-type").map(String::as_str),
            Some("application/x-amz-json-1.1")
        );
        let sent: serde_json::Value = serde_json::from_str(&req.body).expect("body json");
        assert_eq!(sent["Name"], "db-password");
        assert_eq!(sent["WithDecryption"], true);

        handle.join().expect("server");
    }

    #[test]
    fn service_failure_maps_to_api_error() {
        let body = r#"{"__type":"com.amazonaws.ssm#ParameterNotFound","message":"not found"}"#;
        let response = format!(
            "HTTP/1.1 400 Bad Request\r\nContent-Type: application/x-amz-json-1.1\r\nx-amzn-RequestId: 9f3a\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        let (base_url, _rx, handle) = serve_once(response);
        let client = SsmClient::builder(&base_url)
            .expect("builder")
            .build()
            .expect("build");

        let err = client
            .get_parameter(&GetParameterRequest::default().with_name("missing"))
            .expect_err("failure");
        let service = err.as_service_error().expect("api error");
        assert_eq!(service.code, 400);
        assert!(service.is_code("ParameterNotFound"));
        assert_eq!(service.message.as_deref(), Some("not found"));
        assert_eq!(service.request_id.as_deref(), Some("9f3a"));

        handle.join().expect("server");
    }

    #[test]
    fn empty_success_body_decodes_as_default_result() {
        let response =
            "HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n".to_string();
        let (base_url, rx, handle) = serve_once(response);
        let client = SsmClient::builder(&base_url)
            .expect("builder")
            .build()
            .expect("build");

        client
            .cancel_command(&CancelCommandRequest::default().with_command_id("cmd-1"))
            .expect("request");

        let req = rx.recv().expect("request");
        assert_eq!(
            req.headers.get("x-amz-target").map(String::as_str),
            Some("AmazonSSM.CancelCommand")
        );

        handle.join().expect("server");
    }

    #[test]
    fn static_auth_header_is_sent() {
        let response =
            "HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\n{}".to_string();
        let (base_url, rx, handle) = serve_once(response);
        let client = SsmClient::builder(&base_url)
            .expect("builder")
            .static_header_auth("Authorization", "AWS4-HMAC-SHA256 test")
            .build()
            .expect("build");

        client
            .send_command(&SendCommandRequest::default().with_document_name("AWS-RunShellScript"))
            .expect("request");

        let req = rx.recv().expect("request");
        assert_eq!(
            req.headers.get("authorization").map(String::as_str),
            Some("AWS4-HMAC-SHA256 test")
        );

        handle.join().expect("server");
    }

    #[test]
    fn builder_rejects_non_http_scheme() {
        let err = match SsmClient::builder("ftp://ssm.us-east-1.amazonaws.com/") {
            Ok(_) => panic!("expected error"),
            Err(err) => err,
        };
        assert!(matches!(err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn builder_starts_with_default_timeout() {
        let builder = SsmClient::builder("https://example.com/").expect("builder");
        assert_eq!(builder.timeout, Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn builder_for_region_formats_endpoint() {
        let client = SsmClient::builder_for_region("eu-west-1")
            .expect("builder")
            .build()
            .expect("build");
        assert_eq!(
            client.endpoint().as_str(),
            "https://ssm.eu-west-1.amazonaws.com/"
        );
    }

    struct CapturedRequest {
        method: String,
        path: String,
        headers: HashMap<String, String>,
        body: String,
    }

    fn serve_once(
        response: String,
    ) -> (
        String,
        mpsc::Receiver<CapturedRequest>,
        thread::JoinHandle<()>,
    ) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let req = read_request(&mut stream);
                let _ = tx.send(req);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{}", addr), rx, handle)
    }

    fn read_request(stream: &mut TcpStream) -> CapturedRequest {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let mut header_end = None;
        loop {
            let read = stream.read(&mut chunk).unwrap_or(0);
            if read == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..read]);
            if header_end.is_none() {
                header_end = buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4);
            }
            if let Some(end) = header_end {
                let header_str = String::from_utf8_lossy(&buf[..end]);
                let content_length = header_str
                    .split("\r\n")
                    .find_map(|line| {
                        let (key, value) = line.split_once(':')?;
                        key.trim()
                            .eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if buf.len() >= end + content_length {
                    break;
                }
            }
        }

        let header_end = header_end.unwrap_or(buf.len());
        let header_str = String::from_utf8_lossy(&buf[..header_end]);
        let mut lines = header_str.split("\r\n");
        let request_line = lines.next().unwrap_or("");
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or("").to_string();
        let path = parts.next().unwrap_or("").to_string();

        let mut headers = HashMap::new();
        for line in lines {
            if let Some((key, value)) = line.split_once(':') {
                headers.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
            }
        }

        let body = String::from_utf8_lossy(&buf[header_end..]).to_string();

        CapturedRequest {
            method,
            path,
            headers,
            body,
        }
    }
}
