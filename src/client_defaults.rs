use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Target prefix for the JSON 1.1 `X-Amz-Target` header.
pub(crate) const TARGET_PREFIX: &str = "AmazonSSM";
pub(crate) const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub(crate) const REQUEST_ID_HEADER: &str = "x-amzn-RequestId";
