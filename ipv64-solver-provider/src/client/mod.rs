//! ipv64 DNS record client

mod http;
mod record_ops;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::utils::log_sanitizer::mask_secret;

/// ipv64 单端点 API 地址
pub(crate) const IPV64_API_URL: &str = "https://ipv64.net/api.php";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// ipv64 DNS record client.
///
/// Bound to the API endpoint and one bearer token at construction and never
/// reconfigured afterwards. Construction is cheap; callers dealing with more
/// than one token build one client per token instead of sharing a process-wide
/// instance. Safe for concurrent use; both operations only read the
/// construction-time fields.
pub struct Ipv64Client {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) token: String,
}

impl Ipv64Client {
    /// Client bound to the production API endpoint.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self::with_endpoint(IPV64_API_URL.to_string(), token)
    }

    /// Client bound to a custom endpoint. 测试用（wiremock 等 stub 服务器）。
    #[must_use]
    pub fn with_endpoint(endpoint: String, token: String) -> Self {
        log::debug!(
            "[ipv64] client created for {endpoint} (token {})",
            mask_secret(&token)
        );
        Self {
            client: create_http_client(),
            endpoint,
            token,
        }
    }
}

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}
