//! ipv64 HTTP 请求方法
//!
//! 统一处理：构造表单请求、发送、日志、超时与网络错误映射。
//! 响应状态码的解释（幂等哨兵等）交给 `record_ops`。

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

use super::Ipv64Client;

impl Ipv64Client {
    /// Send one form-encoded, bearer-authenticated request to the API endpoint
    /// and return `(status, body)`.
    ///
    /// Exactly one attempt: transient failures surface as
    /// [`ProviderError::Timeout`] / [`ProviderError::NetworkError`] and the
    /// caller owns the retry policy.
    pub(crate) async fn send_form(
        &self,
        method: Method,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<(u16, String)> {
        log::debug!("[ipv64] {method} {} ({action})", self.endpoint);

        let response = self
            .client
            .request(method, &self.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .form(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    ProviderError::NetworkError {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        log::debug!("[ipv64] Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[ipv64] Response Body: {}", truncate_for_log(&body));

        Ok((status, body))
    }
}

/// Parse a JSON response body.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("[ipv64] JSON parse failed: {e}");
        log::error!("[ipv64] Raw response: {}", truncate_for_log(body));
        ProviderError::ParseError {
            detail: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Foo {
        x: i32,
    }

    #[test]
    fn parse_json_valid() {
        let result: Result<Foo> = parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Foo> = parse_json("not json");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_html_error_page() {
        // 代理或网关故障时端点可能返回 HTML
        let result: Result<Foo> = parse_json("<html><body>502 Bad Gateway</body></html>");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
