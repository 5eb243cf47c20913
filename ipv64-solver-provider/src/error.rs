use serde::{Deserialize, Serialize};

/// Error type for all ipv64 record operations.
///
/// All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// [`NetworkError`](Self::NetworkError) and [`Timeout`](Self::Timeout) represent
/// transient transport failures that may succeed on retry. The client itself never
/// retries: it performs exactly one HTTP attempt per call, and the caller owns the
/// retry policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The requested DNS record type is not one ipv64 accepts.
    ///
    /// Detected before any I/O; no request is sent.
    UnsupportedRecordType {
        /// The unsupported record type string.
        record_type: String,
    },

    /// Failed to parse the API response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// The API answered with a status outside the recognized success patterns.
    ///
    /// Idempotent outcomes ("record already there" on add, the `del_record`
    /// echo on delete) are normalized to success and never produce this variant.
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// The `info` message from the response body.
        info: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（调用方输入问题），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::UnsupportedRecordType { .. })
    }

    /// Whether the failure happened before or on the wire rather than in the API.
    ///
    /// `true` for transport-level failures a caller may retry with backoff.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "[ipv64] Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "[ipv64] Request timeout: {detail}")
            }
            Self::UnsupportedRecordType { record_type } => {
                write!(f, "[ipv64] Unsupported record type: {record_type}")
            }
            Self::ParseError { detail } => {
                write!(f, "[ipv64] Parse error: {detail}")
            }
            Self::Api { status, info } => {
                write!(f, "[ipv64] API error (HTTP {status}): {info}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
