use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An ACME DNS-01 challenge as handed to the solver.
///
/// Carries everything the orchestrator consumes: the full record name to
/// publish under, the key authorization value for the TXT content, the
/// namespace the credential secret lives in, and the issuer's raw solver
/// config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// 完整记录名（含挑战前缀），如 `_acme-challenge.example.home64.de.`
    pub resolved_fqdn: String,
    /// TXT 记录内容（key authorization 摘要）
    pub key: String,
    /// 凭证 Secret 所在命名空间
    pub resource_namespace: String,
    /// 解码前的原始 solver 配置
    #[serde(default)]
    pub config: Option<serde_json::Value>,
}

/// Per-issuer solver configuration, embedded as raw JSON in the challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverConfig {
    /// Account contact address (informational, not sent to the API).
    pub email: String,
    /// Name of the secret holding the API token.
    pub secret_name: String,
    /// The registered domain records are created under (e.g. `example.home64.de`).
    pub subdomain: String,
}

impl SolverConfig {
    /// Decode the solver config from the challenge's raw JSON.
    ///
    /// An absent config yields the empty default; the credential and
    /// subdomain checks downstream then produce the precise error.
    pub fn from_json(config: Option<&serde_json::Value>) -> CoreResult<Self> {
        match config {
            None => Ok(Self::default()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| CoreError::ConfigError(format!("error decoding solver config: {e}"))),
        }
    }
}
