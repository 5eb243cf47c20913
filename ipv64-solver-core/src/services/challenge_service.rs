//! DNS-01 挑战编排服务

use std::sync::Arc;

use ipv64_solver_provider::RecordType;

use crate::error::{CoreError, CoreResult};
use crate::services::{Ipv64ClientFactory, RecordClientFactory};
use crate::traits::{API_KEY_FIELD, CredentialStore};
use crate::types::{ChallengeRequest, SolverConfig};

/// Solver identifier reported to the webhook framework.
pub const SOLVER_NAME: &str = "ipv64-solver";

/// DNS-01 挑战编排服务
///
/// Resolves the API token per challenge, builds a record client for exactly
/// that token, and drives the TXT record mutations. All collaborators are
/// injected; there is no process-wide client state.
pub struct ChallengeService {
    credential_store: Arc<dyn CredentialStore>,
    client_factory: Arc<dyn RecordClientFactory>,
}

impl ChallengeService {
    /// Service with the default ipv64 client factory.
    #[must_use]
    pub fn new(credential_store: Arc<dyn CredentialStore>) -> Self {
        Self::with_factory(credential_store, Arc::new(Ipv64ClientFactory))
    }

    /// Service with a custom client factory（测试注入用）。
    #[must_use]
    pub fn with_factory(
        credential_store: Arc<dyn CredentialStore>,
        client_factory: Arc<dyn RecordClientFactory>,
    ) -> Self {
        Self {
            credential_store,
            client_factory,
        }
    }

    /// Publish the challenge TXT record.
    pub async fn present(&self, challenge: &ChallengeRequest) -> CoreResult<()> {
        let config = SolverConfig::from_json(challenge.config.as_ref())?;
        let prefix = challenge_prefix(&challenge.resolved_fqdn, &config.subdomain)?;
        let token = self
            .resolve_token(&challenge.resource_namespace, &config)
            .await?;
        let client = self.client_factory.create(token);

        client
            .add_record(&config.subdomain, &prefix, &challenge.key, RecordType::Txt)
            .await
            .map_err(|e| CoreError::ChallengeFailed {
                fqdn: challenge.resolved_fqdn.clone(),
                source: e,
            })?;

        log::info!("Presented TXT record {}", challenge.resolved_fqdn);
        Ok(())
    }

    /// Remove the challenge TXT record.
    pub async fn cleanup(&self, challenge: &ChallengeRequest) -> CoreResult<()> {
        let config = SolverConfig::from_json(challenge.config.as_ref())?;
        let prefix = challenge_prefix(&challenge.resolved_fqdn, &config.subdomain)?;
        let token = self
            .resolve_token(&challenge.resource_namespace, &config)
            .await?;
        let client = self.client_factory.create(token);

        client
            .delete_record(&config.subdomain, &prefix, &challenge.key, RecordType::Txt)
            .await
            .map_err(|e| CoreError::ChallengeFailed {
                fqdn: challenge.resolved_fqdn.clone(),
                source: e,
            })?;

        log::info!("Cleaned up TXT record {}", challenge.resolved_fqdn);
        Ok(())
    }

    /// 从凭证存储解析 API token
    async fn resolve_token(&self, namespace: &str, config: &SolverConfig) -> CoreResult<String> {
        if config.secret_name.is_empty() {
            return Err(CoreError::CredentialError(
                "no secretName configured".to_string(),
            ));
        }

        self.credential_store
            .get_secret_value(namespace, &config.secret_name, API_KEY_FIELD)
            .await?
            .ok_or_else(|| {
                CoreError::CredentialError(format!(
                    "key `{API_KEY_FIELD}` not found in secret `{namespace}/{}`",
                    config.secret_name
                ))
            })
    }
}

/// 由完整记录名与注册域计算记录前缀
///
/// 如: `"_acme-challenge.example.home64.de."` + `"example.home64.de"` -> `"_acme-challenge"`
///
/// The FQDN must sit strictly under the configured subdomain on a label
/// boundary; anything else is an [`CoreError::InvalidChallenge`].
pub fn challenge_prefix(fqdn: &str, subdomain: &str) -> CoreResult<String> {
    let name = fqdn.trim_end_matches('.');
    let zone = subdomain.trim_end_matches('.');

    if zone.is_empty() {
        return Err(CoreError::InvalidChallenge(
            "no subdomain configured".to_string(),
        ));
    }

    match name
        .strip_suffix(zone)
        .and_then(|prefix| prefix.strip_suffix('.'))
    {
        Some(prefix) if !prefix.is_empty() => Ok(prefix.to_string()),
        _ => Err(CoreError::InvalidChallenge(format!(
            "`{fqdn}` is not under configured subdomain `{subdomain}`"
        ))),
    }
}
