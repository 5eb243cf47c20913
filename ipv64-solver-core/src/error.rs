//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use ipv64_solver_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Solver configuration could not be decoded
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Secret, key entry, or credential store failure
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// Challenge FQDN does not belong to the configured subdomain
    #[error("Invalid challenge: {0}")]
    InvalidChallenge(String),

    /// Record mutation failed for the given challenge FQDN
    #[error("Challenge failed for `{fqdn}`: {source}")]
    ChallengeFailed {
        fqdn: String,
        source: ProviderError,
    },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing configuration, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigError(_) | Self::CredentialError(_) | Self::InvalidChallenge(_) => true,
            Self::ChallengeFailed { source, .. } | Self::Provider(source) => source.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
