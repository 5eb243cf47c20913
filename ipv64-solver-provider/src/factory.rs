//! Client factory functions.

use std::sync::Arc;

use crate::client::Ipv64Client;
use crate::traits::RecordClient;

/// Creates a [`RecordClient`] bound to the given bearer token.
///
/// Every call returns an independent client. Tokens are never cached or
/// shared across callers, so a second call with a different token cannot be
/// served a client built for the first one. The client is wrapped in
/// `Arc<dyn RecordClient>` for easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use ipv64_solver_provider::{RecordClient, RecordType, create_client};
///
/// # async fn run() -> ipv64_solver_provider::Result<()> {
/// let client = create_client("your-token".to_string());
/// client
///     .add_record("example.com", "_acme-challenge", "abc123", RecordType::Txt)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn create_client(token: String) -> Arc<dyn RecordClient> {
    Arc::new(Ipv64Client::new(token))
}
