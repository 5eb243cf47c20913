use async_trait::async_trait;

use crate::error::Result;
use crate::types::RecordType;

/// DNS 记录客户端 Trait
///
/// The seam between the challenge orchestrator and the concrete API client.
/// Both operations are single-shot: one HTTP exchange, no internal retries,
/// with idempotent provider outcomes ("already there" / already removed)
/// normalized to `Ok(())`.
#[async_trait]
pub trait RecordClient: Send + Sync {
    /// Create a record `<prefix>.<subdomain>` with the given content.
    ///
    /// Succeeds if the record was created or already exists with this content.
    async fn add_record(
        &self,
        subdomain: &str,
        prefix: &str,
        content: &str,
        record_type: RecordType,
    ) -> Result<()>;

    /// Delete the record `<prefix>.<subdomain>` matching the given content.
    ///
    /// Succeeds if the API confirmed or accepted the deletion.
    async fn delete_record(
        &self,
        subdomain: &str,
        prefix: &str,
        content: &str,
        record_type: RecordType,
    ) -> Result<()>;
}
