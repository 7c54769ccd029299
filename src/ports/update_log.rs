//! UpdateLog port - storage for accepted webhook deliveries.

use async_trait::async_trait;

use crate::domain::updates::UpdateRecord;
use crate::domain::webhook::WebhookError;

/// Newest-first log of accepted updates.
///
/// Implementations must keep arrival order: after recording P1, P2, P3 a
/// snapshot is `[P3, P2, P1]`. Snapshots are owned copies; callers can never
/// mutate the log through them.
#[async_trait]
pub trait UpdateLog: Send + Sync {
    /// Inserts a record at the head of the log.
    async fn record(&self, record: UpdateRecord) -> Result<(), WebhookError>;

    /// Returns every retained record, newest first.
    async fn snapshot(&self) -> Result<Vec<UpdateRecord>, WebhookError>;

    /// Number of retained records.
    async fn len(&self) -> Result<usize, WebhookError>;

    async fn is_empty(&self) -> Result<bool, WebhookError> {
        Ok(self.len().await? == 0)
    }
}
