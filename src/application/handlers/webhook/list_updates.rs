//! ListUpdatesHandler - Query handler for the status page.

use std::sync::Arc;

use crate::domain::updates::UpdateRecord;
use crate::domain::webhook::WebhookError;
use crate::ports::UpdateLog;

/// Query for every retained update.
#[derive(Debug, Clone, Default)]
pub struct ListUpdatesQuery {}

/// Retained updates, newest first.
#[derive(Debug, Clone)]
pub struct ListUpdatesResult {
    pub records: Vec<UpdateRecord>,
}

impl ListUpdatesResult {
    /// Payloads alone, in log order.
    pub fn payloads(&self) -> Vec<&serde_json::Value> {
        self.records.iter().map(|r| &r.payload).collect()
    }
}

pub struct ListUpdatesHandler {
    update_log: Arc<dyn UpdateLog>,
}

impl ListUpdatesHandler {
    pub fn new(update_log: Arc<dyn UpdateLog>) -> Self {
        Self { update_log }
    }

    pub async fn handle(&self, _query: ListUpdatesQuery) -> Result<ListUpdatesResult, WebhookError> {
        let records = self.update_log.snapshot().await?;
        Ok(ListUpdatesResult { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::webhook::Platform;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedUpdateLog {
        records: Vec<UpdateRecord>,
    }

    #[async_trait]
    impl UpdateLog for FixedUpdateLog {
        async fn record(&self, _record: UpdateRecord) -> Result<(), WebhookError> {
            Ok(())
        }

        async fn snapshot(&self) -> Result<Vec<UpdateRecord>, WebhookError> {
            Ok(self.records.clone())
        }

        async fn len(&self) -> Result<usize, WebhookError> {
            Ok(self.records.len())
        }
    }

    #[tokio::test]
    async fn returns_payloads_in_log_order() {
        let log = Arc::new(FixedUpdateLog {
            records: vec![
                UpdateRecord::new(Platform::Threads, json!({"n": 2})),
                UpdateRecord::new(Platform::Facebook, json!({"n": 1})),
            ],
        });

        let result = ListUpdatesHandler::new(log)
            .handle(ListUpdatesQuery::default())
            .await
            .unwrap();

        assert_eq!(result.payloads(), vec![&json!({"n": 2}), &json!({"n": 1})]);
    }

    #[tokio::test]
    async fn empty_log_returns_no_records() {
        let log = Arc::new(FixedUpdateLog { records: vec![] });

        let result = ListUpdatesHandler::new(log)
            .handle(ListUpdatesQuery::default())
            .await
            .unwrap();

        assert!(result.records.is_empty());
    }
}
