//! In-memory update log.
//!
//! Bounded, newest-first ring of accepted deliveries. Lives for the process
//! lifetime; nothing survives a restart.

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::domain::updates::UpdateRecord;
use crate::domain::webhook::WebhookError;
use crate::ports::UpdateLog;

/// Default number of retained updates.
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

/// Update log backed by a `VecDeque` behind an async lock.
///
/// Inserts happen at the front; once `capacity` is reached the oldest record
/// is dropped from the back. Concurrent writers never lose an insert.
#[derive(Debug)]
pub struct InMemoryUpdateLog {
    records: RwLock<VecDeque<UpdateRecord>>,
    capacity: usize,
}

impl InMemoryUpdateLog {
    /// Creates an empty log. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: RwLock::new(VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryUpdateLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

#[async_trait]
impl UpdateLog for InMemoryUpdateLog {
    async fn record(&self, record: UpdateRecord) -> Result<(), WebhookError> {
        let mut records = self.records.write().await;
        records.push_front(record);
        while records.len() > self.capacity {
            if let Some(evicted) = records.pop_back() {
                tracing::debug!(
                    platform = %evicted.platform,
                    received_at = %evicted.received_at,
                    "Evicted oldest update"
                );
            }
        }
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<UpdateRecord>, WebhookError> {
        Ok(self.records.read().await.iter().cloned().collect())
    }

    async fn len(&self) -> Result<usize, WebhookError> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::webhook::Platform;
    use serde_json::json;
    use std::sync::Arc;

    fn update(n: u32) -> UpdateRecord {
        UpdateRecord::new(Platform::Facebook, json!({ "n": n }))
    }

    fn payloads(records: &[UpdateRecord]) -> Vec<serde_json::Value> {
        records.iter().map(|r| r.payload.clone()).collect()
    }

    #[tokio::test]
    async fn starts_empty() {
        let log = InMemoryUpdateLog::default();

        assert!(log.is_empty().await.unwrap());
        assert!(log.snapshot().await.unwrap().is_empty());
        assert_eq!(log.capacity(), DEFAULT_LOG_CAPACITY);
    }

    #[tokio::test]
    async fn newest_update_comes_first() {
        let log = InMemoryUpdateLog::default();

        for n in 1..=3 {
            log.record(update(n)).await.unwrap();
        }

        assert_eq!(
            payloads(&log.snapshot().await.unwrap()),
            vec![json!({"n": 3}), json!({"n": 2}), json!({"n": 1})]
        );
    }

    #[tokio::test]
    async fn evicts_oldest_at_capacity() {
        let log = InMemoryUpdateLog::new(2);

        for n in 1..=3 {
            log.record(update(n)).await.unwrap();
        }

        assert_eq!(log.len().await.unwrap(), 2);
        assert_eq!(
            payloads(&log.snapshot().await.unwrap()),
            vec![json!({"n": 3}), json!({"n": 2})]
        );
    }

    #[tokio::test]
    async fn zero_capacity_keeps_latest() {
        let log = InMemoryUpdateLog::new(0);

        log.record(update(1)).await.unwrap();
        log.record(update(2)).await.unwrap();

        assert_eq!(payloads(&log.snapshot().await.unwrap()), vec![json!({"n": 2})]);
    }

    #[tokio::test]
    async fn snapshot_is_detached_copy() {
        let log = InMemoryUpdateLog::default();
        log.record(update(1)).await.unwrap();

        let mut snapshot = log.snapshot().await.unwrap();
        snapshot.clear();

        assert_eq!(log.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn concurrent_writers_lose_nothing() {
        let log = Arc::new(InMemoryUpdateLog::default());

        let tasks: Vec<_> = (0..50)
            .map(|n| {
                let log = log.clone();
                tokio::spawn(async move { log.record(update(n)).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(log.len().await.unwrap(), 50);
    }
}
