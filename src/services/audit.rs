use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur when recording an audit entry
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Stored record of one successful recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: u64,
    #[serde(rename = "userInput")]
    pub user_input: Value,
    pub algorithm: String,
    pub results: Value,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Audit entry before it is assigned an id and timestamp
#[derive(Debug, Clone)]
pub struct NewAuditRecord {
    pub user_input: Value,
    pub algorithm: String,
    pub results: Value,
}

impl NewAuditRecord {
    pub fn from_parts<I, R>(user_input: &I, algorithm: &str, results: &R) -> Result<Self, AuditError>
    where
        I: Serialize,
        R: Serialize,
    {
        Ok(Self {
            user_input: serde_json::to_value(user_input)?,
            algorithm: algorithm.to_string(),
            results: serde_json::to_value(results)?,
        })
    }
}

/// Append-only in-memory audit log
///
/// Ids start at 1 and increase by one per appended record.
#[derive(Debug)]
pub struct AuditLog {
    records: RwLock<Vec<AuditRecord>>,
    next_id: AtomicU64,
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLog {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Store a record and return it with its assigned id
    pub async fn append(&self, record: NewAuditRecord) -> AuditRecord {
        let mut records = self.records.write().await;

        let stored = AuditRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_input: record.user_input,
            algorithm: record.algorithm,
            results: record.results,
            created_at: Utc::now(),
        };
        records.push(stored.clone());
        drop(records);

        tracing::debug!("Stored audit record {} ({})", stored.id, stored.algorithm);
        stored
    }

    /// All records in insertion order
    pub async fn list_all(&self) -> Vec<AuditRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
