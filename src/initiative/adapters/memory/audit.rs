//! In-memory audit log.

use crate::initiative::{
    domain::AuditEntry,
    ports::{AuditLog, AuditLogError},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Audit log that keeps entries in memory for inspection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl InMemoryAuditLog {
    /// Creates an empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded entry in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AuditLogError`] when the entry lock is poisoned.
    pub fn entries(&self) -> Result<Vec<AuditEntry>, AuditLogError> {
        let entries = self
            .entries
            .read()
            .map_err(|err| AuditLogError::new(std::io::Error::other(err.to_string())))?;
        Ok(entries.clone())
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditLogError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| AuditLogError::new(std::io::Error::other(err.to_string())))?;
        entries.push(entry);
        Ok(())
    }
}
