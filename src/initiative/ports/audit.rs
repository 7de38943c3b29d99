//! Audit log port.

use crate::initiative::domain::AuditEntry;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Append-only sink for governance audit entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Appends an entry.
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditLogError>;
}

/// Error returned when an audit entry cannot be written.
#[derive(Debug, Clone, Error)]
#[error("audit log unavailable: {0}")]
pub struct AuditLogError(pub Arc<dyn std::error::Error + Send + Sync>);

impl AuditLogError {
    /// Wraps an underlying sink failure.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
