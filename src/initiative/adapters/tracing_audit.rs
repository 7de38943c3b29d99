//! Audit log that writes entries as structured `tracing` events.

use crate::initiative::{
    domain::AuditEntry,
    ports::{AuditLog, AuditLogError},
};
use async_trait::async_trait;

/// Emits each audit entry on the `audit` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditLog;

#[async_trait]
impl AuditLog for TracingAuditLog {
    async fn record(&self, entry: AuditEntry) -> Result<(), AuditLogError> {
        match entry {
            AuditEntry::StatusChanged {
                entry_id,
                initiative_id,
                from,
                to,
                automatic,
                at,
            } => tracing::info!(
                target: "audit",
                %entry_id,
                %initiative_id,
                %from,
                %to,
                automatic,
                %at,
                "initiative status changed"
            ),
            AuditEntry::InitiativeDeleted {
                entry_id,
                initiative_id,
                cascaded_evaluations,
                at,
            } => tracing::info!(
                target: "audit",
                %entry_id,
                %initiative_id,
                cascaded_evaluations,
                %at,
                "initiative deleted"
            ),
        }
        Ok(())
    }
}
