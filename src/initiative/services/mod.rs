//! Application services for initiative governance.

mod error;
mod evaluation;
mod initiative;
mod transition;

pub use error::{GovernanceServiceError, GovernanceServiceResult};
pub use evaluation::{CreateEvaluationRequest, EvaluationOutcome, EvaluationService};
pub use initiative::{CreateInitiativeRequest, InitiativeService};
pub use transition::TransitionOrchestrator;

use crate::initiative::{domain::AuditEntry, ports::AuditLog};

/// Appends an audit entry. Sink failures are logged and never fail the
/// audited operation, which has already been persisted.
async fn write_audit<A: AuditLog + ?Sized>(audit: &A, entry: AuditEntry) {
    let initiative_id = entry.initiative_id();
    if let Err(err) = audit.record(entry).await {
        tracing::warn!(%initiative_id, error = %err, "failed to write audit entry");
    }
}
