//! Audit trail entries for governance actions.

use super::{InitiativeId, InitiativeStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a governance action worth keeping after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuditEntry {
    /// An initiative changed status.
    StatusChanged {
        /// Correlation identifier of the entry.
        entry_id: Uuid,
        /// Initiative that changed.
        initiative_id: InitiativeId,
        /// Status before the change.
        from: InitiativeStatus,
        /// Status after the change.
        to: InitiativeStatus,
        /// Whether the change was triggered by an evaluation.
        automatic: bool,
        /// When the change was applied.
        at: DateTime<Utc>,
    },
    /// An initiative was deleted.
    InitiativeDeleted {
        /// Correlation identifier of the entry.
        entry_id: Uuid,
        /// Deleted initiative.
        initiative_id: InitiativeId,
        /// Number of evaluations deleted along with it.
        cascaded_evaluations: usize,
        /// When the deletion happened.
        at: DateTime<Utc>,
    },
}

impl AuditEntry {
    /// Creates a status change entry.
    #[must_use]
    pub fn status_changed(
        initiative_id: InitiativeId,
        from: InitiativeStatus,
        to: InitiativeStatus,
        automatic: bool,
        at: DateTime<Utc>,
    ) -> Self {
        Self::StatusChanged {
            entry_id: Uuid::new_v4(),
            initiative_id,
            from,
            to,
            automatic,
            at,
        }
    }

    /// Creates a deletion entry.
    #[must_use]
    pub fn initiative_deleted(
        initiative_id: InitiativeId,
        cascaded_evaluations: usize,
        at: DateTime<Utc>,
    ) -> Self {
        Self::InitiativeDeleted {
            entry_id: Uuid::new_v4(),
            initiative_id,
            cascaded_evaluations,
            at,
        }
    }

    /// Returns the initiative the entry is about.
    #[must_use]
    pub const fn initiative_id(&self) -> InitiativeId {
        match self {
            Self::StatusChanged { initiative_id, .. }
            | Self::InitiativeDeleted { initiative_id, .. } => *initiative_id,
        }
    }

    /// Returns the entry correlation identifier.
    #[must_use]
    pub const fn entry_id(&self) -> Uuid {
        match self {
            Self::StatusChanged { entry_id, .. } | Self::InitiativeDeleted { entry_id, .. } => {
                *entry_id
            }
        }
    }
}
