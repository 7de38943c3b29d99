//! Confirmation command objects for irreversible actions.

use super::{InitiativeId, InitiativeStatus};
use std::fmt;

/// Irreversible action awaiting operator confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationAction {
    /// Delete an initiative, together with its evaluations when cascading.
    DeleteInitiative {
        /// Initiative to delete.
        initiative_id: InitiativeId,
        /// Number of evaluations that will be deleted too.
        cascaded_evaluations: usize,
    },
    /// Move an initiative to another status.
    Transition {
        /// Initiative to transition.
        initiative_id: InitiativeId,
        /// Current status.
        from: InitiativeStatus,
        /// Requested status.
        to: InitiativeStatus,
    },
}

/// Question put to the operator before an irreversible action runs.
///
/// The action only runs after the prompt resolves to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    message: String,
    action: ConfirmationAction,
}

impl ConfirmationRequest {
    /// Builds the request for an action with its standard message.
    #[must_use]
    pub fn for_action(action: ConfirmationAction) -> Self {
        Self {
            message: action.to_string(),
            action,
        }
    }

    /// Returns the human-readable question.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the action that runs on confirmation.
    #[must_use]
    pub const fn action(&self) -> ConfirmationAction {
        self.action
    }
}

impl fmt::Display for ConfirmationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeleteInitiative {
                initiative_id,
                cascaded_evaluations: 0,
            } => write!(f, "Delete initiative {initiative_id}?"),
            Self::DeleteInitiative {
                initiative_id,
                cascaded_evaluations,
            } => write!(
                f,
                "Delete initiative {initiative_id} and its {cascaded_evaluations} evaluation(s)?"
            ),
            Self::Transition {
                initiative_id,
                from,
                to,
            } => write!(f, "Move initiative {initiative_id} from '{from}' to '{to}'?"),
        }
    }
}
