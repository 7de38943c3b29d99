//! Error types for initiative domain validation and parsing.

use super::{InitiativeId, InitiativeStatus};
use thiserror::Error;

/// Coarse error category surfaced to presentation layers.
///
/// Every error in the initiative module maps onto one of these kinds so a
/// caller can pick a specific message without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input or a business rule on input values was violated.
    Validation,
    /// The referenced record does not exist.
    NotFound,
    /// The requested status is not reachable from the current status.
    IllegalTransition,
    /// A status value is not part of the catalog.
    UnknownState,
    /// Transport or HTTP failure unrelated to business rules.
    Network,
    /// The operator declined a confirmation request.
    Cancelled,
}

/// Errors returned while constructing or mutating initiative domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InitiativeDomainError {
    /// The initiative title is empty after trimming.
    #[error("initiative title must not be empty")]
    EmptyTitle,

    /// The evaluation score is not a finite value in `[0, 100]`.
    #[error("evaluation score {0} is outside the range [0, 100]")]
    ScoreOutOfRange(String),

    /// A new initiative was given a status other than the initial one.
    #[error(
        "initiatives are created as '{initial}', not '{0}'",
        initial = InitiativeStatus::INITIAL
    )]
    InitialStatusNotAllowed(InitiativeStatus),

    /// The requested status is not reachable from the current status.
    #[error("illegal transition for initiative {id} from '{from}' to '{to}'")]
    IllegalTransition {
        /// Initiative whose transition was rejected.
        id: InitiativeId,
        /// Current status.
        from: InitiativeStatus,
        /// Rejected target status.
        to: InitiativeStatus,
    },

    /// An evaluation referenced an initiative that does not exist.
    #[error("evaluation references unknown initiative {0}")]
    UnknownInitiative(InitiativeId),

    /// Evaluations may only be recorded for finished initiatives.
    #[error("initiative {id} is '{status}', evaluations require 'finalizada'")]
    EvaluationRequiresFinalized {
        /// Initiative the evaluation was attached to.
        id: InitiativeId,
        /// Current status of that initiative.
        status: InitiativeStatus,
    },
}

impl InitiativeDomainError {
    /// Returns the presentation category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalTransition { .. } => ErrorKind::IllegalTransition,
            Self::EmptyTitle
            | Self::ScoreOutOfRange(_)
            | Self::InitialStatusNotAllowed(_)
            | Self::UnknownInitiative(_)
            | Self::EvaluationRequiresFinalized { .. } => ErrorKind::Validation,
        }
    }
}

/// Error returned when a status string is not part of the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown initiative status: {0}")]
pub struct UnknownStateError(pub String);
