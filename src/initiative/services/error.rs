//! Service-level errors for initiative governance operations.

use crate::initiative::{
    domain::{ErrorKind, EvaluationId, InitiativeDomainError, InitiativeId, UnknownStateError},
    ports::RepositoryError,
};
use thiserror::Error;

/// Errors returned by the governance services.
#[derive(Debug, Error)]
pub enum GovernanceServiceError {
    /// Domain validation or a lifecycle rule failed.
    #[error(transparent)]
    Domain(#[from] InitiativeDomainError),
    /// A status string was not part of the catalog.
    #[error(transparent)]
    UnknownState(#[from] UnknownStateError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// No initiative exists with the given identifier.
    #[error("initiative {0} not found")]
    NotFound(InitiativeId),
    /// No evaluation exists with the given identifier.
    #[error("evaluation {0} not found")]
    EvaluationNotFound(EvaluationId),
    /// The operator declined the confirmation request.
    #[error("operation cancelled: {0}")]
    Cancelled(String),
}

impl GovernanceServiceError {
    /// Returns the presentation category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::UnknownState(_) => ErrorKind::UnknownState,
            Self::Repository(err) => err.kind(),
            Self::NotFound(_) | Self::EvaluationNotFound(_) => ErrorKind::NotFound,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }
}

/// Result type for governance service operations.
pub type GovernanceServiceResult<T> = Result<T, GovernanceServiceError>;
