//! Errors shared by the initiative and evaluation repository ports.

use crate::initiative::domain::{ErrorKind, EvaluationId, InitiativeId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The initiative was not found.
    #[error("initiative not found: {0}")]
    InitiativeNotFound(InitiativeId),

    /// The evaluation was not found.
    #[error("evaluation not found: {0}")]
    EvaluationNotFound(EvaluationId),

    /// The backing store rejected the request on business grounds.
    #[error("request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code reported by the backend.
        status: u16,
        /// Human-readable reason.
        message: String,
    },

    /// The backing store refused a status transition.
    #[error("transition rejected ({status}): {message}")]
    TransitionRejected {
        /// HTTP status code reported by the backend.
        status: u16,
        /// Human-readable reason.
        message: String,
    },

    /// Stored data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Transport failure while talking to the backing store.
    #[error("network error: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),

    /// Stored data could not be read or written.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps persisted-data decoding or validation failures.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a transport failure.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    /// Wraps a persistence failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns the presentation category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InitiativeNotFound(_) | Self::EvaluationNotFound(_) => ErrorKind::NotFound,
            Self::Rejected { .. } | Self::InvalidPersistedData(_) => ErrorKind::Validation,
            Self::TransitionRejected { .. } => ErrorKind::IllegalTransition,
            Self::Network(_) | Self::Persistence(_) => ErrorKind::Network,
        }
    }
}
