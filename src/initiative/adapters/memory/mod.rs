//! In-memory adapters used by tests and offline tooling.

mod audit;
mod evaluation;
mod initiative;

pub use audit::InMemoryAuditLog;
pub use evaluation::InMemoryEvaluationRepository;
pub use initiative::InMemoryInitiativeRepository;

use crate::initiative::ports::RepositoryError;

/// Maps a poisoned lock into a persistence error.
fn lock_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(err.to_string()))
}
