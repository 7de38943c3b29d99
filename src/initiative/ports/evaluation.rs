//! Repository port for evaluation persistence.

use super::RepositoryResult;
use crate::initiative::domain::{Evaluation, EvaluationId, InitiativeId, NewEvaluation};
use async_trait::async_trait;

/// Evaluation persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    /// Stores a new evaluation and returns it with its assigned identifier.
    async fn create(&self, evaluation: &NewEvaluation) -> RepositoryResult<Evaluation>;

    /// Finds an evaluation by identifier.
    async fn find_by_id(&self, id: EvaluationId) -> RepositoryResult<Option<Evaluation>>;

    /// Returns the evaluations of an initiative in creation order.
    async fn list_by_initiative(
        &self,
        initiative_id: InitiativeId,
    ) -> RepositoryResult<Vec<Evaluation>>;

    /// Persists the editable fields of an existing evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::EvaluationNotFound`] when the
    /// evaluation does not exist.
    async fn update(&self, evaluation: &Evaluation) -> RepositoryResult<Evaluation>;

    /// Deletes an evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::EvaluationNotFound`] when the
    /// evaluation does not exist.
    async fn delete(&self, id: EvaluationId) -> RepositoryResult<()>;

    /// Deletes every evaluation of an initiative and returns how many were
    /// removed.
    async fn delete_by_initiative(&self, initiative_id: InitiativeId) -> RepositoryResult<usize>;
}
