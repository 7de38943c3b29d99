//! In-memory repository for evaluations.

use super::lock_error;
use crate::initiative::{
    domain::{Evaluation, EvaluationId, InitiativeId, NewEvaluation},
    ports::{EvaluationRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory evaluation repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEvaluationRepository {
    state: Arc<RwLock<InMemoryEvaluationState>>,
}

#[derive(Debug, Default)]
struct InMemoryEvaluationState {
    last_id: i64,
    evaluations: BTreeMap<EvaluationId, Evaluation>,
}

impl InMemoryEvaluationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EvaluationRepository for InMemoryEvaluationRepository {
    async fn create(&self, evaluation: &NewEvaluation) -> RepositoryResult<Evaluation> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id = state.last_id.saturating_add(1);
        let id = EvaluationId::new(state.last_id);
        let stored = Evaluation::from_new(id, evaluation.clone());
        state.evaluations.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: EvaluationId) -> RepositoryResult<Option<Evaluation>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.evaluations.get(&id).cloned())
    }

    async fn list_by_initiative(
        &self,
        initiative_id: InitiativeId,
    ) -> RepositoryResult<Vec<Evaluation>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut evaluations: Vec<Evaluation> = state
            .evaluations
            .values()
            .filter(|evaluation| evaluation.initiative_id() == initiative_id)
            .cloned()
            .collect();
        evaluations.sort_by_key(|evaluation| (evaluation.created_at(), evaluation.id()));
        Ok(evaluations)
    }

    async fn update(&self, evaluation: &Evaluation) -> RepositoryResult<Evaluation> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .evaluations
            .get_mut(&evaluation.id())
            .ok_or(RepositoryError::EvaluationNotFound(evaluation.id()))?;
        if stored.initiative_id() != evaluation.initiative_id() {
            return Err(RepositoryError::Rejected {
                status: 422,
                message: format!(
                    "evaluation {} cannot move to initiative {}",
                    evaluation.id(),
                    evaluation.initiative_id()
                ),
            });
        }
        *stored = evaluation.clone();
        Ok(evaluation.clone())
    }

    async fn delete(&self, id: EvaluationId) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .evaluations
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::EvaluationNotFound(id))
    }

    async fn delete_by_initiative(&self, initiative_id: InitiativeId) -> RepositoryResult<usize> {
        let mut state = self.state.write().map_err(lock_error)?;
        let before = state.evaluations.len();
        state
            .evaluations
            .retain(|_, evaluation| evaluation.initiative_id() != initiative_id);
        Ok(before.saturating_sub(state.evaluations.len()))
    }
}
