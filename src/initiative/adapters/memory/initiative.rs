//! In-memory repository for initiatives.

use super::lock_error;
use crate::initiative::{
    domain::{
        Initiative, InitiativeFilter, InitiativeId, NewInitiative, Page, PageRequest,
        PersistedInitiativeData,
    },
    ports::{InitiativeRepository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory initiative repository.
///
/// Identifiers are assigned sequentially from one. Concurrent transitions of
/// the same initiative are last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInitiativeRepository {
    state: Arc<RwLock<InMemoryInitiativeState>>,
}

#[derive(Debug, Default)]
struct InMemoryInitiativeState {
    last_id: i64,
    initiatives: BTreeMap<InitiativeId, Initiative>,
}

impl InMemoryInitiativeRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InitiativeRepository for InMemoryInitiativeRepository {
    async fn create(&self, initiative: &NewInitiative) -> RepositoryResult<Initiative> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id = state.last_id.saturating_add(1);
        let id = InitiativeId::new(state.last_id);
        let stored = Initiative::from_new(id, initiative.clone());
        state.initiatives.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: InitiativeId) -> RepositoryResult<Option<Initiative>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.initiatives.get(&id).cloned())
    }

    async fn list(
        &self,
        filter: &InitiativeFilter,
        page: PageRequest,
    ) -> RepositoryResult<Page<Initiative>> {
        let state = self.state.read().map_err(lock_error)?;
        let matching = state
            .initiatives
            .values()
            .filter(|initiative| {
                filter.matches(
                    initiative.status(),
                    initiative.plan_id(),
                    initiative.user_id(),
                )
            })
            .cloned()
            .collect();
        Ok(Page::from_sorted(matching, page))
    }

    async fn update(&self, initiative: &Initiative) -> RepositoryResult<Initiative> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .initiatives
            .get_mut(&initiative.id())
            .ok_or(RepositoryError::InitiativeNotFound(initiative.id()))?;

        let updated = Initiative::from_persisted(PersistedInitiativeData {
            id: stored.id(),
            title: initiative.title().clone(),
            plan_id: initiative.plan_id(),
            user_id: initiative.user_id(),
            status: stored.status(),
            summary: initiative.summary().map(str::to_owned),
            estimated_impact: initiative.estimated_impact().map(str::to_owned),
            start_date: initiative.start_date(),
            end_date: initiative.end_date(),
            created_at: stored.created_at(),
            updated_at: initiative.updated_at(),
        });
        *stored = updated.clone();
        Ok(updated)
    }

    async fn record_transition(&self, initiative: &Initiative) -> RepositoryResult<Initiative> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .initiatives
            .get_mut(&initiative.id())
            .ok_or(RepositoryError::InitiativeNotFound(initiative.id()))?;

        let updated = Initiative::from_persisted(PersistedInitiativeData {
            id: stored.id(),
            title: stored.title().clone(),
            plan_id: stored.plan_id(),
            user_id: stored.user_id(),
            status: initiative.status(),
            summary: stored.summary().map(str::to_owned),
            estimated_impact: stored.estimated_impact().map(str::to_owned),
            start_date: stored.start_date(),
            end_date: stored.end_date(),
            created_at: stored.created_at(),
            updated_at: initiative.updated_at(),
        });
        *stored = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: InitiativeId) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .initiatives
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::InitiativeNotFound(id))
    }
}
