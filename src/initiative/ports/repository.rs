//! Repository port for initiative persistence and listing.

use super::RepositoryResult;
use crate::initiative::domain::{
    Initiative, InitiativeFilter, InitiativeId, NewInitiative, Page, PageRequest,
};
use async_trait::async_trait;

/// Initiative persistence contract.
///
/// The generic [`update`](Self::update) path never writes the status.
/// Status changes go through [`record_transition`](Self::record_transition),
/// which only the transition orchestrator calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InitiativeRepository: Send + Sync {
    /// Stores a new initiative and returns it with its assigned identifier.
    async fn create(&self, initiative: &NewInitiative) -> RepositoryResult<Initiative>;

    /// Finds an initiative by identifier.
    ///
    /// Returns `None` when the initiative does not exist.
    async fn find_by_id(&self, id: InitiativeId) -> RepositoryResult<Option<Initiative>>;

    /// Returns one page of initiatives matching `filter`, ascending by id.
    async fn list(
        &self,
        filter: &InitiativeFilter,
        page: PageRequest,
    ) -> RepositoryResult<Page<Initiative>>;

    /// Persists the editable fields of an existing initiative and returns
    /// the stored record. The stored status is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::InitiativeNotFound`] when the
    /// initiative does not exist.
    async fn update(&self, initiative: &Initiative) -> RepositoryResult<Initiative>;

    /// Persists the status of an initiative after a validated transition and
    /// returns the refreshed record.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::InitiativeNotFound`] when the
    /// initiative does not exist.
    async fn record_transition(&self, initiative: &Initiative) -> RepositoryResult<Initiative>;

    /// Deletes an initiative.
    ///
    /// # Errors
    ///
    /// Returns [`super::RepositoryError::InitiativeNotFound`] when the
    /// initiative does not exist.
    async fn delete(&self, id: InitiativeId) -> RepositoryResult<()>;
}
