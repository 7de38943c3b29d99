//! Transition orchestrator: the single entry point for status changes.

use super::{GovernanceServiceError, GovernanceServiceResult, write_audit};
use crate::initiative::{
    domain::{
        AuditEntry, ConfirmationAction, ConfirmationRequest, Initiative, InitiativeId,
        InitiativeStatus, transition,
    },
    ports::{AuditLog, ConfirmationPrompt, InitiativeRepository},
};
use mockable::Clock;
use std::sync::Arc;

/// Applies validated status transitions to stored initiatives.
#[derive(Clone)]
pub struct TransitionOrchestrator<R, A, C>
where
    R: InitiativeRepository,
    A: AuditLog,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    audit: Arc<A>,
    clock: Arc<C>,
}

impl<R, A, C> TransitionOrchestrator<R, A, C>
where
    R: InitiativeRepository,
    A: AuditLog,
    C: Clock + Send + Sync,
{
    /// Creates a new orchestrator.
    #[must_use]
    pub const fn new(repository: Arc<R>, audit: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            repository,
            audit,
            clock,
        }
    }

    async fn find_initiative_or_error(
        &self,
        initiative_id: InitiativeId,
    ) -> GovernanceServiceResult<Initiative> {
        self.repository
            .find_by_id(initiative_id)
            .await?
            .ok_or(GovernanceServiceError::NotFound(initiative_id))
    }

    /// Returns the statuses the initiative may move to next.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceServiceError::NotFound`] when the initiative does
    /// not exist, or repository errors.
    pub async fn allowed_next(
        &self,
        initiative_id: InitiativeId,
    ) -> GovernanceServiceResult<&'static [InitiativeStatus]> {
        let initiative = self.find_initiative_or_error(initiative_id).await?;
        Ok(transition::allowed_transitions(initiative.status()))
    }

    /// Moves an initiative to `requested` and returns the refreshed record.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceServiceError::NotFound`] when the initiative does
    /// not exist, [`crate::initiative::domain::InitiativeDomainError::IllegalTransition`]
    /// when `requested` is not reachable from the current status, or
    /// repository errors. Nothing is persisted on error.
    pub async fn transition(
        &self,
        initiative_id: InitiativeId,
        requested: InitiativeStatus,
    ) -> GovernanceServiceResult<Initiative> {
        let initiative = self.find_initiative_or_error(initiative_id).await?;
        self.apply(initiative, requested, false).await
    }

    /// Parses `requested` and moves the initiative to it.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceServiceError::UnknownState`] when `requested` is
    /// not a catalogued status, otherwise as [`Self::transition`].
    pub async fn transition_str(
        &self,
        initiative_id: InitiativeId,
        requested: &str,
    ) -> GovernanceServiceResult<Initiative> {
        let parsed = InitiativeStatus::try_from(requested)?;
        self.transition(initiative_id, parsed).await
    }

    /// Asks `prompt` for confirmation, then moves the initiative.
    ///
    /// Illegal transitions are rejected before the operator is asked. The
    /// initiative is reloaded after confirmation and validated again against
    /// its stored status.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceServiceError::Cancelled`] when the operator
    /// declines, otherwise as [`Self::transition`].
    pub async fn transition_confirmed<P>(
        &self,
        initiative_id: InitiativeId,
        requested: InitiativeStatus,
        prompt: &P,
    ) -> GovernanceServiceResult<Initiative>
    where
        P: ConfirmationPrompt + ?Sized,
    {
        let initiative = self.find_initiative_or_error(initiative_id).await?;
        let current = initiative.status();
        if !transition::is_valid_transition(current, requested) {
            return self.apply(initiative, requested, false).await;
        }

        let request = ConfirmationRequest::for_action(ConfirmationAction::Transition {
            initiative_id,
            from: current,
            to: requested,
        });
        if !prompt.confirm(&request).await {
            tracing::info!(%initiative_id, from = %current, to = %requested, "transition cancelled");
            return Err(GovernanceServiceError::Cancelled(request.message().to_owned()));
        }

        // The stored status may have moved while the operator was answering.
        let confirmed = self.find_initiative_or_error(initiative_id).await?;
        if confirmed.status() != current {
            tracing::info!(
                %initiative_id,
                confirmed_from = %current,
                stored = %confirmed.status(),
                "status changed while awaiting confirmation"
            );
        }
        self.apply(confirmed, requested, false).await
    }

    /// Validates and persists a transition of an already loaded initiative.
    pub(crate) async fn apply(
        &self,
        mut initiative: Initiative,
        requested: InitiativeStatus,
        automatic: bool,
    ) -> GovernanceServiceResult<Initiative> {
        let initiative_id = initiative.id();
        let previous = initiative
            .transition_to(requested, &*self.clock)
            .inspect_err(|err| {
                tracing::warn!(%initiative_id, to = %requested, error = %err, "transition rejected");
            })?;

        let refreshed = self.repository.record_transition(&initiative).await?;
        tracing::info!(
            %initiative_id,
            from = %previous,
            to = %refreshed.status(),
            automatic,
            "initiative transitioned"
        );
        write_audit(
            &*self.audit,
            AuditEntry::status_changed(
                initiative_id,
                previous,
                requested,
                automatic,
                initiative.updated_at(),
            ),
        )
        .await;
        Ok(refreshed)
    }
}
