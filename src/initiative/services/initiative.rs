//! Service layer for initiative create, read, update and delete.

use super::{GovernanceServiceError, GovernanceServiceResult, write_audit};
use crate::initiative::{
    domain::{
        AuditEntry, ConfirmationAction, ConfirmationRequest, Initiative, InitiativeChanges,
        InitiativeDomainError, InitiativeFilter, InitiativeId, InitiativeStatus, NewInitiative,
        Page, PageRequest, PlanId, Title, UserId,
    },
    ports::{AuditLog, ConfirmationPrompt, EvaluationRepository, InitiativeRepository},
};
use crate::settings::WorkflowConfig;
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating an initiative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInitiativeRequest {
    title: String,
    status: Option<InitiativeStatus>,
    plan_id: Option<PlanId>,
    user_id: Option<UserId>,
    summary: Option<String>,
    estimated_impact: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl CreateInitiativeRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: None,
            plan_id: None,
            user_id: None,
            summary: None,
            estimated_impact: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Sets an explicit initial status. Only `propuesta` is accepted.
    #[must_use]
    pub const fn with_status(mut self, status: InitiativeStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the owning strategic plan.
    #[must_use]
    pub const fn with_plan_id(mut self, plan_id: PlanId) -> Self {
        self.plan_id = Some(plan_id);
        self
    }

    /// Sets the responsible user.
    #[must_use]
    pub const fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the estimated impact.
    #[must_use]
    pub fn with_estimated_impact(mut self, estimated_impact: impl Into<String>) -> Self {
        self.estimated_impact = Some(estimated_impact.into());
        self
    }

    /// Sets the planned date range.
    #[must_use]
    pub const fn with_dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }
}

/// Initiative record management service.
#[derive(Clone)]
pub struct InitiativeService<R, E, A, C>
where
    R: InitiativeRepository,
    E: EvaluationRepository,
    A: AuditLog,
    C: Clock + Send + Sync,
{
    initiatives: Arc<R>,
    evaluations: Arc<E>,
    audit: Arc<A>,
    clock: Arc<C>,
    workflow: WorkflowConfig,
}

impl<R, E, A, C> InitiativeService<R, E, A, C>
where
    R: InitiativeRepository,
    E: EvaluationRepository,
    A: AuditLog,
    C: Clock + Send + Sync,
{
    /// Creates a new initiative service.
    #[must_use]
    pub const fn new(
        initiatives: Arc<R>,
        evaluations: Arc<E>,
        audit: Arc<A>,
        clock: Arc<C>,
        workflow: WorkflowConfig,
    ) -> Self {
        Self {
            initiatives,
            evaluations,
            audit,
            clock,
            workflow,
        }
    }

    /// Creates an initiative in the initial status.
    ///
    /// # Errors
    ///
    /// Returns [`InitiativeDomainError::EmptyTitle`] for a blank title,
    /// [`InitiativeDomainError::InitialStatusNotAllowed`] when a status other
    /// than `propuesta` is requested, or repository errors.
    pub async fn create(
        &self,
        request: CreateInitiativeRequest,
    ) -> GovernanceServiceResult<Initiative> {
        let title = Title::new(request.title)?;
        if let Some(status) = request.status
            && status != InitiativeStatus::INITIAL
        {
            return Err(InitiativeDomainError::InitialStatusNotAllowed(status).into());
        }

        let new_initiative = NewInitiative::new(title, &*self.clock)
            .with_plan_id(request.plan_id)
            .with_user_id(request.user_id)
            .with_summary(request.summary)
            .with_estimated_impact(request.estimated_impact)
            .with_dates(request.start_date, request.end_date);

        let created = self.initiatives.create(&new_initiative).await?;
        tracing::info!(initiative_id = %created.id(), title = %created.title(), "initiative created");
        Ok(created)
    }

    /// Returns an initiative by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceServiceError::NotFound`] when the initiative does
    /// not exist, or repository errors.
    pub async fn get(&self, initiative_id: InitiativeId) -> GovernanceServiceResult<Initiative> {
        self.initiatives
            .find_by_id(initiative_id)
            .await?
            .ok_or(GovernanceServiceError::NotFound(initiative_id))
    }

    /// Lists one page of initiatives matching every provided filter field.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn list(
        &self,
        filter: &InitiativeFilter,
        page: PageRequest,
    ) -> GovernanceServiceResult<Page<Initiative>> {
        Ok(self.initiatives.list(filter, page).await?)
    }

    /// Applies a field edit. Status cannot be changed here.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceServiceError::NotFound`] when the initiative does
    /// not exist, or repository errors.
    pub async fn update(
        &self,
        initiative_id: InitiativeId,
        changes: InitiativeChanges,
    ) -> GovernanceServiceResult<Initiative> {
        let mut initiative = self.get(initiative_id).await?;
        initiative.apply_changes(changes, &*self.clock);
        let updated = self.initiatives.update(&initiative).await?;
        tracing::info!(%initiative_id, "initiative updated");
        Ok(updated)
    }

    /// Deletes an initiative after confirmation.
    ///
    /// The initiative is removed before its evaluations, so a failed
    /// initiative delete leaves both untouched. With cascading disabled the
    /// evaluations are left orphaned. Either way an audit entry
    /// records how many evaluations went with it.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceServiceError::NotFound`] when the initiative does
    /// not exist, [`GovernanceServiceError::Cancelled`] when the operator
    /// declines, or repository errors.
    pub async fn delete<P>(
        &self,
        initiative_id: InitiativeId,
        prompt: &P,
    ) -> GovernanceServiceResult<()>
    where
        P: ConfirmationPrompt + ?Sized,
    {
        self.get(initiative_id).await?;
        let pending_evaluations = if self.workflow.cascade_delete_evaluations {
            self.evaluations
                .list_by_initiative(initiative_id)
                .await?
                .len()
        } else {
            0
        };

        let request = ConfirmationRequest::for_action(ConfirmationAction::DeleteInitiative {
            initiative_id,
            cascaded_evaluations: pending_evaluations,
        });
        if !prompt.confirm(&request).await {
            tracing::info!(%initiative_id, "initiative deletion cancelled");
            return Err(GovernanceServiceError::Cancelled(
                request.message().to_owned(),
            ));
        }

        self.initiatives.delete(initiative_id).await?;
        let cascaded_evaluations = if self.workflow.cascade_delete_evaluations {
            self.evaluations
                .delete_by_initiative(initiative_id)
                .await
                .inspect_err(|err| {
                    tracing::warn!(
                        %initiative_id,
                        error = %err,
                        "initiative deleted but its evaluations were left orphaned"
                    );
                })?
        } else {
            0
        };
        tracing::info!(%initiative_id, cascaded_evaluations, "initiative deleted");

        write_audit(
            &*self.audit,
            AuditEntry::initiative_deleted(initiative_id, cascaded_evaluations, self.clock.utc()),
        )
        .await;
        Ok(())
    }
}
