//! Service layer for evaluations and the evaluation-triggered transition.

use super::{GovernanceServiceError, GovernanceServiceResult, TransitionOrchestrator};
use crate::initiative::{
    domain::{
        DocumentId, Evaluation, EvaluationChanges, EvaluationId, Initiative,
        InitiativeDomainError, InitiativeId, InitiativeStatus, NewEvaluation, Score, UserId,
    },
    ports::{AuditLog, EvaluationRepository, InitiativeRepository},
};
use crate::settings::{EvaluationPolicy, WorkflowConfig};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for recording an evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEvaluationRequest {
    initiative_id: InitiativeId,
    summary: String,
    score: f64,
    evaluator_user: Option<UserId>,
    document_id: Option<DocumentId>,
}

impl CreateEvaluationRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(initiative_id: InitiativeId, summary: impl Into<String>, score: f64) -> Self {
        Self {
            initiative_id,
            summary: summary.into(),
            score,
            evaluator_user: None,
            document_id: None,
        }
    }

    /// Sets the evaluating user.
    #[must_use]
    pub const fn with_evaluator_user(mut self, evaluator_user: UserId) -> Self {
        self.evaluator_user = Some(evaluator_user);
        self
    }

    /// Sets the supporting document.
    #[must_use]
    pub const fn with_document_id(mut self, document_id: DocumentId) -> Self {
        self.document_id = Some(document_id);
        self
    }
}

/// Result of an evaluation write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOutcome {
    /// The stored evaluation.
    pub evaluation: Evaluation,
    /// The parent initiative when the write advanced it to `evaluada`.
    /// Callers refresh their initiative listing when this is set.
    pub evaluated_initiative: Option<Initiative>,
}

/// Evaluation management service.
#[derive(Clone)]
pub struct EvaluationService<R, E, A, C>
where
    R: InitiativeRepository,
    E: EvaluationRepository,
    A: AuditLog,
    C: Clock + Send + Sync,
{
    initiatives: Arc<R>,
    evaluations: Arc<E>,
    orchestrator: TransitionOrchestrator<R, A, C>,
    clock: Arc<C>,
    workflow: WorkflowConfig,
}

impl<R, E, A, C> EvaluationService<R, E, A, C>
where
    R: InitiativeRepository,
    E: EvaluationRepository,
    A: AuditLog,
    C: Clock + Send + Sync,
{
    /// Creates a new evaluation service.
    #[must_use]
    pub fn new(
        initiatives: Arc<R>,
        evaluations: Arc<E>,
        audit: Arc<A>,
        clock: Arc<C>,
        workflow: WorkflowConfig,
    ) -> Self {
        let orchestrator =
            TransitionOrchestrator::new(Arc::clone(&initiatives), audit, Arc::clone(&clock));
        Self {
            initiatives,
            evaluations,
            orchestrator,
            clock,
            workflow,
        }
    }

    async fn find_evaluation_or_error(
        &self,
        evaluation_id: EvaluationId,
    ) -> GovernanceServiceResult<Evaluation> {
        self.evaluations
            .find_by_id(evaluation_id)
            .await?
            .ok_or(GovernanceServiceError::EvaluationNotFound(evaluation_id))
    }

    /// Returns the evaluations of an initiative in creation order.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn list_by_initiative(
        &self,
        initiative_id: InitiativeId,
    ) -> GovernanceServiceResult<Vec<Evaluation>> {
        Ok(self.evaluations.list_by_initiative(initiative_id).await?)
    }

    /// Records an evaluation.
    ///
    /// When the parent initiative is `finalizada` it is advanced to
    /// `evaluada` through the transition orchestrator. If that transition
    /// fails the evaluation is removed again and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`InitiativeDomainError::ScoreOutOfRange`] for a score outside
    /// `[0, 100]`, [`InitiativeDomainError::UnknownInitiative`] when the
    /// parent does not exist,
    /// [`InitiativeDomainError::EvaluationRequiresFinalized`] when the policy
    /// requires a finished initiative, or repository errors.
    pub async fn create(
        &self,
        request: CreateEvaluationRequest,
    ) -> GovernanceServiceResult<EvaluationOutcome> {
        let score = Score::try_from(request.score)?;
        let initiative_id = request.initiative_id;
        let initiative = self
            .initiatives
            .find_by_id(initiative_id)
            .await?
            .ok_or(InitiativeDomainError::UnknownInitiative(initiative_id))?;

        let finalized = initiative.status() == InitiativeStatus::Finalizada;
        if !finalized && self.workflow.evaluation_policy == EvaluationPolicy::RequireFinalized {
            return Err(InitiativeDomainError::EvaluationRequiresFinalized {
                id: initiative_id,
                status: initiative.status(),
            }
            .into());
        }

        let new_evaluation = NewEvaluation::new(initiative_id, request.summary, score, &*self.clock)
            .with_evaluator_user(request.evaluator_user)
            .with_document_id(request.document_id);
        let evaluation = self.evaluations.create(&new_evaluation).await?;
        tracing::info!(
            evaluation_id = %evaluation.id(),
            %initiative_id,
            score = %evaluation.score(),
            "evaluation recorded"
        );

        if !finalized {
            return Ok(EvaluationOutcome {
                evaluation,
                evaluated_initiative: None,
            });
        }

        match self
            .orchestrator
            .apply(initiative, InitiativeStatus::Evaluada, true)
            .await
        {
            Ok(evaluated) => Ok(EvaluationOutcome {
                evaluation,
                evaluated_initiative: Some(evaluated),
            }),
            Err(err) => {
                self.discard(evaluation.id()).await;
                Err(err)
            }
        }
    }

    /// Applies a field edit to an evaluation.
    ///
    /// When `trigger_on_update` is enabled and the parent initiative is
    /// `finalizada`, the parent is advanced to `evaluada`.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceServiceError::EvaluationNotFound`] when the
    /// evaluation does not exist, or repository and transition errors.
    pub async fn update(
        &self,
        evaluation_id: EvaluationId,
        changes: EvaluationChanges,
    ) -> GovernanceServiceResult<EvaluationOutcome> {
        let mut evaluation = self.find_evaluation_or_error(evaluation_id).await?;
        evaluation.apply_changes(changes);
        let updated = self.evaluations.update(&evaluation).await?;
        tracing::info!(%evaluation_id, "evaluation updated");

        let evaluated_initiative = if self.workflow.trigger_on_update {
            self.advance_if_finalized(updated.initiative_id()).await?
        } else {
            None
        };

        Ok(EvaluationOutcome {
            evaluation: updated,
            evaluated_initiative,
        })
    }

    /// Deletes an evaluation. The parent initiative status is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`GovernanceServiceError::EvaluationNotFound`] when the
    /// evaluation does not exist, or repository errors.
    pub async fn delete(&self, evaluation_id: EvaluationId) -> GovernanceServiceResult<()> {
        self.find_evaluation_or_error(evaluation_id).await?;
        self.evaluations.delete(evaluation_id).await?;
        tracing::info!(%evaluation_id, "evaluation deleted");
        Ok(())
    }

    async fn advance_if_finalized(
        &self,
        initiative_id: InitiativeId,
    ) -> GovernanceServiceResult<Option<Initiative>> {
        let Some(initiative) = self.initiatives.find_by_id(initiative_id).await? else {
            return Ok(None);
        };
        if initiative.status() != InitiativeStatus::Finalizada {
            return Ok(None);
        }
        let evaluated = self
            .orchestrator
            .apply(initiative, InitiativeStatus::Evaluada, true)
            .await?;
        Ok(Some(evaluated))
    }

    async fn discard(&self, evaluation_id: EvaluationId) {
        if let Err(err) = self.evaluations.delete(evaluation_id).await {
            tracing::warn!(
                %evaluation_id,
                error = %err,
                "failed to remove evaluation after rejected transition"
            );
        }
    }
}
