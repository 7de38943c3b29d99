//! Evaluation records attached to an initiative.

use super::{DocumentId, EvaluationId, InitiativeId, Score, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Scored assessment of an initiative.
///
/// An evaluation belongs to exactly one initiative for its whole life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    id: EvaluationId,
    #[serde(rename = "iniciative_id")]
    initiative_id: InitiativeId,
    evaluator_user: Option<UserId>,
    summary: String,
    score: Score,
    document_id: Option<DocumentId>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedEvaluationData {
    /// Store-assigned identifier.
    pub id: EvaluationId,
    /// Parent initiative.
    pub initiative_id: InitiativeId,
    /// User who performed the evaluation, if recorded.
    pub evaluator_user: Option<UserId>,
    /// Free-text rationale.
    pub summary: String,
    /// Validated score.
    pub score: Score,
    /// Supporting document, if any.
    pub document_id: Option<DocumentId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Evaluation {
    /// Materializes a newly stored evaluation with its assigned identifier.
    #[must_use]
    pub fn from_new(id: EvaluationId, new: NewEvaluation) -> Self {
        Self {
            id,
            initiative_id: new.initiative_id,
            evaluator_user: new.evaluator_user,
            summary: new.summary,
            score: new.score,
            document_id: new.document_id,
            created_at: new.created_at,
        }
    }

    /// Reconstructs an evaluation from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedEvaluationData) -> Self {
        Self {
            id: data.id,
            initiative_id: data.initiative_id,
            evaluator_user: data.evaluator_user,
            summary: data.summary,
            score: data.score,
            document_id: data.document_id,
            created_at: data.created_at,
        }
    }

    /// Returns the evaluation identifier.
    #[must_use]
    pub const fn id(&self) -> EvaluationId {
        self.id
    }

    /// Returns the parent initiative.
    #[must_use]
    pub const fn initiative_id(&self) -> InitiativeId {
        self.initiative_id
    }

    /// Returns the evaluating user, if recorded.
    #[must_use]
    pub const fn evaluator_user(&self) -> Option<UserId> {
        self.evaluator_user
    }

    /// Returns the rationale.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the supporting document, if any.
    #[must_use]
    pub const fn document_id(&self) -> Option<DocumentId> {
        self.document_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a field edit. The parent initiative never changes.
    pub fn apply_changes(&mut self, changes: EvaluationChanges) {
        let EvaluationChanges {
            evaluator_user,
            summary,
            score,
            document_id,
        } = changes;

        if let Some(value) = evaluator_user {
            self.evaluator_user = value;
        }
        if let Some(value) = summary {
            self.summary = value;
        }
        if let Some(value) = score {
            self.score = value;
        }
        if let Some(value) = document_id {
            self.document_id = value;
        }
    }
}

/// Validated fields for an evaluation that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvaluation {
    initiative_id: InitiativeId,
    evaluator_user: Option<UserId>,
    summary: String,
    score: Score,
    document_id: Option<DocumentId>,
    created_at: DateTime<Utc>,
}

impl NewEvaluation {
    /// Creates a new evaluation payload stamped with the current time.
    #[must_use]
    pub fn new(
        initiative_id: InitiativeId,
        summary: impl Into<String>,
        score: Score,
        clock: &impl Clock,
    ) -> Self {
        Self {
            initiative_id,
            evaluator_user: None,
            summary: summary.into(),
            score,
            document_id: None,
            created_at: clock.utc(),
        }
    }

    /// Sets the evaluating user.
    #[must_use]
    pub const fn with_evaluator_user(mut self, evaluator_user: Option<UserId>) -> Self {
        self.evaluator_user = evaluator_user;
        self
    }

    /// Sets the supporting document.
    #[must_use]
    pub const fn with_document_id(mut self, document_id: Option<DocumentId>) -> Self {
        self.document_id = document_id;
        self
    }

    /// Returns the parent initiative.
    #[must_use]
    pub const fn initiative_id(&self) -> InitiativeId {
        self.initiative_id
    }

    /// Returns the evaluating user, if any.
    #[must_use]
    pub const fn evaluator_user(&self) -> Option<UserId> {
        self.evaluator_user
    }

    /// Returns the rationale.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the supporting document, if any.
    #[must_use]
    pub const fn document_id(&self) -> Option<DocumentId> {
        self.document_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Field edits for an existing evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationChanges {
    evaluator_user: Option<Option<UserId>>,
    summary: Option<String>,
    score: Option<Score>,
    document_id: Option<Option<DocumentId>>,
}

impl EvaluationChanges {
    /// Creates an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces or clears the evaluating user.
    #[must_use]
    pub const fn with_evaluator_user(mut self, evaluator_user: Option<UserId>) -> Self {
        self.evaluator_user = Some(evaluator_user);
        self
    }

    /// Replaces the rationale.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Replaces the score.
    #[must_use]
    pub const fn with_score(mut self, score: Score) -> Self {
        self.score = Some(score);
        self
    }

    /// Replaces or clears the supporting document.
    #[must_use]
    pub const fn with_document_id(mut self, document_id: Option<DocumentId>) -> Self {
        self.document_id = Some(document_id);
        self
    }
}
