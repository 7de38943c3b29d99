//! Wire models for the governance REST backend.

use crate::initiative::{
    domain::{
        DocumentId, Evaluation, EvaluationId, Initiative, InitiativeFilter, InitiativeId,
        InitiativeStatus, NewEvaluation, NewInitiative, PageRequest, PersistedEvaluationData,
        PersistedInitiativeData, PlanId, Score, Title, UserId,
    },
    ports::{RepositoryError, RepositoryResult},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Initiative record as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct InitiativeRecord {
    id: i64,
    title: String,
    plan_id: Option<i64>,
    user_id: Option<i64>,
    status: String,
    summary: Option<String>,
    estimated_impact: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<InitiativeRecord> for Initiative {
    type Error = RepositoryError;

    fn try_from(record: InitiativeRecord) -> RepositoryResult<Self> {
        let InitiativeRecord {
            id,
            title,
            plan_id,
            user_id,
            status,
            summary,
            estimated_impact,
            start_date,
            end_date,
            created_at,
            updated_at,
        } = record;

        let parsed_title = Title::new(title).map_err(RepositoryError::invalid_persisted_data)?;
        let parsed_status = InitiativeStatus::try_from(status.as_str())
            .map_err(RepositoryError::invalid_persisted_data)?;

        Ok(Self::from_persisted(PersistedInitiativeData {
            id: InitiativeId::new(id),
            title: parsed_title,
            plan_id: plan_id.map(PlanId::new),
            user_id: user_id.map(UserId::new),
            status: parsed_status,
            summary,
            estimated_impact,
            start_date,
            end_date,
            created_at,
            updated_at,
        }))
    }
}

/// Editable initiative fields sent on create and update.
///
/// The status is only present on create, where it is always the initial
/// status.
#[derive(Debug, Clone, Serialize)]
pub(super) struct InitiativeBody<'a> {
    title: &'a str,
    plan_id: Option<PlanId>,
    user_id: Option<UserId>,
    summary: Option<&'a str>,
    estimated_impact: Option<&'a str>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<InitiativeStatus>,
}

impl<'a> InitiativeBody<'a> {
    pub(super) fn for_create(initiative: &'a NewInitiative) -> Self {
        Self {
            title: initiative.title().as_str(),
            plan_id: initiative.plan_id(),
            user_id: initiative.user_id(),
            summary: initiative.summary(),
            estimated_impact: initiative.estimated_impact(),
            start_date: initiative.start_date(),
            end_date: initiative.end_date(),
            status: Some(InitiativeStatus::INITIAL),
        }
    }

    pub(super) fn for_update(initiative: &'a Initiative) -> Self {
        Self {
            title: initiative.title().as_str(),
            plan_id: initiative.plan_id(),
            user_id: initiative.user_id(),
            summary: initiative.summary(),
            estimated_impact: initiative.estimated_impact(),
            start_date: initiative.start_date(),
            end_date: initiative.end_date(),
            status: None,
        }
    }
}

/// Body of the transition endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub(super) struct TransitionBody {
    pub(super) status: InitiativeStatus,
}

/// Query string of the initiative listing endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub(super) struct ListQuery {
    #[serde(flatten)]
    filter: InitiativeFilter,
    page: u32,
    per_page: u32,
}

impl ListQuery {
    pub(super) const fn new(filter: InitiativeFilter, page: PageRequest) -> Self {
        Self {
            filter,
            page: page.page(),
            per_page: page.per_page(),
        }
    }
}

/// Score as sent by the backend: decimal columns may arrive as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum WireScore {
    Number(f64),
    Text(String),
}

impl WireScore {
    fn into_score(self) -> RepositoryResult<Score> {
        let value = match self {
            Self::Number(value) => value,
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(RepositoryError::invalid_persisted_data)?,
        };
        Score::try_from(value).map_err(RepositoryError::invalid_persisted_data)
    }
}

/// Evaluation record as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct EvaluationRecord {
    id: i64,
    iniciative_id: i64,
    evaluator_user: Option<i64>,
    summary: Option<String>,
    score: WireScore,
    document_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<EvaluationRecord> for Evaluation {
    type Error = RepositoryError;

    fn try_from(record: EvaluationRecord) -> RepositoryResult<Self> {
        let EvaluationRecord {
            id,
            iniciative_id,
            evaluator_user,
            summary,
            score,
            document_id,
            created_at,
        } = record;

        Ok(Self::from_persisted(PersistedEvaluationData {
            id: EvaluationId::new(id),
            initiative_id: InitiativeId::new(iniciative_id),
            evaluator_user: evaluator_user.map(UserId::new),
            summary: summary.unwrap_or_default(),
            score: score.into_score()?,
            document_id: document_id.map(DocumentId::new),
            created_at,
        }))
    }
}

/// Evaluation listings arrive either bare or inside a pagination envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum EvaluationListing {
    Plain(Vec<EvaluationRecord>),
    Paged { data: Vec<EvaluationRecord> },
}

impl EvaluationListing {
    pub(super) fn into_records(self) -> Vec<EvaluationRecord> {
        match self {
            Self::Plain(records) | Self::Paged { data: records } => records,
        }
    }
}

/// Evaluation fields sent on create and update.
#[derive(Debug, Clone, Serialize)]
pub(super) struct EvaluationBody<'a> {
    iniciative_id: InitiativeId,
    evaluator_user: Option<UserId>,
    summary: &'a str,
    score: Score,
    document_id: Option<DocumentId>,
}

impl<'a> EvaluationBody<'a> {
    pub(super) fn for_create(evaluation: &'a NewEvaluation) -> Self {
        Self {
            iniciative_id: evaluation.initiative_id(),
            evaluator_user: evaluation.evaluator_user(),
            summary: evaluation.summary(),
            score: evaluation.score(),
            document_id: evaluation.document_id(),
        }
    }

    pub(super) fn for_update(evaluation: &'a Evaluation) -> Self {
        Self {
            iniciative_id: evaluation.initiative_id(),
            evaluator_user: evaluation.evaluator_user(),
            summary: evaluation.summary(),
            score: evaluation.score(),
            document_id: evaluation.document_id(),
        }
    }
}

/// Error payload returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ErrorBody {
    pub(super) message: Option<String>,
}

/// Single-record responses arrive bare or wrapped in `{"data": ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub(super) fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}
