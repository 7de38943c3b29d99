//! Shared test helpers for in-memory adapter integration tests.

use aula_governance::initiative::{
    adapters::memory::{
        InMemoryAuditLog, InMemoryEvaluationRepository, InMemoryInitiativeRepository,
    },
    domain::{InitiativeDomainError, InitiativeId, NewEvaluation, NewInitiative, Score, Title},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Provides a fresh initiative store for each test.
#[fixture]
pub fn initiatives() -> InMemoryInitiativeRepository {
    InMemoryInitiativeRepository::new()
}

/// Provides a fresh evaluation store for each test.
#[fixture]
pub fn evaluations() -> InMemoryEvaluationRepository {
    InMemoryEvaluationRepository::new()
}

/// Provides a fresh audit log for each test.
#[fixture]
pub fn audit() -> InMemoryAuditLog {
    InMemoryAuditLog::new()
}

/// Builds a new initiative with the given title.
///
/// # Errors
///
/// Returns an error if the title is blank.
pub fn new_initiative(title: &str) -> Result<NewInitiative, InitiativeDomainError> {
    Ok(NewInitiative::new(Title::new(title)?, &DefaultClock))
}

/// Builds a new evaluation for `initiative_id`.
///
/// # Errors
///
/// Returns an error if the score is out of range.
pub fn new_evaluation(
    initiative_id: InitiativeId,
    summary: &str,
    score: f64,
) -> Result<NewEvaluation, InitiativeDomainError> {
    Ok(NewEvaluation::new(
        initiative_id,
        summary,
        Score::try_from(score)?,
        &DefaultClock,
    ))
}
