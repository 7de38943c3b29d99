//! Contract tests for the in-memory evaluation store.

use super::helpers::{evaluations, new_evaluation};
use aula_governance::initiative::{
    adapters::memory::InMemoryEvaluationRepository,
    domain::{Evaluation, EvaluationChanges, EvaluationId, InitiativeId, PersistedEvaluationData, Score},
    ports::{EvaluationRepository, RepositoryError},
};
use eyre::ensure;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_only_returns_the_parents_evaluations(
    evaluations: InMemoryEvaluationRepository,
) -> eyre::Result<()> {
    let parent = InitiativeId::new(1);
    evaluations.create(&new_evaluation(parent, "Primera", 60.0)?).await?;
    evaluations
        .create(&new_evaluation(InitiativeId::new(2), "Ajena", 10.0)?)
        .await?;
    evaluations.create(&new_evaluation(parent, "Segunda", 70.0)?).await?;

    let listed = evaluations.list_by_initiative(parent).await?;

    let summaries: Vec<&str> = listed.iter().map(Evaluation::summary).collect();
    ensure!(summaries == ["Primera", "Segunda"], "unexpected {summaries:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_applies_changes(evaluations: InMemoryEvaluationRepository) -> eyre::Result<()> {
    let created = evaluations
        .create(&new_evaluation(InitiativeId::new(3), "Borrador", 50.0)?)
        .await?;
    let mut edited = created.clone();
    edited.apply_changes(EvaluationChanges::new().with_score(Score::try_from(99.99)?));

    let stored = evaluations.update(&edited).await?;

    ensure!(stored.score().hundredths() == 9999);
    ensure!(stored.created_at() == created.created_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_reparenting(evaluations: InMemoryEvaluationRepository) -> eyre::Result<()> {
    let created = evaluations
        .create(&new_evaluation(InitiativeId::new(3), "Fija", 50.0)?)
        .await?;
    let reparented = Evaluation::from_persisted(PersistedEvaluationData {
        id: created.id(),
        initiative_id: InitiativeId::new(4),
        evaluator_user: None,
        summary: created.summary().to_owned(),
        score: created.score(),
        document_id: None,
        created_at: created.created_at(),
    });

    let result = evaluations.update(&reparented).await;

    ensure!(matches!(result, Err(RepositoryError::Rejected { status: 422, .. })));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_evaluation_is_not_found(
    evaluations: InMemoryEvaluationRepository,
) -> eyre::Result<()> {
    let created = evaluations
        .create(&new_evaluation(InitiativeId::new(3), "Efímera", 50.0)?)
        .await?;
    evaluations.delete(created.id()).await?;

    let result = evaluations.update(&created).await;

    ensure!(matches!(result, Err(RepositoryError::EvaluationNotFound(id)) if id == created.id()));
    ensure!(evaluations.find_by_id(EvaluationId::new(1)).await?.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_by_initiative_counts_removed_records(
    evaluations: InMemoryEvaluationRepository,
) -> eyre::Result<()> {
    let parent = InitiativeId::new(9);
    for score in [10.0, 20.0, 30.0] {
        evaluations.create(&new_evaluation(parent, "Lote", score)?).await?;
    }
    evaluations
        .create(&new_evaluation(InitiativeId::new(10), "Otra", 40.0)?)
        .await?;

    let removed = evaluations.delete_by_initiative(parent).await?;

    ensure!(removed == 3);
    ensure!(evaluations.list_by_initiative(parent).await?.is_empty());
    ensure!(evaluations.list_by_initiative(InitiativeId::new(10)).await?.len() == 1);
    Ok(())
}
