//! Contract tests for the in-memory initiative store.

use super::helpers::{initiatives, new_initiative};
use aula_governance::initiative::{
    adapters::memory::InMemoryInitiativeRepository,
    domain::{
        InitiativeChanges, InitiativeFilter, InitiativeId, InitiativeStatus, PageRequest, PlanId,
        Title,
    },
    ports::{InitiativeRepository, RepositoryError},
};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_sequential_from_one(
    initiatives: InMemoryInitiativeRepository,
) -> eyre::Result<()> {
    let first = initiatives.create(&new_initiative("Uno")?).await?;
    let second = initiatives.create(&new_initiative("Dos")?).await?;

    ensure!(first.id() == InitiativeId::new(1));
    ensure!(second.id() == InitiativeId::new(2));
    ensure!(first.status() == InitiativeStatus::Propuesta);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_listing_reports_one_page(
    initiatives: InMemoryInitiativeRepository,
) -> eyre::Result<()> {
    let page = initiatives
        .list(&InitiativeFilter::any(), PageRequest::default())
        .await?;

    ensure!(page.data.is_empty());
    ensure!(page.total == 0);
    ensure!(page.last_page == 1);
    ensure!(!page.has_more());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_ascending_and_filtered(
    initiatives: InMemoryInitiativeRepository,
) -> eyre::Result<()> {
    for (title, plan) in [("A", 7), ("B", 8), ("C", 7)] {
        let request = new_initiative(title)?.with_plan_id(Some(PlanId::new(plan)));
        initiatives.create(&request).await?;
    }

    let page = initiatives
        .list(
            &InitiativeFilter::any().with_plan_id(PlanId::new(7)),
            PageRequest::default(),
        )
        .await?;

    let titles: Vec<&str> = page.data.iter().map(|i| i.title().as_str()).collect();
    ensure!(titles == ["A", "C"], "unexpected listing {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_keeps_stored_status(
    initiatives: InMemoryInitiativeRepository,
) -> eyre::Result<()> {
    let created = initiatives.create(&new_initiative("Original")?).await?;
    let mut edited = created.clone();
    edited.apply_changes(
        InitiativeChanges::new().with_title(Title::new("Editada")?),
        &DefaultClock,
    );
    edited.transition_to(InitiativeStatus::EnRevision, &DefaultClock)?;

    let stored = initiatives.update(&edited).await?;

    ensure!(stored.title().as_str() == "Editada");
    ensure!(stored.status() == InitiativeStatus::Propuesta);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_transition_changes_only_status(
    initiatives: InMemoryInitiativeRepository,
) -> eyre::Result<()> {
    let created = initiatives.create(&new_initiative("Estado")?).await?;
    let mut moved = created.clone();
    moved.apply_changes(
        InitiativeChanges::new().with_title(Title::new("Ignorado")?),
        &DefaultClock,
    );
    moved.transition_to(InitiativeStatus::EnRevision, &DefaultClock)?;

    let stored = initiatives.record_transition(&moved).await?;

    ensure!(stored.status() == InitiativeStatus::EnRevision);
    ensure!(stored.title() == created.title());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_reports_not_found(
    initiatives: InMemoryInitiativeRepository,
) -> eyre::Result<()> {
    let created = initiatives.create(&new_initiative("Temporal")?).await?;
    initiatives.delete(created.id()).await?;

    let second = initiatives.delete(created.id()).await;

    ensure!(matches!(second, Err(RepositoryError::InitiativeNotFound(id)) if id == created.id()));
    ensure!(initiatives.find_by_id(created.id()).await?.is_none());
    Ok(())
}
