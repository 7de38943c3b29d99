//! Services wired over shared in-memory stores.

use std::sync::Arc;

use super::helpers::{audit, evaluations, initiatives};
use aula_governance::initiative::{
    adapters::{
        AutoConfirm,
        memory::{InMemoryAuditLog, InMemoryEvaluationRepository, InMemoryInitiativeRepository},
    },
    domain::{AuditEntry, InitiativeStatus},
    services::{
        CreateEvaluationRequest, CreateInitiativeRequest, EvaluationService, InitiativeService,
        TransitionOrchestrator,
    },
};
use aula_governance::settings::WorkflowConfig;
use eyre::{bail, ensure};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lifecycle_from_proposal_to_deletion(
    initiatives: InMemoryInitiativeRepository,
    evaluations: InMemoryEvaluationRepository,
    audit: InMemoryAuditLog,
) -> eyre::Result<()> {
    let initiative_store = Arc::new(initiatives);
    let evaluation_store = Arc::new(evaluations);
    let audit_log = Arc::new(audit.clone());
    let clock = Arc::new(DefaultClock);
    let workflow = WorkflowConfig::default();
    let records = InitiativeService::new(
        Arc::clone(&initiative_store),
        Arc::clone(&evaluation_store),
        Arc::clone(&audit_log),
        Arc::clone(&clock),
        workflow,
    );
    let reviews = EvaluationService::new(
        Arc::clone(&initiative_store),
        Arc::clone(&evaluation_store),
        Arc::clone(&audit_log),
        Arc::clone(&clock),
        workflow,
    );
    let orchestrator = TransitionOrchestrator::new(initiative_store, audit_log, clock);

    let created = records
        .create(CreateInitiativeRequest::new("Biblioteca digital"))
        .await?;
    for step in [
        InitiativeStatus::EnRevision,
        InitiativeStatus::Aprobada,
        InitiativeStatus::EnEjecucion,
        InitiativeStatus::Finalizada,
    ] {
        orchestrator.transition(created.id(), step).await?;
    }
    let outcome = reviews
        .create(CreateEvaluationRequest::new(created.id(), "Objetivos logrados", 91.0))
        .await?;
    ensure!(
        outcome
            .evaluated_initiative
            .map(|initiative| initiative.status())
            == Some(InitiativeStatus::Evaluada)
    );

    records.delete(created.id(), &AutoConfirm).await?;

    let entries = audit.entries()?;
    let transitions = entries
        .iter()
        .filter(|entry| matches!(entry, AuditEntry::StatusChanged { .. }))
        .count();
    ensure!(transitions == 5, "expected five status changes, got {transitions}");
    let Some(AuditEntry::InitiativeDeleted {
        cascaded_evaluations,
        ..
    }) = entries.last()
    else {
        bail!("deletion should be the last audit entry");
    };
    ensure!(*cascaded_evaluations == 1);
    ensure!(entries.iter().all(|entry| entry.initiative_id() == created.id()));
    Ok(())
}
