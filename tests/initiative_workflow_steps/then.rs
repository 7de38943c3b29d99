//! Then steps for initiative workflow BDD scenarios.

use super::world::{InitiativeWorkflowWorld, run_async};
use aula_governance::initiative::{
    domain::{ErrorKind, InitiativeDomainError, InitiativeStatus},
    services::GovernanceServiceError,
};
use rstest_bdd_macros::then;

#[then(r#"the initiative status is "{status}""#)]
fn initiative_status_is(world: &InitiativeWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let expected = InitiativeStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let initiative_id = world.current()?.id();

    let stored = run_async(world.initiatives.get(initiative_id))?;
    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then("the transition fails with an illegal transition error")]
fn transition_fails_with_illegal_transition(
    world: &InitiativeWorkflowWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(GovernanceServiceError::Domain(
            InitiativeDomainError::IllegalTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected IllegalTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the transition fails with an unknown state error")]
fn transition_fails_with_unknown_state(
    world: &InitiativeWorkflowWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    match result {
        Err(err) if err.kind() == ErrorKind::UnknownState => Ok(()),
        other => Err(eyre::eyre!("expected UnknownState error, got {other:?}")),
    }
}

#[then("no transition out of the current status is accepted")]
fn no_transition_accepted(world: &InitiativeWorkflowWorld) -> Result<(), eyre::Report> {
    let initiative_id = world.current()?.id();
    for target in InitiativeStatus::ALL {
        let result = run_async(world.orchestrator.transition(initiative_id, target));
        if !matches!(&result, Err(err) if err.kind() == ErrorKind::IllegalTransition) {
            return Err(eyre::eyre!(
                "transition to {target} should be illegal, got {result:?}"
            ));
        }
    }
    Ok(())
}

#[then("the evaluation fails with a validation error")]
fn evaluation_fails_with_validation(world: &InitiativeWorkflowWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_evaluation_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing evaluation result"))?;

    match result {
        Err(err) if err.kind() == ErrorKind::Validation => Ok(()),
        other => Err(eyre::eyre!("expected validation error, got {other:?}")),
    }
}

#[then("the initiative has {count:u64} evaluations")]
fn initiative_has_evaluations(
    world: &InitiativeWorkflowWorld,
    count: u64,
) -> Result<(), eyre::Report> {
    let found = u64::try_from(world.listed_evaluations.len())?;
    if found != count {
        return Err(eyre::eyre!("expected {count} evaluations, found {found}"));
    }
    Ok(())
}

#[then(r#"the latest evaluation score is "{score}""#)]
fn latest_evaluation_score(
    world: &InitiativeWorkflowWorld,
    score: String,
) -> Result<(), eyre::Report> {
    let latest = world
        .listed_evaluations
        .last()
        .ok_or_else(|| eyre::eyre!("no evaluations recorded"))?;
    let shown = latest.score().to_string();
    if shown != score {
        return Err(eyre::eyre!("expected score {score}, found {shown}"));
    }
    Ok(())
}
