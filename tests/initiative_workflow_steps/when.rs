//! When steps for initiative workflow BDD scenarios.

use super::world::{InitiativeWorkflowWorld, run_async};
use aula_governance::initiative::services::CreateEvaluationRequest;
use rstest_bdd_macros::when;

#[when(r#"the initiative is transitioned to "{status}""#)]
fn transition_initiative(
    world: &mut InitiativeWorkflowWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let initiative_id = world.current()?.id();
    let result = run_async(world.orchestrator.transition_str(initiative_id, &status));
    if let Ok(ref updated) = result {
        world.current = Some(updated.clone());
    }
    world.last_transition_result = Some(result);
    Ok(())
}

#[when(r#"an evaluation scoring "{score}" is recorded"#)]
fn record_evaluation(world: &mut InitiativeWorkflowWorld, score: String) -> Result<(), eyre::Report> {
    let initiative_id = world.current()?.id();
    let value: f64 = score
        .parse()
        .map_err(|err| eyre::eyre!("invalid score in scenario: {err}"))?;

    let result = run_async(world.evaluations.create(CreateEvaluationRequest::new(
        initiative_id,
        "Evaluación de cierre",
        value,
    )));
    if let Ok(ref outcome) = result
        && let Some(ref evaluated) = outcome.evaluated_initiative
    {
        world.current = Some(evaluated.clone());
    }
    world.last_evaluation_result = Some(result);
    world.listed_evaluations = run_async(world.evaluations.list_by_initiative(initiative_id))?;
    Ok(())
}
