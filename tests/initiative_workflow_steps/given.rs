//! Given steps for initiative workflow BDD scenarios.

use super::world::{InitiativeWorkflowWorld, run_async};
use aula_governance::initiative::services::CreateInitiativeRequest;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a new initiative titled "{title}""#)]
fn new_initiative(world: &mut InitiativeWorkflowWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.initiatives.create(CreateInitiativeRequest::new(title)))
        .wrap_err("create initiative for scenario")?;
    world.current = Some(created);
    Ok(())
}

#[given(r#"the initiative has been transitioned to "{status}""#)]
fn initiative_has_been_transitioned(
    world: &mut InitiativeWorkflowWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let initiative_id = world.current()?.id();
    let transitioned = run_async(world.orchestrator.transition_str(initiative_id, &status))
        .wrap_err("transition initiative in scenario setup")?;
    world.current = Some(transitioned);
    Ok(())
}
