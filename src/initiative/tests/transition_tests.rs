//! Unit tests for the status catalog and transition validation.

use crate::initiative::domain::{
    Initiative, InitiativeDomainError, InitiativeId, InitiativeStatus, NewInitiative, Title,
    UnknownStateError, transition,
};
use super::FixedClock;
use eyre::{bail, ensure};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn initiative_in(
    status: InitiativeStatus,
    clock: &DefaultClock,
) -> Result<Initiative, InitiativeDomainError> {
    let mut initiative = Initiative::from_new(
        InitiativeId::new(1),
        NewInitiative::new(Title::new("Digitalizar matrícula")?, clock),
    );
    let path = [
        InitiativeStatus::EnRevision,
        InitiativeStatus::Aprobada,
        InitiativeStatus::EnEjecucion,
        InitiativeStatus::Finalizada,
        InitiativeStatus::Evaluada,
    ];
    if status == InitiativeStatus::Rechazada {
        initiative.transition_to(InitiativeStatus::EnRevision, clock)?;
        initiative.transition_to(InitiativeStatus::Rechazada, clock)?;
        return Ok(initiative);
    }
    for step in path {
        if initiative.status() == status {
            break;
        }
        initiative.transition_to(step, clock)?;
    }
    Ok(initiative)
}

#[rstest]
#[case(InitiativeStatus::Propuesta, InitiativeStatus::Propuesta, false)]
#[case(InitiativeStatus::Propuesta, InitiativeStatus::EnRevision, true)]
#[case(InitiativeStatus::Propuesta, InitiativeStatus::Aprobada, false)]
#[case(InitiativeStatus::Propuesta, InitiativeStatus::Rechazada, false)]
#[case(InitiativeStatus::Propuesta, InitiativeStatus::EnEjecucion, false)]
#[case(InitiativeStatus::Propuesta, InitiativeStatus::Finalizada, false)]
#[case(InitiativeStatus::Propuesta, InitiativeStatus::Evaluada, false)]
#[case(InitiativeStatus::EnRevision, InitiativeStatus::Propuesta, false)]
#[case(InitiativeStatus::EnRevision, InitiativeStatus::EnRevision, false)]
#[case(InitiativeStatus::EnRevision, InitiativeStatus::Aprobada, true)]
#[case(InitiativeStatus::EnRevision, InitiativeStatus::Rechazada, true)]
#[case(InitiativeStatus::EnRevision, InitiativeStatus::EnEjecucion, false)]
#[case(InitiativeStatus::EnRevision, InitiativeStatus::Finalizada, false)]
#[case(InitiativeStatus::EnRevision, InitiativeStatus::Evaluada, false)]
#[case(InitiativeStatus::Aprobada, InitiativeStatus::Propuesta, false)]
#[case(InitiativeStatus::Aprobada, InitiativeStatus::EnRevision, false)]
#[case(InitiativeStatus::Aprobada, InitiativeStatus::Aprobada, false)]
#[case(InitiativeStatus::Aprobada, InitiativeStatus::Rechazada, false)]
#[case(InitiativeStatus::Aprobada, InitiativeStatus::EnEjecucion, true)]
#[case(InitiativeStatus::Aprobada, InitiativeStatus::Finalizada, false)]
#[case(InitiativeStatus::Aprobada, InitiativeStatus::Evaluada, false)]
#[case(InitiativeStatus::Rechazada, InitiativeStatus::Propuesta, false)]
#[case(InitiativeStatus::Rechazada, InitiativeStatus::EnRevision, false)]
#[case(InitiativeStatus::Rechazada, InitiativeStatus::Aprobada, false)]
#[case(InitiativeStatus::Rechazada, InitiativeStatus::Rechazada, false)]
#[case(InitiativeStatus::Rechazada, InitiativeStatus::EnEjecucion, false)]
#[case(InitiativeStatus::Rechazada, InitiativeStatus::Finalizada, false)]
#[case(InitiativeStatus::Rechazada, InitiativeStatus::Evaluada, false)]
#[case(InitiativeStatus::EnEjecucion, InitiativeStatus::Propuesta, false)]
#[case(InitiativeStatus::EnEjecucion, InitiativeStatus::EnRevision, false)]
#[case(InitiativeStatus::EnEjecucion, InitiativeStatus::Aprobada, false)]
#[case(InitiativeStatus::EnEjecucion, InitiativeStatus::Rechazada, false)]
#[case(InitiativeStatus::EnEjecucion, InitiativeStatus::EnEjecucion, false)]
#[case(InitiativeStatus::EnEjecucion, InitiativeStatus::Finalizada, true)]
#[case(InitiativeStatus::EnEjecucion, InitiativeStatus::Evaluada, false)]
#[case(InitiativeStatus::Finalizada, InitiativeStatus::Propuesta, false)]
#[case(InitiativeStatus::Finalizada, InitiativeStatus::EnRevision, false)]
#[case(InitiativeStatus::Finalizada, InitiativeStatus::Aprobada, false)]
#[case(InitiativeStatus::Finalizada, InitiativeStatus::Rechazada, false)]
#[case(InitiativeStatus::Finalizada, InitiativeStatus::EnEjecucion, false)]
#[case(InitiativeStatus::Finalizada, InitiativeStatus::Finalizada, false)]
#[case(InitiativeStatus::Finalizada, InitiativeStatus::Evaluada, true)]
#[case(InitiativeStatus::Evaluada, InitiativeStatus::Propuesta, false)]
#[case(InitiativeStatus::Evaluada, InitiativeStatus::EnRevision, false)]
#[case(InitiativeStatus::Evaluada, InitiativeStatus::Aprobada, false)]
#[case(InitiativeStatus::Evaluada, InitiativeStatus::Rechazada, false)]
#[case(InitiativeStatus::Evaluada, InitiativeStatus::EnEjecucion, false)]
#[case(InitiativeStatus::Evaluada, InitiativeStatus::Finalizada, false)]
#[case(InitiativeStatus::Evaluada, InitiativeStatus::Evaluada, false)]
fn transition_matrix_matches_lifecycle(
    #[case] from: InitiativeStatus,
    #[case] to: InitiativeStatus,
    #[case] expected: bool,
) {
    assert_eq!(transition::is_valid_transition(from, to), expected);
    assert_eq!(from.can_transition_to(to), expected);
}

#[rstest]
fn catalog_lists_every_status_once() {
    let mut names: Vec<&str> = InitiativeStatus::ALL.iter().map(|s| s.as_str()).collect();
    names.sort_unstable();
    names.dedup();

    assert_eq!(names.len(), InitiativeStatus::ALL.len());
    assert_eq!(InitiativeStatus::INITIAL, InitiativeStatus::Propuesta);
    assert_eq!(InitiativeStatus::default(), InitiativeStatus::INITIAL);
}

#[rstest]
#[case(InitiativeStatus::Rechazada)]
#[case(InitiativeStatus::Evaluada)]
fn terminal_statuses_have_no_successors(#[case] status: InitiativeStatus) {
    assert!(status.is_terminal());
    assert!(transition::allowed_transitions(status).is_empty());
}

#[rstest]
fn only_rejected_and_evaluated_are_terminal() {
    let terminal: Vec<InitiativeStatus> = InitiativeStatus::ALL
        .into_iter()
        .filter(|status| status.is_terminal())
        .collect();

    assert_eq!(
        terminal,
        vec![InitiativeStatus::Rechazada, InitiativeStatus::Evaluada]
    );
}

#[rstest]
fn no_status_transitions_to_itself() {
    for status in InitiativeStatus::ALL {
        assert!(!transition::is_valid_transition(status, status), "{status}");
    }
}

#[rstest]
fn review_branches_to_approval_or_rejection() {
    assert_eq!(
        transition::allowed_transitions(InitiativeStatus::EnRevision),
        &[InitiativeStatus::Aprobada, InitiativeStatus::Rechazada]
    );
}

#[rstest]
#[case("propuesta", InitiativeStatus::Propuesta)]
#[case("EN_REVISION", InitiativeStatus::EnRevision)]
#[case(" finalizada ", InitiativeStatus::Finalizada)]
fn status_names_parse(#[case] text: &str, #[case] expected: InitiativeStatus) {
    assert_eq!(InitiativeStatus::try_from(text), Ok(expected));
}

#[rstest]
fn status_serializes_as_wire_name() -> eyre::Result<()> {
    let json = serde_json::to_string(&InitiativeStatus::EnEjecucion)?;
    ensure!(json == "\"en_ejecucion\"", "unexpected encoding: {json}");
    Ok(())
}

#[rstest]
#[case("archivada")]
#[case("")]
#[case("en revision")]
fn unknown_status_text_is_reported(#[case] text: &str) {
    assert_eq!(
        transition::allowed_transitions_for(text),
        Err(UnknownStateError(text.to_owned()))
    );
    assert!(transition::is_valid_transition_str(text, "aprobada").is_err());
    assert!(transition::is_valid_transition_str("propuesta", text).is_err());
}

#[rstest]
fn string_queries_follow_the_table() -> eyre::Result<()> {
    ensure!(transition::is_valid_transition_str("finalizada", "evaluada")?);
    ensure!(!transition::is_valid_transition_str("propuesta", "aprobada")?);
    ensure!(
        transition::allowed_transitions_for("aprobada")? == [InitiativeStatus::EnEjecucion]
    );
    Ok(())
}

#[rstest]
fn transition_to_returns_previous_status(clock: DefaultClock) -> eyre::Result<()> {
    let mut initiative = initiative_in(InitiativeStatus::Propuesta, &clock)?;

    let previous = initiative.transition_to(InitiativeStatus::EnRevision, &clock)?;

    ensure!(previous == InitiativeStatus::Propuesta);
    ensure!(initiative.status() == InitiativeStatus::EnRevision);
    Ok(())
}

#[rstest]
fn illegal_transition_leaves_initiative_unchanged(clock: DefaultClock) -> eyre::Result<()> {
    let mut initiative = initiative_in(InitiativeStatus::Propuesta, &clock)?;
    let before = initiative.clone();

    let result = initiative.transition_to(InitiativeStatus::Aprobada, &clock);

    let Err(InitiativeDomainError::IllegalTransition { id, from, to }) = result else {
        bail!("expected IllegalTransition, got {result:?}");
    };
    ensure!(id == InitiativeId::new(1));
    ensure!(from == InitiativeStatus::Propuesta);
    ensure!(to == InitiativeStatus::Aprobada);
    ensure!(initiative == before, "initiative should be unchanged");
    Ok(())
}

#[rstest]
#[case(InitiativeStatus::Rechazada)]
#[case(InitiativeStatus::Evaluada)]
fn terminal_initiatives_reject_every_target(
    clock: DefaultClock,
    #[case] terminal: InitiativeStatus,
) -> eyre::Result<()> {
    let mut initiative = initiative_in(terminal, &clock)?;
    ensure!(initiative.status() == terminal);

    for target in InitiativeStatus::ALL {
        ensure!(
            initiative.transition_to(target, &clock).is_err(),
            "{terminal} -> {target} should fail"
        );
    }
    Ok(())
}

#[rstest]
fn transition_touches_updated_at() -> eyre::Result<()> {
    let creation_clock = FixedClock::at(1_700_000_000);
    let transition_clock = FixedClock::at(1_700_000_300);

    let mut initiative = Initiative::from_new(
        InitiativeId::new(9),
        NewInitiative::new(Title::new("Plan lector")?, &creation_clock),
    );
    initiative.transition_to(InitiativeStatus::EnRevision, &transition_clock)?;

    ensure!(initiative.created_at() == creation_clock.utc());
    ensure!(initiative.updated_at() == transition_clock.utc());
    Ok(())
}
