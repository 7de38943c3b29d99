//! Transition validation over the static status table.
//!
//! These functions are pure: the answer depends only on the two statuses and
//! the table in [`InitiativeStatus::next_states`]. Rendering layers query
//! them and never redefine the table.

use super::{InitiativeStatus, UnknownStateError};

/// Returns the statuses an initiative in `status` may move to.
///
/// Terminal statuses return an empty slice.
#[must_use]
pub const fn allowed_transitions(status: InitiativeStatus) -> &'static [InitiativeStatus] {
    status.next_states()
}

/// Returns whether `to` is reachable from `from` in one step.
///
/// A status never transitions to itself.
#[must_use]
pub fn is_valid_transition(from: InitiativeStatus, to: InitiativeStatus) -> bool {
    from.can_transition_to(to)
}

/// Parses `status` and returns its allowed transitions.
///
/// # Errors
///
/// Returns [`UnknownStateError`] when `status` is not a catalogued status.
pub fn allowed_transitions_for(
    status: &str,
) -> Result<&'static [InitiativeStatus], UnknownStateError> {
    let parsed = InitiativeStatus::try_from(status)?;
    Ok(allowed_transitions(parsed))
}

/// Parses both statuses and reports whether the transition is allowed.
///
/// # Errors
///
/// Returns [`UnknownStateError`] when either value is not a catalogued
/// status. Unknown input never defaults to a status.
pub fn is_valid_transition_str(from: &str, to: &str) -> Result<bool, UnknownStateError> {
    let parsed_from = InitiativeStatus::try_from(from)?;
    let parsed_to = InitiativeStatus::try_from(to)?;
    Ok(is_valid_transition(parsed_from, parsed_to))
}
