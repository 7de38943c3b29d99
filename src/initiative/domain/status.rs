//! Lifecycle status catalog for initiatives.

use super::UnknownStateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an initiative.
///
/// The canonical text form is the snake-case Spanish name used by the REST
/// backend, for example `en_revision`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InitiativeStatus {
    /// Newly proposed, not yet under review.
    #[default]
    Propuesta,
    /// Under review by the strategic committee.
    EnRevision,
    /// Approved for execution.
    Aprobada,
    /// Rejected during review. Terminal.
    Rechazada,
    /// Being executed.
    EnEjecucion,
    /// Execution finished, awaiting evaluation.
    Finalizada,
    /// Evaluated. Terminal.
    Evaluada,
}

impl InitiativeStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Propuesta,
        Self::EnRevision,
        Self::Aprobada,
        Self::Rechazada,
        Self::EnEjecucion,
        Self::Finalizada,
        Self::Evaluada,
    ];

    /// Status assigned to every newly created initiative.
    pub const INITIAL: Self = Self::Propuesta;

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Propuesta => "propuesta",
            Self::EnRevision => "en_revision",
            Self::Aprobada => "aprobada",
            Self::Rechazada => "rechazada",
            Self::EnEjecucion => "en_ejecucion",
            Self::Finalizada => "finalizada",
            Self::Evaluada => "evaluada",
        }
    }

    /// Returns the statuses reachable in one step from this status.
    #[must_use]
    pub const fn next_states(self) -> &'static [Self] {
        match self {
            Self::Propuesta => &[Self::EnRevision],
            Self::EnRevision => &[Self::Aprobada, Self::Rechazada],
            Self::Aprobada => &[Self::EnEjecucion],
            Self::EnEjecucion => &[Self::Finalizada],
            Self::Finalizada => &[Self::Evaluada],
            Self::Rechazada | Self::Evaluada => &[],
        }
    }

    /// Returns whether transition to `target` is allowed.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next_states().contains(&target)
    }

    /// Returns whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.next_states().is_empty()
    }
}

impl fmt::Display for InitiativeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for InitiativeStatus {
    type Error = UnknownStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "propuesta" => Ok(Self::Propuesta),
            "en_revision" => Ok(Self::EnRevision),
            "aprobada" => Ok(Self::Aprobada),
            "rechazada" => Ok(Self::Rechazada),
            "en_ejecucion" => Ok(Self::EnEjecucion),
            "finalizada" => Ok(Self::Finalizada),
            "evaluada" => Ok(Self::Evaluada),
            _ => Err(UnknownStateError(value.to_owned())),
        }
    }
}

impl FromStr for InitiativeStatus {
    type Err = UnknownStateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}
