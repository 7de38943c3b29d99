//! Evaluation score with two-decimal precision.

use super::InitiativeDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Evaluation score in the closed interval `[0, 100]`.
///
/// Stored as hundredths so equality and ordering are exact. The wire form is
/// a JSON number such as `87.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(u16);

impl Score {
    const MAX_HUNDREDTHS: u16 = 10_000;

    /// Lowest accepted score.
    pub const MIN: Self = Self(0);

    /// Highest accepted score.
    pub const MAX: Self = Self(Self::MAX_HUNDREDTHS);

    /// Creates a score from an integer number of hundredths.
    ///
    /// # Errors
    ///
    /// Returns [`InitiativeDomainError::ScoreOutOfRange`] above `10_000`.
    pub fn from_hundredths(hundredths: u16) -> Result<Self, InitiativeDomainError> {
        if hundredths > Self::MAX_HUNDREDTHS {
            return Err(InitiativeDomainError::ScoreOutOfRange(
                Self(hundredths).to_string(),
            ));
        }
        Ok(Self(hundredths))
    }

    /// Returns the score in hundredths.
    #[must_use]
    pub const fn hundredths(self) -> u16 {
        self.0
    }

    /// Returns the score as a decimal number.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the wire format carries scores as JSON numbers"
    )]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<f64> for Score {
    type Error = InitiativeDomainError;

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is checked to lie in [0, 100] before scaling to hundredths"
    )]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(InitiativeDomainError::ScoreOutOfRange(value.to_string()));
        }
        Ok(Self((value * 100.0).round() as u16))
    }
}

impl From<Score> for f64 {
    fn from(value: Score) -> Self {
        value.as_f64()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}
