//! Strategic improvement initiative governance for the institution.
//!
//! An initiative moves through a fixed lifecycle of review, approval,
//! execution and evaluation stages. Status changes are only applied through
//! the [`services::TransitionOrchestrator`], which consults the static
//! transition table in [`domain::transition`]. Evaluations attached to a
//! `finalizada` initiative close the loop by advancing it to `evaluada`.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
