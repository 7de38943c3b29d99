//! Port contracts for initiative governance.
//!
//! Ports define infrastructure-agnostic interfaces used by the services.

pub mod audit;
pub mod confirmation;
pub mod error;
pub mod evaluation;
pub mod repository;

pub use audit::{AuditLog, AuditLogError};
pub use confirmation::ConfirmationPrompt;
pub use error::{RepositoryError, RepositoryResult};
pub use evaluation::EvaluationRepository;
pub use repository::InitiativeRepository;
