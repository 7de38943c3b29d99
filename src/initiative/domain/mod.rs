//! Domain model for initiative governance.
//!
//! The initiative domain models the lifecycle status catalog, transition
//! validation, initiative and evaluation records, and the command objects
//! used to confirm irreversible actions. Infrastructure concerns stay outside
//! this boundary.

mod audit;
mod confirmation;
mod error;
mod evaluation;
mod ids;
mod initiative;
mod page;
mod score;
mod status;
mod title;
pub mod transition;

pub use audit::AuditEntry;
pub use confirmation::{ConfirmationAction, ConfirmationRequest};
pub use error::{ErrorKind, InitiativeDomainError, UnknownStateError};
pub use evaluation::{Evaluation, EvaluationChanges, NewEvaluation, PersistedEvaluationData};
pub use ids::{DocumentId, EvaluationId, InitiativeId, PlanId, UserId};
pub use initiative::{Initiative, InitiativeChanges, NewInitiative, PersistedInitiativeData};
pub use page::{InitiativeFilter, Page, PageRequest};
pub use score::Score;
pub use status::InitiativeStatus;
pub use title::Title;
