//! Adapter implementations for initiative governance ports.

pub mod http;
pub mod memory;

mod confirmation;
mod tracing_audit;

pub use confirmation::{AutoConfirm, AutoDecline};
pub use tracing_audit::TracingAuditLog;
