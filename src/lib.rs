//! Aula governance: initiative lifecycle and evaluation workflow.
//!
//! This crate manages institutional initiatives through a fixed status
//! lifecycle, records their evaluations, and advances finalized initiatives
//! to `evaluada` when an evaluation is recorded.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Status catalog, transition rules, and aggregates
//! - **Ports**: Repository, audit, and confirmation traits
//! - **Adapters**: In-memory stores and the REST backend client
//! - **Services**: Lifecycle orchestration over the ports
//!
//! # Modules
//!
//! - [`initiative`]: Initiative and evaluation workflow
//! - [`navigation`]: Per-role dashboard menus
//! - [`settings`]: Layered configuration
//! - [`telemetry`]: Structured logging setup

pub mod initiative;
pub mod navigation;
pub mod settings;
pub mod telemetry;
