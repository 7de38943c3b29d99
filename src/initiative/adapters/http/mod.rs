//! REST adapters for the governance backend.
//!
//! Endpoint shapes, relative to the configured base URL:
//!
//! - `GET|POST /initiatives`, `GET|PUT|DELETE /initiatives/{id}`
//! - `POST /initiatives/{id}/transition` with body `{"status": ...}`
//! - `GET /evaluations?iniciative_id={id}`, `POST /evaluations`,
//!   `GET|PUT|DELETE /evaluations/{id}`
//!
//! Error responses carry a `message` field. When it is missing the HTTP
//! status reason phrase is used instead. Requests are never retried.

mod client;
mod models;

pub use client::{HttpGovernanceClient, HttpStatusError};
