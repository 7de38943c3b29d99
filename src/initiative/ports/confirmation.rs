//! Confirmation port for irreversible actions.

use crate::initiative::domain::ConfirmationRequest;
use async_trait::async_trait;

/// Resolves a [`ConfirmationRequest`] to a yes/no answer.
///
/// Implementations decide how the question is presented. The service only
/// proceeds when the answer is `true`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Asks the operator and returns whether to proceed.
    async fn confirm(&self, request: &ConfirmationRequest) -> bool;
}
