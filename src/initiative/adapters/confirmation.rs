//! Non-interactive confirmation prompts.

use crate::initiative::{domain::ConfirmationRequest, ports::ConfirmationPrompt};
use async_trait::async_trait;

/// Confirms every request. Used by scripted and pre-authorized paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl ConfirmationPrompt for AutoConfirm {
    async fn confirm(&self, request: &ConfirmationRequest) -> bool {
        tracing::debug!(message = request.message(), "confirmation granted automatically");
        true
    }
}

/// Declines every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoDecline;

#[async_trait]
impl ConfirmationPrompt for AutoDecline {
    async fn confirm(&self, request: &ConfirmationRequest) -> bool {
        tracing::debug!(message = request.message(), "confirmation declined automatically");
        false
    }
}
