use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{DomainError, RawServiceOutput, ResearchPrompt};

/// Sends one research prompt to a completion service.
///
/// Implementors own transport, authentication and the vendor request shape.
/// A call makes exactly one attempt and must give up within a bounded time,
/// reporting network failures, timeouts and non-success statuses as
/// [`DomainError::Transport`].
#[async_trait]
pub trait ResearchClient: Send + Sync {
    /// Run `prompt`, asking for JSON matching `schema` when one is given.
    async fn research(
        &self,
        prompt: &ResearchPrompt,
        schema: Option<&Value>,
    ) -> Result<RawServiceOutput, DomainError>;

    fn model_name(&self) -> &str;
}
