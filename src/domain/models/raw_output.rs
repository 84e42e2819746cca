use serde::{Deserialize, Serialize};

/// How the completion service says the generation ended.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompletionStatus {
    #[default]
    Complete,
    /// Output was cut short, e.g. by the token ceiling.
    Incomplete { reason: String },
    /// The model declined to answer.
    Refused { message: String },
}

/// Text returned by the completion service, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawServiceOutput {
    content: String,
    status: CompletionStatus,
}

impl RawServiceOutput {
    pub fn new(content: impl Into<String>, status: CompletionStatus) -> Self {
        Self {
            content: content.into(),
            status,
        }
    }

    pub fn complete(content: impl Into<String>) -> Self {
        Self::new(content, CompletionStatus::Complete)
    }

    pub fn incomplete(content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(
            content,
            CompletionStatus::Incomplete {
                reason: reason.into(),
            },
        )
    }

    pub fn refused(message: impl Into<String>) -> Self {
        Self::new(
            "",
            CompletionStatus::Refused {
                message: message.into(),
            },
        )
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn status(&self) -> &CompletionStatus {
        &self.status
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self.status, CompletionStatus::Incomplete { .. })
    }

    pub fn is_refused(&self) -> bool {
        matches!(self.status, CompletionStatus::Refused { .. })
    }

    pub fn has_text(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
