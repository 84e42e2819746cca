use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::application::ResearchClient;
use crate::domain::{DomainError, RawServiceOutput, ResearchPrompt};

#[derive(Debug, Clone)]
enum MockReply {
    Output(RawServiceOutput),
    Transport(String),
}

#[derive(Default)]
struct Recorded {
    prompt: Option<ResearchPrompt>,
    schema: Option<Value>,
}

/// Offline [`ResearchClient`] replaying scripted replies.
///
/// Replies are consumed in order; the last one repeats forever. The default
/// reply is an empty completed answer, which sends every query down the
/// synthesized-plan path.
pub struct MockResearchClient {
    replies: Mutex<Vec<MockReply>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    recorded: Mutex<Recorded>,
}

impl MockResearchClient {
    pub fn new() -> Self {
        Self::with_reply(MockReply::Output(RawServiceOutput::complete("")))
    }

    pub fn replying(output: RawServiceOutput) -> Self {
        Self::with_reply(MockReply::Output(output))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Transport(message.into()))
    }

    pub fn then_replying(self, output: RawServiceOutput) -> Self {
        self.push(MockReply::Output(output))
    }

    pub fn then_failing(self, message: impl Into<String>) -> Self {
        self.push(MockReply::Transport(message.into()))
    }

    /// Sleep before answering, to keep a request in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<ResearchPrompt> {
        self.recorded.lock().ok()?.prompt.clone()
    }

    pub fn last_schema(&self) -> Option<Value> {
        self.recorded.lock().ok()?.schema.clone()
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            replies: Mutex::new(vec![reply]),
            delay: None,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Recorded::default()),
        }
    }

    fn push(self, reply: MockReply) -> Self {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push(reply);
        }
        self
    }

    fn next_reply(&self) -> Result<MockReply, DomainError> {
        let mut replies = self
            .replies
            .lock()
            .map_err(|_| DomainError::internal("mock reply queue poisoned"))?;
        let reply = if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies
                .first()
                .cloned()
                .ok_or_else(|| DomainError::internal("mock has no replies"))?
        };
        Ok(reply)
    }
}

impl Default for MockResearchClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResearchClient for MockResearchClient {
    async fn research(
        &self,
        prompt: &ResearchPrompt,
        schema: Option<&Value>,
    ) -> Result<RawServiceOutput, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.prompt = Some(prompt.clone());
            recorded.schema = schema.cloned();
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        debug!("Mock research call #{call}");

        match self.next_reply()? {
            MockReply::Output(output) => Ok(output),
            MockReply::Transport(message) => Err(DomainError::transport(message)),
        }
    }

    fn model_name(&self) -> &str {
        "mock-research"
    }
}
