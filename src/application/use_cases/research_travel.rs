use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use crate::application::ResearchClient;
use crate::domain::{
    DomainError, Interpretation, ParamNormalizer, PromptBuilder, QueryParams, RawSelections,
    ResponseInterpreter, ResultEnvelope,
};

/// Shown when the completion service cannot be reached or rejects the call.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to perform research. Please try again later.";

/// Shown when the completion service gave up before producing any text.
pub const INCOMPLETE_FAILURE_MESSAGE: &str = "The research request was too complex to complete. \
    Try a shorter question or fewer preferences.";

/// Runs one travel question through prompt construction, the completion
/// service and response interpretation.
pub struct ResearchTravelUseCase {
    client: Arc<dyn ResearchClient>,
    structured_output: bool,
}

impl ResearchTravelUseCase {
    pub fn new(client: Arc<dyn ResearchClient>) -> Self {
        Self {
            client,
            structured_output: true,
        }
    }

    /// Whether to attach the travel plan JSON schema to each request.
    pub fn with_structured_output(mut self, enabled: bool) -> Self {
        self.structured_output = enabled;
        self
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Errors only with [`DomainError::Transport`] (or another client error)
    /// and [`DomainError::IncompleteOutput`]; every other failure is absorbed
    /// by the interpreter's fallbacks.
    pub async fn execute(&self, params: &QueryParams) -> Result<Interpretation, DomainError> {
        info!(
            "Researching travel plan with {}: {}",
            self.client.model_name(),
            params.summary()
        );

        let start_time = Instant::now();

        let prompt = PromptBuilder::build(params);
        let schema = self.structured_output.then(PromptBuilder::response_schema);

        let raw = self.client.research(&prompt, schema.as_ref()).await?;
        let interpretation = ResponseInterpreter::interpret(&raw, params)?;

        info!(
            "Travel plan ready via {} in {:.2}s",
            interpretation.source,
            start_time.elapsed().as_secs_f64()
        );

        Ok(interpretation)
    }

    /// Caller-facing entry point: never fails, always returns an envelope.
    pub async fn submit_query(&self, params: &QueryParams) -> ResultEnvelope {
        match self.execute(params).await {
            Ok(interpretation) => ResultEnvelope::success(interpretation.plan),
            Err(DomainError::IncompleteOutput(reason)) => {
                warn!("Research output incomplete: {reason}");
                ResultEnvelope::failure(INCOMPLETE_FAILURE_MESSAGE)
            }
            Err(e) => {
                error!("Error performing research: {e}");
                ResultEnvelope::failure(TRANSPORT_FAILURE_MESSAGE)
            }
        }
    }

    /// Normalizes raw UI selections, then behaves like [`Self::submit_query`].
    pub async fn submit_selections(&self, raw: &RawSelections) -> ResultEnvelope {
        let params = ParamNormalizer::normalize(raw);
        self.submit_query(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockResearchClient;
    use crate::domain::{FallbackSynthesizer, RawServiceOutput, Region, TravelPreference};

    fn params() -> QueryParams {
        QueryParams::new("")
            .with_preferences([TravelPreference::Family])
            .with_regions([Region::PuntaCana])
            .with_budget("mid-range")
            .with_companions("family")
    }

    #[tokio::test]
    async fn transport_error_becomes_failure_without_plan() {
        let client = Arc::new(MockResearchClient::failing("connection refused"));
        let use_case = ResearchTravelUseCase::new(client.clone());

        let envelope = use_case.submit_query(&params()).await;

        assert_eq!(envelope.error(), Some(TRANSPORT_FAILURE_MESSAGE));
        assert!(envelope.data().is_none());
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn incomplete_without_text_becomes_failure() {
        let client = Arc::new(MockResearchClient::replying(RawServiceOutput::incomplete(
            "",
            "max_output_tokens",
        )));
        let envelope = ResearchTravelUseCase::new(client).submit_query(&params()).await;
        assert_eq!(envelope.error(), Some(INCOMPLETE_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn empty_answer_still_succeeds_with_synthesized_plan() {
        let client = Arc::new(MockResearchClient::new());
        let envelope = ResearchTravelUseCase::new(client).submit_query(&params()).await;
        assert_eq!(
            envelope.data(),
            Some(&FallbackSynthesizer::synthesize(&params()))
        );
    }

    #[tokio::test]
    async fn schema_is_attached_only_when_enabled() {
        let client = Arc::new(MockResearchClient::new());

        ResearchTravelUseCase::new(client.clone())
            .submit_query(&params())
            .await;
        assert!(client.last_schema().is_some());

        ResearchTravelUseCase::new(client.clone())
            .with_structured_output(false)
            .submit_query(&params())
            .await;
        assert!(client.last_schema().is_none());
    }

    #[tokio::test]
    async fn prompt_carries_normalized_selections() {
        let client = Arc::new(MockResearchClient::new());
        let use_case = ResearchTravelUseCase::new(client.clone());

        let raw = RawSelections::new("Quiet beaches?")
            .with_preferences(["beach", "null"])
            .with_regions(["samana"]);
        let envelope = use_case.submit_selections(&raw).await;

        assert!(envelope.is_success());
        let prompt = client.last_prompt().unwrap();
        assert!(prompt.user.contains("User query: Quiet beaches?"));
        assert!(prompt.user.contains("Travel preferences: beach\n"));
        assert!(prompt.user.contains("Regions of interest: Samaná"));
    }
}
