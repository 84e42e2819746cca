use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::application::{ResearchClient, ResearchTravelUseCase, TravelSession};
use crate::connector::{ApiStyle, MockResearchClient, OpenAiClientConfig, OpenAiResearchClient};
use crate::domain::ReasoningEffort;

/// Settings resolved from the command line. `None` falls back to the
/// environment, then to the client defaults.
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// Use the offline mock client; no API key needed.
    pub mock: bool,
    pub model: Option<String>,
    pub reasoning_effort: Option<ReasoningEffort>,
    pub max_output_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub base_url: Option<String>,
    pub api_style: Option<ApiStyle>,
    pub structured_output: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            mock: false,
            model: None,
            reasoning_effort: None,
            max_output_tokens: None,
            timeout_secs: None,
            base_url: None,
            api_style: None,
            structured_output: true,
        }
    }
}

impl ContainerConfig {
    /// Apply command-line overrides on top of an environment-derived config.
    pub fn apply_to(&self, mut client_config: OpenAiClientConfig) -> OpenAiClientConfig {
        if let Some(model) = &self.model {
            client_config.model = model.clone();
        }
        if let Some(effort) = self.reasoning_effort {
            client_config.reasoning_effort = effort;
        }
        if let Some(tokens) = self.max_output_tokens {
            client_config.max_output_tokens = tokens;
        }
        if let Some(secs) = self.timeout_secs {
            client_config.timeout = Duration::from_secs(secs);
        }
        if let Some(base_url) = &self.base_url {
            client_config.base_url = base_url.clone();
        }
        if let Some(style) = self.api_style {
            client_config.api_style = style;
        }
        client_config
    }
}

pub struct Container {
    research_client: Arc<dyn ResearchClient>,
    research_use_case: Arc<ResearchTravelUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let research_client: Arc<dyn ResearchClient> = if config.mock {
            debug!("Using mock research client");
            Arc::new(MockResearchClient::new())
        } else {
            let client_config = config.apply_to(OpenAiClientConfig::from_env()?);
            debug!("Initializing OpenAI research client: {:?}", client_config);
            Arc::new(OpenAiResearchClient::new(client_config)?)
        };

        Ok(Self::with_client(research_client, config))
    }

    /// Wire the use cases around an already-built client.
    pub fn with_client(research_client: Arc<dyn ResearchClient>, config: ContainerConfig) -> Self {
        let research_use_case = Arc::new(
            ResearchTravelUseCase::new(research_client.clone())
                .with_structured_output(config.structured_output),
        );

        Self {
            research_client,
            research_use_case,
            config,
        }
    }

    pub fn research_use_case(&self) -> Arc<ResearchTravelUseCase> {
        self.research_use_case.clone()
    }

    /// A fresh session sharing this container's use case.
    pub fn session(&self) -> TravelSession {
        TravelSession::new(self.research_use_case.clone())
    }

    pub fn model_name(&self) -> &str {
        self.research_client.model_name()
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock
    }

    pub fn structured_output(&self) -> bool {
        self.config.structured_output
    }
}
