pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ResearchClient, ResearchTravelUseCase, TravelSession, BUSY_MESSAGE,
    INCOMPLETE_FAILURE_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};

pub use cli::{Commands, OutputFormat, SelectionArgs};

pub use connector::{
    ApiStyle, Container, ContainerConfig, MockResearchClient, OpenAiClientConfig,
    OpenAiResearchClient, Router,
};

pub use domain::{
    DomainError, FallbackSynthesizer, Interpretation, InterpretationSource, ParamNormalizer,
    PromptBuilder, QueryParams, RawSelections, RawServiceOutput, ReasoningEffort,
    RecommendationItem, Region, ResearchPrompt, ResponseInterpreter, ResultEnvelope,
    SavedItinerary, TravelPlan, TravelPreference,
};
