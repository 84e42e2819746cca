use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::ResearchClient;
use crate::domain::{
    DomainError, RawServiceOutput, ReasoningEffort, ResearchPrompt, SCHEMA_NAME,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "o3-mini";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const RESPONSES_PATH: &str = "/responses";

/// Which OpenAI endpoint family to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStyle {
    #[default]
    ChatCompletions,
    Responses,
}

impl ApiStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStyle::ChatCompletions => "chat",
            ApiStyle::Responses => "responses",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            ApiStyle::ChatCompletions => CHAT_COMPLETIONS_PATH,
            ApiStyle::Responses => RESPONSES_PATH,
        }
    }
}

impl fmt::Display for ApiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" | "chat-completions" | "chat_completions" => Ok(ApiStyle::ChatCompletions),
            "responses" => Ok(ApiStyle::Responses),
            other => Err(DomainError::invalid_input(format!(
                "unknown API style '{other}', expected chat or responses"
            ))),
        }
    }
}

/// Everything needed to reach the completion service.
#[derive(Clone)]
pub struct OpenAiClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub reasoning_effort: ReasoningEffort,
    pub max_output_tokens: u32,
    /// Upper bound for the whole request, connect through body.
    pub timeout: Duration,
    pub api_style: ApiStyle,
}

impl OpenAiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            reasoning_effort: ReasoningEffort::default(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_style: ApiStyle::default(),
        }
    }

    /// Read configuration from the environment:
    ///
    /// | Variable                    | Default                     |
    /// |-----------------------------|-----------------------------|
    /// | `OPENAI_API_KEY`            | required                    |
    /// | `OPENAI_BASE_URL`           | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`              | `o3-mini`                   |
    /// | `OPENAI_REASONING_EFFORT`   | `medium`                    |
    /// | `OPENAI_MAX_OUTPUT_TOKENS`  | `4000`                      |
    /// | `OPENAI_TIMEOUT_SECS`       | `120`                       |
    /// | `OPENAI_API_STYLE`          | `chat`                      |
    pub fn from_env() -> Result<Self, DomainError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| DomainError::configuration("OPENAI_API_KEY is not set"))?;

        let mut config = Self::new(api_key);

        if let Ok(base) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = base;
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }
        if let Ok(effort) = std::env::var("OPENAI_REASONING_EFFORT") {
            config.reasoning_effort = effort.parse()?;
        }
        if let Ok(tokens) = std::env::var("OPENAI_MAX_OUTPUT_TOKENS") {
            config.max_output_tokens = tokens.trim().parse().map_err(|_| {
                DomainError::configuration(format!("OPENAI_MAX_OUTPUT_TOKENS is not a number: {tokens}"))
            })?;
        }
        if let Ok(secs) = std::env::var("OPENAI_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                DomainError::configuration(format!("OPENAI_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(style) = std::env::var("OPENAI_API_STYLE") {
            config.api_style = style.parse()?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_reasoning_effort(mut self, effort: ReasoningEffort) -> Self {
        self.reasoning_effort = effort;
        self
    }

    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_style(mut self, style: ApiStyle) -> Self {
        self.api_style = style;
        self
    }
}

impl fmt::Debug for OpenAiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("reasoning_effort", &self.reasoning_effort)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("timeout", &self.timeout)
            .field("api_style", &self.api_style)
            .finish()
    }
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct JsonSchemaSpec<'a> {
    name: &'a str,
    strict: bool,
    schema: &'a Value,
}

/// Chat Completions request payload.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    reasoning_effort: &'a str,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ChatResponseFormat<'a>>,
}

#[derive(Serialize)]
struct ChatResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    json_schema: JsonSchemaSpec<'a>,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

/// Responses API request payload.
#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: Vec<Message<'a>>,
    reasoning: ReasoningSpec<'a>,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<TextSpec<'a>>,
}

#[derive(Serialize)]
struct ReasoningSpec<'a> {
    effort: &'a str,
}

#[derive(Serialize)]
struct TextSpec<'a> {
    format: ResponsesFormat<'a>,
}

#[derive(Serialize)]
struct ResponsesFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(flatten)]
    spec: JsonSchemaSpec<'a>,
}

#[derive(Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    incomplete_details: Option<IncompleteDetails>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct IncompleteDetails {
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

/// [`ResearchClient`] backed by the OpenAI Chat Completions or Responses API.
///
/// The client is built once from an explicit [`OpenAiClientConfig`]; the API
/// key lives only in the default `Authorization` header. Every call is a
/// single attempt bounded by the configured timeout.
pub struct OpenAiResearchClient {
    client: reqwest::Client,
    config: OpenAiClientConfig,
    /// Full endpoint URL (base + API path).
    url: String,
}

impl OpenAiResearchClient {
    pub fn new(config: OpenAiClientConfig) -> Result<Self, DomainError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| DomainError::configuration("API key contains invalid characters"))?;
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| DomainError::configuration(format!("failed to build HTTP client: {e}")))?;

        let url = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            config.api_style.path()
        );

        Ok(Self {
            client,
            config,
            url,
        })
    }

    pub fn from_env() -> Result<Self, DomainError> {
        Self::new(OpenAiClientConfig::from_env()?)
    }

    pub fn config(&self) -> &OpenAiClientConfig {
        &self.config
    }

    fn chat_body(&self, prompt: &ResearchPrompt, schema: Option<&Value>) -> Result<Value, DomainError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &prompt.system,
                },
                Message {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            reasoning_effort: self.config.reasoning_effort.as_str(),
            max_completion_tokens: self.config.max_output_tokens,
            response_format: schema.map(|schema| ChatResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaSpec {
                    name: SCHEMA_NAME,
                    strict: true,
                    schema,
                },
            }),
        };
        serde_json::to_value(request).map_err(|e| DomainError::internal(e.to_string()))
    }

    fn responses_body(
        &self,
        prompt: &ResearchPrompt,
        schema: Option<&Value>,
    ) -> Result<Value, DomainError> {
        let request = ResponsesRequest {
            model: &self.config.model,
            input: vec![
                Message {
                    role: "system",
                    content: &prompt.system,
                },
                Message {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            reasoning: ReasoningSpec {
                effort: self.config.reasoning_effort.as_str(),
            },
            max_output_tokens: self.config.max_output_tokens,
            text: schema.map(|schema| TextSpec {
                format: ResponsesFormat {
                    kind: "json_schema",
                    spec: JsonSchemaSpec {
                        name: SCHEMA_NAME,
                        strict: true,
                        schema,
                    },
                },
            }),
        };
        serde_json::to_value(request).map_err(|e| DomainError::internal(e.to_string()))
    }

    fn parse_chat(body: &str) -> Result<RawServiceOutput, DomainError> {
        let response: ChatResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::transport(format!("failed to parse response: {e}")))?;

        let Some(choice) = response.choices.into_iter().next() else {
            warn!("Completion response contained no choices");
            return Ok(RawServiceOutput::complete(""));
        };

        let content = choice.message.content.unwrap_or_default();
        if let Some(refusal) = choice.message.refusal.filter(|r| !r.trim().is_empty()) {
            if content.trim().is_empty() {
                return Ok(RawServiceOutput::refused(refusal));
            }
        }

        Ok(match choice.finish_reason.as_deref() {
            Some("length") => RawServiceOutput::incomplete(content, "length"),
            Some("content_filter") if content.trim().is_empty() => {
                RawServiceOutput::refused("content_filter")
            }
            _ => RawServiceOutput::complete(content),
        })
    }

    fn parse_responses(body: &str) -> Result<RawServiceOutput, DomainError> {
        let response: ResponsesResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::transport(format!("failed to parse response: {e}")))?;

        let mut text = String::new();
        let mut refusal = None;
        for item in response.output.iter().filter(|i| i.kind == "message") {
            for part in &item.content {
                match part.kind.as_str() {
                    "output_text" => text.push_str(part.text.as_deref().unwrap_or_default()),
                    "refusal" => refusal = part.refusal.clone(),
                    _ => {}
                }
            }
        }

        match response.status.as_deref() {
            Some("incomplete") => {
                let reason = response
                    .incomplete_details
                    .and_then(|d| d.reason)
                    .unwrap_or_else(|| "incomplete".to_string());
                Ok(RawServiceOutput::incomplete(text, reason))
            }
            Some("failed") => Err(DomainError::transport("completion service reported failure")),
            _ => match refusal {
                Some(message) if text.trim().is_empty() => Ok(RawServiceOutput::refused(message)),
                _ => Ok(RawServiceOutput::complete(text)),
            },
        }
    }
}

#[async_trait]
impl ResearchClient for OpenAiResearchClient {
    async fn research(
        &self,
        prompt: &ResearchPrompt,
        schema: Option<&Value>,
    ) -> Result<RawServiceOutput, DomainError> {
        let body = match self.config.api_style {
            ApiStyle::ChatCompletions => self.chat_body(prompt, schema)?,
            ApiStyle::Responses => self.responses_body(prompt, schema)?,
        };

        debug!(
            "POST {} (model={}, effort={}, max_tokens={}, schema={})",
            self.url,
            self.config.model,
            self.config.reasoning_effort,
            self.config.max_output_tokens,
            schema.is_some()
        );

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::transport(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs_f64()
                    ))
                } else {
                    DomainError::transport(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::transport("timed out reading response body")
            } else {
                DomainError::transport(format!("failed to read response body: {e}"))
            }
        })?;

        if !status.is_success() {
            warn!("Completion service returned {status}: {text}");
            return Err(DomainError::transport(format!("API returned {status}")));
        }

        match self.config.api_style {
            ApiStyle::ChatCompletions => Self::parse_chat(&text),
            ApiStyle::Responses => Self::parse_responses(&text),
        }
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> ResearchPrompt {
        ResearchPrompt {
            system: "be helpful".to_string(),
            user: "plan a trip".to_string(),
        }
    }

    fn client(style: ApiStyle) -> OpenAiResearchClient {
        OpenAiResearchClient::new(
            OpenAiClientConfig::new("sk-test")
                .with_model("o3-mini")
                .with_reasoning_effort(ReasoningEffort::High)
                .with_max_output_tokens(1234)
                .with_api_style(style),
        )
        .unwrap()
    }

    #[test]
    fn url_joins_base_and_path() {
        let c = OpenAiResearchClient::new(
            OpenAiClientConfig::new("k").with_base_url("http://localhost:9999/v1/"),
        )
        .unwrap();
        assert_eq!(c.url, "http://localhost:9999/v1/chat/completions");

        assert!(client(ApiStyle::Responses).url.ends_with("/responses"));
    }

    #[test]
    fn chat_body_carries_settings_and_schema() {
        let schema = serde_json::json!({"type": "object"});
        let body = client(ApiStyle::ChatCompletions)
            .chat_body(&prompt(), Some(&schema))
            .unwrap();

        assert_eq!(body["model"], "o3-mini");
        assert_eq!(body["reasoning_effort"], "high");
        assert_eq!(body["max_completion_tokens"], 1234);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "plan a trip");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], SCHEMA_NAME);
        assert_eq!(body["response_format"]["json_schema"]["schema"], schema);
    }

    #[test]
    fn chat_body_omits_format_without_schema() {
        let body = client(ApiStyle::ChatCompletions).chat_body(&prompt(), None).unwrap();
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn responses_body_uses_nested_reasoning_and_flat_format() {
        let schema = serde_json::json!({"type": "object"});
        let body = client(ApiStyle::Responses)
            .responses_body(&prompt(), Some(&schema))
            .unwrap();

        assert_eq!(body["reasoning"]["effort"], "high");
        assert_eq!(body["max_output_tokens"], 1234);
        assert_eq!(body["input"][1]["role"], "user");
        assert_eq!(body["text"]["format"]["type"], "json_schema");
        assert_eq!(body["text"]["format"]["name"], SCHEMA_NAME);
        assert_eq!(body["text"]["format"]["strict"], true);
    }

    #[test]
    fn chat_length_finish_is_incomplete() {
        let body = r#"{"choices":[{"message":{"content":"Summary: cut"},"finish_reason":"length"}]}"#;
        let out = OpenAiResearchClient::parse_chat(body).unwrap();
        assert!(out.is_incomplete());
        assert_eq!(out.content(), "Summary: cut");
    }

    #[test]
    fn chat_refusal_without_content_is_refused() {
        let body = r#"{"choices":[{"message":{"content":null,"refusal":"no"},"finish_reason":"stop"}]}"#;
        assert!(OpenAiResearchClient::parse_chat(body).unwrap().is_refused());
    }

    #[test]
    fn responses_incomplete_reports_reason() {
        let body = r#"{"status":"incomplete","incomplete_details":{"reason":"max_output_tokens"},"output":[]}"#;
        let out = OpenAiResearchClient::parse_responses(body).unwrap();
        assert!(!out.has_text());
        assert_eq!(
            out.status(),
            &crate::domain::CompletionStatus::Incomplete {
                reason: "max_output_tokens".to_string()
            }
        );
    }

    #[test]
    fn responses_text_skips_reasoning_items() {
        let body = r#"{"status":"completed","output":[
            {"type":"reasoning","content":[]},
            {"type":"message","content":[{"type":"output_text","text":"Summary: "},{"type":"output_text","text":"hi"}]}
        ]}"#;
        let out = OpenAiResearchClient::parse_responses(body).unwrap();
        assert_eq!(out.content(), "Summary: hi");
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", OpenAiClientConfig::new("sk-secret"));
        assert!(!rendered.contains("sk-secret"));
    }

    #[test]
    fn api_style_parses() {
        assert_eq!("responses".parse::<ApiStyle>().unwrap(), ApiStyle::Responses);
        assert_eq!("Chat".parse::<ApiStyle>().unwrap(), ApiStyle::ChatCompletions);
        assert!("grpc".parse::<ApiStyle>().is_err());
    }
}
