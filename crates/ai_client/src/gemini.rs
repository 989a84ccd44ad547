use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use models::Settings;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::TextGenerator;

/// Environment variable holding the generative backend API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const API_KEY_HEADER: &str = "x-goog-api-key";
const TEMPERATURE: f64 = 0.7;
// Upstream error bodies are truncated to this many chars before being surfaced.
const MAX_ERROR_BODY: usize = 500;

/// Configuration for talking to the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiClientConfig {
    /// Builds the config from loaded settings plus `GEMINI_API_KEY` from the environment.
    ///
    /// Fails when the key is missing or blank; the server refuses to start without it.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::with_api_key(std::env::var(API_KEY_VAR).ok(), settings)
    }

    pub fn with_api_key(api_key: Option<String>, settings: &Settings) -> Result<Self> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!("{API_KEY_VAR} is not set; the plan generator cannot start without it"))?;

        Ok(Self {
            api_key,
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            timeout: Duration::from_secs(settings.request_timeout_secs),
        })
    }
}

/// Async Gemini client. Cheap to clone; the inner `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: Url,
    model: String,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self> {
        let base_url = validate_base_url(&config.base_url)?;
        let endpoint = base_url
            .join(&format!("v1beta/models/{}:generateContent", config.model))
            .context("Failed to build Gemini generateContent URL")?;

        let mut key = HeaderValue::from_str(&config.api_key)
            .context("GEMINI_API_KEY contains characters that are not valid in a header")?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, key);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Single-turn, non-streaming completion.
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(TEMPERATURE),
            }),
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "Calling generateContent");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .with_context(|| format!("POST generateContent for model {} failed", self.model))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!(
                "generateContent returned {status}: {}",
                truncate(&body, MAX_ERROR_BODY)
            );
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse JSON response from generateContent")?;

        candidate_text(response)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt).await
    }
}

fn validate_base_url(base_url: &str) -> Result<Url> {
    let mut url =
        Url::parse(base_url).with_context(|| format!("Invalid GEMINI_BASE_URL: {base_url}"))?;

    match url.scheme() {
        "https" | "http" => {}
        other => bail!("Unsupported scheme '{other}' for GEMINI_BASE_URL"),
    }

    if url.host_str().is_none() {
        bail!("GEMINI_BASE_URL is missing a host");
    }

    // `Url::join` replaces the last path segment unless the path ends with '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Concatenated text parts of the first candidate.
fn candidate_text(response: GenerateContentResponse) -> Result<String> {
    let candidate = match response.candidates.into_iter().next() {
        Some(c) => c,
        None => {
            let reason = response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            bail!("Gemini returned no completion ({reason})");
        }
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "empty content".to_string());
        bail!("Gemini returned an empty completion ({reason})");
    }

    Ok(text)
}

/// The first `max_chars` chars of `s`, with `...` appended when cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}
