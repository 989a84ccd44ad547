pub mod gemini;

use anyhow::Result;
use async_trait::async_trait;

pub use gemini::{truncate, GeminiClient, GeminiClientConfig, API_KEY_VAR};

/// A text-completion backend: one prompt in, one full text response out.
///
/// Handlers receive an implementation through this trait so tests can swap
/// in a canned generator instead of calling the network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
