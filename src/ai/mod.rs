//! Content Generation
//!
//! The store talks to a text-generation service through `ContentProvider`.
//! Responses are parsed into entities by `parse`; avatar and cover images are
//! URLs into public image services built by `media`.

mod gemini;
pub mod media;
pub mod parse;
pub mod prompts;

use async_trait::async_trait;

pub use gemini::GeminiProvider;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("AI service is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response structure: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Message suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::NotConfigured => "AI Service is not configured.".to_string(),
            ProviderError::Http(_) => "AI request failed. Please try again.".to_string(),
            ProviderError::Status { status, .. } => {
                format!("Failed to generate content. Status: {status}")
            }
            ProviderError::InvalidResponse(_) => "Invalid response structure from AI.".to_string(),
        }
    }
}

/// Prompt in, generated text out
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError>;
}
