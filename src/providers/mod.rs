/*!
 * Provider implementations for the summarization step.
 *
 * This module contains client implementations for the supported LLM APIs:
 * - OpenAI: OpenAI chat completions (also used for LM Studio, which speaks the same protocol)
 * - Anthropic: Anthropic messages API
 * - Mock: scripted provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A provider-agnostic completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The user prompt
    pub prompt: String,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature; provider default when unset
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
            temperature: None,
        }
    }

    pub fn temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

/// A provider-agnostic completion response
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    /// Generated text
    pub text: String,
    /// Prompt tokens reported by the API
    pub prompt_tokens: Option<u64>,
    /// Completion tokens reported by the API
    pub completion_tokens: Option<u64>,
}

/// Common trait for all LLM providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing the summary service to hold any of them behind a trait object.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<CompletionResponse, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError>;

    /// Human-readable provider name used in logs
    fn name(&self) -> &str;
}

pub mod openai;
pub mod anthropic;
pub mod mock;
