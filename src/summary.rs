/*!
 * Transcript summarization.
 *
 * The credential is resolved once, when the summarizer is built from the
 * configuration. Without one the summarizer reports
 * `SummaryError::MissingCredential` on every call and never touches the network.
 */

use log::{debug, info, warn};
use std::sync::Arc;

use crate::app_config::{SummaryCommonConfig, SummaryConfig, SummaryProvider};
use crate::errors::SummaryError;
use crate::providers::anthropic::Anthropic;
use crate::providers::openai::OpenAI;
use crate::providers::{CompletionRequest, Provider};

/// Calls a provider with the configured prompt and transcript budget
#[derive(Debug, Clone)]
pub struct SummaryService {
    provider: Arc<dyn Provider>,
    settings: SummaryCommonConfig,
}

impl SummaryService {
    pub fn new(provider: Arc<dyn Provider>, settings: SummaryCommonConfig) -> Self {
        Self { provider, settings }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Join the lines with newlines and keep the first `max_input_chars` characters
    pub fn prepare_input<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let joined = lines.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("\n");
        truncate_chars(&joined, self.settings.max_input_chars).to_string()
    }

    /// The full prompt sent to the provider
    pub fn build_prompt<S: AsRef<str>>(&self, lines: &[S]) -> String {
        format!("{}{}", self.settings.prompt, self.prepare_input(lines))
    }

    /// Summarize transcript lines into markdown text
    pub async fn summarize<S: AsRef<str>>(&self, lines: &[S]) -> Result<String, SummaryError> {
        let prompt = self.build_prompt(lines);
        debug!("Requesting summary from {} ({} prompt chars)", self.provider.name(), prompt.chars().count());

        let request = CompletionRequest::new(prompt, self.settings.max_tokens)
            .temperature(self.settings.temperature);
        let response = self.provider.complete(request).await?;

        if response.text.trim().is_empty() {
            return Err(SummaryError::EmptyResponse);
        }

        info!(
            "Summary received from {} ({} chars, tokens in/out: {:?}/{:?})",
            self.provider.name(),
            response.text.chars().count(),
            response.prompt_tokens,
            response.completion_tokens
        );
        Ok(response.text)
    }
}

/// The summarization step as configured for this process
#[derive(Debug, Clone)]
pub enum Summarizer {
    /// Summaries are turned off in the configuration
    Disabled,
    /// Summaries are on but no API key was found
    MissingCredential { provider: String, env_var: String },
    Ready(SummaryService),
}

impl Summarizer {
    /// Build the summarizer, resolving the API key from config or environment
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::from_config_with_key(config, config.resolve_api_key())
    }

    /// Build the summarizer with an already resolved API key
    pub fn from_config_with_key(config: &SummaryConfig, api_key: Option<String>) -> Self {
        if !config.enabled {
            info!("Summaries are disabled in the configuration");
            return Summarizer::Disabled;
        }

        let Some(api_key) = api_key else {
            let env_var = config.provider.api_key_env_var().unwrap_or("the config file");
            warn!(
                "No API key for {}; summaries will report an error until {} is set",
                config.provider.display_name(),
                env_var
            );
            return Summarizer::MissingCredential {
                provider: config.provider.display_name().to_string(),
                env_var: env_var.to_string(),
            };
        };

        let provider = build_provider(config, api_key);
        info!("Summaries use {} (model: {})", config.provider.display_name(), config.get_model());
        Summarizer::Ready(SummaryService::new(provider, config.common.clone()))
    }

    /// Summarize `lines`; `None` when summaries are disabled
    pub async fn summarize<S: AsRef<str>>(&self, lines: &[S]) -> Option<Result<String, SummaryError>> {
        match self {
            Summarizer::Disabled => None,
            Summarizer::MissingCredential { provider, env_var } => {
                Some(Err(SummaryError::MissingCredential {
                    provider: provider.clone(),
                    env_var: env_var.clone(),
                }))
            }
            Summarizer::Ready(service) => Some(service.summarize(lines).await),
        }
    }
}

/// Construct the configured provider client
pub fn build_provider(config: &SummaryConfig, api_key: String) -> Arc<dyn Provider> {
    let endpoint = config.get_endpoint();
    let model = config.get_model();
    let timeout = config.get_timeout_secs();

    match config.provider {
        SummaryProvider::OpenAI => Arc::new(OpenAI::new(api_key, endpoint, model, timeout)),
        SummaryProvider::LMStudio => Arc::new(
            OpenAI::new(api_key, endpoint, model, timeout).with_display_name("LM Studio"),
        ),
        SummaryProvider::Anthropic => Arc::new(Anthropic::new(api_key, endpoint, model, timeout)),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
