/*!
 * Tests for application configuration functionality
 */

use yt2pdf::app_config::{Config, LogLevel, SummaryCommonConfig, SummaryConfig, SummaryProvider};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.server.listen_addr, "127.0.0.1:8501");
    assert_eq!(config.transcript.languages, vec!["en".to_string()]);
    assert!(config.summary.enabled);
    assert_eq!(config.summary.provider, SummaryProvider::OpenAI);
    assert_eq!(config.summary.get_model(), "gpt-4");
    assert_eq!(config.summary.common.max_input_chars, 12_000);
    assert_eq!(config.summary.common.max_tokens, 1500);
    assert_eq!(config.summary.get_timeout_secs(), 120);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withInvalidValues_shouldFail() {
    let mut config = Config::default();
    config.server.listen_addr = "not an address".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.transcript.languages = vec![" ".to_string()];
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.summary.common.max_input_chars = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.summary.common.temperature = Some(3.5);
    assert!(config.validate().is_err());
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.server.listen_addr, "127.0.0.1:8501");
    let reloaded = Config::load_or_create(&path).unwrap();
    assert_eq!(reloaded.summary.available_providers.len(), 3);
}

#[test]
fn test_loadOrCreate_withPartialFile_shouldFillDefaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "summary": { "provider": "anthropic" }, "log_level": "debug" }"#).unwrap();

    let config = Config::load_or_create(&path).unwrap();

    assert_eq!(config.summary.provider, SummaryProvider::Anthropic);
    assert_eq!(config.summary.get_model(), "claude-3-haiku-20240307");
    assert_eq!(config.summary.get_endpoint(), "https://api.anthropic.com");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.transcript.languages, vec!["en".to_string()]);
}

#[test]
fn test_loadOrCreate_withMalformedFile_shouldFail() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_or_create(&path).is_err());
}

#[test]
fn test_resolveApiKey_shouldPreferConfigThenEnvironment() {
    let mut config = SummaryConfig::default();

    let from_env = config.resolve_api_key_with(|name| {
        assert_eq!(name, "OPENAI_API_KEY");
        Some("env-key".to_string())
    });
    assert_eq!(from_env, Some("env-key".to_string()));

    assert_eq!(config.resolve_api_key_with(|_| None), None);
    assert_eq!(config.resolve_api_key_with(|_| Some("  ".to_string())), None);

    config.active_provider_config_mut().api_key = "file-key".to_string();
    assert_eq!(config.resolve_api_key_with(|_| Some("env-key".to_string())), Some("file-key".to_string()));
}

#[test]
fn test_resolveApiKey_withLmStudio_shouldUsePlaceholder() {
    let config = SummaryConfig {
        provider: SummaryProvider::LMStudio,
        ..Default::default()
    };
    assert_eq!(config.resolve_api_key_with(|_| None), Some("lm-studio".to_string()));
    assert_eq!(config.get_endpoint(), "http://localhost:1234/v1");
}

#[test]
fn test_summaryProvider_fromStr_shouldParseCaseInsensitively() {
    assert_eq!("OpenAI".parse::<SummaryProvider>().unwrap(), SummaryProvider::OpenAI);
    assert_eq!("lmstudio".parse::<SummaryProvider>().unwrap(), SummaryProvider::LMStudio);
    assert!("ollama".parse::<SummaryProvider>().is_err());
}

/// The default prompt is the strategist field-memo brief
#[test]
fn test_defaultPrompt_shouldKeepFieldMemoBrief() {
    let prompt = SummaryCommonConfig::default().prompt;

    assert!(prompt.starts_with("You are a hyper-logical, brutally efficient strategist"));
    assert!(prompt.contains("billionaire founder planning world domination"));
    assert!(prompt.contains("**Executive Summary**"));
    assert!(prompt.contains("field memo for a Navy SEAL operator"));
    assert!(prompt.contains("No fluff. No praise. Just high-value execution intelligence."));
    assert!(prompt.ends_with("\n\n"));
}
