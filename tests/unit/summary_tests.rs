/*!
 * Tests for the summary service and summarizer construction
 */

use std::sync::Arc;
use yt2pdf::app_config::{SummaryCommonConfig, SummaryConfig, SummaryProvider};
use yt2pdf::errors::{ProviderError, SummaryError};
use yt2pdf::providers::mock::MockProvider;
use yt2pdf::summary::{SummaryService, Summarizer};

use crate::common::ready_summarizer;

#[tokio::test]
async fn test_summarize_withLongTranscript_shouldSendFirst12000Chars() {
    let provider = MockProvider::working();
    let service = SummaryService::new(Arc::new(provider.clone()), SummaryCommonConfig::default());
    let lines: Vec<String> = (0..1000).map(|_| "a".repeat(49)).collect();

    service.summarize(&lines).await.unwrap();

    let prompt = provider.last_request().unwrap().prompt;
    let default_prompt = SummaryCommonConfig::default().prompt;
    assert!(prompt.starts_with(&default_prompt));
    assert_eq!(prompt.chars().count() - default_prompt.chars().count(), 12_000);
}

#[tokio::test]
async fn test_summarize_withUnauthorizedProvider_shouldReturnProviderError() {
    let summarizer = ready_summarizer(MockProvider::unauthorized());

    let result = summarizer.summarize(&["text"]).await;

    assert!(matches!(
        result,
        Some(Err(SummaryError::Provider(ProviderError::AuthenticationError(_))))
    ));
}

#[tokio::test]
async fn test_fromConfigWithKey_withKey_shouldBeReady() {
    let config = SummaryConfig {
        provider: SummaryProvider::Anthropic,
        ..Default::default()
    };
    let summarizer = Summarizer::from_config_with_key(&config, Some("key".to_string()));

    match summarizer {
        Summarizer::Ready(service) => assert_eq!(service.provider_name(), "Anthropic"),
        other => panic!("expected a ready summarizer, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fromConfigWithKey_withLmStudio_shouldUseLmStudioName() {
    let config = SummaryConfig {
        provider: SummaryProvider::LMStudio,
        ..Default::default()
    };
    let key = config.resolve_api_key_with(|_| None);
    let summarizer = Summarizer::from_config_with_key(&config, key);

    match summarizer {
        Summarizer::Ready(service) => assert_eq!(service.provider_name(), "LM Studio"),
        other => panic!("expected a ready summarizer, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fromConfigWithKey_withoutKey_shouldReportMissingCredential() {
    let config = SummaryConfig {
        provider: SummaryProvider::Anthropic,
        ..Default::default()
    };
    let summarizer = Summarizer::from_config_with_key(&config, None);

    let error = summarizer.summarize(&["text"]).await.unwrap().unwrap_err();

    assert!(error.to_string().contains("ANTHROPIC_API_KEY"));
}

#[test]
fn test_disabledSummarizer_shouldNeverProduceSummary() {
    let result = tokio_test::block_on(async { Summarizer::Disabled.summarize(&["text"]).await });
    assert!(result.is_none());
}
