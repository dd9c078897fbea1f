//! Translator trait and shared helpers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{TranslationConfig, TranslationEngine};
use crate::error::{TranslationError, TranslationResult};
use crate::translation::{GoogleTranslateProvider, LibreTranslateProvider};


/// An external text-translation capability: one text in, one text out.
///
/// The source language is left to the engine to detect.
#[async_trait]
pub trait TextTranslator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String>;

    /// Used in logs to tell which engine served a request.
    fn provider_name(&self) -> &str;
}

/// Accept language codes like `hi`, `en-US`, `zh_Hant`; reject anything else
/// before it reaches a URL or request body.
pub fn validate_language(language: &str) -> TranslationResult<()> {
    if language.is_empty() {
        return Err(TranslationError::InvalidLanguage("Language code is empty".to_string()));
    }
    if !language.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(TranslationError::InvalidLanguage(format!(
            "Invalid characters in language code: {}",
            language
        )));
    }
    Ok(())
}

pub fn provider_from_config(
    config: &TranslationConfig,
    timeout: std::time::Duration,
) -> TranslationResult<Arc<dyn TextTranslator>> {
    Ok(match config.engine {
        TranslationEngine::Google => {
            let api_key = config.api_key.clone().ok_or_else(|| {
                TranslationError::Config("the google engine needs an API key".to_string())
            })?;
            let mut provider = GoogleTranslateProvider::new(api_key, timeout)?;
            if let Some(base_url) = &config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            Arc::new(provider)
        }
        TranslationEngine::Libre => {
            let base_url = config.base_url.clone().unwrap_or(LibreTranslateProvider::DEFAULT_BASE_URL.to_string());
            Arc::new(LibreTranslateProvider::new(base_url, config.api_key.clone(), timeout)?)
        }
    })
}
