//! Google Translate API v2 provider.
//!
//! Each call sends one text with `format=text` and lets Google detect the
//! source language. The API key comes from the backend configuration
//! (`SCHEMES_TRANSLATE_KEY`).

use async_trait::async_trait;
use serde_json::json;

use crate::error::{TranslationError, TranslationResult};
use crate::translation::translator::{TextTranslator, validate_language};


#[derive(Clone)]
pub struct GoogleTranslateProvider {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://translation.googleapis.com/language/translate/v2";

    /// Maximum characters per string (30KB per Google Translate API limits)
    pub const MAX_CHARS_PER_STRING: usize = 30_000;

    pub fn new(api_key: String, timeout: std::time::Duration) -> TranslationResult<Self> {
        if api_key.trim().is_empty() {
            return Err(TranslationError::Config("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the provider at a different endpoint, e.g. a proxy.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn extract_translation(json: &serde_json::Value) -> TranslationResult<String> {
        let translations = json["data"]["translations"].as_array().ok_or_else(|| {
            TranslationError::InvalidResponse("missing 'data.translations' array".to_string())
        })?;
        translations
            .first()
            .and_then(|t| t["translatedText"].as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| TranslationError::InvalidResponse("missing 'translatedText' field".to_string()))
    }

    fn extract_error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| json["error"]["message"].as_str().map(|s| s.to_string()))
            .unwrap_or_else(|| body.trim().to_string())
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl TextTranslator for GoogleTranslateProvider {
    async fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String> {
        validate_language(target_language)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        let len = text.chars().count();
        if len > Self::MAX_CHARS_PER_STRING {
            return Err(TranslationError::TextTooLong { len, max: Self::MAX_CHARS_PER_STRING });
        }

        let body = json!({
            "q": [text],
            "target": target_language,
            "format": "text"
        });

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranslationError::Api {
                status: status.as_u16(),
                message: Self::extract_error_message(&error_text),
            });
        }

        let json: serde_json::Value = response.json().await?;
        Self::extract_translation(&json)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use axum::{Json, Router, extract::Query, http::StatusCode, routing::post};

    use super::*;
    use crate::test_server::{SeenRequest, closed_port_url, seen_slot, spawn_router};

    fn provider() -> GoogleTranslateProvider {
        GoogleTranslateProvider::new("test-key".to_string(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_new_with_empty_key() {
        match GoogleTranslateProvider::new("   ".to_string(), Duration::from_secs(1)) {
            Err(TranslationError::Config(msg)) => assert!(msg.contains("empty")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_output_masks_key() {
        let debug_str = format!("{:?}", provider());
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("test-key"));
    }

    #[test]
    fn test_base_url_override() {
        let p = provider().with_base_url("http://localhost:8080/translate".to_string());
        assert!(format!("{:?}", p).contains("http://localhost:8080/translate"));
    }

    #[test]
    fn test_extract_translation() {
        let json = json!({"data": {"translations": [{"translatedText": "स्वास्थ्य", "detectedSourceLanguage": "en"}]}});
        assert_eq!(GoogleTranslateProvider::extract_translation(&json).unwrap(), "स्वास्थ्य");

        let missing = json!({"data": {"translations": []}});
        assert!(matches!(
            GoogleTranslateProvider::extract_translation(&missing),
            Err(TranslationError::InvalidResponse(_))
        ));
        assert!(GoogleTranslateProvider::extract_translation(&json!({})).is_err());
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "errors": []}}"#;
        assert_eq!(
            GoogleTranslateProvider::extract_error_message(body),
            "API key not valid. Please pass a valid API key."
        );
        assert_eq!(GoogleTranslateProvider::extract_error_message("Service Unavailable"), "Service Unavailable");
    }

    #[tokio::test]
    async fn test_empty_text_needs_no_request() {
        assert_eq!(provider().translate("", "hi").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_invalid_target_language() {
        let result = provider().translate("hello", "hi#x").await;
        assert!(matches!(result, Err(TranslationError::InvalidLanguage(_))));
    }

    #[tokio::test]
    async fn test_text_too_long() {
        let long_text = "x".repeat(GoogleTranslateProvider::MAX_CHARS_PER_STRING + 1);
        let result = provider().translate(&long_text, "fr").await;
        assert!(matches!(result, Err(TranslationError::TextTooLong { .. })));
    }

    async fn provider_at(app: Router) -> GoogleTranslateProvider {
        let base_url = spawn_router(app).await;
        provider().with_base_url(format!("{base_url}/language/translate/v2"))
    }

    #[tokio::test]
    async fn test_translate_passes_region_code_through() {
        let seen = seen_slot();
        let slot = seen.clone();
        let app = Router::new().route(
            "/language/translate/v2",
            post(move |Query(params): Query<HashMap<String, String>>, Json(body): Json<serde_json::Value>| {
                let slot = slot.clone();
                async move {
                    *slot.lock().unwrap() = Some(SeenRequest {
                        query: params.get("key").cloned(),
                        body: Some(body),
                        ..Default::default()
                    });
                    Json(json!({"data": {"translations": [{"translatedText": "健康保險", "detectedSourceLanguage": "en"}]}}))
                }
            }),
        );
        let provider = provider_at(app).await;

        assert_eq!(provider.translate("Health insurance", "zh-TW").await.unwrap(), "健康保險");
        let request = seen.lock().unwrap().clone().expect("request reached the server");
        assert_eq!(request.query.as_deref(), Some("test-key"));
        assert_eq!(request.body, Some(json!({"q": ["Health insurance"], "target": "zh-TW", "format": "text"})));
    }

    #[tokio::test]
    async fn test_translate_maps_error_status_to_api_error() {
        let app = Router::new().route(
            "/language/translate/v2",
            post(|| async {
                (StatusCode::FORBIDDEN, Json(json!({"error": {"code": 403, "message": "API key not valid."}})))
            }),
        );
        let err = provider_at(app).await.translate("Health insurance", "hi").await.unwrap_err();
        assert_eq!(err, TranslationError::Api { status: 403, message: "API key not valid.".to_string() });
    }

    #[tokio::test]
    async fn test_translate_rejects_malformed_reply() {
        let app = Router::new().route("/language/translate/v2", post(|| async { "<html>proxy error</html>" }));
        let err = provider_at(app).await.translate("Health insurance", "hi").await.unwrap_err();
        assert!(matches!(err, TranslationError::InvalidResponse(_)), "got {err:?}");

        let app = Router::new().route("/language/translate/v2", post(|| async { Json(json!({"data": {}})) }));
        let err = provider_at(app).await.translate("Health insurance", "hi").await.unwrap_err();
        assert!(matches!(err, TranslationError::InvalidResponse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_translate_unreachable_server() {
        let p = provider().with_base_url(closed_port_url().await);
        let err = p.translate("Health insurance", "hi").await.unwrap_err();
        assert!(matches!(err, TranslationError::Network(_)), "got {err:?}");
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored (needs SCHEMES_TRANSLATE_KEY)
    async fn test_real_api_translation() {
        let Ok(key) = std::env::var("SCHEMES_TRANSLATE_KEY") else {
            eprintln!("Skipping: SCHEMES_TRANSLATE_KEY not set");
            return;
        };
        let provider = GoogleTranslateProvider::new(key, Duration::from_secs(30)).unwrap();
        let result = provider.translate("Health insurance for families", "hi").await.unwrap();
        assert!(!result.is_empty());
    }
}
