//! LibreTranslate provider, for self-hosted or public LibreTranslate servers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{TranslationError, TranslationResult};
use crate::translation::translator::{TextTranslator, validate_language};


/// `en-US` → `en`. LibreTranslate only knows bare language codes.
fn libre_language_code(language: &str) -> String {
    language.split(['-', '_']).next().unwrap_or(language).to_lowercase()
}

#[derive(Debug, Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: String,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct LibreTranslateProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslateProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://libretranslate.com";

    pub fn new(base_url: String, api_key: Option<String>, timeout: std::time::Duration) -> TranslationResult<Self> {
        if base_url.trim().is_empty() {
            return Err(TranslationError::Config("LibreTranslate URL cannot be empty".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string(), api_key })
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.base_url)
    }
}

impl std::fmt::Debug for LibreTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibreTranslateProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl TextTranslator for LibreTranslateProvider {
    async fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String> {
        validate_language(target_language)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        let request = LibreTranslateRequest {
            q: text,
            source: "auto",
            target: libre_language_code(target_language),
            format: "text",
            api_key: self.api_key.as_deref(),
        };
        let response = self.client.post(self.endpoint()).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<LibreTranslateResponse>(&body);

        if !status.is_success() {
            let message = match parsed {
                Ok(LibreTranslateResponse { error: Some(error), .. }) => error,
                _ => body.trim().to_string(),
            };
            return Err(TranslationError::Api { status: status.as_u16(), message });
        }

        match parsed {
            Ok(LibreTranslateResponse { translated_text: Some(text), .. }) => Ok(text),
            Ok(LibreTranslateResponse { error: Some(error), .. }) => Err(TranslationError::Other(error)),
            Ok(_) => Err(TranslationError::InvalidResponse("missing 'translatedText' field".to_string())),
            Err(e) => Err(TranslationError::InvalidResponse(e.to_string())),
        }
    }

    fn provider_name(&self) -> &str {
        "LibreTranslate"
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::json;

    use super::*;
    use crate::test_server::{SeenRequest, closed_port_url, seen_slot, spawn_router};

    #[test]
    fn test_libre_language_code() {
        assert_eq!(libre_language_code("en-US"), "en");
        assert_eq!(libre_language_code("HI"), "hi");
        assert_eq!(libre_language_code("zh_Hant"), "zh");
        assert_eq!(libre_language_code("es"), "es");
    }

    #[test]
    fn test_endpoint() {
        let provider = LibreTranslateProvider::new("http://localhost:5000/".to_string(), None, Duration::from_secs(1)).unwrap();
        assert_eq!(provider.endpoint(), "http://localhost:5000/translate");
    }

    #[test]
    fn test_empty_url_rejected() {
        assert!(LibreTranslateProvider::new(" ".to_string(), None, Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_request_body() {
        let request = LibreTranslateRequest {
            q: "Pension scheme",
            source: "auto",
            target: libre_language_code("es-MX"),
            format: "text",
            api_key: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"q": "Pension scheme", "source": "auto", "target": "es", "format": "text"})
        );
    }

    #[test]
    fn test_debug_masks_key() {
        let provider = LibreTranslateProvider::new(
            "http://localhost:5000".to_string(),
            Some("libre-secret".to_string()),
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(!format!("{:?}", provider).contains("libre-secret"));
    }

    #[tokio::test]
    async fn test_empty_text_needs_no_request() {
        let provider = LibreTranslateProvider::new("http://localhost:5000".to_string(), None, Duration::from_secs(1)).unwrap();
        assert_eq!(provider.translate("", "fr").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_translate_posts_request_and_reads_reply() {
        let seen = seen_slot();
        let slot = seen.clone();
        let app = Router::new().route(
            "/translate",
            post(move |Json(body): Json<serde_json::Value>| {
                let slot = slot.clone();
                async move {
                    *slot.lock().unwrap() = Some(SeenRequest { body: Some(body), ..Default::default() });
                    Json(json!({"translatedText": "régimen de pensiones"}))
                }
            }),
        );
        let base_url = spawn_router(app).await;
        let provider = LibreTranslateProvider::new(base_url, Some("lt-key".to_string()), Duration::from_secs(5)).unwrap();

        assert_eq!(provider.translate("Pension scheme", "es-MX").await.unwrap(), "régimen de pensiones");
        let body = seen.lock().unwrap().clone().and_then(|r| r.body).expect("request reached the server");
        assert_eq!(
            body,
            json!({"q": "Pension scheme", "source": "auto", "target": "es", "format": "text", "api_key": "lt-key"})
        );
    }

    #[tokio::test]
    async fn test_translate_maps_error_status_to_api_error() {
        let app = Router::new().route(
            "/translate",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"error": "xx is not supported"}))) }),
        );
        let provider = LibreTranslateProvider::new(spawn_router(app).await, None, Duration::from_secs(5)).unwrap();

        let err = provider.translate("Pension scheme", "xx").await.unwrap_err();
        assert_eq!(err, TranslationError::Api { status: 400, message: "xx is not supported".to_string() });
    }

    #[tokio::test]
    async fn test_translate_rejects_reply_without_text() {
        let app = Router::new().route("/translate", post(|| async { Json(json!({"detectedLanguage": "en"})) }));
        let provider = LibreTranslateProvider::new(spawn_router(app).await, None, Duration::from_secs(5)).unwrap();

        let err = provider.translate("Pension scheme", "fr").await.unwrap_err();
        assert!(matches!(err, TranslationError::InvalidResponse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_translate_unreachable_server() {
        let provider = LibreTranslateProvider::new(closed_port_url().await, None, Duration::from_secs(5)).unwrap();

        let err = provider.translate("Pension scheme", "fr").await.unwrap_err();
        assert!(matches!(err, TranslationError::Network(_)), "got {err:?}");
    }
}
