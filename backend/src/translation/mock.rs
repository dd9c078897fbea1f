//! Deterministic translator for tests and offline development.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{TranslationError, TranslationResult};
use crate::translation::translator::{TextTranslator, validate_language};


#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target code: "hello" → "hello_fr"
    Suffix,
    /// `(text, target)` → translation, falling back to `Suffix`
    Mappings(HashMap<(String, String), String>),
    /// Return the input unchanged
    NoOp,
    /// Fail every call with this message
    Error(String),
    /// Fail only when translating this exact text, `Suffix` otherwise
    FailOn(String),
}

/// Counts calls so tests can assert how many requests a search issued.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay: Duration::ZERO, calls: Arc::new(AtomicUsize::new(0)) }
    }

    /// Sleep this long inside every call, to make concurrency observable.
    pub fn with_delay(mode: MockMode, delay: Duration) -> Self {
        Self { delay, ..Self::new(mode) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn apply_translation(&self, text: &str, target: &str) -> TranslationResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => Ok(map
                .get(&(text.to_string(), target.to_string()))
                .cloned()
                .unwrap_or_else(|| format!("{}_{}", text, target))),
            MockMode::NoOp => Ok(text.to_string()),
            MockMode::Error(msg) => Err(TranslationError::Other(msg.clone())),
            MockMode::FailOn(bad) if bad == text => {
                Err(TranslationError::Api { status: 503, message: format!("cannot translate {:?}", text) })
            }
            MockMode::FailOn(_) => Ok(format!("{}_{}", text, target)),
        }
    }
}

#[async_trait]
impl TextTranslator for MockTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> TranslationResult<String> {
        validate_language(target_language)?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.apply_translation(text, target_language)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
