//! Backend configuration, read once at startup from the environment.

use std::{str::FromStr, time::Duration};

use anyhow::Context;

use common::search_const::SCHEMES_TABLE;


pub const DEFAULT_DATASET_URL: &str = "http://localhost:54321";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Connection parameters for the hosted schemes table.
#[derive(Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}

impl std::fmt::Debug for DatasetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("table", &self.table)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationEngine {
    #[default]
    Google,
    Libre,
}

impl FromStr for TranslationEngine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(TranslationEngine::Google),
            "libre" | "libretranslate" => Ok(TranslationEngine::Libre),
            other => anyhow::bail!("unknown translation engine: {other} (expected google or libre)"),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct TranslationConfig {
    pub engine: TranslationEngine,
    pub api_key: Option<String>,
    /// Overrides the engine's default endpoint.
    pub base_url: Option<String>,
}

impl std::fmt::Debug for TranslationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationConfig")
            .field("engine", &self.engine)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub dataset: DatasetConfig,
    pub translation: TranslationConfig,
    pub http_timeout: Duration,
}

impl BackendConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let dataset = DatasetConfig {
            base_url: get("SCHEMES_DATASET_URL").unwrap_or(DEFAULT_DATASET_URL.to_string()),
            api_key: get("SCHEMES_DATASET_KEY").context("SCHEMES_DATASET_KEY environment variable not set")?,
            table: get("SCHEMES_DATASET_TABLE").unwrap_or(SCHEMES_TABLE.to_string()),
        };

        let engine = match get("SCHEMES_TRANSLATE_ENGINE") {
            Some(name) => name.parse::<TranslationEngine>()?,
            None => TranslationEngine::default(),
        };
        let translation = TranslationConfig {
            engine,
            api_key: get("SCHEMES_TRANSLATE_KEY"),
            base_url: get("SCHEMES_TRANSLATE_URL"),
        };
        if engine == TranslationEngine::Google && translation.api_key.is_none() {
            anyhow::bail!("SCHEMES_TRANSLATE_KEY environment variable not set (required by the google engine)");
        }

        let http_timeout = match get("SCHEMES_HTTP_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.trim().parse::<u64>().with_context(|| format!("invalid SCHEMES_HTTP_TIMEOUT_SECS: {secs}"))?,
            ),
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self { dataset, translation, http_timeout })
    }
}
