//! The scheme search pipeline: predicates, dataset fetch, translation.

use std::sync::{Arc, OnceLock};

use common::{
    filter_criteria::FilterCriteria, scheme_record::TranslatedSchemeRecord, search_const::language_label,
    search_error::SearchError, search_state::SearchOutcome,
};
use tracing::{error, info};

use crate::api::search::search_predicates::build_predicates;
use crate::config::BackendConfig;
use crate::db_utils::postgrest_utils::{DatasetClient, PostgrestDatasetClient};
use crate::translation::{TextTranslator, provider_from_config, translate_all};


/// Runs searches against one dataset with one translation engine. Both are
/// passed in at construction so tests can substitute fakes.
#[derive(Clone)]
pub struct SchemeSearchService {
    dataset: Arc<dyn DatasetClient>,
    translator: Arc<dyn TextTranslator>,
}

impl SchemeSearchService {
    pub fn new(dataset: Arc<dyn DatasetClient>, translator: Arc<dyn TextTranslator>) -> Self {
        Self { dataset, translator }
    }

    pub fn from_config(config: &BackendConfig) -> anyhow::Result<Self> {
        let dataset = PostgrestDatasetClient::new(&config.dataset, config.http_timeout)?;
        let translator = provider_from_config(&config.translation, config.http_timeout)?;
        Ok(Self::new(Arc::new(dataset), translator))
    }

    /// Fetch the schemes matching `criteria` and translate them into
    /// `criteria.language`. Translation starts only after the fetch is done.
    pub async fn search(&self, criteria: &FilterCriteria) -> Result<Vec<TranslatedSchemeRecord>, SearchError> {
        let predicates = build_predicates(criteria);
        let rendered = predicates.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(" AND ");
        let language_name = language_label(&criteria.language).unwrap_or("unlisted language");
        info!(predicates = %rendered, language = %criteria.language, language_name, "searching schemes");

        let records = self.dataset.fetch_schemes(&predicates).await.map_err(|e| {
            error!(error = %e, "Error fetching schemes");
            SearchError::from(e)
        })?;
        info!(records = records.len(), "dataset returned schemes");

        if records.is_empty() {
            return Ok(vec![]);
        }

        let translated = translate_all(self.translator.as_ref(), records, &criteria.language)
            .await
            .map_err(|e| {
                error!(error = %e, provider = self.translator.provider_name(), "Error translating schemes");
                SearchError::from(e)
            })?;
        info!(records = translated.len(), language = %criteria.language, "translated schemes");
        Ok(translated)
    }
}

static SEARCH_SERVICE: OnceLock<Arc<SchemeSearchService>> = OnceLock::new();

/// Register the service used by [`search_schemes`]. Called once by the server at startup.
pub fn install_search_service(service: Arc<SchemeSearchService>) -> anyhow::Result<()> {
    SEARCH_SERVICE
        .set(service)
        .map_err(|_| anyhow::anyhow!("search service already installed"))
}

pub fn search_service() -> anyhow::Result<Arc<SchemeSearchService>> {
    SEARCH_SERVICE
        .get()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("search service not installed; was the server started without configuration?"))
}

/// Run a search on the installed service.
///
/// The outer error means the server is not set up; the inner one is the
/// search's own dataset or translation failure.
pub async fn search_schemes(criteria: FilterCriteria) -> anyhow::Result<SearchOutcome> {
    let service = search_service()?;
    Ok(service.search(&criteria).await)
}
