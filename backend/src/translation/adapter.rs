//! Concurrent translation of fetched scheme rows.

use common::scheme_record::{SchemeRecord, TranslatedSchemeRecord};
use futures::future::try_join_all;

use crate::error::TranslationResult;
use crate::translation::translator::{TextTranslator, validate_language};


/// Translate name and description of every record into `target_language`.
///
/// All `2 * records.len()` requests run concurrently. The result keeps the
/// input order. The first failing request fails the whole batch and the
/// remaining requests are dropped, so callers never see a partial list.
pub async fn translate_all(
    translator: &dyn TextTranslator,
    records: Vec<SchemeRecord>,
    target_language: &str,
) -> TranslationResult<Vec<TranslatedSchemeRecord>> {
    validate_language(target_language)?;
    let jobs = records
        .into_iter()
        .map(|record| translate_record(translator, record, target_language));
    try_join_all(jobs).await
}

async fn translate_record(
    translator: &dyn TextTranslator,
    record: SchemeRecord,
    target_language: &str,
) -> TranslationResult<TranslatedSchemeRecord> {
    let (scheme, description) = futures::try_join!(
        translator.translate(&record.scheme, target_language),
        translator.translate(&record.description, target_language),
    )?;
    Ok(record.into_translated(scheme, description, target_language))
}
