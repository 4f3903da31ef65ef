use crate::domain::{QueryVariant, ResultSet, SuggestionRecord};

use super::SuggestionSource;

/// Fetches suggestions for every variant in order, one request at a time,
/// and collapses the tagged results into a `ResultSet`.
///
/// A failed or empty fetch contributes no records; it never stops the pass.
pub async fn aggregate_suggestions<S>(variants: &[QueryVariant], source: &S) -> ResultSet
where
    S: SuggestionSource + ?Sized,
{
    log::info!("Fetching suggestions for {} query variants", variants.len());

    let mut records: Vec<SuggestionRecord> = vec![];
    let mut failed_fetches = 0;

    for variant in variants.iter() {
        match source.fetch(&variant.query).await {
            Ok(suggestions) => records.extend(
                suggestions
                    .into_iter()
                    .map(|s| SuggestionRecord::from_variant(variant, s)),
            ),
            Err(e) => {
                failed_fetches += 1;
                log::warn!(
                    "Failed to fetch suggestions for query: {} | Error: {:?}",
                    variant.query,
                    e
                );
            }
        }
    }

    let raw_count = records.len();
    let result_set = ResultSet::from_records(records);

    log::info!(
        "Collected {} suggestions ({} unique), {} failed fetches",
        raw_count,
        result_set.len(),
        failed_fetches
    );

    result_set
}
