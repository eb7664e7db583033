use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// Keeps the languages whose total posting count on `source` is strictly
/// greater than `threshold`, preserving input order. One page-0 query per
/// candidate; only the reported total is used, the page's items are
/// discarded. Any request failure aborts the whole filtering step.
pub async fn filter_popular(
    source: &dyn VacancySource,
    languages: &[String],
    threshold: u64,
) -> Result<Vec<String>> {
    let mut popular = Vec::new();

    for language in languages {
        let page = source.fetch_page(language, 0).await?;
        if page.found > threshold {
            popular.push(language.clone());
        } else {
            tracing::debug!(
                source = source.name(),
                language = language.as_str(),
                found = page.found,
                threshold,
                "language below popularity threshold, skipped"
            );
        }
    }

    Ok(popular)
}
