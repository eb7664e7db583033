use crate::core::estimator::estimate;
use crate::domain::model::LanguageStats;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// Hard cap on the pagination walk so a backend that never reports a last
/// page cannot loop the pipeline forever. Both real sources cap result
/// sets well below 100 pages of 100 items.
pub const MAX_PAGES: u32 = 100;

/// Walks every result page for one language and folds the salary
/// estimates into a single stats record. `vacancies_found` is taken from
/// the last page observed; the record is not visible to anyone until the
/// walk is complete.
pub async fn aggregate_language(
    source: &dyn VacancySource,
    language: &str,
) -> Result<LanguageStats> {
    let mut stats = LanguageStats::default();

    for page in 0..MAX_PAGES {
        let vacancy_page = source.fetch_page(language, page).await?;
        stats.vacancies_found = vacancy_page.found;

        for offer in &vacancy_page.offers {
            if let Some(salary) = estimate(offer) {
                stats.record(salary);
            }
        }

        tracing::debug!(
            source = source.name(),
            language,
            page,
            found = vacancy_page.found,
            processed = stats.vacancies_processed,
            "page consumed"
        );

        if vacancy_page.is_last {
            return Ok(stats);
        }
    }

    tracing::warn!(
        source = source.name(),
        language,
        max_pages = MAX_PAGES,
        "page cap reached before the source reported a last page"
    );
    Ok(stats)
}

/// Aggregates every language against one source, in input order. Any
/// transport or decoding error aborts the whole run; there is no
/// partial-results mode.
pub async fn aggregate_source(
    source: &dyn VacancySource,
    languages: &[String],
) -> Result<Vec<(String, LanguageStats)>> {
    let mut results = Vec::with_capacity(languages.len());

    for language in languages {
        let stats = aggregate_language(source, language).await?;
        tracing::info!(
            source = source.name(),
            language = language.as_str(),
            found = stats.vacancies_found,
            processed = stats.vacancies_processed,
            average = stats.average_salary(),
            "language aggregated"
        );
        results.push((language.clone(), stats));
    }

    Ok(results)
}
