use crate::domain::model::VacancyPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One external vacancy-search service.
///
/// Pages for a single language must be requested in increasing order
/// starting at 0; the termination signal (`VacancyPage::is_last`) is only
/// known from the response of the page itself, so callers may not fetch
/// pages of one language concurrently.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Short name used in logs and report titles.
    fn name(&self) -> &str;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;
}
