use serde::Serialize;

/// Salary bounds of one posting, normalized to a source-agnostic shape.
/// A raw bound of 0 means "not quoted" on both sources, so it is mapped
/// to `None` here rather than relying on zero being falsy downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalaryOffer {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl SalaryOffer {
    pub fn from_bounds(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            lower: normalize_bound(lower),
            upper: normalize_bound(upper),
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }
}

fn normalize_bound(raw: Option<f64>) -> Option<f64> {
    match raw {
        Some(value) if value != 0.0 => Some(value),
        _ => None,
    }
}

/// Per-language accumulator for one source.
///
/// `vacancies_found` is the server-side total for the query and
/// `vacancies_processed` counts only postings that yielded an estimate,
/// so processed may legitimately exceed found and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub salary_sum: f64,
}

impl LanguageStats {
    pub fn record(&mut self, estimate: f64) {
        self.salary_sum += estimate;
        self.vacancies_processed += 1;
    }

    /// Derived, never stored. Truncating division; 0 when nothing was
    /// processed so the report always has a number to show.
    pub fn average_salary(&self) -> u64 {
        if self.vacancies_processed == 0 {
            return 0;
        }
        (self.salary_sum / self.vacancies_processed as f64) as u64
    }
}

/// One page of a source's paginated result set.
#[derive(Debug, Clone)]
pub struct VacancyPage {
    pub found: u64,
    pub offers: Vec<SalaryOffer>,
    pub is_last: bool,
}
