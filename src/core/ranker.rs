use crate::domain::model::LanguageStats;

/// Orders languages by derived average salary, highest first. The sort is
/// stable, so languages with equal averages keep their input order.
pub fn rank_by_average(stats: &[(String, LanguageStats)]) -> Vec<(String, LanguageStats)> {
    let mut ranked = stats.to_vec();
    ranked.sort_by(|a, b| b.1.average_salary().cmp(&a.1.average_salary()));
    ranked
}
