use crate::domain::model::SalaryOffer;

/// Point estimate for one posting's salary, in the source's currency.
///
/// A single-sided bound is assumed to miss the true midpoint by 20%:
/// a quoted floor understates it, a quoted ceiling overstates it. The
/// multipliers are load-bearing for comparability of runs and must not
/// be tuned.
pub fn estimate(offer: &SalaryOffer) -> Option<f64> {
    match (offer.lower, offer.upper) {
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (Some(lower), None) => Some(lower * 1.2),
        (None, Some(upper)) => Some(upper * 0.8),
        (None, None) => None,
    }
}
