pub mod aggregator;
pub mod estimator;
pub mod filter;
pub mod ranker;

pub use crate::domain::model::{LanguageStats, SalaryOffer, VacancyPage};
pub use crate::domain::ports::VacancySource;
pub use crate::utils::error::Result;
