pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod sources;
pub mod utils;

pub use config::CliConfig;
pub use self::core::aggregator::{aggregate_language, aggregate_source};
pub use self::core::estimator::estimate;
pub use self::core::filter::filter_popular;
pub use self::core::ranker::rank_by_average;
pub use domain::model::{LanguageStats, SalaryOffer, VacancyPage};
pub use domain::ports::VacancySource;
pub use sources::headhunter::HeadHunterSource;
pub use sources::superjob::SuperJobSource;
pub use utils::error::{Result, SurveyError};
