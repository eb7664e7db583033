use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;

const DEFAULT_LANGUAGES: &str =
    "Java,Python,C++,C#,Visual Basic,Javascript,R,PHP,Swift,Go,Perl,Scala";

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-survey")]
#[command(about = "Ranks programming languages by average vacancy salary across job boards")]
pub struct CliConfig {
    #[arg(long, default_value = "https://api.hh.ru")]
    pub hh_base_url: String,

    #[arg(long, default_value = "https://api.superjob.ru")]
    pub sj_base_url: String,

    /// hh region code (1 = Moscow). Region codes are source-specific.
    #[arg(long, default_value = "1")]
    pub hh_area: u32,

    /// superjob town code (4 = Moscow). Not interchangeable with hh_area.
    #[arg(long, default_value = "4")]
    pub sj_town: u32,

    /// Role keyword composed into every search phrase.
    #[arg(long, default_value = "Программист")]
    pub role: String,

    #[arg(long, default_value = DEFAULT_LANGUAGES, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Languages with at most this many postings on hh are skipped.
    #[arg(long, default_value = "100")]
    pub popularity_threshold: u64,

    #[arg(long, default_value = "100")]
    pub per_page: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("hh_base_url", &self.hh_base_url)?;
        validate_url("sj_base_url", &self.sj_base_url)?;
        validate_non_empty_string("role", &self.role)?;
        validate_range("per_page", self.per_page, 1, 100)?;
        for language in &self.languages {
            validate_non_empty_string("languages", language)?;
        }
        Ok(())
    }
}
