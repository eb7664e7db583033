use clap::Parser;
use salary_survey::report::render_table;
use salary_survey::utils::{logger, validation::Validate};
use salary_survey::{
    aggregate_source, filter_popular, rank_by_average, CliConfig, HeadHunterSource,
    SuperJobSource, SurveyError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting salary-survey");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    dotenvy::dotenv().ok();
    let token = std::env::var("SUPERJOB_TOKEN").map_err(|_| SurveyError::MissingConfig {
        field: "SUPERJOB_TOKEN".to_string(),
    })?;

    let hh = HeadHunterSource::new(
        config.hh_base_url.clone(),
        config.hh_area,
        config.role.clone(),
        config.per_page,
    );
    let sj = SuperJobSource::new(
        config.sj_base_url.clone(),
        token,
        config.sj_town,
        config.role.clone(),
        config.per_page,
    );

    let popular = filter_popular(&hh, &config.languages, config.popularity_threshold).await?;
    tracing::info!(
        candidates = config.languages.len(),
        popular = popular.len(),
        "popularity filter applied"
    );

    let hh_stats = aggregate_source(&hh, &popular).await?;
    let sj_stats = aggregate_source(&sj, &popular).await?;

    println!("{}", render_table("HH Average Salary", &rank_by_average(&hh_stats)));
    println!("{}", render_table("SJ Average Salary", &rank_by_average(&sj_stats)));

    Ok(())
}
