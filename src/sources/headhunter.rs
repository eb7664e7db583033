use crate::domain::model::{SalaryOffer, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, SurveyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// The only currency the pipeline accepts; postings quoted in anything
/// else carry no usable bounds.
const ACCEPTED_CURRENCY: &str = "RUR";

#[derive(Debug, Deserialize)]
struct HhPage {
    found: u64,
    pages: u32,
    items: Vec<HhVacancy>,
}

#[derive(Debug, Deserialize)]
struct HhVacancy {
    salary: Option<HhSalary>,
}

#[derive(Debug, Deserialize)]
struct HhSalary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

/// Primary source. Also serves the popularity filter, which only looks
/// at the `found` field of page 0.
pub struct HeadHunterSource {
    client: Client,
    base_url: String,
    area: u32,
    role: String,
    per_page: u32,
}

impl HeadHunterSource {
    pub fn new(base_url: String, area: u32, role: String, per_page: u32) -> Self {
        Self {
            client: Client::new(),
            base_url,
            area,
            role,
            per_page,
        }
    }

    fn search_text(&self, language: &str) -> String {
        format!("{} {}", self.role, language)
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    fn name(&self) -> &str {
        "hh"
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let url = format!("{}/vacancies", self.base_url);
        tracing::debug!(url = url.as_str(), language, page, "requesting hh page");

        let response = self
            .client
            .get(&url)
            .query(&[("text", self.search_text(language).as_str())])
            .query(&[("area", self.area), ("per_page", self.per_page), ("page", page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SurveyError::UnexpectedStatus { status, url });
        }

        let body = response.text().await?;
        let parsed: HhPage = serde_json::from_str(&body)
            .map_err(|source| SurveyError::MalformedResponse { url, source })?;

        let offers = parsed
            .items
            .iter()
            .map(|item| salary_offer(item.salary.as_ref()))
            .collect();

        Ok(VacancyPage {
            found: parsed.found,
            offers,
            // hh reports the total page count up front
            is_last: page + 1 >= parsed.pages,
        })
    }
}

fn salary_offer(salary: Option<&HhSalary>) -> SalaryOffer {
    match salary {
        Some(block) if block.currency.as_deref() == Some(ACCEPTED_CURRENCY) => {
            SalaryOffer::from_bounds(block.from, block.to)
        }
        // no salary block, or quoted in a currency we do not convert
        _ => SalaryOffer::absent(),
    }
}
