use crate::domain::model::{SalaryOffer, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, SurveyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const AUTH_HEADER: &str = "X-Api-App-Id";
const VACANCIES_PATH: &str = "/2.33/vacancies/";

#[derive(Debug, Deserialize)]
struct SjPage {
    total: u64,
    objects: Vec<SjVacancy>,
}

/// superjob quotes bounds as plain numbers where 0 means "not quoted";
/// `SalaryOffer::from_bounds` turns those zeros into absent bounds.
#[derive(Debug, Deserialize)]
struct SjVacancy {
    #[serde(default)]
    payment_from: f64,
    #[serde(default)]
    payment_to: f64,
}

/// Secondary source. Every request must carry the app credential; it is
/// injected at construction so tests can supply a fake.
pub struct SuperJobSource {
    client: Client,
    base_url: String,
    token: String,
    town: u32,
    role: String,
    per_page: u32,
}

impl SuperJobSource {
    pub fn new(base_url: String, token: String, town: u32, role: String, per_page: u32) -> Self {
        Self {
            client: Client::new(),
            base_url,
            token,
            town,
            role,
            per_page,
        }
    }

    fn keyword(&self, language: &str) -> String {
        format!("{} {}", self.role, language)
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    fn name(&self) -> &str {
        "sj"
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let url = format!("{}{}", self.base_url, VACANCIES_PATH);
        tracing::debug!(url = url.as_str(), language, page, "requesting sj page");

        let response = self
            .client
            .get(&url)
            .header(AUTH_HEADER, &self.token)
            .query(&[("keyword", self.keyword(language).as_str())])
            .query(&[("town", self.town), ("count", self.per_page), ("page", page)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SurveyError::UnexpectedStatus { status, url });
        }

        let body = response.text().await?;
        let parsed: SjPage = serde_json::from_str(&body)
            .map_err(|source| SurveyError::MalformedResponse { url, source })?;

        let offers = parsed
            .objects
            .iter()
            .map(|object| SalaryOffer::from_bounds(Some(object.payment_from), Some(object.payment_to)))
            .collect();

        Ok(VacancyPage {
            found: parsed.total,
            offers,
            // sj only reports a grand total; the last page index is
            // total / per_page (integer division)
            is_last: parsed.total / u64::from(self.per_page) == u64::from(page),
        })
    }
}
