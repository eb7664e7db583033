use httpmock::prelude::*;
use salary_survey::report::render_table;
use salary_survey::{
    aggregate_language, aggregate_source, filter_popular, rank_by_average, HeadHunterSource,
    SuperJobSource, VacancySource,
};
use serde_json::json;

const ROLE: &str = "Программист";

fn hh_source(server: &MockServer) -> HeadHunterSource {
    HeadHunterSource::new(server.base_url(), 1, ROLE.to_string(), 100)
}

fn sj_source(server: &MockServer) -> SuperJobSource {
    SuperJobSource::new(server.base_url(), "fake-app-id".to_string(), 4, ROLE.to_string(), 100)
}

#[tokio::test]
async fn test_hh_single_page_scenario() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Программист Go")
            .query_param("page", "0");
        then.status(200).json_body(json!({
            "found": 2,
            "pages": 1,
            "items": [
                {"salary": {"from": 100000, "to": 200000, "currency": "RUR"}},
                {"salary": {"from": null, "to": 150000, "currency": "RUR"}}
            ]
        }));
    });

    let source = hh_source(&server);
    let stats = aggregate_language(&source, "Go").await.unwrap();

    assert_eq!(stats.vacancies_found, 2);
    assert_eq!(stats.vacancies_processed, 2);
    // (150000 + 120000) / 2, truncated
    assert_eq!(stats.average_salary(), 135_000);
}

#[tokio::test]
async fn test_sj_zero_bounds_scenario() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/2.33/vacancies/").query_param("page", "0");
        then.status(200).json_body(json!({
            "total": 2,
            "objects": [
                {"payment_from": 0, "payment_to": 0},
                {"payment_from": 50000, "payment_to": 0}
            ]
        }));
    });

    let source = sj_source(&server);
    let stats = aggregate_language(&source, "Go").await.unwrap();

    assert_eq!(stats.vacancies_found, 2);
    assert_eq!(stats.vacancies_processed, 1);
    assert_eq!(stats.average_salary(), 60_000);
}

#[tokio::test]
async fn test_hh_pagination_issues_one_request_per_page() {
    let server = MockServer::start();

    let mut mocks = Vec::new();
    for page in 0..3 {
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/vacancies")
                .query_param("page", page.to_string());
            then.status(200).json_body(json!({
                "found": 300,
                "pages": 3,
                "items": [
                    {"salary": {"from": 100000, "to": null, "currency": "RUR"}}
                ]
            }));
        });
        mocks.push(mock);
    }

    let source = hh_source(&server);
    let stats = aggregate_language(&source, "Go").await.unwrap();

    for mock in &mocks {
        mock.assert_hits(1);
    }
    assert_eq!(stats.vacancies_processed, 3);
}

#[tokio::test]
async fn test_mid_pagination_failure_aborts_the_run() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "0");
        then.status(200).json_body(json!({
            "found": 300,
            "pages": 3,
            "items": []
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "1");
        then.status(502);
    });

    let source = hh_source(&server);
    let result = aggregate_language(&source, "Go").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_full_pipeline_filters_ranks_and_renders_idempotently() {
    let hh_server = MockServer::start();
    let sj_server = MockServer::start();

    // Go qualifies, Perl falls under the popularity threshold.
    hh_server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Программист Go");
        then.status(200).json_body(json!({
            "found": 150,
            "pages": 1,
            "items": [
                {"salary": {"from": 100000, "to": 200000, "currency": "RUR"}},
                {"salary": null}
            ]
        }));
    });
    hh_server.mock(|when, then| {
        when.method(GET)
            .path("/vacancies")
            .query_param("text", "Программист Perl");
        then.status(200).json_body(json!({
            "found": 100,
            "pages": 1,
            "items": []
        }));
    });
    sj_server.mock(|when, then| {
        when.method(GET)
            .path("/2.33/vacancies/")
            .query_param("keyword", "Программист Go");
        then.status(200).json_body(json!({
            "total": 30,
            "objects": [
                {"payment_from": 50000, "payment_to": 0},
                {"payment_from": 0, "payment_to": 100000}
            ]
        }));
    });

    let hh = hh_source(&hh_server);
    let sj = sj_source(&sj_server);
    let languages = vec!["Go".to_string(), "Perl".to_string()];

    let mut reports = Vec::new();
    for _ in 0..2 {
        let popular = filter_popular(&hh, &languages, 100).await.unwrap();
        assert_eq!(popular, vec!["Go".to_string()]);

        let hh_stats = aggregate_source(&hh, &popular).await.unwrap();
        let sj_stats = aggregate_source(&sj, &popular).await.unwrap();

        let hh_table = render_table("HH Average Salary", &rank_by_average(&hh_stats));
        let sj_table = render_table("SJ Average Salary", &rank_by_average(&sj_stats));
        reports.push((hh_table, sj_table));
    }

    // identical responses must yield byte-identical reports
    assert_eq!(reports[0], reports[1]);

    let (hh_table, sj_table) = &reports[0];
    assert!(hh_table.contains("Go"));
    assert!(hh_table.contains("150"));
    assert!(hh_table.contains("150000"));
    assert!(!hh_table.contains("Perl"));
    // (60000 + 80000) / 2
    assert!(sj_table.contains("70000"));
}

#[tokio::test]
async fn test_filter_only_reads_the_primary_source() {
    let hh_server = MockServer::start();
    let mock = hh_server.mock(|when, then| {
        when.method(GET).path("/vacancies");
        then.status(200).json_body(json!({
            "found": 101,
            "pages": 1,
            "items": []
        }));
    });

    let hh = hh_source(&hh_server);
    let languages = vec!["Go".to_string()];

    let popular = filter_popular(&hh, &languages, 100).await.unwrap();

    mock.assert_hits(1);
    assert_eq!(popular, languages);
    assert_eq!(hh.name(), "hh");
}
