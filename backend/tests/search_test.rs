//! API tests against the router with the sample provider only, so no
//! network is involved.

use axum::http::StatusCode;
use axum_test::TestServer;
use backend::app::create_app;
use backend::provider::WeatherService;
use backend::provider::samples::SampleProvider;
use common::{ErrorBody, SearchQuery, WeatherReport};

fn sample_only_server() -> TestServer {
    let weather = WeatherService::new(vec![Box::new(SampleProvider)]);
    TestServer::new(create_app(weather, "assets")).expect("failed to start test server")
}

#[tokio::test]
async fn search_returns_a_full_report() {
    let server = sample_only_server();

    let response = server
        .post("/search")
        .json(&SearchQuery {
            city: "London".to_string(),
        })
        .await;

    response.assert_status_ok();
    let report: WeatherReport = response.json();
    assert_eq!(report.location, "London, UK");
    assert_eq!(report.temperature, 12);
    assert_eq!(report.sunrise, "05:45");

    let days: Vec<_> = report.forecast.iter().map(|day| day.day.as_str()).collect();
    assert_eq!(days, ["Sat", "Sun", "Mon"]);
}

#[tokio::test]
async fn search_is_case_insensitive_and_trims() {
    let server = sample_only_server();

    let response = server
        .post("/search")
        .json(&SearchQuery {
            city: "  tokyo ".to_string(),
        })
        .await;

    response.assert_status_ok();
    let report: WeatherReport = response.json();
    assert_eq!(report.location, "Tokyo, Japan");
}

#[tokio::test]
async fn blank_city_is_rejected() {
    let server = sample_only_server();

    let response = server
        .post("/search")
        .json(&SearchQuery {
            city: "   ".to_string(),
        })
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.error.as_deref(), Some("City name is required"));
}

#[tokio::test]
async fn unknown_city_is_not_found() {
    let server = sample_only_server();

    let response = server
        .post("/search")
        .json(&SearchQuery {
            city: "Atlantis".to_string(),
        })
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json();
    assert_eq!(body.error.as_deref(), Some("City not found"));
}

#[tokio::test]
async fn path_lookup_matches_the_search_endpoint() {
    let server = sample_only_server();

    let response = server.get("/api/weather/New%20York").await;

    response.assert_status_ok();
    let report: WeatherReport = response.json();
    assert_eq!(report.location, "New York, USA");
    assert_eq!(report.forecast[1].desc, "Hot");
}
