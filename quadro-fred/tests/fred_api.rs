use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

use quadro_core::SeriesConnector;
use quadro_fred::FredConnector;
use quadro_types::QuadroError;

fn connector_for(server: &MockServer) -> FredConnector {
    FredConnector::builder("test-key")
        .base_url(server.base_url())
        .build()
}

async fn mock_series_info(server: &MockServer, id: &str) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/series").query_param("series_id", id);
            then.status(200).json_body(json!({
                    "seriess": [{
                        "title": "Unemployment Rate",
                        "units": "Percent",
                        "frequency": "Monthly"
                    }]
                }));
        })
        .await;
}

#[tokio::test]
async fn parses_observations_and_metadata() {
    let server = MockServer::start_async().await;
    mock_series_info(&server, "UNRATE").await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/series/observations")
                .query_param("series_id", "UNRATE")
                .query_param("file_type", "json");
            then.status(200).json_body(json!({
                "observations": [
                    {"date": "2024-01-01", "value": "3.7"},
                    {"date": "2024-02-01", "value": "3.9"}
                ]
            }));
        })
        .await;

    let series = connector_for(&server)
        .observations("UNRATE", None)
        .await
        .unwrap();

    assert_eq!(series.id, "UNRATE");
    assert_eq!(series.name, "Unemployment Rate");
    assert_eq!(series.units, "Percent");
    assert_eq!(series.frequency, "Monthly");
    assert_eq!(series.len(), 2);
    assert_eq!(
        series.latest().unwrap().date,
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    );
    assert_eq!(series.latest().unwrap().value, 3.9);
}

#[tokio::test]
async fn missing_values_are_dropped() {
    let server = MockServer::start_async().await;
    mock_series_info(&server, "DGS10").await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/series/observations")
                .query_param("series_id", "DGS10");
            then.status(200).json_body(json!({
                "observations": [
                    {"date": "2024-01-01", "value": "4.0"},
                    {"date": "2024-01-02", "value": "."},
                    {"date": "2024-01-03", "value": "not-a-number"},
                    {"date": "2024-01-04", "value": "4.1"}
                ]
            }));
        })
        .await;

    let series = connector_for(&server)
        .observations("DGS10", None)
        .await
        .unwrap();
    assert_eq!(series.len(), 2);
}

#[tokio::test]
async fn unordered_duplicate_payload_is_normalized() {
    let server = MockServer::start_async().await;
    mock_series_info(&server, "UNRATE").await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/series/observations")
                .query_param("series_id", "UNRATE");
            then.status(200).json_body(json!({
                "observations": [
                    {"date": "2024-02-01", "value": "3.9"},
                    {"date": "2024-01-01", "value": "3.7"},
                    {"date": "2024-02-01", "value": "4.0"}
                ]
            }));
        })
        .await;

    let series = connector_for(&server)
        .observations("UNRATE", None)
        .await
        .unwrap();
    let dates: Vec<_> = series.observations.iter().map(|o| o.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        ]
    );
}

#[tokio::test]
async fn start_date_is_forwarded() {
    let server = MockServer::start_async().await;
    mock_series_info(&server, "UNRATE").await;
    let obs = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/series/observations")
                .query_param("series_id", "UNRATE")
                .query_param("observation_start", "2020-01-01");
            then.status(200).json_body(json!({"observations": []}));
        })
        .await;

    let start = NaiveDate::from_ymd_opt(2020, 1, 1);
    let series = connector_for(&server)
        .observations("UNRATE", start)
        .await
        .unwrap();
    obs.assert_async().await;
    assert!(series.is_empty());
}

#[tokio::test]
async fn unknown_series_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/series/observations");
            then.status(400).json_body(json!({
                "error_code": 400,
                "error_message": "Bad Request. The series does not exist."
            }));
        })
        .await;

    let err = connector_for(&server)
        .observations("NOPE", None)
        .await
        .unwrap_err();
    assert!(matches!(err, QuadroError::NotFound { .. }));
    assert!(!err.is_actionable());
}

#[tokio::test]
async fn server_error_maps_to_source_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/series/observations");
            then.status(500);
        })
        .await;

    let err = connector_for(&server)
        .observations("UNRATE", None)
        .await
        .unwrap_err();
    assert!(matches!(err, QuadroError::Source { .. }));
}

#[tokio::test]
async fn info_failure_degrades_metadata_only() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/series/observations")
                .query_param("series_id", "UNRATE");
            then.status(200).json_body(json!({
                "observations": [{"date": "2024-01-01", "value": "3.7"}]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/series");
            then.status(500);
        })
        .await;

    let series = connector_for(&server)
        .observations("UNRATE", None)
        .await
        .unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series.name, "UNRATE");
    assert!(series.units.is_empty());
}
