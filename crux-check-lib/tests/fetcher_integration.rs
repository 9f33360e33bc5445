//! Integration tests for the `CrUX` fetcher using wiremock

use core::time::Duration;
use crux_check_lib::assess::{ConversionError, Score, assess};
use crux_check_lib::crux::{FetchError, Fetcher, WebVital};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY_PATH: &str = "/v1/records:queryRecord";

fn canned_record() -> serde_json::Value {
    json!({
        "record": {
            "key": { "url": "https://example.com/" },
            "metrics": {
                "cumulative_layout_shift": {
                    "histogram": [
                        { "start": "0.00", "end": "0.1", "density": 0.85 },
                        { "start": "0.10", "end": "0.25", "density": 0.1 },
                        { "start": "0.25", "density": 0.05 }
                    ],
                    "percentiles": { "p75": "0.08" }
                },
                "first_input_delay": {
                    "histogram": [],
                    "percentiles": {}
                },
                "largest_contentful_paint": {
                    "histogram": [
                        { "start": "0.0", "end": "2.5", "density": 0.4 },
                        { "start": "2.5", "end": "4.0", "density": 0.4 },
                        { "start": "4.0", "density": 0.2 }
                    ],
                    "percentiles": { "p75": "3.0" }
                }
            }
        }
    })
}

#[tokio::test]
async fn test_fetch_sends_expected_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(query_param("key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", "crux-check"))
        .and(body_json(json!({ "url": "https://example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(canned_record()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(Some(&mock_server.uri())).expect("Failed to create fetcher");
    let record = fetcher
        .fetch("test-key", "https://example.com", false)
        .await
        .expect("Expected a record");

    assert_eq!(record.key.url, "https://example.com/");
    assert_eq!(record.metric(WebVital::Cls).percentiles.p75.as_str(), "0.08");
    assert!(record.metric(WebVital::Fid).histogram.is_empty());
}

#[tokio::test]
async fn test_fetch_passes_target_url_through_unmodified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .and(body_json(json!({ "url": "example.com/Some Page?x=1&y=2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(Some(&mock_server.uri())).expect("Failed to create fetcher");
    let record = fetcher
        .fetch("test-key", "example.com/Some Page?x=1&y=2", true)
        .await
        .expect("Expected a record");

    assert!(record.metric(WebVital::Lcp).histogram.is_empty());
}

#[tokio::test]
async fn test_fetch_then_assess_canned_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(canned_record()))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(Some(&mock_server.uri())).expect("Failed to create fetcher");
    let record = fetcher.fetch("test-key", "https://example.com", false).await.expect("Expected a record");

    let scores: Vec<_> = assess(&record).into_iter().map(|a| (a.name, a.score)).collect();
    assert_eq!(scores, [("CLS", Score::Pass), ("FID", Score::Unavailable), ("LCP", Score::Fail)]);
}

#[tokio::test]
async fn test_non_200_is_an_api_error() {
    let mock_server = MockServer::start().await;
    let error_body = r#"{"error": {"code": 403, "message": "The request is missing a valid API key."}}"#;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string(error_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(Some(&mock_server.uri())).expect("Failed to create fetcher");
    let error = fetcher.fetch("bad-key", "https://example.com", false).await.unwrap_err();

    match error {
        FetchError::Api { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, error_body);
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_200_with_record_shaped_body_is_not_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(canned_record()))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(Some(&mock_server.uri())).expect("Failed to create fetcher");
    let error = fetcher.fetch("test-key", "https://example.com", false).await.unwrap_err();

    assert!(matches!(error, FetchError::Api { .. }), "Expected Api error, got {error:?}");
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(Some(&mock_server.uri())).expect("Failed to create fetcher");
    let error = fetcher.fetch("test-key", "https://example.com", false).await.unwrap_err();

    assert!(matches!(error, FetchError::Decode(_)), "Expected Decode error, got {error:?}");
}

#[tokio::test]
async fn test_timeout_is_a_transport_error_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(canned_record())
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::with_timeout(Some(&mock_server.uri()), Duration::from_millis(200)).expect("Failed to create fetcher");
    let error = fetcher.fetch("test-key", "https://example.com", false).await.unwrap_err();

    assert!(matches!(error, FetchError::Transport(_)), "Expected Transport error, got {error:?}");
    assert!(error.is_timeout());
}

#[tokio::test]
async fn test_number_literals_are_kept_and_isolated_per_metric() {
    let mock_server = MockServer::start().await;
    let body = r#"{
        "record": {
            "key": { "url": "https://example.com/" },
            "metrics": {
                "cumulative_layout_shift": {
                    "histogram": [{ "start": 0, "end": 0.10, "density": 1 }],
                    "percentiles": { "p75": 1e400 }
                },
                "first_input_delay": {
                    "histogram": [{ "start": 0, "end": 1e2, "density": 1 }],
                    "percentiles": { "p75": 0.10 }
                },
                "largest_contentful_paint": {
                    "histogram": [{ "start": 0, "end": 2500.0, "density": 1 }],
                    "percentiles": { "p75": 3e3 }
                }
            }
        }
    }"#;

    Mock::given(method("POST"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(Some(&mock_server.uri())).expect("Failed to create fetcher");
    let record = fetcher.fetch("test-key", "https://example.com", false).await.expect("Expected a record");

    let assessments = assess(&record);
    let rows: Vec<_> = assessments.iter().map(|a| (a.p75.as_str(), a.threshold.as_str(), a.score)).collect();
    assert_eq!(
        rows,
        [
            ("1e400", "0.10", Score::Error(ConversionError::P75)),
            ("0.10", "1e2", Score::Pass),
            ("3e3", "2500.0", Score::Fail),
        ]
    );
}
