use listing_enricher::platform::{Location, Platform};
use listing_enricher::validation::ValidationClient;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

#[tokio::test]
async fn test_validate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/validate-url"))
        .and(body_json(json!({ "url": "https://www.redfin.com/city/30818/TX/Austin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "platform": "redfin",
            "table": "redfin_listings",
            "location": { "city": "Austin", "state": "TX" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ValidationClient::new(mock_server.uri());
    let result = client
        .validate_and_detect("https://www.redfin.com/city/30818/TX/Austin", None)
        .await;

    assert!(result.is_valid);
    assert_eq!(result.platform, Some(Platform::Redfin));
    assert_eq!(result.table.as_deref(), Some("redfin_listings"));
    assert_eq!(result.location, Location::new("Austin", "TX"));
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn test_validate_sends_expected_platform_and_flags_mismatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/validate-url"))
        .and(body_json(json!({
            "url": "https://www.trulia.com/TX/Austin/",
            "expected_platform": "redfin"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "platform": "trulia",
            "table": "trulia_listings",
            "location": { "city": "Austin", "state": "TX" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ValidationClient::new(mock_server.uri());
    let result = client
        .validate_and_detect("https://www.trulia.com/TX/Austin/", Some(Platform::Redfin))
        .await;

    assert!(!result.is_valid);
    assert_eq!(result.platform, Some(Platform::Trulia));
    assert_eq!(result.table.as_deref(), Some("trulia_listings"));
    let error = result.error.unwrap();
    assert!(error.contains("trulia"), "{error}");
    assert!(error.contains("redfin"), "{error}");
}

#[tokio::test]
async fn test_format_error_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ValidationClient::new(mock_server.uri());
    for url in ["", "ftp://x.com", "http://"] {
        let result = client.validate_and_detect(url, None).await;
        assert!(!result.is_valid, "{url}");
        assert_eq!(result.platform, None);
        assert!(result.error.is_some());
    }
}

#[tokio::test]
async fn test_error_status_uses_body_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/validate-url"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Unsupported platform" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ValidationClient::new(mock_server.uri());
    let result = client
        .validate_and_detect("https://www.realtor.com/x", None)
        .await;

    assert!(!result.is_valid);
    assert_eq!(result.error.as_deref(), Some("Unsupported platform"));
}

#[tokio::test]
async fn test_error_status_without_body_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/validate-url"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ValidationClient::new(mock_server.uri());
    let result = client
        .validate_and_detect("https://www.zillow.com/austin-tx/", None)
        .await;

    assert!(!result.is_valid);
    assert!(result.error.unwrap().contains("502"));
}

#[tokio::test]
async fn test_malformed_json_is_invalid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/validate-url"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = ValidationClient::new(mock_server.uri());
    let result = client
        .validate_and_detect("https://www.zillow.com/austin-tx/", None)
        .await;

    assert!(!result.is_valid);
    assert!(result.error.unwrap().contains("malformed response"));
}

#[tokio::test]
async fn test_unreachable_service_is_invalid() {
    // Nothing listens on the discard port.
    let client = ValidationClient::new("http://127.0.0.1:9");
    let result = client
        .validate_and_detect("https://www.zillow.com/austin-tx/", None)
        .await;

    assert!(!result.is_valid);
    assert!(result.error.is_some());
}
