//! Integration tests for `NominatimClient` using wiremock HTTP mocks.

use firstaid_assist::{NominatimClient, ReverseGeocoder};
use firstaid_core::Coordinates;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NominatimClient {
    NominatimClient::new(base_url, 5, "firstaid-test/0.1").expect("client construction should not fail")
}

fn austin() -> Coordinates {
    Coordinates::new(30.2672, -97.7431).expect("valid coordinates")
}

#[tokio::test]
async fn reverse_geocode_returns_display_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "jsonv2"))
        .and(query_param("lat", "30.2672"))
        .and(query_param("lon", "-97.7431"))
        .and(header("user-agent", "firstaid-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "place_id": 1234,
            "lat": "30.2672",
            "lon": "-97.7431",
            "display_name": "Congress Avenue, Austin, Travis County, Texas, 78701, United States"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let address = client.reverse_geocode(austin()).await;

    assert_eq!(
        address.as_deref(),
        Some("Congress Avenue, Austin, Travis County, Texas, 78701, United States")
    );
}

#[tokio::test]
async fn unknown_position_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "Unable to geocode" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert_eq!(client.lookup(austin()).await.expect("valid reply"), None);
    assert_eq!(client.reverse_geocode(austin()).await, None);
}

#[tokio::test]
async fn server_error_is_absorbed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.lookup(austin()).await.is_err());
    assert_eq!(client.reverse_geocode(austin()).await, None);
}

#[tokio::test]
async fn malformed_body_is_absorbed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.lookup(austin()).await.is_err());
    assert_eq!(client.reverse_geocode(austin()).await, None);
}

#[tokio::test]
async fn unreachable_service_is_absorbed() {
    let client = test_client("http://127.0.0.1:1");
    assert_eq!(client.reverse_geocode(austin()).await, None);
}
