//! HTTP-level tests for the geocoder gateway client, using mockito.

use catvisit::client::{AsyncGeocodingClient, GeocodingClient, GeocodingProvider};
use catvisit::error::GeocodingError;

#[test]
fn test_resolve_distance_success() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/route")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","distance_km":1.5,"duration_min":7.0}"#)
        .create();

    let client = GeocodingClient::with_base_url(server.url());
    let route = client
        .resolve_distance("Mill Road 5", "Birch Street 12")
        .unwrap();

    assert_eq!(route.distance_km, 1.5);
    assert_eq!(route.duration_min, 7.0);
    mock.assert();

    let summary = client.metrics().summary();
    assert_eq!(summary.requests_total, 1);
    assert_eq!(summary.routes_resolved_total, 1);
    assert_eq!(summary.errors_total, 0);
}

#[test]
fn test_unresolvable_address_maps_to_not_found() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v1/route")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_body("destination")
        .create();

    let client = GeocodingClient::with_base_url(server.url());
    let err = client
        .resolve_distance("Mill Road 5", "Nowhere Lane 1")
        .unwrap_err();

    assert!(matches!(err, GeocodingError::AddressNotFound(_)));
    assert_eq!(client.metrics().summary().errors_total, 1);
}

#[test]
fn test_no_route_status_maps_to_route_not_found() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v1/route")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"no_route"}"#)
        .create();

    let client = GeocodingClient::with_base_url(server.url());
    let err = client
        .resolve_distance("Mill Road 5", "Across The Sea 1")
        .unwrap_err();

    assert!(matches!(err, GeocodingError::RouteNotFound));
}

#[test]
fn test_search_never_fails() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v1/search")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create();

    let client = GeocodingClient::with_base_url(server.url());
    // Internal errors surface as an empty suggestion list
    assert!(client.search_addresses("birch").is_empty());
}

#[test]
fn test_search_parses_suggestions() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v1/search")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"suggestions":[{"name":"Birch Street","address":"Birch Street 12, Northam"}]}"#,
        )
        .create();

    let client = GeocodingClient::with_base_url(server.url());
    let suggestions = client.search_addresses("birch");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Birch Street");
}

#[test]
fn test_reverse_permission_denied() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v1/reverse")
        .with_status(403)
        .create();

    let client = GeocodingClient::with_base_url(server.url());
    let err = client.current_location_address().unwrap_err();
    assert!(matches!(err, GeocodingError::PermissionDenied));
}

#[tokio::test]
async fn test_lazy_connect_runs_health_check_once() {
    let mut server = mockito::Server::new_async().await;
    let health = server
        .mock("GET", "/v1/status")
        .with_status(200)
        .with_body("ok")
        .expect(1)
        .create_async()
        .await;
    server
        .mock("GET", "/v1/route")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"ok","distance_km":1.5,"duration_min":7.0}"#)
        .expect(2)
        .create_async()
        .await;

    let provider = AsyncGeocodingClient::new(GeocodingClient::with_base_url(server.url()));

    // Two lookups, one handshake
    provider
        .resolve_distance("Mill Road 5", "Birch Street 12")
        .await
        .unwrap();
    provider
        .resolve_distance("Mill Road 5", "Birch Street 12")
        .await
        .unwrap();

    health.assert_async().await;
}

#[tokio::test]
async fn test_failed_connect_retries_on_next_call() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("GET", "/v1/status")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let provider = AsyncGeocodingClient::new(GeocodingClient::with_base_url(server.url()));

    let err = provider
        .resolve_distance("Mill Road 5", "Birch Street 12")
        .await
        .unwrap_err();
    assert!(matches!(err, GeocodingError::Transport(_)));
    failing.assert_async().await;

    // The failed handshake was not cached; the next call runs it again
    server
        .mock("GET", "/v1/status")
        .with_status(200)
        .with_body("ok")
        .expect(1)
        .create_async()
        .await;
    server
        .mock("GET", "/v1/route")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"ok","distance_km":1.5,"duration_min":7.0}"#)
        .create_async()
        .await;

    provider
        .resolve_distance("Mill Road 5", "Birch Street 12")
        .await
        .unwrap();
}
