//! Integration tests for `MapsClient` using wiremock HTTP mocks.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use waypost_client::{AddressComponentType, MapsClient, MapsError, QueryParams};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> MapsClient {
    MapsClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn lantana_body() -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [{
            "formatted_address": "1300 Lantana Dr, Lantana, TX 76226, USA",
            "address_components": [
                { "long_name": "1300", "short_name": "1300", "types": ["street_number"] },
                { "long_name": "Lantana Drive", "short_name": "Lantana Dr", "types": ["route"] },
                { "long_name": "Lantana", "short_name": "Lantana", "types": ["locality", "political"] },
                { "long_name": "Denton County", "short_name": "Denton County", "types": ["administrative_area_level_2", "political"] },
                { "long_name": "Texas", "short_name": "TX", "types": ["administrative_area_level_1", "political"] },
                { "long_name": "United States", "short_name": "US", "types": ["country", "political"] },
                { "long_name": "76226", "short_name": "76226", "types": ["postal_code"] }
            ],
            "geometry": { "location": { "lat": 33.093_211, "lng": -97.123_412 } }
        }]
    })
}

fn zero_results_body() -> serde_json::Value {
    serde_json::json!({ "status": "ZERO_RESULTS", "results": [] })
}

fn locality_body() -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [{
            "address_components": [
                { "long_name": "Montgomery", "short_name": "Montgomery", "types": ["locality", "political"] },
                { "long_name": "Alabama", "short_name": "AL", "types": ["administrative_area_level_1", "political"] },
                { "long_name": "United States", "short_name": "US", "types": ["country", "political"] }
            ],
            "geometry": { "location": { "lat": 32.366_805_2, "lng": -86.299_968_9 } }
        }]
    })
}

#[tokio::test]
async fn geocode_returns_best_match_with_precision() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "1300 Lantana Dr"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lantana_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new().with("address", "1300 Lantana Dr");
    let response = client.geocode(&params).await.expect("should geocode");

    assert!((response.latitude() - 33.093_211).abs() < 1e-9);
    assert!((response.longitude() + 97.123_412).abs() < 1e-9);
    assert!(!response.is_partial_match());
    assert_eq!(response.precision(), Some(AddressComponentType::StreetNumber));
    let state = response
        .administrative_area_level_1()
        .expect("state should be present");
    assert_eq!(state.long_name, "Texas");
    assert_eq!(state.short_name, "TX");
    assert_eq!(
        response.route().map(|r| r.short_name),
        Some("Lantana Dr")
    );
    assert!(response.sublocality().is_none());
}

#[tokio::test]
async fn geocode_reports_partial_match() {
    let server = MockServer::start().await;

    let mut body = lantana_body();
    body["results"][0]["partial_match"] = serde_json::json!(true);

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new().with("address", "1300 Lantana");
    let response = client.geocode(&params).await.expect("should geocode");
    assert!(response.is_partial_match());
}

#[tokio::test]
async fn geocode_zero_results_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(zero_results_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new().with("address", "nowhere at all");
    let err = client.geocode(&params).await.unwrap_err();
    assert!(matches!(err, MapsError::ZeroResults));
}

#[tokio::test]
async fn geocode_over_query_limit_is_rate_limited() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OVER_QUERY_LIMIT",
        "error_message": "You have exceeded your rate-limit for this API."
    });
    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new().with("address", "1300 Lantana Dr");
    let err = client.geocode(&params).await.unwrap_err();
    assert!(
        matches!(err, MapsError::RateLimited(ref m) if m.contains("exceeded your rate-limit")),
        "expected RateLimited, got: {err:?}"
    );
}

#[tokio::test]
async fn geocode_unknown_status_is_provider_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "UNKNOWN_ERROR",
        "error_message": "Server error, please retry."
    });
    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new().with("address", "1300 Lantana Dr");
    let err = client.geocode(&params).await.unwrap_err();
    assert!(matches!(err, MapsError::Provider(_)));
    assert_eq!(err.to_string(), "API UNKNOWN_ERROR - Server error, please retry.");
}

#[tokio::test]
async fn geocode_http_error_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Uh-oh, I crashed!"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new().with("address", "1300 Lantana Dr");
    let err = client.geocode(&params).await.unwrap_err();
    assert!(
        matches!(err, MapsError::Transport { status: 503, .. }),
        "expected Transport 503, got: {err:?}"
    );
    assert_eq!(err.to_string(), "HTTP 503 - Uh-oh, I crashed!");
}

#[tokio::test]
async fn geocode_malformed_json_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new().with("address", "1300 Lantana Dr");
    let err = client.geocode(&params).await.unwrap_err();
    assert!(
        matches!(err, MapsError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn geocode_rejects_unsupported_params_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lantana_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new()
        .with("address", "1300 Lantana Dr")
        .with("foo", "hey");
    let err = client.geocode(&params).await.unwrap_err();
    assert_eq!(err.to_string(), "The following params are not supported: foo");
}

#[tokio::test]
async fn adaptive_geocode_drops_postal_code_then_resolves() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "1900 Gorgas St"))
        .and(query_param(
            "components",
            "locality:Montgomery|postal_code:36ABC|administrative_area:AL|country:US",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(zero_results_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "1900 Gorgas St"))
        .and(query_param(
            "components",
            "locality:Montgomery|administrative_area:AL|country:US",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(locality_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new()
        .with("address", "1900 Gorgas St")
        .with("locality", "Montgomery")
        .with("postal_code", "36ABC")
        .with("administrative_area", "AL")
        .with("country", "US");
    let response = client
        .adaptive_geocode(&params, Duration::ZERO)
        .await
        .expect("should resolve after dropping postal code");

    assert_eq!(response.precision(), Some(AddressComponentType::Locality));
    assert_eq!(
        response.locality().map(|c| c.long_name),
        Some("Montgomery")
    );
}

#[tokio::test]
async fn adaptive_geocode_falls_back_to_country() {
    let server = MockServer::start().await;

    let country_only = serde_json::json!({
        "status": "OK",
        "results": [{
            "address_components": [
                { "long_name": "Italy", "short_name": "IT", "types": ["country", "political"] }
            ],
            "geometry": { "location": { "lat": 41.871_94, "lng": 12.567_38 } }
        }]
    });

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("components", "country:IT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(country_only))
        .expect(1)
        .mount(&server)
        .await;

    // Every richer request comes back empty.
    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(zero_results_body()))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new()
        .with("address", "via dei Fori Imperiali 999")
        .with("locality", "Atlantide")
        .with("country", "IT");
    let response = client
        .adaptive_geocode(&params, Duration::ZERO)
        .await
        .expect("country alone should resolve");

    assert_eq!(response.precision(), Some(AddressComponentType::Country));
}

#[tokio::test]
async fn adaptive_geocode_does_not_retry_rate_limits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "OVER_DAILY_LIMIT" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new()
        .with("postal_code", "36104")
        .with("country", "US");
    let err = client
        .adaptive_geocode(&params, Duration::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, MapsError::RateLimited(_)));
}

#[tokio::test]
async fn find_route_returns_first_leg_details() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "routes": [{
            "summary": "Via dei Fori Imperiali",
            "legs": [{
                "distance": { "text": "4.5 km", "value": 4512 },
                "duration": { "text": "13 mins", "value": 780 },
                "start_address": "Piazza del Colosseo, Roma",
                "end_address": "Piazza San Pietro, Roma",
                "start_location": { "lat": 41.890_209, "lng": 12.492_231 },
                "end_location": { "lat": 41.902_27, "lng": 12.457_54 },
                "steps": [{
                    "distance": { "text": "0.2 km", "value": 200 },
                    "duration": { "text": "1 min", "value": 40 },
                    "start_location": { "lat": 41.890_209, "lng": 12.492_231 },
                    "end_location": { "lat": 41.891_1, "lng": 12.490_1 },
                    "html_instructions": "Head <b>northwest</b>",
                    "travel_mode": "DRIVING"
                }]
            }]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/directions/json"))
        .and(query_param("origin", "41.890209,12.492231"))
        .and(query_param("destination", "41.902270,12.457540"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new()
        .with("origin", "41.890209,12.492231")
        .with("destination", "41.902270,12.457540");
    let response = client.find_route(&params).await.expect("should find route");

    let route = response.first().expect("one route");
    assert_eq!(route.summary, "Via dei Fori Imperiali");
    assert_eq!(route.distance().map(|d| d.value), Some(4512));
    assert_eq!(route.duration().map(|d| d.text.as_str()), Some("13 mins"));
    assert_eq!(route.start_address(), Some("Piazza del Colosseo, Roma"));
    assert_eq!(route.end_address(), Some("Piazza San Pietro, Roma"));
    assert_eq!(route.steps().len(), 1);
}

#[tokio::test]
async fn timezone_at_sends_location_and_timestamp() {
    let server = MockServer::start().await;

    let ts = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let body = serde_json::json!({
        "status": "OK",
        "dstOffset": 0,
        "rawOffset": -18000,
        "timeZoneId": "America/New_York",
        "timeZoneName": "Eastern Standard Time"
    });

    Mock::given(method("GET"))
        .and(path("/timezone/json"))
        .and(query_param("location", "40.7128,-74.006"))
        .and(query_param("timestamp", ts.timestamp().to_string()))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = QueryParams::new()
        .with("latitude", 40.7128)
        .with("longitude", -74.006)
        .with("timestamp", ts);
    let response = client.timezone_at(&params).await.expect("should resolve");

    assert_eq!(response.time_zone_id, "America/New_York");
    assert_eq!(response.total_offset(), -18_000);
}
