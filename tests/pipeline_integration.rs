mod common;

use std::collections::HashMap;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{build_client, mount_service};
use reservekit::{Method, ReserveKitClient, ReserveKitError};

#[tokio::test]
async fn test_requests_carry_auth_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/services/1"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Content-Type", "application/json"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::service_body(1, "Test")))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.get_service(1).await.unwrap();
}

#[tokio::test]
async fn test_custom_version_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/services/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::service_body(1, "Test")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReserveKitClient::builder(common::API_KEY)
        .host(server.uri())
        .version("v2")
        .build()
        .unwrap();
    assert_eq!(client.base_url(), format!("{}/v2", server.uri()));
    client.get_service(1).await.unwrap();
}

#[tokio::test]
async fn test_not_found_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/services/99999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "message": "Service not found",
            "code": "not_found"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_service(99999).await.unwrap_err();
    match err {
        ReserveKitError::Api(api_error) => {
            assert_eq!(api_error.status, 404);
            assert_eq!(api_error.code, "not_found");
            assert_eq!(api_error.message, "Service not found");
            assert!(api_error.is_not_found());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/services/1"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "status": 503,
            "message": "Service unavailable",
            "code": "unavailable"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_service(1).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_undecodable_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/services/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_service(1).await.unwrap_err();
    match err {
        ReserveKitError::Decode { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/services/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": {\"id\": 1,"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_service(1).await.unwrap_err();
    assert!(matches!(err, ReserveKitError::Decode { status: 200, .. }));
    assert!(err.api_error().is_none());
}

#[tokio::test]
async fn test_wrong_shape_success_body() {
    let server = MockServer::start().await;
    mount_service(&server, 1, "Test Service").await;
    Mock::given(method("GET"))
        .and(path("/v1/services/1/time-slots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "time_slots": "none" }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let service = client.init_service(1).await.unwrap();
    let err = service.get_time_slots().await.unwrap_err();
    assert!(matches!(err, ReserveKitError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ReserveKitClient::builder(common::API_KEY)
        .host(format!("http://{addr}"))
        .build()
        .unwrap();
    let err = client.get_service(1).await.unwrap_err();
    assert!(matches!(err, ReserveKitError::Transport(_)));
    assert!(err.status().is_none());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/services/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::service_body(1, "Slow"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = ReserveKitClient::builder(common::API_KEY)
        .host(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = client.init_service(1).await.unwrap_err();
    assert!(err.is_timeout());
    assert!(client.service().is_none());
}

#[tokio::test]
async fn test_unserializable_body_sends_nothing() {
    let server = MockServer::start().await;
    let client = build_client(&server);

    let mut body = HashMap::new();
    body.insert((1, 2), "value");
    let err = client
        .request::<serde_json::Value, _>(Method::POST, "/services/1/bookings", Some(&body))
        .await
        .unwrap_err();

    assert!(matches!(err, ReserveKitError::Serialization(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_request_discard_ignores_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/services/1/bookings/5"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .request_discard::<()>(Method::DELETE, "/services/1/bookings/5", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_request_decodes_arbitrary_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/services/1/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let value: serde_json::Value = client
        .request::<_, ()>(Method::GET, "/services/1/bookings", None)
        .await
        .unwrap();
    assert_eq!(value, json!({ "data": [] }));
}
