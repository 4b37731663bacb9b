use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reservekit::ReserveKitClient;

pub const API_KEY: &str = "test-key";

pub fn build_client(server: &MockServer) -> ReserveKitClient {
    ReserveKitClient::builder(API_KEY)
        .host(server.uri())
        .version("v1")
        .build()
        .unwrap()
}

pub fn service_body(id: u64, name: &str) -> serde_json::Value {
    json!({
        "data": {
            "id": id,
            "provider_id": "prov_1",
            "name": name,
            "description": "A test service",
            "timezone": "UTC",
            "version": 1,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }
    })
}

pub async fn mount_service(server: &MockServer, id: u64, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/services/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(service_body(id, name)))
        .mount(server)
        .await;
}
