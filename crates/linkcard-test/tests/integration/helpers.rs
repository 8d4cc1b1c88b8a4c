#![allow(dead_code)]
//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use linkcard_core::config::{LinksConfig, LoggingConfig, ServerConfig, Settings};
use linkcard_store::store::{ContactStore, MemoryContactStore};
use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

pub const BASE_URL: &str = "http://127.0.0.1:5800";

/// Settings used by tests unless a test overrides them.
#[must_use]
pub fn test_config() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
            public_origin: None,
            static_dir: None,
            trust_forwarded_headers: false,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        links: LinksConfig::default(),
    }
}

/// Creates a service with a fresh, empty contact store.
#[must_use]
pub fn create_test_service() -> Service {
    create_test_service_with(test_config())
}

/// Creates a service with the given settings and a fresh, empty contact store.
#[must_use]
pub fn create_test_service_with(settings: Settings) -> Service {
    let store: Arc<dyn ContactStore> = Arc::new(MemoryContactStore::new());
    create_test_service_with_store(settings, store)
}

/// Creates a service sharing an existing contact store.
#[must_use]
pub fn create_test_service_with_store(settings: Settings, store: Arc<dyn ContactStore>) -> Service {
    let router = linkcard_test::app::app::service_router(Arc::new(settings), store);
    Service::new(router)
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TestResponse {
    async fn from_salvo(mut response: salvo::Response) -> Self {
        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        Self {
            status,
            headers,
            body,
        }
    }

    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the body as UTF-8 text.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }
}

/// POSTs a JSON body.
pub async fn post_json(service: &Service, path: &str, body: &serde_json::Value) -> TestResponse {
    let response = TestClient::post(format!("{BASE_URL}{path}"))
        .json(body)
        .send(service)
        .await;
    TestResponse::from_salvo(response).await
}

/// POSTs a raw, possibly malformed, JSON body.
pub async fn post_raw_json(service: &Service, path: &str, body: &str) -> TestResponse {
    let response = TestClient::post(format!("{BASE_URL}{path}"))
        .raw_json(body.to_string())
        .send(service)
        .await;
    TestResponse::from_salvo(response).await
}

/// POSTs a body as `text/plain`.
pub async fn post_text(service: &Service, path: &str, body: &str) -> TestResponse {
    let response = TestClient::post(format!("{BASE_URL}{path}"))
        .text(body.to_string())
        .send(service)
        .await;
    TestResponse::from_salvo(response).await
}

/// POSTs with the given extra headers and a JSON body.
pub async fn post_json_with_headers(
    service: &Service,
    path: &str,
    headers: &[(&'static str, &'static str)],
    body: &serde_json::Value,
) -> TestResponse {
    let mut request = TestClient::post(format!("{BASE_URL}{path}"));
    for (name, value) in headers {
        request = request.add_header(*name, *value, true);
    }
    let response = request.json(body).send(service).await;
    TestResponse::from_salvo(response).await
}

/// Issues a GET request.
pub async fn get(service: &Service, path: &str) -> TestResponse {
    let response = TestClient::get(format!("{BASE_URL}{path}")).send(service).await;
    TestResponse::from_salvo(response).await
}

/// Creates a contact link and returns `(id, link)`.
///
/// ## Panics
/// Panics if the request does not succeed.
pub async fn create_contact(service: &Service, name: Option<&str>, phone: &str) -> (String, String) {
    let body = match name {
        Some(name) => serde_json::json!({"name": name, "phone": phone}),
        None => serde_json::json!({"phone": phone}),
    };

    let json = post_json(service, "/api/generate", &body)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let id = json["id"].as_str().expect("id should be a string").to_string();
    let link = json["link"]
        .as_str()
        .expect("link should be a string")
        .to_string();
    (id, link)
}
