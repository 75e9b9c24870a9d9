use std::sync::OnceLock;

use reqwest::{header, Client, ClientBuilder, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::TestResponse;

pub const TEST_USER_AGENT: &str = concat!("trivia-e2e-test/", env!("CARGO_PKG_VERSION"));

const TEST_API_SERVER_ENV_VAR_NAME: &str = "TEST_API_SERVER_URL";


/// Every test resets the shared database, so tests in the same
/// binary take turns through this lock.
fn test_server_lock() -> &'static Mutex<()> {
    static TEST_SERVER_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    TEST_SERVER_LOCK.get_or_init(|| Mutex::new(()))
}


pub struct TestServer {
    base_api_url: String,

    client: Client,

    _exclusive_access: MutexGuard<'static, ()>,
}

impl TestServer {
    pub async fn new(base_api_url: String) -> Self {
        let exclusive_access = test_server_lock().lock().await;

        let client = ClientBuilder::new()
            .user_agent(TEST_USER_AGENT)
            .build()
            .expect("failed to set up reqwest client");

        Self {
            base_api_url: base_api_url.trim_end_matches('/').to_string(),
            client,
            _exclusive_access: exclusive_access,
        }
    }

    /// Empties the database and seeds the sample categories and questions.
    pub async fn reset_server(&self) {
        let response = self
            .request(Method::POST, "/testing/full-reset")
            .send()
            .await;

        response.assert_status_equals(StatusCode::OK);
    }

    pub fn request<U>(&self, method: Method, endpoint: U) -> TestRequestBuilder
    where
        U: AsRef<str>,
    {
        let request_builder = self.client.request(
            method,
            format!("{}{}", self.base_api_url, endpoint.as_ref()),
        );

        TestRequestBuilder { request_builder }
    }
}


pub struct TestRequestBuilder {
    request_builder: RequestBuilder,
}

impl TestRequestBuilder {
    pub fn with_json_body<V>(mut self, value: V) -> Self
    where
        V: Serialize,
    {
        let serialized_body = serde_json::to_vec(&value).expect("failed to serialize value to JSON");

        self.request_builder = self
            .request_builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(serialized_body);

        self
    }

    pub fn with_raw_body<B>(mut self, content_type: &'static str, body: B) -> Self
    where
        B: Into<reqwest::Body>,
    {
        self.request_builder = self
            .request_builder
            .header(header::CONTENT_TYPE, content_type)
            .body(body);

        self
    }

    pub fn with_header(mut self, name: header::HeaderName, value: &'static str) -> Self {
        self.request_builder = self.request_builder.header(name, value);
        self
    }

    pub async fn send(self) -> TestResponse {
        let response = self
            .request_builder
            .send()
            .await
            .expect("failed to perform HTTP request");

        TestResponse::from_reqwest_response(response).await
    }
}


/// Connects to the server named by `TEST_API_SERVER_URL` and resets its database.
pub async fn prepare_test_server_instance() -> TestServer {
    let test_server_url = std::env::var(TEST_API_SERVER_ENV_VAR_NAME).unwrap_or_else(|_| {
        panic!(
            "Unexpected test environment! Expected a {} environment variable, found none (or invalid unicode).",
            TEST_API_SERVER_ENV_VAR_NAME
        )
    });

    let server = TestServer::new(test_server_url).await;
    server.reset_server().await;

    server
}
