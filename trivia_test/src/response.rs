use std::fmt::Debug;

use reqwest::{
    header::{HeaderMap, HeaderName},
    Response,
    StatusCode,
};
use serde::de::DeserializeOwned;
use trivia_core::api_models::{ErrorKind, ErrorResponse};


pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Vec<u8>,
}

impl TestResponse {
    pub(crate) async fn from_reqwest_response(response: Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().to_owned(),
            body_bytes: response
                .bytes()
                .await
                .expect("failed to extract body from response")
                .to_vec(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn assert_status_equals(&self, status_code: StatusCode) {
        assert_eq!(
            self.status,
            status_code,
            "unexpected status, body: {}",
            String::from_utf8_lossy(&self.body_bytes)
        );
    }

    pub fn assert_header_exists(&self, header_name: HeaderName) {
        self.headers.get(&header_name).unwrap_or_else(|| {
            panic!(
                "header {} does not exist on response",
                header_name.as_str()
            )
        });
    }

    pub fn json_body<D>(&self) -> D
    where
        D: DeserializeOwned,
    {
        serde_json::from_slice::<D>(&self.body_bytes).expect("failed to deserialize body as JSON")
    }

    pub fn assert_json_body_matches<D>(&self, expected_content: D)
    where
        D: DeserializeOwned + PartialEq + Debug,
    {
        let data = self.json_body::<D>();

        assert_eq!(data, expected_content);
    }

    /// Asserts both the status code and the error envelope of an error response.
    pub fn assert_error_envelope(&self, kind: ErrorKind) {
        assert_eq!(self.status.as_u16(), kind.status_code());
        self.assert_json_body_matches(ErrorResponse::new(kind));
    }
}
