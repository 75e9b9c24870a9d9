pub use reqwest::{header, Method, StatusCode};
pub use trivia_core::api_models::*;
pub use trivia_core::ids::{CategoryId, QuestionId};

pub use super::server::{prepare_test_server_instance, TestServer};
