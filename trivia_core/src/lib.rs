//! Types shared between the trivia server and its clients:
//! strongly-typed identifiers and the JSON request and response models of the API.

pub mod api_models;
pub mod ids;
