//! JSON request and response bodies of the trivia API.
//!
//! Every successful response carries `"success": true`, every error response is an
//! [`ErrorResponse`] envelope.

mod categories;
mod error_response;
mod questions;
mod quizzes;

pub use categories::*;
pub use error_response::*;
pub use questions::*;
pub use quizzes::*;
