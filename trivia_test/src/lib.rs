//! End-to-end test harness for the trivia API.
//!
//! The tests in `tests/` talk to an already running server (built with the
//! `with_test_facilities` feature) whose base URL is given by the
//! `TEST_API_SERVER_URL` environment variable, e.g. `http://127.0.0.1:5000`.
//! They are ignored by default; run them with
//! `cargo test -p trivia_test -- --ignored`.

pub mod prelude;
mod response;
mod server;

pub use response::*;
pub use server::*;
