//! Lenient access to query string parameters.
//!
//! A repeated key keeps its first value, and a query string that can not be
//! decoded behaves as if it carried no parameters at all.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};


/// Returns the first value of the query parameter `key`, if any.
pub fn first_query_value(query_string: &str, key: &str) -> Option<String> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string).ok()?;

    pairs
        .into_inner()
        .into_iter()
        .find(|(pair_key, _)| pair_key == key)
        .map(|(_, value)| value)
}


/// The question search term, taken from the `search` query parameter.
///
/// Holds `None` when the parameter is missing. An empty value is still a term.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SearchTermParameter {
    search_term: Option<String>,
}

impl SearchTermParameter {
    pub fn into_inner(self) -> Option<String> {
        self.search_term
    }
}

impl FromRequest for SearchTermParameter {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self {
            search_term: first_query_value(req.query_string(), "search"),
        }))
    }
}
