//! Offset pagination shared by every endpoint that lists questions.

use std::{
    future::{ready, Ready},
    num::IntErrorKind,
};

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use serde::Deserialize;
use trivia_database::entities::RowWindow;
use utoipa::IntoParams;

use super::query::first_query_value;


pub const QUESTIONS_PER_PAGE: i64 = 10;


/// Raw `page` query parameter.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number. Defaults to 1 when missing or not an integer.
    #[param(value_type = Option<i64>)]
    page: Option<String>,
}


/// The requested page number, extracted leniently from the `page` query parameter.
///
/// Missing or non-numeric values fall back to the first page and never fail the request.
/// Numbers too large for an `i64` saturate, which makes them an empty page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PageParameter {
    page: i64,
}

impl PageParameter {
    #[inline]
    pub const fn new(page: i64) -> Self {
        Self { page }
    }

    #[inline]
    pub const fn page(&self) -> i64 {
        self.page
    }

    pub fn parse(raw_page: Option<&str>) -> Self {
        let Some(raw_page) = raw_page else {
            return Self::new(1);
        };

        let page = match raw_page.trim().parse::<i64>() {
            Ok(page) => page,
            Err(error) => match error.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 1,
            },
        };

        Self::new(page)
    }

    /// The rows this page covers, or `None` if the page
    /// can not contain anything (`page < 1`, or an offset that overflows).
    pub fn window(&self) -> Option<RowWindow> {
        if self.page < 1 {
            return None;
        }

        let offset = (self.page - 1).checked_mul(QUESTIONS_PER_PAGE)?;

        Some(RowWindow {
            limit: QUESTIONS_PER_PAGE,
            offset,
        })
    }
}

impl FromRequest for PageParameter {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw_page = first_query_value(req.query_string(), "page");

        ready(Ok(Self::parse(raw_page.as_deref())))
    }
}



#[cfg(test)]
mod test {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn missing_or_garbage_pages_default_to_first() {
        assert_eq!(PageParameter::parse(None).page(), 1);
        assert_eq!(PageParameter::parse(Some("")).page(), 1);
        assert_eq!(PageParameter::parse(Some("two")).page(), 1);
        assert_eq!(PageParameter::parse(Some("1.5")).page(), 1);
        assert_eq!(PageParameter::parse(Some(" 3 ")).page(), 3);
    }

    #[test]
    fn huge_pages_saturate() {
        assert_eq!(
            PageParameter::parse(Some("99999999999999999999999")).page(),
            i64::MAX
        );
        assert_eq!(
            PageParameter::parse(Some("-99999999999999999999999")).page(),
            i64::MIN
        );
    }

    #[test]
    fn window_arithmetic() {
        assert_eq!(
            PageParameter::new(1).window(),
            Some(RowWindow {
                limit: 10,
                offset: 0
            })
        );
        assert_eq!(
            PageParameter::new(3).window(),
            Some(RowWindow {
                limit: 10,
                offset: 20
            })
        );
    }

    #[test]
    fn pages_that_can_not_hold_rows_have_no_window() {
        assert_eq!(PageParameter::new(0).window(), None);
        assert_eq!(PageParameter::new(-4).window(), None);
        assert_eq!(PageParameter::new(i64::MAX).window(), None);
    }

    #[actix_web::test]
    async fn extracts_from_query_string() {
        let (request, mut payload) = TestRequest::get()
            .uri("/questions?page=2&search=x")
            .to_http_parts();

        let page = PageParameter::from_request(&request, &mut payload)
            .await
            .unwrap();
        assert_eq!(page.page(), 2);


        let (request, mut payload) = TestRequest::get().uri("/questions").to_http_parts();

        let page = PageParameter::from_request(&request, &mut payload)
            .await
            .unwrap();
        assert_eq!(page.page(), 1);
    }

    #[actix_web::test]
    async fn repeated_page_uses_the_first_value() {
        let (request, mut payload) = TestRequest::get()
            .uri("/questions?page=3&page=7")
            .to_http_parts();

        let page = PageParameter::from_request(&request, &mut payload)
            .await
            .unwrap();
        assert_eq!(page.page(), 3);
    }
}
