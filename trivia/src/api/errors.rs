//! Provides ways of handling errors in API endpoint functions
//! and ways to have those errors automatically turned into correct
//! HTTP error responses when returned as `Err(error)` from those functions.
//!
//! Every error response carries the same envelope ([`ErrorResponse`]),
//! no matter which part of the stack produced it: endpoint functions,
//! extractors (see [`json_extractor_config`] and friends)
//! or the default services (see [`not_found`] and [`method_not_allowed`]).

use std::borrow::{Borrow, Cow};

use actix_http::header::HeaderValue;
use actix_web::{
    body::BoxBody,
    error::{JsonPayloadError, PathError},
    http::{header, StatusCode},
    web,
    HttpRequest,
    HttpResponse,
    ResponseError,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use trivia_core::api_models::{ErrorKind, ErrorResponse};
use trivia_database::QueryError;



/// Why a JSON request body could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidJsonBodyReason {
    /// Missing or incorrect `Content-Type`, or a body that is not valid JSON.
    NotJson,

    /// Valid JSON, but not of the expected shape.
    InvalidData,

    /// The body exceeds the configured size limit.
    TooLarge,
}

impl From<&JsonPayloadError> for InvalidJsonBodyReason {
    fn from(value: &JsonPayloadError) -> Self {
        match value {
            JsonPayloadError::Deserialize(error) if error.is_data() => Self::InvalidData,
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                Self::TooLarge
            }
            _ => Self::NotJson,
        }
    }
}



/// General-purpose endpoint error type.
///
/// Client errors render as their own status code. Internal errors
/// are logged and then rendered as `422 Unprocessable Entity`,
/// without leaking any detail through the API.
///
/// # Example
/// ```no_run
/// use trivia::api::errors::{EndpointError, EndpointResponseBuilder, EndpointResult};
/// use trivia::state::ApplicationState;
/// use trivia_database::entities::QuestionQuery;
///
/// async fn count_questions(state: ApplicationState) -> EndpointResult {
///     let mut database_connection = state.acquire_database_connection().await?;
///
///     let total_questions = QuestionQuery::count(&mut database_connection).await?;
///     if total_questions == 0 {
///         return Err(EndpointError::NotFound);
///     }
///
///     EndpointResponseBuilder::ok()
///         .with_json_body(total_questions)
///         .build()
/// }
/// ```
#[derive(Debug, Error)]
pub enum EndpointError {
    /*
     * Client errors.
     */
    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable request: {reason}")]
    Unprocessable { reason: Cow<'static, str> },

    #[error("invalid JSON body: {reason:?}")]
    InvalidJsonBody { reason: InvalidJsonBodyReason },

    /*
     * Server errors.
     *
     * These are reported to the client as unprocessable requests.
     */
    #[error("internal database error")]
    InternalDatabaseError {
        #[from]
        #[source]
        error: sqlx::Error,
    },

    #[error("internal query error")]
    InternalQueryError {
        #[from]
        #[source]
        error: QueryError,
    },

    #[error("failed to serialize response body")]
    ResponseSerializationError {
        #[from]
        #[source]
        error: serde_json::Error,
    },
}

impl EndpointError {
    pub fn unprocessable<R>(reason: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::Unprocessable {
            reason: reason.into(),
        }
    }

    pub const fn invalid_json_body(reason: InvalidJsonBodyReason) -> Self {
        Self::InvalidJsonBody { reason }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::InternalDatabaseError { .. }
                | Self::InternalQueryError { .. }
                | Self::ResponseSerializationError { .. }
        )
    }

    /// The kind of error envelope this error is rendered as.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            Self::Unprocessable { .. } => ErrorKind::Unprocessable,
            Self::InvalidJsonBody { reason } => match reason {
                InvalidJsonBodyReason::InvalidData => ErrorKind::Unprocessable,
                InvalidJsonBodyReason::NotJson | InvalidJsonBodyReason::TooLarge => {
                    ErrorKind::BadRequest
                }
            },
            Self::InternalDatabaseError { .. }
            | Self::InternalQueryError { .. }
            | Self::ResponseSerializationError { .. } => ErrorKind::Unprocessable,
        }
    }

    /// Collapses any error into [`EndpointError::NotFound`],
    /// logging it first if it was an internal one.
    pub fn into_not_found(self) -> Self {
        if self.is_internal() {
            error!(error = ?self, "Internal error while handling request, responding with 404.");
        }

        Self::NotFound
    }
}

impl ResponseError for EndpointError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::UNPROCESSABLE_ENTITY)
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if self.is_internal() {
            error!(error = ?self, "Internal error while handling request.");
        }

        let status_code = self.status_code();

        EndpointResponseBuilder::new(status_code)
            .with_json_body(ErrorResponse::new(self.kind()))
            .build()
            .unwrap_or_else(|_| HttpResponse::build(status_code).finish())
    }
}



pub struct EndpointResponseBuilder {
    status_code: StatusCode,

    body: Option<Result<Vec<u8>, serde_json::Error>>,
}

impl EndpointResponseBuilder {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
        }
    }

    #[inline]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    pub fn with_json_body<D, S>(self, data: D) -> Self
    where
        S: Serialize,
        D: Borrow<S>,
    {
        Self {
            status_code: self.status_code,
            body: Some(serde_json::to_vec(data.borrow())),
        }
    }

    pub fn build(self) -> EndpointResult {
        let mut response_builder = HttpResponse::build(self.status_code);

        match self.body {
            Some(body_or_error) => {
                let body = body_or_error?;

                response_builder.insert_header((
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
                ));

                Ok(response_builder.body(body))
            }
            None => Ok(response_builder.finish()),
        }
    }
}



/// Short for [`Result`]`<`[`HttpResponse`]`, `[`EndpointError`]`>`, intended to be used in most
/// places in handlers of the trivia API.
pub type EndpointResult<Body = BoxBody> = Result<HttpResponse<Body>, EndpointError>;



/// Default service for unmatched paths.
pub async fn not_found() -> EndpointResult {
    Err(EndpointError::NotFound)
}

/// Default service of every resource: reached when the path matched,
/// but none of the resource's routes accepts the request method.
pub async fn method_not_allowed() -> EndpointResult {
    Err(EndpointError::MethodNotAllowed)
}



/// JSON extractor configuration for most endpoints:
/// bodies that are not JSON at all are `400`, JSON of the wrong shape is `422`.
pub fn json_extractor_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error: JsonPayloadError, _: &HttpRequest| {
        EndpointError::invalid_json_body(InvalidJsonBodyReason::from(&error)).into()
    })
}

/// JSON extractor configuration for endpoints that report
/// every malformed payload (including non-JSON ones) as `422`.
pub fn strict_json_extractor_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error: JsonPayloadError, _: &HttpRequest| {
        EndpointError::unprocessable(format!("malformed request body: {error}")).into()
    })
}

/// Path parameters that fail to parse (e.g. `/questions/abc`)
/// point at a resource that can not exist, so they are reported as `404`.
pub fn path_extractor_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_: PathError, _: &HttpRequest| EndpointError::NotFound.into())
}



#[cfg(test)]
mod test {
    use actix_web::body::to_bytes;

    use super::*;

    async fn rendered_envelope(error: EndpointError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();

        let body = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn renders_client_errors_with_their_own_status() {
        let (status, body) = rendered_envelope(EndpointError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": 404, "message": "resource not found" })
        );

        let (status, body) = rendered_envelope(EndpointError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], "method not allowed");

        let (status, body) = rendered_envelope(EndpointError::invalid_json_body(
            InvalidJsonBodyReason::NotJson,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": 400, "message": "bad request" })
        );
    }

    #[actix_web::test]
    async fn renders_internal_errors_as_unprocessable() {
        let (status, body) =
            rendered_envelope(EndpointError::from(sqlx::Error::RowNotFound)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": 422,
                "message": "request cannot be processed"
            })
        );
    }

    #[test]
    fn json_data_errors_are_unprocessable_and_syntax_errors_are_bad_requests() {
        let data_error = serde_json::from_str::<u32>("\"text\"").unwrap_err();
        let syntax_error = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();

        assert_eq!(
            InvalidJsonBodyReason::from(&JsonPayloadError::Deserialize(data_error)),
            InvalidJsonBodyReason::InvalidData
        );
        assert_eq!(
            InvalidJsonBodyReason::from(&JsonPayloadError::Deserialize(syntax_error)),
            InvalidJsonBodyReason::NotJson
        );
        assert_eq!(
            InvalidJsonBodyReason::from(&JsonPayloadError::ContentType),
            InvalidJsonBodyReason::NotJson
        );

        assert_eq!(
            EndpointError::invalid_json_body(InvalidJsonBodyReason::InvalidData).kind(),
            ErrorKind::Unprocessable
        );
        assert_eq!(
            EndpointError::invalid_json_body(InvalidJsonBodyReason::TooLarge).kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn into_not_found_collapses_everything() {
        assert!(matches!(
            EndpointError::unprocessable("bad").into_not_found(),
            EndpointError::NotFound
        ));
        assert!(matches!(
            EndpointError::from(sqlx::Error::PoolTimedOut).into_not_found(),
            EndpointError::NotFound
        ));
    }
}
