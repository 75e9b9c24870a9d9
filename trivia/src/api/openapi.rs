//! Commonly used OpenAPI responses, to be used in conjunction
//! with the [`utoipa::path`] proc macro on actix handlers.
//!
//! # Example
//! ```no_run
//! use trivia::api::openapi;
//! use trivia::api::errors::EndpointResult;
//!
//! #[utoipa::path(
//!     get,
//!     path = "/hello-world",
//!     responses(
//!         (status = 200, description = "Hello!"),
//!         openapi::ResourceNotFound,
//!         openapi::UnprocessableRequest,
//!     )
//! )]
//! pub async fn some_endpoint_function() -> EndpointResult {
//!     // ...
//!     # todo!();
//! }
//! ```

use std::collections::BTreeMap;

use trivia_core::api_models::{ErrorKind, ErrorResponse};
use utoipa::{
    openapi::{
        example::ExampleBuilder,
        ContentBuilder,
        RefOr,
        Response,
        ResponseBuilder,
        ResponsesBuilder,
    },
    ToSchema,
};


fn error_envelope_response(kind: ErrorKind, description: &str) -> Response {
    let example = serde_json::to_value(ErrorResponse::new(kind)).ok();

    ResponseBuilder::new()
        .description(description)
        .content(
            mime::APPLICATION_JSON.to_string(),
            ContentBuilder::new()
                .schema(ErrorResponse::schema().1)
                .examples_from_iter(vec![(
                    kind.message(),
                    ExampleBuilder::new().value(example).build(),
                )])
                .build(),
        )
        .build()
}


/// Generates a unit struct implementing [`utoipa::IntoResponses`]
/// that documents a single error envelope response.
macro_rules! declare_openapi_error_envelope_response {
    (
        $(#[$attribute:meta])*
        pub struct $struct_name:ident {
            kind => $kind:expr,
            description => $description:expr $(,)?
        }
    ) => {
        $(#[$attribute])*
        pub struct $struct_name;

        impl utoipa::IntoResponses for $struct_name {
            fn responses() -> BTreeMap<String, RefOr<Response>> {
                let kind: ErrorKind = $kind;

                ResponsesBuilder::new()
                    .response(
                        kind.status_code().to_string(),
                        error_envelope_response(kind, $description),
                    )
                    .build()
                    .into()
            }
        }
    };
}


declare_openapi_error_envelope_response!(
    /// `404 Not Found`, as the error envelope.
    pub struct ResourceNotFound {
        kind => ErrorKind::NotFound,
        description => "The requested resource (or page) does not exist.",
    }
);

declare_openapi_error_envelope_response!(
    /// `422 Unprocessable Entity`, as the error envelope.
    ///
    /// Also covers failures while accessing the database.
    pub struct UnprocessableRequest {
        kind => ErrorKind::Unprocessable,
        description => "The request could not be processed, either because its \
                        body was malformed or because the database operation failed.",
    }
);

declare_openapi_error_envelope_response!(
    /// `400 Bad Request`, as the error envelope.
    pub struct BadRequest {
        kind => ErrorKind::BadRequest,
        description => "The request body is not JSON, or the `Content-Type` \
                        header is not `application/json`.",
    }
);

declare_openapi_error_envelope_response!(
    pub struct MethodNotAllowed {
        kind => ErrorKind::MethodNotAllowed,
        description => "The path exists, but does not accept this HTTP method.",
    }
);
