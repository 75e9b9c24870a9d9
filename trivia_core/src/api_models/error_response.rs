use serde::{Deserialize, Serialize};
use utoipa::ToSchema;


/// The coarse error categories the API exposes.
///
/// Each kind maps onto exactly one HTTP status code and one fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
}

impl ErrorKind {
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Unprocessable => 422,
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable => "request cannot be processed",
        }
    }
}


/// The error envelope every non-2xx response carries.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[schema(
    example = json!({
        "success": false,
        "error": 404,
        "message": "resource not found"
    })
)]
pub struct ErrorResponse {
    pub success: bool,

    /// The HTTP status code, repeated in the body.
    pub error: u16,

    pub message: String,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            success: false,
            error: kind.status_code(),
            message: kind.message().to_string(),
        }
    }
}

impl From<ErrorKind> for ErrorResponse {
    fn from(value: ErrorKind) -> Self {
        Self::new(value)
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn envelope_has_fixed_shape() {
        let envelope = serde_json::to_value(ErrorResponse::new(ErrorKind::Unprocessable)).unwrap();

        assert_eq!(
            envelope,
            serde_json::json!({
                "success": false,
                "error": 422,
                "message": "request cannot be processed"
            })
        );
    }

    #[test]
    fn every_kind_has_its_own_status() {
        let kinds = [
            ErrorKind::BadRequest,
            ErrorKind::NotFound,
            ErrorKind::MethodNotAllowed,
            ErrorKind::Unprocessable,
        ];

        let statuses: Vec<u16> = kinds.iter().map(ErrorKind::status_code).collect();
        assert_eq!(statuses, vec![400, 404, 405, 422]);

        assert_eq!(ErrorKind::BadRequest.message(), "bad request");
        assert_eq!(ErrorKind::MethodNotAllowed.message(), "method not allowed");
    }
}
