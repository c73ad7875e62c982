use actix_web::{
    body::BoxBody,
    http::{
        self,
        header::{self, HeaderValue},
    },
    HttpResponse, ResponseError,
};
use derive_more::Display;
use diesel::result::{DatabaseErrorKind, Error as DBError};
use serde_json::json;
use std::convert::From;
use uuid::Error as ParseError;

#[derive(Debug, Display)]
pub enum TodoApiError {
    #[display(fmt = "Internal server error")]
    InternalServerError,

    #[display(fmt = "{}", _0)]
    BadRequest(String),

    #[display(fmt = "Database connection error")]
    DatabaseConnectionError,

    #[display(fmt = "{} not found", _0)]
    NotFound(String),
}

impl ResponseError for TodoApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            TodoApiError::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
            TodoApiError::BadRequest(_) => http::StatusCode::BAD_REQUEST,
            TodoApiError::NotFound(_) => http::StatusCode::NOT_FOUND,
            _ => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let status = self.status_code();

        // 5xx details stay in the server log, clients only see the
        // generic message
        let message = if status.is_server_error() {
            log::error!("{:?}", self);
            String::from("Internal server error")
        } else {
            self.to_string()
        };

        let mut res = HttpResponse::new(status);

        res.headers_mut().append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        res.set_body(BoxBody::new(json!({ "error": message }).to_string()))
    }
}

// A malformed id matches no row, so it reads as a missing todo rather
// than a bad request
impl From<ParseError> for TodoApiError {
    fn from(_: ParseError) -> Self {
        TodoApiError::NotFound(String::from("Todo"))
    }
}

impl From<r2d2::Error> for TodoApiError {
    fn from(_: r2d2::Error) -> Self {
        TodoApiError::DatabaseConnectionError
    }
}

impl From<DBError> for TodoApiError {
    fn from(error: DBError) -> Self {
        match error {
            DBError::NotFound => TodoApiError::NotFound(String::from("Todo")),
            DBError::DatabaseError(kind, info) => {
                if let DatabaseErrorKind::UniqueViolation = kind {
                    let message: String =
                        info.details().unwrap_or_else(|| info.message()).to_string();

                    return TodoApiError::BadRequest(message);
                }
                TodoApiError::InternalServerError
            }
            _ => TodoApiError::InternalServerError,
        }
    }
}

#[cfg(test)]
mod errors_test {
    use actix_web::{http::StatusCode, ResponseError};
    use diesel::result::Error as DBError;

    use super::TodoApiError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TodoApiError::InternalServerError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            TodoApiError::DatabaseConnectionError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            TodoApiError::BadRequest(String::from("nope")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TodoApiError::NotFound(String::from("Todo")).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            TodoApiError::NotFound(String::from("Todo")).to_string(),
            "Todo not found"
        );
        assert_eq!(
            TodoApiError::BadRequest(String::from("No valid fields to update")).to_string(),
            "No valid fields to update"
        );
        assert_eq!(
            TodoApiError::InternalServerError.to_string(),
            "Internal server error"
        );
    }

    #[test]
    fn test_diesel_not_found_maps_to_404() {
        let err = TodoApiError::from(DBError::NotFound);

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Todo not found");
    }

    #[test]
    fn test_malformed_uuid_reads_as_missing_todo() {
        let parse_err = uuid::Uuid::parse_str("does-not-exist").unwrap_err();
        let err = TodoApiError::from(parse_err);

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
