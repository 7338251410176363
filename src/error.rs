use actix_web::{HttpResponse, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Error taxonomy for the whole API. Every handler failure maps to one of
/// these variants and renders as `{"error": <code>, "message": <text>}`.
#[derive(Debug, Display)]
pub enum ApiError {
    /// Malformed or missing input.
    #[display(fmt = "{}", _0)]
    Validation(String),

    /// Unique-constraint violation (duplicate employee id, email, check-in)
    /// or an attempted transition out of a terminal state.
    #[display(fmt = "{}", _0)]
    Conflict(String),

    /// Bad credentials or an invalid/missing/expired session token.
    #[display(fmt = "{}", _0)]
    Auth(String),

    /// Authenticated but not allowed to perform the action.
    #[display(fmt = "{}", _0)]
    Forbidden(String),

    /// Password-reset identity proof did not match.
    #[display(fmt = "{}", _0)]
    Verification(String),

    #[display(fmt = "{}", _0)]
    NotFound(String),

    #[display(fmt = "Internal Server Error")]
    Internal,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::Auth(_) => "AUTH_ERROR",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::Verification(_) => "VERIFICATION_FAILED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal => "INTERNAL_ERROR",
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Verification(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.code(),
            "message": self.to_string(),
        }))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        ApiError::Internal
    }
}

/// Maps a unique-constraint violation to [`ApiError::Conflict`] with the
/// given message; anything else becomes a logged internal error.
pub fn conflict_on_unique(e: sqlx::Error, message: &str) -> ApiError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return ApiError::Conflict(message.to_string());
        }
    }
    ApiError::from(e)
}
