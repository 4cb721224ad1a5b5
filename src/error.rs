// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::InternalServerError(_) => 500,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code()
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert service-layer error types to ApiError
impl From<crate::database::manager::DatabaseError> for ApiError {
    fn from(err: crate::database::manager::DatabaseError) -> Self {
        match err {
            crate::database::manager::DatabaseError::ConfigMissing(_) => {
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            crate::database::manager::DatabaseError::Migrate(e) => {
                tracing::error!("Migration error: {}", e);
                ApiError::service_unavailable("Service is being updated, please try again later")
            }
            crate::database::manager::DatabaseError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error("An error occurred. Please try again.")
            }
        }
    }
}

impl From<crate::services::user_service::UserError> for ApiError {
    fn from(err: crate::services::user_service::UserError) -> Self {
        use crate::services::user_service::UserError;
        match err {
            UserError::DuplicateEmail => ApiError::conflict(err.to_string()),
            UserError::InvalidPassword | UserError::InvalidName => {
                ApiError::bad_request(err.to_string())
            }
            UserError::InvalidCredentials => ApiError::unauthorized(err.to_string()),
            UserError::NotFound(msg) => ApiError::not_found(msg),
            UserError::TokenIssue(e) => {
                tracing::error!("session token issue failed: {}", e);
                ApiError::internal_server_error("An error occurred. Please try again.")
            }
            UserError::Database(sqlx_err) => {
                tracing::error!("user service database error: {}", sqlx_err);
                ApiError::internal_server_error("An error occurred. Please try again.")
            }
            UserError::DatabaseManager(db_err) => db_err.into(),
        }
    }
}

impl From<crate::services::channel_service::ChannelError> for ApiError {
    fn from(err: crate::services::channel_service::ChannelError) -> Self {
        use crate::services::channel_service::ChannelError;
        match err {
            ChannelError::EmptyName => ApiError::bad_request(err.to_string()),
            ChannelError::OwnerNotFound | ChannelError::NotFound(_) => {
                ApiError::not_found(err.to_string())
            }
            ChannelError::Forbidden => ApiError::forbidden(err.to_string()),
            ChannelError::Database(sqlx_err) => {
                tracing::error!("channel service database error: {}", sqlx_err);
                ApiError::internal_server_error("An error occurred. Please try again.")
            }
            ChannelError::DatabaseManager(db_err) => db_err.into(),
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::channel_service::ChannelError;
    use crate::services::user_service::UserError;

    #[test]
    fn user_errors_map_to_contract_status_codes() {
        assert_eq!(ApiError::from(UserError::DuplicateEmail).status_code(), 409);
        assert_eq!(ApiError::from(UserError::InvalidPassword).status_code(), 400);
        assert_eq!(ApiError::from(UserError::InvalidName).status_code(), 400);
        assert_eq!(ApiError::from(UserError::InvalidCredentials).status_code(), 401);
        assert_eq!(
            ApiError::from(UserError::NotFound("User not found.".into())).status_code(),
            404
        );
    }

    #[test]
    fn channel_errors_map_to_contract_status_codes() {
        assert_eq!(ApiError::from(ChannelError::EmptyName).status_code(), 400);
        assert_eq!(ApiError::from(ChannelError::Forbidden).status_code(), 403);
        assert_eq!(ApiError::from(ChannelError::OwnerNotFound).status_code(), 404);
        assert_eq!(
            ApiError::from(ChannelError::NotFound("Channel not found".into())).status_code(),
            404
        );
    }

    #[test]
    fn store_failures_collapse_to_generic_internal_error() {
        let err = ApiError::from(UserError::Database(sqlx::Error::PoolClosed));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "An error occurred. Please try again.");
    }

    #[test]
    fn error_body_shape() {
        let err = ApiError::forbidden("You are not authorized to perform this action.");
        let body = err.to_json();
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "FORBIDDEN");
        assert_eq!(body["message"], "You are not authorized to perform this action.");
    }
}
