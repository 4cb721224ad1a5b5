// handlers/protected/users/logout.rs - POST /users/logout handler

use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, AuthUser, SESSION_COOKIE};

/// POST /users/logout - End the session by clearing the cookie
///
/// Sessions are stateless, so there is nothing to revoke server-side;
/// the token itself stays valid until its expiry.
pub async fn logout(Extension(user): Extension<AuthUser>) -> Result<Response, ApiError> {
    tracing::debug!("logout for user {}", user.id);

    let cookie = format!(
        "{}=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0",
        SESSION_COOKIE
    );
    let cookie = cookie
        .parse()
        .map_err(|_| ApiError::internal_server_error("An error occurred. Please try again."))?;

    let body: Value = json!({ "message": "Logged out." });
    let mut response = ApiResponse::success(body).into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);

    Ok(response)
}
