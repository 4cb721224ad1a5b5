// handlers/public/users/login.rs - POST /users/login handler

use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, SESSION_COOKIE};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /users/login - Verify credentials and start a session
///
/// On success the session token is delivered as an HttpOnly cookie named
/// `token`; the body carries the user record. Unknown email and wrong
/// password are the same 401.
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<Response, ApiError> {
    let (email, password) = match (payload.email, payload.password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => return Err(ApiError::bad_request("Please provide email and password.")),
    };

    let service = UserService::new().await?;
    let (user, token) = service.login(&email, &password).await?;

    let cookie = format!(
        "{}={}; HttpOnly; SameSite=Strict; Path=/",
        SESSION_COOKIE, token
    );
    let cookie = cookie
        .parse()
        .map_err(|_| ApiError::internal_server_error("An error occurred. Please try again."))?;

    let mut response = ApiResponse::success(user).into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);

    Ok(response)
}
