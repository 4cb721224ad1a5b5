// handlers/public/users/signup.rs - POST /users/signup handler

use axum::Json;
use serde::Deserialize;

use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// POST /users/signup - Register a new account
///
/// Expected input:
/// ```json
/// { "email": "a@x.com", "password": "Abcdef1!", "name": "Ann" }
/// ```
///
/// Returns 201 with the created user (password omitted), 400 when a field
/// fails policy, 409 when the email is taken.
pub async fn signup(Json(payload): Json<SignupRequest>) -> ApiResult<User> {
    let (email, password, name) = match (payload.email, payload.password, payload.name) {
        (Some(e), Some(p), Some(n)) if !e.is_empty() && !p.is_empty() && !n.is_empty() => (e, p, n),
        _ => {
            return Err(ApiError::bad_request(
                "Please provide email, password, and name.",
            ))
        }
    };

    let service = UserService::new().await?;
    let user = service.register(&email, &password, &name).await?;

    Ok(ApiResponse::created(user))
}
