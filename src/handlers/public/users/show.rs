// handlers/public/users/show.rs - GET /users handler

use axum::extract::Query;
use serde::Deserialize;

use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub email: Option<String>,
}

/// GET /users?email=... - Look up a user record by email
pub async fn user_get(Query(query): Query<UserQuery>) -> ApiResult<User> {
    let email = match query.email {
        Some(e) if !e.is_empty() => e,
        _ => return Err(ApiError::bad_request("Provide an email.")),
    };

    let service = UserService::new().await?;
    let user = service.find_by_email(&email).await?;

    Ok(ApiResponse::success(user))
}
