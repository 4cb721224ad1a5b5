// handlers/protected/users/delete.rs - DELETE /users handler

use axum::Extension;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::UserService;

/// DELETE /users - Delete the acting user's account
///
/// Cascades over the user's channels before removing the account row;
/// the whole thing is one transaction in the service.
pub async fn user_delete(Extension(user): Extension<AuthUser>) -> ApiResult<Value> {
    let service = UserService::new().await?;

    if service.delete(user.id).await? {
        Ok(ApiResponse::success(json!({
            "message": "User has been deleted."
        })))
    } else {
        Err(ApiError::not_found("User not found."))
    }
}
