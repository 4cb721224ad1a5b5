// handlers/protected/channels/delete.rs - DELETE /channels/:id handler

use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::parse_channel_id;
use crate::middleware::{ApiResponse, AuthUser};
use crate::services::ChannelService;

/// DELETE /channels/:id - Delete an owned channel
///
/// Deleting a channel that no longer exists is a 204 no-op rather than
/// an error; only a live channel owned by someone else produces a 403.
pub async fn channel_delete(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_channel_id(&id)?;

    let service = ChannelService::new().await?;

    if service.delete(id, user.id).await? {
        let body = json!({ "message": "Channel has been deleted." });
        Ok(ApiResponse::success(body).into_response())
    } else {
        Ok(ApiResponse::<()>::no_content().into_response())
    }
}
