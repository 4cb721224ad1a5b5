// handlers/protected/channels/list.rs - GET /channels handler

use axum::Extension;

use crate::database::models::Channel;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::ChannelService;

/// GET /channels - List channels owned by the acting user
///
/// An empty result is a 404 ("No channels found."), not an empty array;
/// long-standing contract of this endpoint.
pub async fn channel_list(Extension(user): Extension<AuthUser>) -> ApiResult<Vec<Channel>> {
    let service = ChannelService::new().await?;
    let channels = service.list_by_owner(user.id).await?;

    Ok(ApiResponse::success(channels))
}
