// handlers/protected/channels/update.rs - PUT /channels/:id handler

use axum::extract::Path;
use axum::{Extension, Json};
use serde::Deserialize;

use crate::database::models::Channel;
use crate::error::ApiError;
use crate::handlers::parse_channel_id;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::ChannelService;

#[derive(Debug, Deserialize)]
pub struct UpdateChannelRequest {
    #[serde(rename = "channelName")]
    pub channel_name: Option<String>,
}

/// PUT /channels/:id - Rename a channel
///
/// Ownership is checked in the service before the update statement runs;
/// a non-owner gets 403 no matter what the body contains.
pub async fn channel_update(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateChannelRequest>,
) -> ApiResult<Channel> {
    let id = parse_channel_id(&id)?;

    let name = payload
        .channel_name
        .ok_or_else(|| ApiError::bad_request("Provide the name of the channel."))?;

    let service = ChannelService::new().await?;
    let channel = service.update(id, user.id, &name).await?;

    Ok(ApiResponse::success(channel))
}
