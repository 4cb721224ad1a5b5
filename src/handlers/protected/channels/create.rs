// handlers/protected/channels/create.rs - POST /channels handler

use axum::{Extension, Json};
use serde::Deserialize;

use crate::database::models::Channel;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::ChannelService;

#[derive(Debug, Deserialize)]
pub struct CreateChannelRequest {
    #[serde(rename = "channelName")]
    pub channel_name: Option<String>,
}

/// POST /channels - Create a channel owned by the acting user
///
/// The owner is always the authenticated subject; a client cannot create
/// a channel on someone else's behalf.
pub async fn channel_create(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateChannelRequest>,
) -> ApiResult<Channel> {
    let name = payload
        .channel_name
        .ok_or_else(|| ApiError::bad_request("Provide the name of the channel."))?;

    let service = ChannelService::new().await?;
    let channel = service.create(user.id, &name).await?;

    Ok(ApiResponse::created(channel))
}
