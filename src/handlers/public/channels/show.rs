// handlers/public/channels/show.rs - GET /channels/:id handler

use axum::extract::Path;

use crate::database::models::Channel;
use crate::handlers::parse_channel_id;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::ChannelService;

/// GET /channels/:id - Fetch a channel by id. Readable without a session.
pub async fn channel_get(Path(id): Path<String>) -> ApiResult<Channel> {
    let id = parse_channel_id(&id)?;

    let service = ChannelService::new().await?;
    let channel = service.get(id).await?;

    Ok(ApiResponse::success(channel))
}
