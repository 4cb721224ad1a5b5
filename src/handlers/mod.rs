// Two security tiers:
// Public (no auth) -> Protected (session cookie required)
pub mod protected;
pub mod public;

use uuid::Uuid;

use crate::error::ApiError;

/// Parse a channel id path segment. Malformed ids are a client error,
/// distinct from a well-formed id that matches no row.
pub(crate) fn parse_channel_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request("Invalid channel id"))
}
