pub mod channel_service;
pub mod user_service;

pub use channel_service::{ChannelError, ChannelService};
pub use user_service::{UserError, UserService};
