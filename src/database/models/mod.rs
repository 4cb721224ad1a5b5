pub mod channel;
pub mod user;

pub use channel::Channel;
pub use user::User;
