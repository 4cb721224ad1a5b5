pub mod auth;
pub mod response;

pub use auth::{session_auth_middleware, AuthUser, SESSION_COOKIE};
pub use response::{ApiResponse, ApiResult};
