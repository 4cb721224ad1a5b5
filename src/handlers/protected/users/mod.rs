// handlers/protected/users/mod.rs - Session-scoped account endpoints

pub mod delete; // DELETE /users - delete the acting user's account
pub mod logout; // POST /users/logout - end the session

pub use delete::user_delete;
pub use logout::logout;
