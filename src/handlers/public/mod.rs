// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Account creation, login, and read-only lookups. No session is required
// here, so every input is validated from scratch.
pub mod channels;
pub mod users;
