// handlers/protected/mod.rs - Protected handlers (session cookie required)
//
// Every route in this tier sits behind the session middleware: requests
// arrive with a verified AuthUser in their extensions, and the acting
// identity is always taken from there, never from the request body.
pub mod channels;
pub mod users;
