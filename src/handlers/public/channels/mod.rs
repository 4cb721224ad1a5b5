// handlers/public/channels/mod.rs - Public channel endpoints

pub mod show; // GET /channels/:id - fetch a single channel

pub use show::channel_get;
