pub mod resource;
pub mod server;
