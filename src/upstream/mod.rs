pub mod client;
pub mod models;
pub mod repository;

pub use client::{UpstreamClient, UpstreamError, UpstreamResponse};
pub use repository::{Repository, Resource};
