pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod types;
pub mod upstream;

pub use app::app;
pub use config::AppConfig;
pub use state::AppState;
