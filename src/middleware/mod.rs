pub mod auth;
pub mod json;
pub mod params;
pub mod response;

pub use auth::AuthToken;
pub use json::JsonBody;
pub use params::{PathParam, QueryParams};
pub use response::{ApiResponse, ApiResult, Envelope};
