pub mod api_client;
pub mod auth_service;
pub mod item_service;
pub mod user_service;
pub mod error_mapping;

pub use api_client::ApiClient;
pub use error_mapping::{handle_error, map_error, ErrorReaction};
