//! HTTP request handlers.

pub mod add_clicks;
pub mod get_clicks;
pub mod health;

pub use add_clicks::add_clicks_handler;
pub use get_clicks::get_clicks_handler;
pub use health::health_handler;
