pub mod app_state;
pub mod config;
pub mod endpoints;
pub mod types;

pub use app_state::AppState;
