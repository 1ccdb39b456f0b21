pub mod api;
pub mod core;
pub mod features;
pub mod tools;

// --- Primary core exports ---
pub use crate::core::types;
pub use crate::core::types::*;
pub use crate::core::AppState;

pub use features::{focus, loader};
pub use tools::{detail, search, trailers};
