pub mod focus;
pub mod loader;
