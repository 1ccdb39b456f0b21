pub mod common;
pub mod loading;
pub mod movie;
pub mod search;
