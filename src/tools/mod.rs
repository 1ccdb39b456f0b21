pub mod detail;
pub mod search;
pub mod trailers;
