pub mod models;
pub mod providers;
pub mod types;
