pub mod api;
pub mod config;
pub mod models;
pub mod render;
pub mod session;
pub mod store;
