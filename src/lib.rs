pub mod account;
pub mod api;
pub mod config;
pub mod project;
pub mod server;
pub mod state;
pub mod status;
pub mod store;
pub mod task;
