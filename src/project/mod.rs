// src/project/mod.rs
pub mod handlers;
pub mod store;
pub mod types;

pub use types::Project;
