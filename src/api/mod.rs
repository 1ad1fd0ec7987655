pub mod error;
pub mod router;
