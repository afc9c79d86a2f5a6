// Common types and utilities shared across the application

pub mod error;
pub mod id;

pub use error::AppError;
pub use id::new_record_id;
