// Library exports for testing and reusability

pub mod collect;
pub mod config;
pub mod constants;
pub mod distance;
pub mod error;
pub mod input;
pub mod models;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use error::{AppError, Result};
