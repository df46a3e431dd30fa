//! Utility modules for common functionality

pub mod validators;

pub use validators::{ValidationError, validate_page_size, validate_repository};
