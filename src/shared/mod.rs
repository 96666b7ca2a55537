/// Shared utilities and error types
pub mod error;
pub mod result;

pub use result::Result;
