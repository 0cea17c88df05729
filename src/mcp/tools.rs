//! MCP tool request types and validation.

pub mod types;

// Re-export types for convenience
pub use types::*;
