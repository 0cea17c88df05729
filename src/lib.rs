pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod mcp;
pub mod nasa;

pub use config::Config;
pub use error::Error;
