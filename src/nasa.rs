pub mod client;
pub mod types;

pub use client::{NasaApi, NasaClient};
pub use types::{AlbumParams, SearchParams};
