// Module declarations
mod client;
mod error;
mod operations;
mod types;
mod utils;

// Public API exports
pub use client::FilesApi;
pub use error::{FilesError, Result};
pub use types::{File, FileType, Metadata};

// Re-export commonly used external types for convenience
pub use bytes::Bytes;
pub use reqwest::Body;
