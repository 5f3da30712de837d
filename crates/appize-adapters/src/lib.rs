//! Infrastructure adapters for Appize.
//!
//! This crate implements the ports defined in `appize-core::application::ports`.
//! It contains all external dependencies and I/O operations: the real
//! filesystem, HTTP fetching, raster icon derivation and splash resolution.

pub mod fetch;
pub mod filesystem;
pub mod icon;
pub mod splash;

// Re-export commonly used adapters
pub use fetch::{HttpFetcher, StaticFetcher};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use icon::RasterEngine;
pub use splash::FileSplashResolver;
