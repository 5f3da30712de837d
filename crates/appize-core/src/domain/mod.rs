//! Core domain layer for Appize.
//!
//! This module contains pure data and logic with ZERO I/O.
//! All filesystem, network, and image concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Minimal crates**: std + thiserror + serde (+ serde_json for the
//!   Gradle config values)
//! - **Value types**: everything here is `Clone` and comparable in tests

pub mod config;
pub mod error;
pub mod outcome;
pub mod package_id;
pub mod replacements;

// Re-exports for convenience
pub use config::{
    BuildConfig, ImageRef, ProjectConfig, SigningConfig, SplashConfig, WebappConfig,
};
pub use error::{DomainError, ErrorCategory};
pub use outcome::StepOutcome;
pub use package_id::PackageId;
pub use replacements::{ReplacementMap, render_gradle_configs};
