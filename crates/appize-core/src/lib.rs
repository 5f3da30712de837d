//! Appize Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Appize
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           appize-cli (CLI)              │
//! │   (YAML config, args, exit codes)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Platform Modifiers             │
//! │   (AndroidModifier, DesktopModifier)    │
//! │     Orchestrate the rewrite engines     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, Fetcher, IconEngine,      │
//! │   SplashResolver)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     appize-adapters (Infrastructure)    │
//! │  (LocalFilesystem, HttpFetcher,         │
//! │   RasterEngine, FileSplashResolver)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (PackageId, ReplacementMap,            │
//! │   ProjectConfig, StepOutcome)           │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use appize_core::{
//!     application::AndroidModifier,
//!     domain::ProjectConfig,
//! };
//!
//! // Adapters are injected; the modifier only sees the port traits.
//! let modifier = AndroidModifier::new(filesystem, icons, splash);
//! let report = modifier.apply(&config, project_root, assets_root)?;
//! println!("{} step(s) failed", report.failed_count());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (engines + orchestration)
pub mod application;

// Re-export error types
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AndroidModifier, DesktopModifier, PlatformReport,
        ports::{Fetcher, Filesystem, IconEngine, SplashResolver},
    };
    pub use crate::domain::{
        ImageRef, PackageId, ProjectConfig, ReplacementMap, SplashConfig, StepOutcome,
    };
    pub use crate::error::{AppizeError, AppizeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
