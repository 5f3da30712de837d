//! Application layer: rewrite engines, platform modifiers, and the ports
//! they drive.
//!
//! The engines ([`services::substitution`], [`services::relocation`]) hold
//! the algorithmic content; the modifiers ([`AndroidModifier`],
//! [`DesktopModifier`]) are orchestration over them plus the injected asset
//! ports.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

pub use error::ApplicationError;
pub use report::PlatformReport;
pub use services::{
    android::{AndroidModifier, TEMPLATE_PACKAGE},
    desktop::{BUNDLE_FORMATS, DesktopModifier},
    relocation::{NAMESPACED_SOURCES, relocate_sources},
    substitution::{replace_literals, replace_tokens},
};
