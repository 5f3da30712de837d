//! Application services: the rewrite engines and the platform modifiers
//! that orchestrate them.

pub mod android;
pub mod desktop;
pub mod relocation;
pub mod substitution;
