//! Command handlers. One module per subcommand.

pub mod apply;
pub mod completions;
