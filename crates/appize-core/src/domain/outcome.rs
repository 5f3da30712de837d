//! Typed step outcomes.
//!
//! Catch-and-log hides partial failures from the orchestration layer, which
//! then has nothing but log text to act on. Each step instead reports an
//! explicit [`StepOutcome`] so callers decide from values.

use std::fmt;

/// Result of a single pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step ran and changed the project tree.
    Applied,
    /// The step ran but nothing needed changing (idempotent re-run).
    Unchanged,
    /// Preconditions for the step were not met; this is not a failure.
    Skipped { reason: String },
    /// The step failed; siblings still run.
    Failed { reason: String },
}

impl StepOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::Unchanged => f.write_str("unchanged"),
            Self::Skipped { reason } => write!(f, "skipped ({reason})"),
            Self::Failed { reason } => write!(f, "failed ({reason})"),
        }
    }
}
