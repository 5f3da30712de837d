//! Per-platform step reporting.

use crate::domain::StepOutcome;

/// Ordered record of every step a platform modifier ran.
///
/// A report with failures is still a completed run: steps are independently
/// fault-isolated, and the caller decides what a partial result means.
#[derive(Debug, Clone)]
pub struct PlatformReport {
    platform: &'static str,
    steps: Vec<(String, StepOutcome)>,
}

impl PlatformReport {
    pub fn new(platform: &'static str) -> Self {
        Self {
            platform,
            steps: Vec::new(),
        }
    }

    pub fn platform(&self) -> &'static str {
        self.platform
    }

    pub fn push(&mut self, label: impl Into<String>, outcome: StepOutcome) {
        self.steps.push((label.into(), outcome));
    }

    /// Steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = (&str, &StepOutcome)> {
        self.steps.iter().map(|(l, o)| (l.as_str(), o))
    }

    pub fn failed_count(&self) -> usize {
        self.steps.iter().filter(|(_, o)| o.is_failure()).count()
    }

    pub fn outcome_of(&self, label: &str) -> Option<&StepOutcome> {
        self.steps.iter().find(|(l, _)| l == label).map(|(_, o)| o)
    }
}
