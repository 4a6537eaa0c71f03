//! Outcome of every step of a run
//!
//! Steps never abort the run. Each one records what happened here and the whole list
//! is printed once everything has been attempted.

use std::fmt::Display;

use console::style;
use log::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prompt,
    Write,
    Install,
    Git,
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::Prompt => "prompt",
            Step::Write => "write",
            Step::Install => "install",
            Step::Git => "git",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Succeeded,
    Failed(String),
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub status: Status,
}

impl StepOutcome {
    pub fn succeeded(step: Step) -> Self {
        Self {
            step,
            status: Status::Succeeded,
        }
    }

    pub fn failed(step: Step, reason: impl Into<String>) -> Self {
        Self {
            step,
            status: Status::Failed(reason.into()),
        }
    }

    pub fn skipped(step: Step, reason: impl Into<String>) -> Self {
        Self {
            step,
            status: Status::Skipped(reason.into()),
        }
    }

    /// Failures keep their whole context chain as the reason
    pub fn from_result<T>(step: Step, result: &anyhow::Result<T>) -> Self {
        match result {
            Ok(_) => Self::succeeded(step),
            Err(e) => Self::failed(step, format!("{e:#}")),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, Status::Failed(_))
    }
}

#[derive(Debug, Default)]
pub struct Report {
    outcomes: Vec<StepOutcome>,
}

impl Report {
    pub fn push(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn status_of(&self, step: Step) -> Option<&Status> {
        self.outcomes
            .iter()
            .find(|o| o.step == step)
            .map(|o| &o.status)
    }

    pub fn log_summary(&self) {
        info!("{}", style("Summary:").bold());
        for outcome in &self.outcomes {
            match &outcome.status {
                Status::Succeeded => info!("  ✔ {}", style(outcome.step).green()),
                Status::Skipped(reason) => info!(
                    "  ⏭ {} {}",
                    style(outcome.step).dim(),
                    style(format!("skipped ({reason})")).dim()
                ),
                Status::Failed(reason) => {
                    error!("{}: {}", style(outcome.step).bold().red(), reason)
                }
            }
        }
    }
}
