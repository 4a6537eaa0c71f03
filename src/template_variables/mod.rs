mod project_dir;
pub mod project_name;

use anyhow::Result;
use console::style;
use log::{info, warn};

use crate::report::{Step, StepOutcome};
use crate::user_parsed_input::UserParsedInput;

pub use project_dir::ProjectDir;

pub const DEFAULT_AUTHOR_NAME: &str = "Your Name <you@example.com>";

/// The two answers a project is generated from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub author_name: String,
}

/// A question to put to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSlot {
    pub var_name: &'static str,
    pub prompt: &'static str,
    pub default: String,
}

/// Resolve both answers. Values supplied up front win, then the prompt, then the
/// default. A failing prompt falls back to the default and is reported, it never
/// stops the run.
pub fn get_answers(
    user_parsed_input: &UserParsedInput,
    mut prompt: impl FnMut(&PromptSlot) -> Result<String>,
) -> (Answers, StepOutcome) {
    let mut prompted = false;
    let mut failures = Vec::new();

    let mut resolve = |provided: Option<&str>, slot: PromptSlot| -> String {
        if let Some(value) = provided {
            return value.to_string();
        }
        if user_parsed_input.silent() {
            return slot.default;
        }
        prompted = true;
        match prompt(&slot) {
            Ok(value) if !value.trim().is_empty() => value,
            Ok(_) => slot.default,
            Err(e) => {
                warn!(
                    "{} {}, using `{}`",
                    style(format!("Cannot ask for {}:", slot.var_name)).bold(),
                    e,
                    style(&slot.default).yellow()
                );
                failures.push(format!("{}: {e:#}", slot.var_name));
                slot.default
            }
        }
    };

    let project_name = resolve(
        user_parsed_input.name(),
        PromptSlot {
            var_name: "project name",
            prompt: "🤷 Project name",
            default: project_name::default_project_name(),
        },
    );
    let author_name = resolve(
        user_parsed_input.author(),
        PromptSlot {
            var_name: "author name",
            prompt: "🤷 Author name (Bob Marley <bob@marley.com>)",
            default: DEFAULT_AUTHOR_NAME.to_string(),
        },
    );

    info!(
        "🔧 {}",
        style(format!("Generating the TS project with name = {project_name}"))
            .bold()
            .yellow()
    );

    let outcome = if !failures.is_empty() {
        StepOutcome::failed(Step::Prompt, failures.join("; "))
    } else if prompted {
        StepOutcome::succeeded(Step::Prompt)
    } else if user_parsed_input.silent() {
        StepOutcome::skipped(Step::Prompt, "silent mode")
    } else {
        StepOutcome::skipped(Step::Prompt, "answers supplied")
    };

    (
        Answers {
            project_name,
            author_name,
        },
        outcome,
    )
}
