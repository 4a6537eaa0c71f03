use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::template_variables::PromptSlot;

/// Ask one question on the terminal, an empty answer takes the default.
/// Fails when stdin/stderr is not a terminal.
pub fn answer(slot: &PromptSlot) -> Result<String> {
    user_question(slot.prompt, &slot.default)
}

pub fn user_question(prompt: &str, default: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_owned())
        .interact()
        .map_err(Into::<anyhow::Error>::into)
}
