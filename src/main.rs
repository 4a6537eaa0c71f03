/// Main file
mod app_log;
mod args;
mod errors;
mod git;
mod hooks;
mod interactive;
mod progressbar;
mod project_writer;
mod report;
mod template;
mod template_store;
mod template_variables;
mod user_parsed_input;
mod utils;

use app_log::log_env_init;
use args::*;
use errors::ScaffoldError;
use report::{Report, Status, Step, StepOutcome};
use template_variables::ProjectDir;
use user_parsed_input::UserParsedInput;

use anyhow::{bail, Result};
use console::style;
use log::info;

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);

    let report = generate(&args, interactive::answer)?;
    report.log_summary();

    let failed = report.failures().count();
    if failed > 0 {
        bail!("{failed} step(s) failed, see above");
    }
    Ok(())
}

/// To generate a TypeScript project. Only unusable arguments fail here, every
/// later problem ends up in the returned report.
fn generate(
    args: &AppArgs,
    prompt: impl FnMut(&template_variables::PromptSlot) -> Result<String>,
) -> Result<Report> {
    let user_parsed_input = UserParsedInput::try_from_args(args)?;
    let mut report = Report::default();

    let (answers, prompt_outcome) = template_variables::get_answers(&user_parsed_input, prompt);
    report.push(prompt_outcome);

    let destination = ProjectDir::new(user_parsed_input.destination(), &answers.project_name);
    info!(
        "🔧 {}",
        style(format!("Destination: {destination} ..."))
            .bold()
            .yellow()
    );
    info!("🔧 {}", style("Generating project files ...").bold().yellow());
    let written =
        project_writer::write_project(&destination, &answers, user_parsed_input.overwrite());
    report.push(StepOutcome::from_result(Step::Write, &written));

    if refused_existing_directory(&written) {
        hooks::skip_post_generation(&mut report, "project directory left untouched");
    } else {
        hooks::run_post_generation(&destination, &user_parsed_input, &mut report);
    }

    if report.status_of(Step::Write) == Some(&Status::Succeeded) {
        info!(
            "✨ {} {} {}",
            style("Done!").bold().green(),
            style("New project created").bold(),
            style(&destination).underlined()
        );
    }
    Ok(report)
}

fn refused_existing_directory<T>(written: &Result<T>) -> bool {
    matches!(
        written
            .as_ref()
            .err()
            .and_then(|e| e.downcast_ref::<ScaffoldError>()),
        Some(ScaffoldError::DestinationExists(_))
    )
}
