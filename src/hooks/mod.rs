//! Steps run once the project files are written

mod install;

use console::style;
use log::info;

use crate::git::{self, InitMethod};
use crate::report::{Report, Step, StepOutcome};
use crate::template_variables::ProjectDir;
use crate::user_parsed_input::UserParsedInput;

use install::install_dev_dependencies;

/// Install the dev dependencies, then initialize the repository. Each step is
/// attempted regardless of how the previous one went.
pub fn run_post_generation(
    project_dir: &ProjectDir,
    user_parsed_input: &UserParsedInput,
    report: &mut Report,
) {
    if !project_dir.exists() {
        skip_post_generation(report, &format!("`{project_dir}` does not exist"));
        return;
    }

    report.push(install_step(project_dir, user_parsed_input));
    report.push(git_step(project_dir, user_parsed_input));
}

pub fn skip_post_generation(report: &mut Report, reason: &str) {
    report.push(StepOutcome::skipped(Step::Install, reason));
    report.push(StepOutcome::skipped(Step::Git, reason));
}

fn install_step(project_dir: &ProjectDir, user_parsed_input: &UserParsedInput) -> StepOutcome {
    if user_parsed_input.skip_install() {
        return StepOutcome::skipped(Step::Install, "--skip-install");
    }
    let result = install_dev_dependencies(
        user_parsed_input.package_manager(),
        project_dir.as_ref(),
        user_parsed_input.is_verbose(),
    );
    StepOutcome::from_result(Step::Install, &result)
}

fn git_step(project_dir: &ProjectDir, user_parsed_input: &UserParsedInput) -> StepOutcome {
    if user_parsed_input.skip_git() {
        return StepOutcome::skipped(Step::Git, "--skip-git");
    }
    info!("🔧 {}", style("Initializing git repository ...").bold().yellow());
    let result = git::init_repository(project_dir.as_ref());
    if let Ok(InitMethod::Libgit2) = result {
        info!("`git` not found, repository initialized with libgit2");
    }
    StepOutcome::from_result(Step::Git, &result)
}
