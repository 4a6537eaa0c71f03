use anyhow::Result;
use console::style;
use log::{debug, info};
use std::path::Path;
use std::process::Command;

use crate::args::PackageManager;
use crate::utils::run_command;

/// Needed to build and lint the generated project, never at runtime
pub const DEV_DEPENDENCIES: [&str; 2] = ["@types/node", "tslint-config-prettier"];

impl PackageManager {
    pub fn program(&self) -> &'static str {
        // on windows the node tools are `.cmd` shims that Command won't resolve alone
        match (self, cfg!(windows)) {
            (PackageManager::Npm, false) => "npm",
            (PackageManager::Npm, true) => "npm.cmd",
            (PackageManager::Yarn, false) => "yarn",
            (PackageManager::Yarn, true) => "yarn.cmd",
            (PackageManager::Pnpm, false) => "pnpm",
            (PackageManager::Pnpm, true) => "pnpm.cmd",
            (PackageManager::Bun, _) => "bun",
        }
    }

    fn install_dev_args(&self) -> [&'static str; 2] {
        match self {
            PackageManager::Npm => ["install", "--save-dev"],
            PackageManager::Yarn => ["add", "--dev"],
            PackageManager::Pnpm => ["add", "--save-dev"],
            PackageManager::Bun => ["add", "--dev"],
        }
    }

    /// The install command, to be run with the project root as working directory
    pub fn install_dev_command(&self, project_root: &Path, packages: &[&str]) -> Command {
        let mut cmd = Command::new(self.program());
        cmd.args(self.install_dev_args())
            .args(packages)
            .current_dir(project_root);
        cmd
    }
}

/// Add the dev dependencies to the project manifest
pub fn install_dev_dependencies(
    package_manager: PackageManager,
    project_root: &Path,
    show_output: bool,
) -> Result<()> {
    info!(
        "📦 {} {}",
        style("Installing").bold(),
        style(DEV_DEPENDENCIES.join(", ")).bold().yellow()
    );
    let mut cmd = package_manager.install_dev_command(project_root, &DEV_DEPENDENCIES);
    let output = run_command(&mut cmd)?;
    if show_output {
        debug!("{}", String::from_utf8_lossy(&output.stdout).trim_end());
    }
    Ok(())
}
