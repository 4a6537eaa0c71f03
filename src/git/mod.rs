use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use std::process::Command;

use crate::utils::{is_program_not_found, run_command};

/// How the repository came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMethod {
    /// `git init --quiet`
    GitCli,
    /// libgit2, used when no `git` executable is around
    Libgit2,
}

/// Initialize a git repository in `project_root`. Output of `git` is swallowed.
pub fn init_repository(project_root: &Path) -> Result<InitMethod> {
    let mut cmd = Command::new("git");
    cmd.args(["init", "--quiet"]).current_dir(project_root);
    match run_command(&mut cmd) {
        Ok(_) => Ok(InitMethod::GitCli),
        Err(e) if is_program_not_found(&e) => {
            debug!("{e}, falling back to libgit2");
            init_with_libgit2(project_root)?;
            Ok(InitMethod::Libgit2)
        }
        Err(e) => Err(e),
    }
}

pub fn init_with_libgit2(project_root: &Path) -> Result<()> {
    git2::Repository::init(project_root).with_context(|| {
        format!(
            "cannot initialize a git repository in `{}`",
            project_root.display()
        )
    })?;
    Ok(())
}
