use anyhow::{Context, Result};
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::errors::ScaffoldError;

/// deals with `~/` and `$HOME/` prefixes, and makes relative paths absolute.
/// The path does not need to exist.
pub fn absolute_path(p: impl AsRef<Path>) -> Result<PathBuf> {
    let p = p.as_ref();
    let p = if p.starts_with("~/") {
        home()?.join(p.strip_prefix("~/")?)
    } else if p.starts_with("$HOME/") {
        home()?.join(p.strip_prefix("$HOME/")?)
    } else {
        p.to_path_buf()
    };

    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(std::env::current_dir()
            .context("cannot read the current directory")?
            .join(p))
    }
}

/// home path wrapper
pub fn home() -> Result<PathBuf> {
    home::home_dir().context("$HOME was not set")
}

/// Human readable form of a command, for messages
pub fn describe_command(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command to completion with its output captured.
/// A missing program and a non-zero exit are both errors.
pub fn run_command(cmd: &mut Command) -> Result<Output> {
    let command = describe_command(cmd);
    debug!("running `{command}`");
    let output = match cmd.stdin(Stdio::null()).output() {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScaffoldError::ProgramNotFound {
                program: cmd.get_program().to_string_lossy().into_owned(),
            }
            .into())
        }
        Err(e) => return Err(e).with_context(|| format!("cannot run `{command}`")),
    };

    if !output.status.success() {
        return Err(ScaffoldError::CommandFailed {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }
    Ok(output)
}

pub fn is_program_not_found(e: &anyhow::Error) -> bool {
    matches!(
        e.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::ProgramNotFound { .. })
    )
}
