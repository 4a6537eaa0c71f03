use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("project directory `{}` already exists and is not empty, aborting", .0.display())]
    DestinationExists(PathBuf),
    #[error("`{program}` was not found, is it installed and on the PATH?")]
    ProgramNotFound { program: String },
    #[error("`{command}` failed with {status}{}", stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("{} of the project files could not be written: {}", .0.len(), .0.join(", "))]
    WriteFailed(Vec<String>),
    #[error("cannot parse values file `{}`: {source}", .path.display())]
    ValuesFile {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("value `{value}` of `{var_name}` in the values file should be a string")]
    ValuesFileType { var_name: String, value: String },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
