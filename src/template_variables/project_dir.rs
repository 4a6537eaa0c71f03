use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use console::style;
use log::warn;

use crate::errors::ScaffoldError;

/// Root of the generated project: `<destination>/<project name>`
#[derive(Debug, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    /// The project name is used verbatim as the directory name
    pub fn new(destination: &Path, project_name: &str) -> Self {
        Self(destination.join(project_name))
    }

    pub fn exists(&self) -> bool {
        self.0.is_dir()
    }

    /// Make sure the directory exists. Files already in it are left alone and get
    /// overwritten later, unless `overwrite` is off and the directory has content.
    pub fn create(&self, overwrite: bool) -> Result<()> {
        let path = self.0.as_path();
        if !is_empty_or_missing(path)? {
            if !overwrite {
                return Err(ScaffoldError::DestinationExists(path.to_path_buf()).into());
            }
            warn!(
                "{}",
                style(format!(
                    "Overwriting files in existing directory: {}",
                    path.display()
                ))
                .bold()
                .yellow()
            );
        }
        fs::create_dir_all(path)
            .with_context(|| format!("cannot create directory `{}`", path.display()))?;
        Ok(())
    }
}

fn is_empty_or_missing(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let mut entries =
        fs::read_dir(path).with_context(|| format!("cannot read `{}`", path.display()))?;
    Ok(entries.next().is_none())
}
