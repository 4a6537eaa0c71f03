//! Input from user but after parse

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use console::style;
use log::warn;
use serde::Deserialize;

use crate::args::{AppArgs, PackageManager};
use crate::errors::ScaffoldError;
use crate::template::{AUTHOR_NAME_VAR, PROJECT_NAME_VAR};
use crate::utils::absolute_path;

#[derive(Deserialize, Debug, PartialEq)]
struct TemplateValuesToml {
    #[serde(default)]
    values: HashMap<String, toml::Value>,
}

// Contains parsed information from user.
#[derive(Debug)]
pub struct UserParsedInput {
    name: Option<String>,
    author: Option<String>,

    destination: PathBuf,

    silent: bool,
    overwrite: bool,
    package_manager: PackageManager,
    skip_install: bool,
    skip_git: bool,
    verbose: bool,
}

impl UserParsedInput {
    /// Only a bad `--destination` or values file fails here
    pub fn try_from_args(args: &AppArgs) -> Result<Self> {
        let destination = match &args.destination {
            Some(p) => absolute_path(p).with_context(|| {
                format!("cannot get the absolute path of `{}`", p.display())
            })?,
            None => std::env::current_dir().unwrap_or_else(|_| ".".into()),
        };

        // --define wins over the values file
        let mut template_values = match &args.template_values_file {
            Some(path) => read_values_file(path)?,
            None => HashMap::new(),
        };
        for item in args.define.iter() {
            match item.split_once('=') {
                Some((k, v)) => {
                    template_values.insert(k.trim().to_string(), v.to_string());
                }
                None => warn!(
                    "{} `{}`, {}",
                    style("Ignoring define").bold(),
                    style(item).yellow(),
                    style("expected KEY=VALUE").bold()
                ),
            }
        }

        let name = non_empty(args.name.as_deref())
            .or_else(|| non_empty(template_values.get(PROJECT_NAME_VAR).map(String::as_str)))
            .map(String::from);
        let author = non_empty(args.author.as_deref())
            .or_else(|| non_empty(template_values.get(AUTHOR_NAME_VAR).map(String::as_str)))
            .map(String::from);

        Ok(Self {
            name,
            author,
            destination,
            silent: args.silent,
            overwrite: !args.abort_if_exists,
            package_manager: args.package_manager,
            skip_install: args.skip_install,
            skip_git: args.skip_git,
            verbose: args.verbose,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub const fn silent(&self) -> bool {
        self.silent
    }

    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub const fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub const fn skip_install(&self) -> bool {
        self.skip_install
    }

    pub const fn skip_git(&self) -> bool {
        self.skip_git
    }

    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn read_values_file(path: &Path) -> Result<HashMap<String, String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("cannot read values file `{}`", path.display()))?;
    let parsed: TemplateValuesToml =
        toml::from_str(&contents).map_err(|source| ScaffoldError::ValuesFile {
            path: path.to_path_buf(),
            source,
        })?;

    parsed
        .values
        .into_iter()
        .map(|(k, v)| -> Result<(String, String)> {
            match v {
                toml::Value::String(s) => Ok((k, s)),
                other => Err(ScaffoldError::ValuesFileType {
                    var_name: k,
                    value: other.to_string(),
                }
                .into()),
            }
        })
        .collect()
}
