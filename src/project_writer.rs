use anyhow::{Context, Result};
use console::style;
use indicatif::ProgressBar;
use liquid::Parser;
use liquid_core::Object;
use log::{debug, error};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::ScaffoldError;
use crate::progressbar;
use crate::template::{create_liquid_engine, create_liquid_object, render_template};
use crate::template_store::{Template, TEMPLATES};
use crate::template_variables::{Answers, ProjectDir};

/// Write every bundled template into the project directory.
///
/// Files are attempted one by one; a file that cannot be written does not stop the
/// others. Returns the written paths, or an error naming every file that failed.
pub fn write_project(
    project_dir: &ProjectDir,
    answers: &Answers,
    overwrite: bool,
) -> Result<Vec<PathBuf>> {
    project_dir.create(overwrite)?;

    let liquid_engine = create_liquid_engine()?;
    let liquid_object = create_liquid_object(answers);

    let mp = progressbar::new();
    let spinner_style = progressbar::spinner()?;
    let total = TEMPLATES.len().to_string();

    let mut written = Vec::with_capacity(TEMPLATES.len());
    let mut failed = Vec::new();
    for (progress, template) in TEMPLATES.iter().enumerate() {
        let pb = mp.add(ProgressBar::new(50));
        pb.set_style(spinner_style.clone());
        pb.set_prefix(format!(
            "[{:width$}/{}]",
            progress + 1,
            total,
            width = total.len()
        ));
        pb.set_message(format!("Processing: {}", template.destination));

        match write_template(
            template,
            project_dir.as_ref(),
            &liquid_engine,
            &liquid_object,
        ) {
            Ok(path) => {
                pb.finish_with_message(format!("Done: {}", template.destination));
                debug!("wrote {} ({})", path.display(), template.name);
                written.push(path);
            }
            Err(e) => {
                pb.abandon_with_message(format!("Failed: {}", template.destination));
                error!(
                    "{} `{}`: {e:#}",
                    style("Error writing").bold().red(),
                    style(template.destination).bold()
                );
                failed.push(template.destination.to_string());
            }
        }
    }

    if failed.is_empty() {
        Ok(written)
    } else {
        Err(ScaffoldError::WriteFailed(failed).into())
    }
}

fn write_template(
    template: &Template,
    project_root: &Path,
    parser: &Parser,
    context: &Object,
) -> Result<PathBuf> {
    let contents = render_template(template, parser, context)?;
    let path = template.destination_in(project_root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create directory `{}`", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("cannot write `{}`", path.display()))?;
    Ok(path)
}
