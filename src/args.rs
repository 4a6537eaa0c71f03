use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const PROJECT_PARAMETERS: &str = "Project Parameters";
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
    pub const POST_GENERATION: &str = "Post Generation";
}

/// Tool used to install the dev dependencies of the new project
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

#[derive(Clone, Debug, Default, Parser)]
#[command(
    name = "tsbs",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Project name, also the name of the directory to create. Asked for when missing.
    #[arg(long, short, value_parser, help_heading = heading::PROJECT_PARAMETERS)]
    pub name: Option<String>,

    /// Author of the project, e.g. "Bob Marley <bob@marley.com>". Asked for when missing.
    #[arg(long, short, value_parser, help_heading = heading::PROJECT_PARAMETERS)]
    pub author: Option<String>,

    /// Define a value for use during template expansion. E.g `--define project-name=foo`
    #[arg(long, short, number_of_values = 1, value_parser, value_name = "KEY=VALUE", help_heading = heading::PROJECT_PARAMETERS)]
    pub define: Vec<String>,

    /// Pass template values through a TOML file with a `[values]` table
    #[arg(long = "values-file", value_parser, value_name = "FILE", help_heading = heading::PROJECT_PARAMETERS)]
    pub template_values_file: Option<PathBuf>,

    /// Never prompt, values that were not supplied take their defaults
    #[arg(long, short, action, help_heading = heading::PROJECT_PARAMETERS)]
    pub silent: bool,

    /// Generate the project under the given path instead of the current directory
    #[arg(long, value_parser, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Abort when the project directory already exists and is not empty, instead of
    /// overwriting the generated files in it
    #[arg(long, action, help_heading = heading::OUTPUT_PARAMETERS)]
    pub abort_if_exists: bool,

    /// Package manager used to install the dev dependencies
    #[arg(long, value_enum, default_value_t, help_heading = heading::POST_GENERATION)]
    pub package_manager: PackageManager,

    /// Do not install the dev dependencies
    #[arg(long, action, help_heading = heading::POST_GENERATION)]
    pub skip_install: bool,

    /// Do not initialize a git repository
    #[arg(long, action, help_heading = heading::POST_GENERATION)]
    pub skip_git: bool,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// To get the arguments list from terminal
pub fn resolve_args() -> AppArgs {
    AppArgs::parse()
}
