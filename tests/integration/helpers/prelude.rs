pub use crate::helpers::arg_builder::BinaryArgs;
pub use crate::helpers::project_builder::tempdir;
pub use crate::helpers::GENERATED_FILES;
pub use assert_cmd::prelude::*;
pub use indoc::indoc;
pub use predicates::prelude::*;
pub use std::process::Command;

pub fn binary() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}
