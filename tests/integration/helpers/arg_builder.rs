use std::path::Path;
use std::process::Command;

pub trait BinaryArgs {
    fn arg_name(&mut self, name: impl AsRef<str>) -> &mut Self;
    fn arg_author(&mut self, author: impl AsRef<str>) -> &mut Self;
    fn arg_define(&mut self, define: impl AsRef<str>) -> &mut Self;
    fn arg_values_file(&mut self, path: impl AsRef<Path>) -> &mut Self;
    fn arg_destination(&mut self, path: impl AsRef<Path>) -> &mut Self;
    fn skip_install(&mut self) -> &mut Self;
    fn skip_git(&mut self) -> &mut Self;
    /// no install, no repository, files only
    fn files_only(&mut self) -> &mut Self;
}

impl BinaryArgs for Command {
    fn arg_name(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.arg("--name").arg(name.as_ref())
    }

    fn arg_author(&mut self, author: impl AsRef<str>) -> &mut Self {
        self.arg("--author").arg(author.as_ref())
    }

    fn arg_define(&mut self, define: impl AsRef<str>) -> &mut Self {
        self.arg("--define").arg(define.as_ref())
    }

    fn arg_values_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.arg("--values-file").arg(path.as_ref())
    }

    fn arg_destination(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.arg("--destination").arg(path.as_ref())
    }

    fn skip_install(&mut self) -> &mut Self {
        self.arg("--skip-install")
    }

    fn skip_git(&mut self) -> &mut Self {
        self.arg("--skip-git")
    }

    fn files_only(&mut self) -> &mut Self {
        self.skip_install().skip_git()
    }
}
