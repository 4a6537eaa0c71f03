//! Templates bundled into the binary

use std::path::Path;

/// How a template turns into a generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Written byte for byte
    Verbatim,
    /// `{{project-name}}` and `{{author-name}}` are substituted first
    Rendered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    /// Relative to the project root, always `/` separated
    pub destination: &'static str,
    pub contents: &'static str,
    pub kind: TemplateKind,
}

impl Template {
    pub fn destination_in(&self, project_root: &Path) -> std::path::PathBuf {
        self.destination
            .split('/')
            .fold(project_root.to_path_buf(), |path, part| path.join(part))
    }
}

macro_rules! bundled {
    ($name:literal, $destination:literal, $source:literal, $kind:ident) => {
        Template {
            name: $name,
            destination: $destination,
            contents: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $source)),
            kind: TemplateKind::$kind,
        }
    };
}

/// Every file of a generated project, in the order it gets written.
pub const TEMPLATES: [Template; 8] = [
    bundled!("main source", "src/main.ts", "src/main.ts", Verbatim),
    bundled!("editor settings", ".vscode/settings.json", "vscode/settings.json", Verbatim),
    bundled!("ignore file", ".gitignore", "gitignore", Verbatim),
    bundled!("license", "LICENSE", "LICENSE", Verbatim),
    bundled!("manifest", "package.json", "package.json", Rendered),
    bundled!("readme", "README.md", "README.md", Rendered),
    bundled!("compiler config", "tsconfig.json", "tsconfig.json", Verbatim),
    bundled!("linter config", "tslint.json", "tslint.json", Verbatim),
];
