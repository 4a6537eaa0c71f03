pub mod arg_builder;
pub mod prelude;
pub mod project;

/// The eight files every generated project is made of
pub const GENERATED_FILES: [&str; 8] = [
    "src/main.ts",
    ".vscode/settings.json",
    ".gitignore",
    "LICENSE",
    "package.json",
    "README.md",
    "tsconfig.json",
    "tslint.json",
];
