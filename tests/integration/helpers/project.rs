use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct Project {
    pub root: TempDir,
}

impl Project {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn read(&self, path: &str) -> String {
        let path = self.path().join(path);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("cannot read file {path:?}"))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.path().join(path).exists()
    }

    pub fn target_path(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// names of the entries directly below the root
    pub fn entries(&self) -> Vec<String> {
        let mut entries: Vec<_> = fs::read_dir(self.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        entries
    }
}
