use anyhow::Context;
use std::path::{Path, PathBuf};

/// Reads input files relative to the session's working directory
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    fn resolve(&self, file_path: &Path) -> anyhow::Result<PathBuf> {
        let full_path = self.path.join(file_path);

        if !full_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", file_path);
        }
        if full_path.is_dir() {
            anyhow::bail!("The specified path is a directory: {:?}", file_path);
        }

        Ok(full_path)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        std::fs::read_to_string(self.resolve(file_path)?)
            .with_context(|| format!("Failed to read file {:?}", file_path))
    }

    pub fn read_bytes(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        std::fs::read(self.resolve(file_path)?)
            .with_context(|| format!("Failed to read file {:?}", file_path))
    }

    /// File content split into lines, each keeping its terminator
    ///
    /// Only the last line can lack a `\n`, so a missing final newline or a
    /// `\r\n` ending makes lines differ from their plain counterparts.
    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<String>> {
        Ok(self
            .read_file(file_path)?
            .split_inclusive('\n')
            .map(str::to_string)
            .collect())
    }
}
