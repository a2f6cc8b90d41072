use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.resolve(path))?;
        Ok(data)
    }

    /// Replaces the file atomically: the data goes to a sibling temp file which is then
    /// renamed over the target, keeping the target's permissions. Symlinks are written
    /// through, so the file they point at is the one replaced.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut full_path = self.resolve(path);
        if full_path.exists() {
            full_path = fs::canonicalize(&full_path)?;
        }

        let parent = match full_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;

        if let Ok(metadata) = fs::metadata(&full_path) {
            temp_file.as_file().set_permissions(metadata.permissions())?;
        }

        temp_file.persist(&full_path).map_err(|e| e.error)?;
        tracing::debug!("Replaced {}", full_path.display());
        Ok(())
    }

    async fn copy_file(&self, from: &str, to: &str) -> Result<()> {
        fs::copy(self.resolve(from), self.resolve(to))?;
        Ok(())
    }
}
