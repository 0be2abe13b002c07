use crate::core::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Writes rendered pages under a base directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("site");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        storage
            .write_file("nested/index.html", b"<p>hi</p>")
            .await
            .unwrap();

        assert!(base.join("nested/index.html").exists());
        let data = storage.read_file("nested/index.html").await.unwrap();
        assert_eq!(data, b"<p>hi</p>");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("nope.html").await.unwrap_err();
        assert!(matches!(err, crate::utils::error::ProfileError::IoError(_)));
    }
}
