use crate::core::AssetStore;
use crate::utils::error::{AstroError, Result};
use std::path::{Component, Path, PathBuf};

/// 本地檔案系統上的靜態資源目錄
#[derive(Debug, Clone)]
pub struct LocalAssets {
    base_path: PathBuf,
}

impl LocalAssets {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// 只允許一般的相對路徑，拒絕 `..`、絕對路徑與 NUL
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let invalid = |reason: &str| AstroError::InvalidAssetPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(invalid("path is empty"));
        }
        if path.contains('\0') {
            return Err(invalid("path contains null bytes"));
        }

        let relative = Path::new(path);
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => return Err(invalid("parent directory is not allowed")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("absolute paths are not allowed"))
                }
            }
        }

        Ok(self.base_path.join(relative))
    }
}

impl AssetStore for LocalAssets {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path)?;
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("css")).unwrap();
        std::fs::write(temp_dir.path().join("css/site.css"), "body {}").unwrap();

        let assets = LocalAssets::new(temp_dir.path());
        let data = assets.read_file("css/site.css").await.unwrap();
        assert_eq!(data, b"body {}");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let assets = LocalAssets::new(temp_dir.path());

        let err = assets.read_file("nope.js").await.unwrap_err();
        assert!(matches!(err, AstroError::IoError(_)));
    }

    #[tokio::test]
    async fn test_traversal_is_rejected() {
        let assets = LocalAssets::new("static");

        for path in ["../Cargo.toml", "css/../../secret", "/etc/passwd", "", "a\0b"] {
            let err = assets.read_file(path).await.unwrap_err();
            assert!(
                matches!(err, AstroError::InvalidAssetPath { .. }),
                "{:?} should be rejected",
                path
            );
        }
    }
}
