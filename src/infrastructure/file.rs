use crate::domain::ports::Clipboard;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A clipboard backed by a file, overwritten on every copy.
///
/// Lets a headless session hand the copied PIX code to another process.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    /// # Arguments
    ///
    /// * `path` - The file receiving the copied text. Its parent directory must exist.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl Clipboard for FileClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        tokio::fs::write(&self.path, text).await.map_err(|e| {
            CheckoutError::ClipboardError(format!("{}: {e}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_clipboard_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clipboard.txt");
        let clipboard = FileClipboard::new(&path);

        clipboard.write_text("first code").await.unwrap();
        clipboard.write_text("second").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_file_clipboard_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let clipboard = FileClipboard::new(dir.path().join("missing").join("clipboard.txt"));

        assert!(matches!(
            clipboard.write_text("code").await,
            Err(CheckoutError::ClipboardError(_))
        ));
    }
}
