use crate::domain::ports::{Clipboard, FallbackClipboard};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// A clipboard buffer held in memory.
///
/// Serves as the synchronous fallback copy mechanism and, in tests, as the
/// asynchronous clipboard. `Clone` shares the underlying buffer so a test can
/// keep a handle on what was copied.
#[derive(Default, Clone)]
pub struct InMemoryClipboard {
    contents: Arc<RwLock<Option<String>>>,
    failing: bool,
}

impl InMemoryClipboard {
    /// Creates a new, empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Returns the last copied text.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|c| c.clone())
    }

    fn store(&self, text: &str) -> Result<()> {
        if self.failing {
            return Err(CheckoutError::ClipboardError(
                "clipboard rejected the write".to_string(),
            ));
        }
        let mut contents = self
            .contents
            .write()
            .map_err(|_| CheckoutError::ClipboardError("clipboard lock poisoned".to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[async_trait]
impl Clipboard for InMemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        self.store(text)
    }
}

impl FallbackClipboard for InMemoryClipboard {
    fn copy_text(&self, text: &str) -> Result<()> {
        self.store(text)
    }
}
