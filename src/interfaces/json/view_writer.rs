use crate::interfaces::view::View;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One rendered screen, emitted after an action has been dispatched.
#[derive(Debug, Serialize)]
pub struct SessionEvent<'a> {
    pub action: &'a str,
    pub step: u8,
    pub outcome: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<&'a str>,
    pub view: View,
}

/// Writes session events as JSON lines.
pub struct ViewWriter<W: Write> {
    writer: W,
}

impl<W: Write> ViewWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_event(&mut self, event: &SessionEvent<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
