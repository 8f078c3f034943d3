use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes an action script with the standard header.
pub fn action_script(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "action, value")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}
