use std::fs;
use std::path::Path;

use crate::error::Result;

/// Write `body` to `path` verbatim, replacing any existing content.
pub(crate) fn write_text(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body)?;
    Ok(())
}
