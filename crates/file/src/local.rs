//! Local filesystem reader and writer

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Reads a whole local file into memory
pub struct LocalFileReader;

impl LocalFileReader {
    /// Read a local file as UTF-8 text
    pub async fn read_to_string(path: &Path) -> Result<String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        debug!("Read {} bytes from {}", contents.len(), path.display());
        Ok(contents)
    }
}

/// Writes a whole text blob to a local file
pub struct LocalFileWriter;

impl LocalFileWriter {
    /// Create or truncate `path` and write `text` to it
    pub async fn write(path: &Path, text: &str) -> Result<()> {
        tokio::fs::write(path, text)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}
