//! File access for csvrec
//!
//! The codecs work on whole text blobs; this crate obtains those blobs from
//! local files or stdin and persists rendered text to files or stdout.
//!
//! # Source Types
//!
//! - **Local**: A file on the local filesystem
//! - **Stdin / Stdout**: Selected with `-`
//!
//! # Example
//!
//! ```ignore
//! use csv_types::{ReadOptions, WriteOptions};
//! use csvrec_file::{read_csv, write_csv};
//!
//! let records = read_csv("people.csv", &ReadOptions::default()).await?;
//! let path = write_csv(&records, "people.tsv", &WriteOptions::default().with_separator('\t')).await?;
//! ```

mod local;
mod stdio;

use anyhow::{Context, Result};
use csv_types::{ReadOptions, WriteOptions};
use record_core::Record;
use std::path::{Path, PathBuf};
use tracing::info;

pub use local::{LocalFileReader, LocalFileWriter};

/// Name that selects stdin or stdout instead of a file
pub const STDIO_NAME: &str = "-";

/// Where input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Local filesystem path
    Local(PathBuf),
    /// Standard input
    Stdin,
}

impl FileSource {
    /// Parse a command-line argument into a FileSource
    ///
    /// - `-` -> Stdin
    /// - Everything else -> Local
    pub fn parse(arg: &str) -> Self {
        if arg == STDIO_NAME {
            FileSource::Stdin
        } else {
            FileSource::Local(PathBuf::from(arg))
        }
    }

    /// Read the whole source as UTF-8 text
    pub async fn read_to_string(&self) -> Result<String> {
        match self {
            FileSource::Local(path) => LocalFileReader::read_to_string(path).await,
            FileSource::Stdin => stdio::read_stdin().await,
        }
    }

    /// Get a display name for logging
    pub fn display_name(&self) -> String {
        match self {
            FileSource::Local(path) => path.display().to_string(),
            FileSource::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Where output text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSink {
    /// Local filesystem path
    Local(PathBuf),
    /// Standard output
    Stdout,
}

impl FileSink {
    /// Parse an optional `--output` argument; absent or `-` means stdout
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            None => FileSink::Stdout,
            Some(STDIO_NAME) => FileSink::Stdout,
            Some(path) => FileSink::Local(PathBuf::from(path)),
        }
    }

    /// Write the whole text, replacing any existing file
    pub async fn write_str(&self, text: &str) -> Result<()> {
        match self {
            FileSink::Local(path) => LocalFileWriter::write(path, text).await,
            FileSink::Stdout => stdio::write_stdout(text).await,
        }
    }

    /// Get a display name for logging
    pub fn display_name(&self) -> String {
        match self {
            FileSink::Local(path) => path.display().to_string(),
            FileSink::Stdout => "<stdout>".to_string(),
        }
    }
}

/// Read a delimited-text file into records
pub async fn read_csv(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = LocalFileReader::read_to_string(path).await?;
    let records = csv_types::read(&text, options)
        .with_context(|| format!("Failed to parse delimited text from {}", path.display()))?;
    info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Render records and write them to a file, returning the written path
pub async fn write_csv(
    records: &[Record],
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let text = csv_types::write(records, options).context("Failed to render records")?;
    LocalFileWriter::write(path, &text).await?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(FileSource::parse("-"), FileSource::Stdin);
        assert_eq!(
            FileSource::parse("/data/file.csv"),
            FileSource::Local(PathBuf::from("/data/file.csv"))
        );
    }

    #[test]
    fn test_parse_sink() {
        assert_eq!(FileSink::parse(None), FileSink::Stdout);
        assert_eq!(FileSink::parse(Some("-")), FileSink::Stdout);
        assert_eq!(
            FileSink::parse(Some("out.tsv")),
            FileSink::Local(PathBuf::from("out.tsv"))
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(FileSource::Stdin.display_name(), "<stdin>");
        assert_eq!(FileSink::Stdout.display_name(), "<stdout>");
        assert_eq!(
            FileSource::parse("a/b.csv").display_name(),
            Path::new("a/b.csv").display().to_string()
        );
    }
}
