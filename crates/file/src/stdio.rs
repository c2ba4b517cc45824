//! Standard input and output

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub(crate) async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read stdin")?;
    Ok(text)
}

pub(crate) async fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(text.as_bytes())
        .await
        .context("Failed to write stdout")?;
    if !text.is_empty() && !text.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await.context("Failed to flush stdout")?;
    Ok(())
}
