//! Command-line interface for csvrec
//!
//! # Usage Examples
//!
//! ## Delimited text to JSON
//! ```bash
//! # Separator detected from the header line, types inferred per cell
//! csvrec to-json people.csv --pretty
//!
//! # Semicolon separated, comma inside array cells, declared column types
//! csvrec to-json people.csv \
//!   --separator semicolon \
//!   --array-separator comma \
//!   --mapping-file mapping.yaml \
//!   --output people.json
//! ```
//!
//! ## JSON to delimited text
//! ```bash
//! csvrec to-csv people.json --separator tab --fields Id,Name,Born
//! ```
//!
//! ## Mapping File Format
//! ```yaml
//! Id: number
//! Joined:
//!   type: date
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use csvrec::config::separator_name;
use csvrec::file::{FileSink, FileSource};
use csvrec::{ReadArgs, WriteArgs};

#[derive(Parser)]
#[command(name = "csvrec")]
#[command(about = "Convert delimited text (CSV/TSV) to and from typed records")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse delimited text and print the records as a JSON array
    ToJson {
        /// Input file, or `-` for stdin
        input: String,

        /// Reader options
        #[command(flatten)]
        read_opts: ReadArgs,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Read a JSON array of objects and render it as delimited text
    ToCsv {
        /// Input file, or `-` for stdin
        input: String,

        /// Writer options
        #[command(flatten)]
        write_opts: WriteArgs,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Print the separator detected from the first line
    Detect {
        /// Input file, or `-` for stdin
        input: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries data
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ToJson {
            input,
            read_opts,
            output,
            pretty,
        } => run_to_json(&input, &read_opts, output.as_deref(), pretty).await,
        Commands::ToCsv {
            input,
            write_opts,
            output,
        } => run_to_csv(&input, &write_opts, output.as_deref()).await,
        Commands::Detect { input } => run_detect(&input).await,
    }
}

async fn run_to_json(
    input: &str,
    read_opts: &ReadArgs,
    output: Option<&str>,
    pretty: bool,
) -> anyhow::Result<()> {
    let source = FileSource::parse(input);
    let sink = FileSink::parse(output);
    let options = read_opts.to_options()?;

    tracing::info!(
        "Converting {} to JSON ({})",
        source.display_name(),
        sink.display_name()
    );

    let text = source.read_to_string().await?;
    let records = csvrec::csv::read(&text, &options)
        .with_context(|| format!("Failed to parse {}", source.display_name()))?;
    tracing::info!("Parsed {} records", records.len());

    let json = csvrec::json::records_to_json(&records);
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    sink.write_str(&rendered).await
}

async fn run_to_csv(input: &str, write_opts: &WriteArgs, output: Option<&str>) -> anyhow::Result<()> {
    let source = FileSource::parse(input);
    let sink = FileSink::parse(output);

    tracing::info!(
        "Converting {} to delimited text ({})",
        source.display_name(),
        sink.display_name()
    );

    let text = source.read_to_string().await?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse JSON from {}", source.display_name()))?;
    let records = csvrec::json::json_to_records(&json)?;
    tracing::info!("Loaded {} records", records.len());

    let rendered = csvrec::csv::write(&records, &write_opts.into())?;
    sink.write_str(&rendered).await
}

async fn run_detect(input: &str) -> anyhow::Result<()> {
    let source = FileSource::parse(input);
    let text = source.read_to_string().await?;
    let first_line = text.split('\n').next().unwrap_or_default();

    let sep = csvrec::csv::detect_separator(first_line)
        .with_context(|| format!("Failed to detect separator in {}", source.display_name()))?;
    println!("{}", separator_name(sep));
    Ok(())
}
