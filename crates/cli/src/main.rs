//! Command-line entry point.
//!
//! Introspects a GraphQL endpoint (or loads a pre-fetched introspection JSON
//! document), generates one operation per root field, and writes the
//! resulting document to disk in a single pass once the full buffer is
//! ready.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use opgen_generate::{generate_document, DepthLimit, GenerateOptions, DEFAULT_DEPTH};
use opgen_introspect::{load_schema_file, IntrospectionClient, SchemaDescription};

#[derive(Parser)]
#[command(name = "opgen")]
#[command(about = "Generate one GraphQL operation per root field of an endpoint's schema")]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// GraphQL endpoint URL to introspect
    #[arg(value_name = "URL", required_unless_present = "schema_json")]
    url: Option<String>,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "query.graphql")]
    output: PathBuf,

    /// Maximum selection depth; 0 disables the numeric bound and relies on
    /// cycle detection alone
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Pre-fetched introspection JSON file to use instead of a live endpoint
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    schema_json: Option<PathBuf>,

    /// HTTP headers to send with the introspection request, as
    /// "Header-Name: Header-Value" (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    headers: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Number of retry attempts on transient failure
    #[arg(long, default_value_t = 0)]
    retry: u32,

    /// Skip the GraphQL pretty-printer
    #[arg(long)]
    no_format: bool,

    /// Suppress informational output
    #[arg(short, long)]
    quiet: bool,

    /// Force colored output even when not a TTY
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let start = Instant::now();

    if !cli.quiet {
        if let Some(url) = &cli.url {
            eprintln!("Fetching schema from {url}...");
        }
    }

    let schema = load_schema(&cli).await?;
    tracing::debug!(types = schema.types.len(), "Schema loaded");

    let options = GenerateOptions {
        depth: DepthLimit::from_flag(cli.depth),
        format: !cli.no_format,
    };
    let output = generate_document(&schema, options)?;

    // One write, after the full buffer (or its fallback) is ready: no
    // partial file is ever left behind.
    std::fs::write(&cli.output, &output.text)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    if output.reduced_depth {
        eprintln!(
            "{} formatting failed; regenerated the document at depth {DEFAULT_DEPTH}",
            "warning:".yellow()
        );
    } else if !output.formatted && !cli.no_format && output.operations > 0 {
        eprintln!(
            "{} formatting failed; wrote the raw document instead",
            "warning:".yellow()
        );
    }

    if !cli.quiet {
        println!(
            "{} Wrote {} operations to {} ({:.2}s)",
            "✓".green(),
            output.operations,
            cli.output.display().to_string().cyan(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// Loads the schema description from whichever source was requested.
async fn load_schema(cli: &Cli) -> Result<SchemaDescription> {
    if let Some(path) = &cli.schema_json {
        return load_schema_file(path)
            .with_context(|| format!("Failed to load schema from {}", path.display()));
    }

    // clap guarantees the URL is present when --schema-json is not.
    let url = cli
        .url
        .as_deref()
        .context("an endpoint URL or --schema-json is required")?;

    let mut client = IntrospectionClient::new()
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_retries(cli.retry);
    for header in &cli.headers {
        let (name, value) = parse_header(header).context("Failed to parse headers")?;
        client = client.with_header(name, value);
    }

    client
        .execute(url)
        .await
        .with_context(|| format!("Failed to fetch schema from {url}"))
}

/// Parses a header string in "Name: Value" format.
fn parse_header(header: &str) -> Result<(String, String)> {
    let Some((name, value)) = header.split_once(':') else {
        anyhow::bail!("Invalid header '{header}'. Expected 'Header-Name: Header-Value'");
    };
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Header name cannot be empty");
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output from the flags and the `NO_COLOR` convention.
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color || std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    }
    // Otherwise let the colored crate decide based on TTY detection.
}
