use anyhow::{Context, Result};
use clap::Parser;
use jsontree::{wrap_page, Limit, RenderOptions, TreeRenderer, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Render a JSON document as a collapsible HTML tree
#[derive(Debug, Parser)]
#[command(name = "jsontree", version, allow_negative_numbers = true)]
struct Cli {
    /// Input JSON file; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// JSON file with render options; flags below override it
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Levels that start expanded, the root being level 0
    #[arg(long, value_name = "N")]
    expand_depth: Option<i64>,

    /// Children shown per container (negative = unlimited)
    #[arg(long, value_name = "N")]
    max_children: Option<i64>,

    /// Characters shown per string (negative = unlimited)
    #[arg(long, value_name = "N")]
    max_string_length: Option<i64>,

    /// Deepest container level rendered (negative = unlimited)
    #[arg(long, value_name = "N")]
    max_depth: Option<i64>,

    /// Display key for the root value
    #[arg(long, value_name = "KEY")]
    root_key: Option<String>,

    /// Emit a standalone HTML page instead of a fragment
    #[arg(long)]
    page: bool,

    /// Page title, used with --page
    #[arg(long, default_value = "JSON tree")]
    title: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_options(&self) -> Result<RenderOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read options file {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Invalid options in {}", path.display()))?
            }
            None => RenderOptions::default(),
        };

        if let Some(depth) = self.expand_depth {
            options.expand_depth = usize::try_from(depth).unwrap_or(0);
        }
        if let Some(n) = self.max_children {
            options.max_children = Limit::from_signed(n);
        }
        if let Some(n) = self.max_string_length {
            options.max_string_length = Limit::from_signed(n);
        }
        if let Some(n) = self.max_depth {
            options.max_depth = Limit::from_signed(n);
        }
        if let Some(key) = &self.root_key {
            options.key = Some(key.clone());
        }

        Ok(options)
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => io::read_to_string(io::stdin()).context("Failed to read stdin"),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.render_options()?;
    debug!(?options, "render options");

    let content = read_input(cli.input.as_deref())?;
    let json: serde_json::Value =
        serde_json::from_str(&content).context("Input is not valid JSON")?;

    let fragment = TreeRenderer::new().render(&Value::from(json), &options);
    let output = if cli.page {
        wrap_page(&fragment, &cli.title)
    } else {
        fragment
    };

    println!("{}", output);

    Ok(())
}
