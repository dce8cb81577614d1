use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mdline::{Config, Format};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "mdline.toml";

#[derive(Parser)]
#[command(name = "mdline")]
#[command(about = "Render chat-style Markdown to HTML, plain text or JSON")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Config file (defaults to ./mdline.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                Config::load(path)
            } else {
                Config::compiled_default()
            }
        }
    };
    debug!(?config, "loaded config");

    let markdown = read_input(cli.input.as_deref())?;

    let format = cli.format.unwrap_or(config.output.format);
    let rendered = match format {
        Format::Html => mdline::markdown_to_html_with_config(markdown.as_str(), &config),
        Format::Text => mdline::markdown_to_text(markdown.as_str()),
        Format::Json => {
            let mut json = mdline::markdown_to_json(markdown.as_str())?;
            json.push('\n');
            json
        }
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = rendered.len(), "wrote output");
        }
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("writing stdout")?,
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "mdline=debug" } else { "mdline=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
