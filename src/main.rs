//! Parslink main entry point
//!
//! This is the command-line interface for the Parslink website inspector.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use parslink::config::{default_config_path, load_or_default, save_config, Config, ConfigProvider};
use parslink::output::{print_report, write_html_report, write_json_report};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Parslink: a single-page website inspector
///
/// Parslink fetches one page, checks its TLS certificate, security headers,
/// SEO and performance basics, and asks a language model for a summary.
#[derive(Parser, Debug)]
#[command(name = "parslink")]
#[command(version)]
#[command(about = "Website inspector with an AI summary", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file [default: ~/.parslink/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect a website and print the report
    Analyze {
        /// URL of the site; https:// is assumed when no scheme is given
        url: String,

        /// Save the full report as JSON
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Save a short HTML report
        #[arg(long, value_name = "FILE")]
        html_output: Option<PathBuf>,
    },

    /// Update or show the configuration file
    Config {
        /// API key for the summarization service
        #[arg(long)]
        api_key: Option<String>,

        /// Model used for summaries; must be one of the available models
        #[arg(long)]
        model: Option<String>,

        /// Print the effective configuration
        #[arg(long)]
        show: bool,
    },

    /// Print the version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config_path = cli.config.unwrap_or_else(default_config_path);

    match cli.command {
        Command::Analyze {
            url,
            output,
            html_output,
        } => handle_analyze(&config_path, &url, output.as_deref(), html_output.as_deref()).await,
        Command::Config {
            api_key,
            model,
            show,
        } => handle_config(&config_path, api_key, model, show),
        Command::Version => {
            println!("parslink version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("parslink=info,warn"),
            1 => EnvFilter::new("parslink=debug,info"),
            2 => EnvFilter::new("parslink=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the `analyze` command: inspects one URL and writes the outputs
async fn handle_analyze(
    config_path: &Path,
    url: &str,
    output: Option<&Path>,
    html_output: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_or_default(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    let report = match parslink::inspect(url, &config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Inspection failed: {}", e);
            return Err(e.into());
        }
    };

    print_report(&report);

    if let Some(path) = output {
        write_json_report(&report, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\n✓ Report saved to: {}", path.display());
    }

    if let Some(path) = html_output {
        write_html_report(&report, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\n✓ HTML report saved to: {}", path.display());
    }

    Ok(())
}

/// Handles the `config` command: applies the given settings and saves them
fn handle_config(
    config_path: &Path,
    api_key: Option<String>,
    model: Option<String>,
    show: bool,
) -> anyhow::Result<()> {
    let mut config = load_or_default(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    let changed = api_key.is_some() || model.is_some();

    if let Some(key) = api_key {
        config.summarizer.api_key = key.trim().to_string();
    }

    if let Some(model) = model {
        if !config.summarizer.available_models.contains(&model) {
            bail!(
                "Unknown model '{}'. Available models: {}",
                model,
                config.summarizer.available_models.join(", ")
            );
        }
        config.summarizer.model = model;
    }

    if changed {
        save_config(&config, config_path)?;
        println!("✓ Configuration saved to: {}", config_path.display());
    }

    if show || !changed {
        print_config(&config, config_path);
    }

    Ok(())
}

fn print_config(config: &Config, path: &Path) {
    println!("=== Parslink Configuration ===\n");
    println!("File: {}", path.display());

    println!("\nSummarizer:");
    println!(
        "  API key: {}",
        config
            .api_key()
            .map(|key| mask_key(&key))
            .unwrap_or_else(|| "not set".to_string())
    );
    println!("  Endpoint: {}", config.summarizer.endpoint);
    println!("  Available models:");
    for model in &config.summarizer.available_models {
        if *model == config.summarizer.model {
            println!("    * {} (current)", model);
        } else {
            println!("    - {}", model);
        }
    }

    println!("\nInspector:");
    println!("  User agent: {}", config.inspector.user_agent);
    println!("  Fetch timeout: {}s", config.inspector.fetch_timeout_secs);
    println!("  Probe timeout: {}s", config.inspector.probe_timeout_secs);
    println!("  TLS timeout: {}s", config.inspector.tls_timeout_secs);
}

/// Shows only the last four characters of a key
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
