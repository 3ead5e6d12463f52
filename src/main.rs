//! Binary entry point for contentguard.
//!
//! Command-line access to the content filter, mainly for checking term lists
//! and configuration.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contentguard::config::FilterConfig;
use contentguard::observability::{self, LoggingConfig};
use contentguard::{ContentFilterService, FilterOptions};
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

/// Contentguard - prohibited-term and contact-information filter.
#[derive(Parser)]
#[command(name = "contentguard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "CONTENTGUARD_CONFIG_PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Filter text and print the redacted version.
    Filter {
        /// Text to filter. Read from stdin when omitted.
        text: Option<String>,

        /// Also redact phone numbers and email addresses.
        #[arg(short, long)]
        block_sensitive: bool,

        /// Print the full result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Exit with status 0 if the text has no prohibited terms, 1 otherwise.
    Check {
        /// Text to check. Read from stdin when omitted.
        text: Option<String>,
    },

    /// List the configured prohibited terms.
    Terms,

    /// Manage configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        },
    };

    let logging = match LoggingConfig::from_settings(Some(&config.logging), cli.verbose) {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("Invalid logging configuration: {e}");
            return ExitCode::FAILURE;
        },
    };
    if let Err(e) = observability::init(&logging) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(command: Commands, config: &FilterConfig) -> Result<ExitCode> {
    let service =
        ContentFilterService::from_config(config).context("failed to build content filter")?;

    match command {
        Commands::Filter {
            text,
            block_sensitive,
            json,
        } => cmd_filter(&service, text, block_sensitive || config.block_sensitive, json),
        Commands::Check { text } => cmd_check(&service, text),
        Commands::Terms => {
            for term in service.terms().iter() {
                println!("{term}");
            }
            Ok(ExitCode::SUCCESS)
        },
        Commands::Config { show } => {
            cmd_config(config, &service, show);
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Loads configuration from an explicit path or the default location.
fn load_config(path: Option<&str>) -> Result<FilterConfig> {
    match path.filter(|p| !p.trim().is_empty()) {
        Some(config_path) => FilterConfig::load_from_file(Path::new(config_path))
            .with_context(|| format!("cannot load {config_path}")),
        None => Ok(FilterConfig::load_default()),
    }
}

/// Returns the argument, or all of stdin when absent.
fn read_input(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Filter command.
fn cmd_filter(
    service: &ContentFilterService,
    text: Option<String>,
    block_sensitive: bool,
    json: bool,
) -> Result<ExitCode> {
    let text = read_input(text)?;
    let options = FilterOptions {
        block_sensitive,
        ..FilterOptions::default()
    };
    let result = service.filter(&text, options);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.cleaned_text);
        if !result.detected_words.is_empty() {
            eprintln!("Detected: {}", result.detected_words.join(", "));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Check command.
fn cmd_check(service: &ContentFilterService, text: Option<String>) -> Result<ExitCode> {
    let text = read_input(text)?;
    if service.is_safe(&text) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Config command.
fn cmd_config(config: &FilterConfig, service: &ContentFilterService, show: bool) {
    if show {
        println!("Current Configuration");
        println!("=====================");
        println!();
        println!(
            "Terms: {} ({})",
            service.terms().len(),
            if config.terms.is_some() {
                "configured"
            } else {
                "built-in"
            }
        );
        if let Some(path) = &config.terms_file {
            println!("Terms File: {}", path.display());
        }
        println!("Mask: {}", service.mask());
        println!("Block Sensitive: {}", config.block_sensitive);
        println!();
        println!("Logging:");
        println!(
            "  Format: {}",
            config.logging.format.as_deref().unwrap_or("(default)")
        );
        println!(
            "  Level: {}",
            config.logging.level.as_deref().unwrap_or("(default)")
        );
        println!(
            "  File: {}",
            config
                .logging
                .file
                .as_ref()
                .map_or_else(|| "(stderr)".to_string(), |p| p.display().to_string())
        );
    } else {
        println!("Use --show to display configuration");
    }
}
