//! Command-line interface for the automatikz utility
//!
//! Provides a CLI to convert JFLAP automaton files into TikZ/LaTeX
//! documents.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use automatikz::core::logging::init_logging;

/// Automatikz - Convert JFLAP automata to TikZ/LaTeX diagrams
#[derive(Parser)]
#[command(name = "automatikz")]
#[command(about = "A Rust utility to convert JFLAP automaton files into TikZ/LaTeX diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Input JFLAP file (.jff)
    pub input: PathBuf,

    /// Output LaTeX file (defaults to the input path with a .tex extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Main CLI application
pub struct AutomatikzApp;

impl AutomatikzApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Initialize logging with CLI flags (environment variables take precedence)
        let log_level = std::env::var("AUTOMATIKZ_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format = std::env::var("AUTOMATIKZ_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Automatikz v{}", env!("CARGO_PKG_VERSION"));
        }

        let output_path = Self::output_path(&cli.input, cli.output.as_deref());
        self.convert_file(&cli.input, &output_path, cli.verbose)?;

        println!(
            "Converted {} to {}",
            cli.input.display(),
            output_path.display()
        );
        Ok(())
    }

    /// Default output path: input path with the extension replaced by `.tex`
    fn output_path(input: &std::path::Path, output: Option<&std::path::Path>) -> PathBuf {
        match output {
            Some(path) => path.to_path_buf(),
            None => input.with_extension("tex"),
        }
    }

    /// Convert one file; the output is only written after the whole
    /// document has been built in memory
    fn convert_file(
        &self,
        input: &std::path::Path,
        output: &std::path::Path,
        verbose: bool,
    ) -> Result<()> {
        let content = fs::read_to_string(input)
            .map_err(|e| anyhow!("Failed to read input file '{}': {}", input.display(), e))?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let latex = automatikz::convert(&content)?;

        if verbose {
            eprintln!("Successfully converted automaton to LaTeX");
        }

        fs::write(output, latex)
            .map_err(|e| anyhow!("Failed to write output file '{}': {}", output.display(), e))?;
        Ok(())
    }
}

impl Default for AutomatikzApp {
    fn default() -> Self {
        Self::new()
    }
}
