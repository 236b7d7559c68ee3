//! Command-line interface for the ideograph utility
//!
//! Runs editor command scripts against the engine and writes the
//! exported SVG, a state summary, or a validation verdict.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use tracing::info;

use ideograph::core::logging::init_logging;
use ideograph::map::{Editor, EXPORT_FILENAME};
use ideograph::script::run_script;
use ideograph::Theme;

/// Ideograph - build mind maps from command scripts and export SVG
#[derive(Parser)]
#[command(name = "ideograph")]
#[command(about = "A mind-map engine: run editor command scripts, export SVG diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

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

#[derive(Subcommand)]
pub enum Commands {
    /// Run a command script and export the diagram as SVG
    Render {
        /// Input file containing editor commands (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the SVG document (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Color theme for the diagram
        #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
        theme: ThemeChoice,
    },

    /// Run a command script and print the final editor state
    Inspect {
        /// Input file containing editor commands (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check a command script for syntax errors and rejected commands
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Color themes selectable from the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    /// Light background, slate strokes
    #[default]
    Light,
    /// Dark background, lighter strokes
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(value: ThemeChoice) -> Self {
        match value {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

/// Main CLI application
pub struct IdeographApp;

impl IdeographApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags.
        let log_level = std::env::var("IDEOGRAPH_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format = std::env::var("IDEOGRAPH_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level.as_deref(), log_format.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Ideograph v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                input,
                output,
                theme,
            } => self.render_command(input, output, theme, cli.verbose),
            Commands::Inspect { input, json } => self.inspect_command(input, json, cli.verbose),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
        }
    }

    /// Handle the render command
    pub fn render_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        theme: ThemeChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let mut editor = Editor::with_theme(theme.into());
        let report = run_script(&mut editor, &content)?;
        editor.render();

        for rejection in &report.rejections {
            eprintln!(
                "Warning: command {} rejected: {}",
                rejection.command, rejection.error
            );
        }

        let svg = editor.export_svg()?;
        info!(
            nodes = editor.map().node_count(),
            connections = editor.map().connection_count(),
            rejected = report.rejections.len(),
            "Exported diagram"
        );

        if verbose {
            eprintln!(
                "Applied {} commands, exported {} nodes",
                report.applied,
                editor.map().node_count()
            );
        }

        // With no explicit output path, fall back to the engine's default
        // export filename rather than flooding the terminal with markup.
        let output = output.or_else(|| Some(PathBuf::from(EXPORT_FILENAME)));
        self.write_output(output, &svg)
    }

    /// Handle the inspect command
    pub fn inspect_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let mut editor = Editor::new();
        let report = run_script(&mut editor, &content)?;

        let map = editor.map();
        let viewport = editor.viewport();

        if json {
            let rejections: Vec<String> = report
                .rejections
                .iter()
                .map(|r| format!("{}: {}", r.command, r.error))
                .collect();
            let state = serde_json::json!({
                "node_count": map.node_count(),
                "connection_count": map.connection_count(),
                "selected_parent": map.selected_parent().0,
                "zoom": viewport.zoom(),
                "offset": { "x": viewport.offset().x, "y": viewport.offset().y },
                "theme": editor.theme().to_string(),
                "applied": report.applied,
                "rejections": rejections,
            });
            println!("{}", serde_json::to_string_pretty(&state)?);
        } else {
            println!("Nodes:           {}", map.node_count());
            println!("Connections:     {}", map.connection_count());
            println!("Selected parent: {}", map.selected_parent());
            println!("Zoom:            {}", viewport.zoom());
            println!(
                "Offset:          ({}, {})",
                viewport.offset().x,
                viewport.offset().y
            );
            println!("Theme:           {}", editor.theme());
            println!("Applied:         {}", report.applied);
            for rejection in &report.rejections {
                println!("Rejected:        {} ({})", rejection.command, rejection.error);
            }
        }

        Ok(())
    }

    /// Handle the validate command
    pub fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let mut editor = Editor::new();
        match run_script(&mut editor, &content) {
            Ok(report) if report.is_clean() => {
                println!("✓ Valid script ({} commands)", report.applied);
                Ok(())
            }
            Ok(report) => {
                for rejection in &report.rejections {
                    println!(
                        "✗ Command {} rejected: {}",
                        rejection.index + 1,
                        rejection.error
                    );
                }
                Err(anyhow!(
                    "{} of {} commands rejected",
                    report.rejections.len(),
                    report.applied + report.rejections.len()
                ))
            }
            Err(e) => {
                println!("✗ Invalid script: {}", e);
                Err(e.into())
            }
        }
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    let mut content = String::new();
                    io::stdin().read_to_string(&mut content)?;
                    Ok(content)
                } else {
                    fs::read_to_string(&path).map_err(|e| {
                        anyhow!("Failed to read input file '{}': {}", path.display(), e)
                    })
                }
            }
            None => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) => {
                if path.to_string_lossy() == "-" {
                    print!("{}", content);
                    io::stdout().flush()?;
                } else {
                    fs::write(&path, content).map_err(|e| {
                        anyhow!("Failed to write output file '{}': {}", path.display(), e)
                    })?;
                }
            }
            None => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for IdeographApp {
    fn default() -> Self {
        Self::new()
    }
}
