//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use du2treemap::config::{FileConfig, LogLevel};
use du2treemap::output::{DEFAULT_VARIABLE, OutputFormat, RenderOptions, is_valid_variable};

/// Command-line arguments controlling the rendered output.
#[derive(Parser)]
struct OutputArgs {
    /// Pretty-print the JSON
    ///
    /// Indents the document by two spaces. Without this flag the JSON is
    /// written without any whitespace, on a single line.
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Emit a standalone HTML page instead of a script statement
    ///
    /// The page loads `webtreemap.js` and `webtreemap.css` from the same
    /// directory, so copy those next to the generated file.
    #[arg(long)]
    html: bool,

    /// JavaScript variable the document is assigned to
    #[arg(long, value_name = "NAME", value_parser = parse_variable)]
    variable: Option<String>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Typical use:
///
/// ```text
/// du -a /var | du2treemap --html > du.html
/// cd /var && du | du2treemap -d /var > du.js
/// ```
#[derive(Parser)]
#[command(name = "du2treemap")]
#[command(about = "Convert disk usage numbers produced by `du` into webtreemap data")]
#[command(version)]
pub struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// Files holding `du` output
    ///
    /// Lines of all files are read in order. Reads standard input when no
    /// file is given; `-` also stands for standard input. A report file
    /// named `config` must be passed as `./config`.
    #[arg(num_args = 0..)]
    files: Vec<PathBuf>,

    /// Name to show for `.` when it is the only top-level entry
    ///
    /// `du` run inside a directory reports it as `.`; pass the directory's
    /// real path here to label the treemap with it.
    #[arg(short = 'd', long, value_name = "NAME")]
    dot_name: Option<String>,

    /// How much diagnostic output to write to stderr
    #[arg(short = 'l', long, value_enum)]
    log_level: Option<LogLevel>,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

fn parse_variable(value: &str) -> Result<String, String> {
    if is_valid_variable(value) {
        Ok(value.to_string())
    } else {
        Err(format!("{value:?} is not a valid JavaScript identifier"))
    }
}

impl Cli {
    /// Input files given on the command line.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Whether input comes implicitly from standard input (no files given).
    #[must_use]
    pub fn reads_implicit_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether to print usage instead of waiting for a report typed at a
    /// terminal. An explicit `-` still reads the terminal.
    #[must_use]
    pub fn should_print_usage(&self, stdin_is_terminal: bool) -> bool {
        self.reads_implicit_stdin() && stdin_is_terminal
    }

    /// Resolve the log level.
    ///
    /// Priority: CLI argument > config file > default (`warn`).
    #[must_use]
    pub fn log_level(&self, config: &FileConfig) -> LogLevel {
        self.log_level
            .or_else(|| config.log_level.as_deref().and_then(LogLevel::from_config))
            .unwrap_or_default()
    }

    /// Resolve the display name for a sole top-level `.`.
    ///
    /// Priority: CLI argument > config file > none.
    #[must_use]
    pub fn dot_name(&self, config: &FileConfig) -> Option<String> {
        self.dot_name
            .clone()
            .or_else(|| config.tree.dot_name.clone())
    }

    /// Extract render options from CLI args and config file.
    ///
    /// - **format**: `--html` > config `format` > script
    /// - **pretty**: CLI flag `||` config value `||` `false`
    /// - **variable**: CLI > config > `tree`
    #[must_use]
    pub fn render_options(&self, config: &FileConfig) -> RenderOptions {
        let format = if self.output.html {
            OutputFormat::Html
        } else {
            config.output.format.unwrap_or_default()
        };

        RenderOptions {
            format,
            pretty: self.output.pretty || config.output.pretty.unwrap_or(false),
            variable: self
                .output
                .variable
                .clone()
                .or_else(|| config.output.variable.clone())
                .unwrap_or_else(|| DEFAULT_VARIABLE.to_string()),
        }
    }
}
