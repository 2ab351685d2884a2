//! # du2treemap
//!
//! Convert disk usage numbers produced by `du` into data for the
//! [webtreemap](https://github.com/martine/webtreemap) treemap viewer.
//!
//! ## Usage
//!
//! ```bash
//! # Script statement to load next to a webtreemap page
//! du /path | du2treemap > du.js
//!
//! # Standalone page (needs webtreemap.js and webtreemap.css alongside)
//! du -a /path | du2treemap --html > du.html
//!
//! # Label the `.` reported by `du` with the real directory
//! cd /var && du | du2treemap -d /var --pretty > du.js
//! ```

mod cli;

use std::io::{self, IsTerminal, Write};
use std::process::exit;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use du2treemap::{
    build_document,
    config::{FileConfig, LogLevel},
    input::read_lines,
    output::{is_valid_variable, render},
    parser::parse_du,
};
use tracing::{debug, info};

/// Entry point for the du2treemap application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Reads the input, parses it into a tree, builds the treemap document and
/// writes it to stdout.
///
/// # Errors
///
/// Returns errors from reading the input, parsing `du` lines, JSON
/// serialization, or writing to stdout.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let file_config = load_config();
    setup_tracing(args.log_level(&file_config));

    if args.should_print_usage(io::stdin().is_terminal()) {
        Cli::command().print_help()?;
        return Ok(());
    }

    let options = args.render_options(&file_config);
    if !is_valid_variable(&options.variable) {
        bail!(
            "Configured variable {:?} is not a valid JavaScript identifier",
            options.variable
        );
    }
    debug!("render options: {options:?}");

    let lines = read_lines(args.files())?;
    let root = parse_du(&lines)?;
    info!(
        "parsed {} lines into {} top-level entries",
        lines.len(),
        root.children().len()
    );

    let dot_name = args.dot_name(&file_config);
    let document = build_document(root, dot_name.as_deref());
    let rendered = render(&document, &options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Install a compact stderr logger at `level`; `silent` installs nothing.
fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# du2treemap configuration
# All values shown are their defaults. Uncomment and change as needed.

# Diagnostic output on stderr: debug, info, warn, error, silent
# log_level = "warn"

[output]
# Indent the JSON instead of writing it on one line
# pretty = false

# Output shape: "script" (var tree = ...;) or "html" (standalone page)
# format = "script"

# JavaScript variable the document is assigned to
# variable = "tree"

[tree]
# Name to show for `.` when it is the only top-level entry
# dot_name = "/var"
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    let format = config.output.format.map(|f| match f {
        du2treemap::OutputFormat::Script => "script",
        du2treemap::OutputFormat::Html => "html",
    });

    format!(
        "\
log_level = {log_level}

[output]
pretty    = {pretty}
format    = {format}
variable  = {variable}

[tree]
dot_name  = {dot_name}",
        log_level = show_str(config.log_level.as_deref(), "warn"),
        pretty = show_bool(config.output.pretty, false),
        format = show_str(format, "script"),
        variable = show_str(config.output.variable.as_deref(), "tree"),
        dot_name = config
            .tree
            .dot_name
            .as_deref()
            .map_or_else(|| "(none)  (default)".to_string(), |v| format!("\"{v}\"")),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}
