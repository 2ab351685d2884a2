//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/du2treemap/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! log_level = "info"
//!
//! [output]
//! pretty = true
//! format = "html"
//! variable = "tree"
//!
//! [tree]
//! dot_name = "/var"
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::output::OutputFormat;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default log level (`"debug"`, `"info"`, `"warn"`, `"error"`, `"silent"`)
    pub log_level: Option<String>,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,

    /// Tree options
    #[serde(default)]
    pub tree: FileTreeConfig,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Whether to indent the JSON
    pub pretty: Option<bool>,

    /// `"script"` or `"html"`
    pub format: Option<OutputFormat>,

    /// JavaScript variable name the document is assigned to
    pub variable: Option<String>,
}

/// Tree options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileTreeConfig {
    /// Display name for a sole top-level `.` entry
    pub dot_name: Option<String>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/du2treemap/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("du2treemap").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unexpected fields.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.log_level.is_none());
        assert!(config.output.pretty.is_none());
        assert!(config.output.format.is_none());
        assert!(config.output.variable.is_none());
        assert!(config.tree.dot_name.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
log_level = "debug"

[output]
pretty = true
format = "html"
variable = "kTree"

[tree]
dot_name = "/var"
"#;

        let config = FileConfig::parse(toml_content).unwrap();

        assert_eq!(config.log_level, Some("debug".to_string()));
        assert_eq!(config.output.pretty, Some(true));
        assert_eq!(config.output.format, Some(OutputFormat::Html));
        assert_eq!(config.output.variable, Some("kTree".to_string()));
        assert_eq!(config.tree.dot_name, Some("/var".to_string()));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r"
[output]
pretty = true
";

        let config = FileConfig::parse(toml_content).unwrap();

        assert!(config.log_level.is_none());
        assert_eq!(config.output.pretty, Some(true));
        assert!(config.output.format.is_none());
        assert!(config.tree.dot_name.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = FileConfig::parse("").unwrap();

        assert!(config.log_level.is_none());
        assert!(config.output.pretty.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[output]
pretty = "not_a_bool"
"#;
        assert!(FileConfig::parse(toml_content).is_err());
    }

    #[test]
    fn test_unknown_format_errors() {
        let toml_content = r#"
[output]
format = "svg"
"#;
        assert!(FileConfig::parse(toml_content).is_err());
    }

    #[test]
    fn test_unknown_field_errors() {
        assert!(FileConfig::parse("colour = true").is_err());
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        let path = FileConfig::config_path();
        if let Some(p) = path {
            assert!(p.ends_with("du2treemap/config.toml"));
        }
    }
}
