//! Log verbosity shared by the CLI flag and the config file.

use clap::ValueEnum;

/// How much diagnostic output to write to stderr.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum LogLevel {
    /// Everything, including per-input line counts
    Debug,

    /// Progress messages
    Info,

    /// Problems that do not stop the run
    #[default]
    Warn,

    /// Only errors
    Error,

    /// No logging at all
    Silent,
}

impl LogLevel {
    /// The matching `tracing` level, or `None` when logging is disabled.
    #[must_use]
    pub const fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            Self::Debug => Some(tracing::Level::DEBUG),
            Self::Info => Some(tracing::Level::INFO),
            Self::Warn => Some(tracing::Level::WARN),
            Self::Error => Some(tracing::Level::ERROR),
            Self::Silent => None,
        }
    }

    /// Parse a level name case-insensitively, as written in the config file.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }

    #[test]
    fn test_to_tracing_level() {
        assert_eq!(
            LogLevel::Debug.to_tracing_level(),
            Some(tracing::Level::DEBUG)
        );
        assert_eq!(LogLevel::Info.to_tracing_level(), Some(tracing::Level::INFO));
        assert_eq!(LogLevel::Warn.to_tracing_level(), Some(tracing::Level::WARN));
        assert_eq!(
            LogLevel::Error.to_tracing_level(),
            Some(tracing::Level::ERROR)
        );
        assert_eq!(LogLevel::Silent.to_tracing_level(), None);
    }

    #[test]
    fn test_from_config_case_insensitive() {
        assert_eq!(LogLevel::from_config("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_config("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_config("Silent"), Some(LogLevel::Silent));
        assert_eq!(LogLevel::from_config("loud"), None);
    }
}
