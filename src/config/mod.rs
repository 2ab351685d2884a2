//! Configuration: the optional TOML file and the shared log level.

pub mod file;
pub mod log_level;

pub use file::FileConfig;
pub use log_level::LogLevel;
