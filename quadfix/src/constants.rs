//! Shared constants.

/// Name of the optional project configuration file.
pub const CONFIG_FILENAME: &str = ".quadfix.toml";

/// File rewritten when neither the command line nor the config names one.
/// Relative paths are resolved against the working directory.
pub const DEFAULT_TARGET: &str = "tests/unit/services/task-service.test.ts";

/// Line printed after a successful rewrite.
pub const COMPLETION_MESSAGE: &str = "Fixed all Quadrant enum references";
