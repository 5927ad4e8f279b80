//! Utility functions.

mod paths;

pub use paths::{normalize_display_path, resolve_target};
