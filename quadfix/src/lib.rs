//! Core library for the `quadfix` migration tool.
//!
//! `quadfix` rewrites the quoted quadrant literals in the task service test
//! file into `Quadrant` enum references, using a fixed table of literal
//! substitutions applied in order.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module for handling commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants (file names, default target, messages).
pub mod constants;

/// Module defining the entry point logic shared by all binaries.
pub mod entry_point;

/// Literal rewriting engine built on byte-range edits.
pub mod fix;

/// Module for colored CLI output and summary tables.
pub mod output;

/// The fixed substitution table.
pub mod rules;

/// Module containing utility functions.
pub mod utils;
