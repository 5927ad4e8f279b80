use crate::cli::Cli;
use crate::commands::{run_rewrite, RewriteOptions};
use crate::config::Config;
use crate::rules::QUADRANT_RULES;
use crate::utils::resolve_target;
use anyhow::Result;
use clap::Parser;

/// Runs quadfix with the given arguments, writing output to stdout.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run quadfix with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Rewrite failures are reported on stderr and mapped to exit code 1.
///
/// # Errors
///
/// Returns an error if writing help/version output fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["quadfix".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    // Load config next to the explicit target, or from the working directory
    let config = cli_var
        .path
        .as_deref()
        .map_or_else(Config::load, Config::load_from_path);

    let target = resolve_target(
        cli_var.path.as_deref(),
        config.quadfix.target.as_deref(),
        config.base_dir(),
    );
    let options = RewriteOptions {
        dry_run: cli_var.dry_run,
        verbose: cli_var.verbose || config.quadfix.verbose.unwrap_or(false),
        json: cli_var.json,
    };

    if options.verbose && !options.json {
        eprintln!("[VERBOSE] quadfix v{}", env!("CARGO_PKG_VERSION"));
        if let Some(ref path) = config.config_file_path {
            eprintln!("[VERBOSE] Config: {}", path.display());
        }
        eprintln!("[VERBOSE] Target: {}", target.display());
        eprintln!();
    }

    match run_rewrite(&target, QUADRANT_RULES, &options, &mut *writer) {
        Ok(_) => {
            writer.flush()?;
            Ok(0)
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            Ok(1)
        }
    }
}
