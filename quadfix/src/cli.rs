use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.quadfix.toml):
  Searched for in the working directory and its parents.
  A relative `target` is resolved against the directory holding the file.

  [quadfix]
  target = \"tests/unit/services/task-service.test.ts\"   # File to rewrite
  verbose = false                                        # Show per-rule counts
";

/// Command line arguments for quadfix.
#[derive(Parser, Debug)]
#[command(
    name = "quadfix",
    version,
    about = "Rewrite quoted quadrant literals into Quadrant enum references",
    after_help = CONFIG_HELP
)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are legitimately booleans
pub struct Cli {
    /// File to rewrite. Defaults to the configured target, then
    /// tests/unit/services/task-service.test.ts.
    pub path: Option<PathBuf>,

    /// Show what would change without writing the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Print how many occurrences each rule replaced.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output the rewrite report as JSON.
    #[arg(long)]
    pub json: bool,
}
