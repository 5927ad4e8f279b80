//! Main binary entry point for the `quadfix` migration tool.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()` function
//! so both binaries behave identically.

use anyhow::Result;

fn main() -> Result<()> {
    let code = quadfix::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
