//! Command-line argument definitions for the dronedock CLI.
//!
//! The conversion itself takes no options; the input is one pasted line on
//! standard input. The only argument controls logging verbosity.

use clap::Parser;

/// Command-line arguments for the drone-program generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
