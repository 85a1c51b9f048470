//! CLI logic for the dronedock drone-program generator.
//!
//! One prompt, one pasted line, one printed document. The I/O-generic
//! [`run_with_io`] carries the whole interaction so the integration tests
//! can drive it with in-memory buffers.

pub mod error_adapter;

mod args;

pub use args::Args;

use std::io::{self, BufRead, Write};

use log::{debug, info};

use dronedock::DronedockError;

/// Run the generator over standard input and output.
///
/// # Errors
///
/// Returns `DronedockError` for:
/// - I/O errors on the standard streams
/// - A matched coordinate literal that is not a valid number
/// - JSON encoding errors
pub fn run() -> Result<(), DronedockError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with_io(&mut stdin.lock(), &mut stdout.lock())
}

/// Drive one prompt/convert/print cycle over the given streams.
///
/// Reads a single line, extracts the home coordinates, and prints a
/// human-readable echo followed by the program document. A line without
/// coordinates prints the usage hint instead and completes normally; only
/// a malformed coordinate literal is an error.
pub fn run_with_io(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), DronedockError> {
    writeln!(output, "=== Drone Program Generator ===")?;
    writeln!(output)?;
    writeln!(output, "Paste F3+C (standing at charging station):")?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim();
    debug!(line = line; "Read input line");

    let Some(home) = dronedock::parse_home(line)? else {
        info!("No coordinate marker in input");
        writeln!(output, "Error: Could not parse coordinates")?;
        writeln!(output, "Expected format: /execute in ... run tp @s X Y Z ...")?;
        return Ok(());
    };

    let program = dronedock::render_program(home)?;

    writeln!(output)?;
    writeln!(output, "Home: {home}")?;
    writeln!(output)?;
    writeln!(output, "Drone program (copy this):")?;
    writeln!(output)?;
    writeln!(output, "{program}")?;

    info!("Program generated");
    Ok(())
}
