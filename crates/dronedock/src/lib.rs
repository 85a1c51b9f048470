//! Dronedock - F3+C to drone-program conversion.
//!
//! Converts the teleport command produced by the in-game F3+C copy action
//! into the JSON drone program that parks a PneumaticCraft drone at its
//! charging station.
//!
//! # Examples
//!
//! ```
//! use dronedock::{parse_home, render_program};
//!
//! let line = "/execute in minecraft:overworld run tp @s 123.5 64.0 -45.2 90 0";
//!
//! if let Some(home) = parse_home(line)? {
//!     let json = render_program(home)?;
//!     assert!(json.starts_with("{\"version\":3,"));
//! }
//! # Ok::<(), dronedock::DronedockError>(())
//! ```

mod error;
mod export;

pub use dronedock_core::{BlockPos, DroneProgram};

pub use error::DronedockError;

use log::{debug, info};

/// Parse an F3+C clipboard line into the drone's home position.
///
/// Returns `Ok(None)` when the line carries no `@s` coordinate triple;
/// the caller decides how to surface that to the user.
///
/// # Arguments
///
/// * `line` - One line of clipboard text, already stripped of the trailing
///   newline
///
/// # Errors
///
/// Returns [`DronedockError::Parse`] when a matched coordinate literal is
/// not a valid number. The error keeps the source line so the CLI can
/// render a diagnostic pointing at the literal.
pub fn parse_home(line: &str) -> Result<Option<BlockPos>, DronedockError> {
    info!("Parsing F3+C input");

    let home = dronedock_parser::extract_home(line)
        .map_err(|err| DronedockError::new_parse_error(err, line))?;

    debug!(home:?; "Extraction finished");
    Ok(home)
}

/// Render the charging-station program for `home` as compact JSON.
///
/// The output is a single line with no whitespace between structural
/// tokens, byte-identical across calls with the same `home`.
///
/// # Errors
///
/// Returns [`DronedockError::Export`] if JSON encoding fails.
pub fn render_program(home: BlockPos) -> Result<String, DronedockError> {
    info!(home:?; "Building drone program");

    let program = DroneProgram::homed_at(home);
    let json = export::to_compact_json(&program)?;

    debug!(bytes = json.len(); "Program encoded");
    Ok(json)
}
