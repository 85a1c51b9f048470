//! # Dronedock Parser
//!
//! Extraction of drone home coordinates from an F3+C clipboard line.
//!
//! The in-game F3+C action copies a teleport command such as
//! `/execute in minecraft:overworld run tp @s 123.5 64.0 -45.2 90 0`.
//! This crate scans such a line for the `@s` marker, reads the three
//! coordinates that follow it, and derives the home position of a drone
//! charging station.
//!
//! ## Usage
//!
//! ```
//! use dronedock_parser::extract_home;
//!
//! let line = "/execute in minecraft:overworld run tp @s 123.5 64.0 -45.2 90 0";
//! let home = extract_home(line).unwrap().expect("line carries coordinates");
//! assert_eq!((home.x, home.y, home.z), (122, 64, -46));
//! ```

mod error;
mod extract;
#[cfg(test)]
mod extract_tests;
mod span;

pub use error::ParseError;
pub use extract::{SELF_MARKER, STATION_FOOTPRINT, extract_home};
pub use span::Span;
