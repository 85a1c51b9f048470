//! Dronedock Core Types and Definitions
//!
//! This crate provides the foundational types for generated drone programs:
//!
//! - **Positions**: world block positions and programmer canvas slots
//!   ([`position`] module)
//! - **Widgets**: the records of the visual program graph ([`widget`] module)
//! - **Program**: the fixed charging-station document ([`program`] module)

pub mod position;
pub mod program;
pub mod widget;

pub use position::{BlockPos, GridPos};
pub use program::{CONTROL_TARGET_DEPTH, DroneProgram, PROGRAM_VERSION};
pub use widget::{AreaShape, AreaType, Inventory, Widget, WidgetKind};
