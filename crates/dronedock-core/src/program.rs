//! The fixed charging-station program and its canvas layout.

use log::trace;
use serde::Serialize;

use crate::position::{BlockPos, GridPos};
use crate::widget::{Widget, WidgetKind};

/// Document format version understood by the program importer.
pub const PROGRAM_VERSION: u32 = 3;

/// Blocks between the charging pad and the block the drone's computer
/// control operates on, straight below the pad.
pub const CONTROL_TARGET_DEPTH: i32 = 2;

// Canvas slots of the fixed layout. Action widgets sit on the x=72 rail;
// each area operand sits on the x=87 rail at the same height as the action
// it feeds.
const START_SLOT: GridPos = GridPos::new(72, -19);
const STANDBY_SLOT: GridPos = GridPos::new(72, 3);
const COMPUTER_SLOT: GridPos = GridPos::new(72, 14);
const GOTO_AREA_SLOT: GridPos = GridPos::new(87, -8);
const COMPUTER_AREA_SLOT: GridPos = GridPos::new(87, 14);
const TELEPORT_SLOT: GridPos = GridPos::new(72, 25);
const GOTO_SLOT: GridPos = GridPos::new(72, -8);
const TELEPORT_AREA_SLOT: GridPos = GridPos::new(87, 25);

/// A complete drone program: the version marker plus widget records in the
/// exact order the importer receives them.
///
/// Built once per run by [`DroneProgram::homed_at`] and handed straight to
/// serialization; nothing mutates a program after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroneProgram {
    version: u32,
    widgets: Vec<Widget>,
}

impl DroneProgram {
    /// Build the charging-station program for a drone homed at `home`.
    ///
    /// The program sends the drone to `home`, puts it on standby, hands
    /// control to the computer targeting the block [`CONTROL_TARGET_DEPTH`]
    /// blocks below the pad, and teleports it back to `home`. Everything
    /// except the three area corners is constant.
    pub fn homed_at(home: BlockPos) -> Self {
        trace!(home:?; "Building charging-station program");

        let control_target = home.below(CONTROL_TARGET_DEPTH);
        Self {
            version: PROGRAM_VERSION,
            widgets: vec![
                Widget::plain(START_SLOT, WidgetKind::Start),
                Widget::plain(STANDBY_SLOT, WidgetKind::Standby),
                Widget::computer_control(COMPUTER_SLOT),
                Widget::point_area(GOTO_AREA_SLOT, home),
                Widget::point_area(COMPUTER_AREA_SLOT, control_target),
                Widget::plain(TELEPORT_SLOT, WidgetKind::Teleport),
                Widget::plain(GOTO_SLOT, WidgetKind::Goto),
                Widget::point_area(TELEPORT_AREA_SLOT, home),
            ],
        }
    }

    /// The document format version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The widget records in document order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }
}
