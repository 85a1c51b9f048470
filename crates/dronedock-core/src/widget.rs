//! Widget records of the drone-program document.
//!
//! The program importer is sensitive to which fields a record carries, so
//! each record shape is a separate [`Widget`] variant serialized untagged:
//! a variant writes exactly its own fields, in declaration order.

use serde::Serialize;

use crate::position::{BlockPos, GridPos};

/// Importer type tag of a widget record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetKind {
    #[serde(rename = "pneumaticcraft:start")]
    Start,
    #[serde(rename = "pneumaticcraft:standby")]
    Standby,
    #[serde(rename = "pneumaticcraft:computer_control")]
    ComputerControl,
    #[serde(rename = "pneumaticcraft:area")]
    Area,
    #[serde(rename = "pneumaticcraft:teleport")]
    Teleport,
    #[serde(rename = "pneumaticcraft:goto")]
    Goto,
}

/// Shape tag of an area selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaType {
    #[serde(rename = "type")]
    pub shape: AreaShape,
}

/// Geometric interpretation of an area's two corners. The generated
/// program only ever uses box areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AreaShape {
    #[serde(rename = "pneumaticcraft:box")]
    Box,
}

/// Item filter attached to a computer-control widget.
///
/// Always empty in generated programs, but the importer requires the field
/// to be present, so it serializes as `{}` rather than being omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {}

/// One node of the visual program graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Widget {
    /// Marker or action node: canvas slot and type tag only.
    Plain {
        pos: GridPos,
        #[serde(rename = "type")]
        kind: WidgetKind,
    },
    /// Computer-control node with its (empty) item filter.
    ComputerControl {
        pos: GridPos,
        inv: Inventory,
        #[serde(rename = "type")]
        kind: WidgetKind,
    },
    /// Area node selecting the box spanned by two corners.
    Area {
        area_type: AreaType,
        pos: GridPos,
        pos1: BlockPos,
        pos2: BlockPos,
        #[serde(rename = "type")]
        kind: WidgetKind,
    },
}

impl Widget {
    /// Marker or action node at `pos`.
    pub fn plain(pos: GridPos, kind: WidgetKind) -> Self {
        Self::Plain { pos, kind }
    }

    /// Computer-control node at `pos` with an empty filter inventory.
    pub fn computer_control(pos: GridPos) -> Self {
        Self::ComputerControl {
            pos,
            inv: Inventory::default(),
            kind: WidgetKind::ComputerControl,
        }
    }

    /// Single-point box area: both corners at `point`.
    pub fn point_area(pos: GridPos, point: BlockPos) -> Self {
        Self::Area {
            area_type: AreaType {
                shape: AreaShape::Box,
            },
            pos,
            pos1: point,
            pos2: point,
            kind: WidgetKind::Area,
        }
    }

    /// The importer type tag of this record.
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Plain { kind, .. }
            | Self::ComputerControl { kind, .. }
            | Self::Area { kind, .. } => *kind,
        }
    }

    /// Whether this record carries spatial corner coordinates.
    pub fn is_area(&self) -> bool {
        matches!(self, Self::Area { .. })
    }
}
