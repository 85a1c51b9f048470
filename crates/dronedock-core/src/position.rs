//! Position types for drone programs.
//!
//! Two unrelated coordinate systems meet in a program document: world block
//! positions ([`BlockPos`]), where a drone actually flies, and slots on the
//! programmer's puzzle canvas ([`GridPos`]), where a widget is drawn. They
//! serialize differently and must never be mixed up, so each gets its own
//! type.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeTuple};

/// Absolute block position in the game world.
///
/// Serializes as the three-element `[x, y, z]` array the program importer
/// expects for area corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Create a new block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The position `blocks` straight down from this one.
    pub const fn below(self, blocks: i32) -> Self {
        Self {
            x: self.x,
            y: self.y.saturating_sub(blocks),
            z: self.z,
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

impl Serialize for BlockPos {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut corner = serializer.serialize_tuple(3)?;
        corner.serialize_element(&self.x)?;
        corner.serialize_element(&self.y)?;
        corner.serialize_element(&self.z)?;
        corner.end()
    }
}

/// Widget slot on the programmer's puzzle canvas.
///
/// Serializes as the `{"x": .., "y": ..}` mapping of the `pos` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// Create a new canvas slot.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_pos_serializes_as_corner_array() {
        let json = serde_json::to_string(&BlockPos::new(10, 5, -4)).unwrap();
        assert_eq!(json, "[10,5,-4]");
    }

    #[test]
    fn grid_pos_serializes_as_mapping() {
        let json = serde_json::to_string(&GridPos::new(72, -19)).unwrap();
        assert_eq!(json, r#"{"x":72,"y":-19}"#);
    }

    #[test]
    fn below_lowers_only_the_vertical_axis() {
        let pos = BlockPos::new(10, 5, -4);
        assert_eq!(pos.below(2), BlockPos::new(10, 3, -4));
    }

    #[test]
    fn display_matches_home_line_format() {
        assert_eq!(BlockPos::new(99, 70, 199).to_string(), "99, 70, 199");
    }
}
