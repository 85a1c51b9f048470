//! JSON export of drone programs.
//!
//! The program importer reads a single-line document with no whitespace
//! between structural tokens; `serde_json`'s compact writer produces
//! exactly that, with field order pinned by the model's declaration order.

use thiserror::Error;

use dronedock_core::DroneProgram;

/// Errors produced while encoding a program document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Encode `program` in the importer's compact form.
pub(crate) fn to_compact_json(program: &DroneProgram) -> Result<String, Error> {
    Ok(serde_json::to_string(program)?)
}

#[cfg(test)]
mod tests {
    use dronedock_core::BlockPos;

    use super::*;

    #[test]
    fn encoding_is_compact() {
        let program = DroneProgram::homed_at(BlockPos::new(1, 2, 3));
        let json = to_compact_json(&program).unwrap();

        assert!(!json.contains(": "), "no space after key separators");
        assert!(!json.contains(", "), "no space after element separators");
        assert!(!json.contains('\n'), "single-line document");
    }
}
