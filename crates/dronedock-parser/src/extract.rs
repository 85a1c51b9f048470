//! Coordinate extraction from F3+C clipboard lines.
//!
//! The clipboard line is free-form text; somewhere inside it sits the
//! marker `@s` followed by three whitespace-separated coordinates. The
//! scan walks every `@s` occurrence until one is followed by a full
//! triple.

use log::debug;
use winnow::{
    Parser as _,
    ascii::multispace1,
    combinator::preceded,
    error::{ContextError, ErrMode},
    stream::LocatingSlice,
    token::take_while,
};

use dronedock_core::BlockPos;

use crate::{
    error::ParseError,
    span::{Span, Spanned},
};

/// Marker token preceding the coordinates: the teleport target meaning
/// "self".
pub const SELF_MARKER: &str = "@s";

/// Horizontal calibration between where the player stands for F3+C and
/// the charging pad itself, in blocks. Applied to x and z; the vertical
/// axis needs no correction.
pub const STATION_FOOTPRINT: i32 = 1;

type Input<'src> = LocatingSlice<&'src str>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Parse one coordinate literal: a non-empty run of digits, `-` and `.`.
///
/// Deliberately looser than a number grammar; whether the run actually
/// forms a number is decided by the conversion step so that a run like
/// `1..5` becomes a reportable error instead of a partial match.
fn coordinate_literal<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    take_while(1.., |c: char| c == '-' || c == '.' || c.is_ascii_digit())
        .with_span()
        .map(|(raw, range)| Spanned::new(raw, Span::new(range)))
        .parse_next(input)
}

/// Parse the marker followed by three whitespace-separated literals.
#[allow(clippy::type_complexity)]
fn marker_triple<'src>(
    input: &mut Input<'src>,
) -> IResult<(Spanned<&'src str>, Spanned<&'src str>, Spanned<&'src str>)> {
    preceded(
        (SELF_MARKER, multispace1),
        (
            coordinate_literal,
            preceded(multispace1, coordinate_literal),
            preceded(multispace1, coordinate_literal),
        ),
    )
    .parse_next(input)
}

/// Scan `line` for a `@s` coordinate triple and derive the home position.
///
/// Coordinates are truncated toward zero; x and z are then pulled back by
/// [`STATION_FOOTPRINT`] so the home sits on the charging pad rather than
/// where the player stood to copy the coordinates.
///
/// Returns `Ok(None)` when no occurrence of the pattern exists in the
/// line. That is the expected outcome for arbitrary input, not an error.
///
/// # Errors
///
/// Returns [`ParseError`] when a matched literal is not a valid number,
/// e.g. `@s 1..5 64 -45`. The error carries the literal and its byte span
/// in `line`.
///
/// # Example
///
/// ```
/// use dronedock_parser::extract_home;
///
/// let line = "/execute in minecraft:overworld run tp @s 100.0 70.0 200.0 0 0";
/// let home = extract_home(line).unwrap().expect("line carries coordinates");
/// assert_eq!((home.x, home.y, home.z), (99, 70, 199));
/// ```
pub fn extract_home(line: &str) -> Result<Option<BlockPos>, ParseError> {
    let mut cursor = 0;
    while let Some(found) = line[cursor..].find(SELF_MARKER) {
        let start = cursor + found;
        let mut rest = LocatingSlice::new(&line[start..]);

        match marker_triple(&mut rest) {
            Ok((x, y, z)) => {
                let x = block_coordinate(&x, start)?;
                let y = block_coordinate(&y, start)?;
                let z = block_coordinate(&z, start)?;

                let home = BlockPos::new(
                    x.saturating_sub(STATION_FOOTPRINT),
                    y,
                    z.saturating_sub(STATION_FOOTPRINT),
                );
                debug!(home:?; "Extracted home position");
                return Ok(Some(home));
            }
            // This occurrence is not followed by a full triple; resume the
            // scan behind the marker.
            Err(_) => cursor = start + SELF_MARKER.len(),
        }
    }

    debug!("No coordinate marker in line");
    Ok(None)
}

/// Convert one matched literal to a block coordinate, truncating toward
/// zero as the game does for block positions.
fn block_coordinate(raw: &Spanned<&str>, line_offset: usize) -> Result<i32, ParseError> {
    let value: f64 = raw.inner().parse().map_err(|_| {
        ParseError::invalid_literal(*raw.inner(), raw.span().shifted(line_offset))
    })?;
    Ok(value as i32)
}
