//! Unit tests for coordinate extraction.
//!
//! These cover the marker scan, truncation direction, the station
//! calibration offset, and the single fatal failure mode.

use proptest::prelude::*;

use dronedock_core::BlockPos;

use crate::extract::extract_home;
use crate::span::Span;

/// Helper asserting that `line` yields the given home position.
fn assert_extracts(line: &str, expected: (i32, i32, i32)) {
    let home = extract_home(line)
        .unwrap_or_else(|err| panic!("extraction failed for {line:?}: {err}"))
        .unwrap_or_else(|| panic!("expected a match in {line:?}"));
    assert_eq!(home, BlockPos::new(expected.0, expected.1, expected.2));
}

/// Helper asserting that `line` yields the not-found outcome.
fn assert_not_found(line: &str) {
    let result = extract_home(line).expect("scan itself must not fail");
    assert_eq!(result, None, "expected no match in {line:?}");
}

#[test]
fn extracts_from_full_teleport_command() {
    assert_extracts(
        "/execute in minecraft:overworld run tp @s 100.0 70.0 200.0 0 0",
        (99, 70, 199),
    );
}

#[test]
fn marker_may_sit_anywhere_in_the_line() {
    assert_extracts("@s 10.0 5.0 -3.0", (9, 5, -4));
    assert_extracts("some prefix @s 10.0 5.0 -3.0 some suffix", (9, 5, -4));
}

#[test]
fn truncates_toward_zero_not_down() {
    // trunc(-1.9) is -1, so x ends up at -2 after the station offset;
    // trunc(1.9) is 1, so z ends up at 0.
    assert_extracts("@s -1.9 0.0 1.9", (-2, 0, 0));
}

#[test]
fn integer_literals_need_no_fraction() {
    assert_extracts("tp @s 10 64 -3", (9, 64, -4));
}

#[test]
fn extra_whitespace_between_coordinates_is_fine() {
    assert_extracts("tp @s   10.0\t5.0   -3.0", (9, 5, -4));
}

#[test]
fn trailing_rotation_is_ignored() {
    assert_extracts("tp @s 1.5 64.0 -0.5 90 45", (0, 64, -1));
}

#[test]
fn line_without_marker_is_not_found() {
    assert_not_found("/gamemode creative");
    assert_not_found("");
    assert_not_found("100.0 70.0 200.0");
}

#[test]
fn marker_without_numbers_is_not_found() {
    assert_not_found("tp @s");
    assert_not_found("tp @s up high");
    assert_not_found("tp @s 1 2");
}

#[test]
fn scan_skips_to_a_later_matching_marker() {
    // The first occurrence has no triple behind it; the second does.
    assert_extracts("@s somewhere, then tp @s 1 2 3", (0, 2, 2));
}

#[test]
fn marker_needs_whitespace_before_the_numbers() {
    assert_not_found("@s1 2 3");
}

#[test]
fn malformed_literal_is_fatal() {
    let line = "tp @s 1..5 64 -45";
    let err = extract_home(line).expect_err("a matched non-number must fail");
    assert_eq!(err.literal(), "1..5");

    let start = line.find("1..5").unwrap();
    assert_eq!(err.span(), Span::new(start..start + 4));
}

#[test]
fn malformed_second_literal_reports_its_own_span() {
    let line = "tp @s 1 -- 3";
    let err = extract_home(line).expect_err("a matched non-number must fail");
    assert_eq!(err.literal(), "--");

    let start = line.find("--").unwrap();
    assert_eq!(err.span(), Span::new(start..start + 2));
}

proptest! {
    // Any block position a survival player can stand on round-trips
    // through the clipboard format.
    #[test]
    fn formatted_coordinates_round_trip(
        x in -30_000_000i32..30_000_000,
        y in -64i32..320,
        z in -30_000_000i32..30_000_000,
    ) {
        let line =
            format!("/execute in minecraft:overworld run tp @s {x}.5 {y}.5 {z}.5 180 0");
        let home = extract_home(&line).unwrap().expect("line carries coordinates");
        prop_assert_eq!(home, BlockPos::new(x - 1, y, z - 1));
    }
}
