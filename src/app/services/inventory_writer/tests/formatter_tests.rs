//! Tests for fixed-width inventory line composition

use super::super::formatter::{format_inventory_line, write_inventory};
use super::mawson;
use crate::Error;
use crate::constants::{INVENTORY_BODY_WIDTH, INVENTORY_LINE_WIDTH};

#[test]
fn test_mawson_reference_line() {
    let line = format_inventory_line(&mawson()).unwrap();
    assert_eq!(line.len(), INVENTORY_LINE_WIDTH);
    assert!(line.starts_with("79989009000 -67.6000   62.9000   16.0 Mawson"));
    // everything after the 68-character body is padding
    assert_eq!(line[..INVENTORY_BODY_WIDTH].trim_end(), line.trim_end());
    assert!(line[INVENTORY_BODY_WIDTH..].chars().all(|c| c == ' '));
}

#[test]
fn test_name_truncated_to_thirty() {
    let mut station = mawson();
    station.name = "A".repeat(45);
    let line = format_inventory_line(&station).unwrap();
    assert_eq!(line.len(), INVENTORY_LINE_WIDTH);
    assert_eq!(&line[38..68], "A".repeat(30));
}

#[test]
fn test_short_name_padded() {
    let line = format_inventory_line(&mawson()).unwrap();
    // 6-character name, 24 characters of padding inside the body
    assert_eq!(&line[38..68], format!("{:<30}", "Mawson"));
}

#[test]
fn test_impossible_coordinates_violate_invariant() {
    // a latitude that cannot exist widens its column and must surface
    // as a format contract violation, never as silent truncation
    let mut station = mawson();
    station.latitude = -1234.5;
    let err = format_inventory_line(&station).unwrap_err();
    assert!(matches!(err, Error::FormatInvariant { .. }));
}

#[test]
fn test_write_inventory_terminates_lines() {
    let stations = vec![mawson(), mawson()];
    let mut out = Vec::new();
    let written = write_inventory(&stations, &mut out).unwrap();
    assert_eq!(written, 2);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert_eq!(line.len(), INVENTORY_LINE_WIDTH);
    }
    assert!(text.ends_with('\n'));
}
