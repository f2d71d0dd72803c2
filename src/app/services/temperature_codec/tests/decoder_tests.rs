//! Tests for legacy fixed-column decoding

use super::super::decoder::{decode_line, decode_records, split_station_blocks};
use super::{legacy_header, legacy_line};
use crate::app::models::MonthValue;

#[test]
fn test_decode_single_line() {
    let line = legacy_line(
        "1987",
        [
            "-0.8", "-5.2", "-10.1", "-14.4", "-15.5", "-15.8", "-18.0", "-18.6", "-18.0",
            "-13.4", "-5.6", "-0.5",
        ],
    );
    let record = decode_line(&line).unwrap();
    assert_eq!(record.year, "1987");
    assert_eq!(record.values[0], MonthValue::Present(-0.8));
    assert_eq!(record.values[11], MonthValue::Present(-0.5));
}

#[test]
fn test_missing_marker_decodes_to_sentinel() {
    let line = legacy_line(
        "1987",
        [
            "-", "-5.2", "-", "-", "-", "-", "-", "-", "-", "-", "-", "-",
        ],
    );
    let record = decode_line(&line).unwrap();
    assert_eq!(record.values[0], MonthValue::Missing);
    assert_eq!(record.values[1], MonthValue::Present(-5.2));
    assert!(!record.is_all_missing());
}

#[test]
fn test_fields_read_at_fixed_stride() {
    // right-aligned values must decode identically to left-aligned ones
    let mut line = String::from("1987");
    for _ in 0..12 {
        line.push_str("    -1.5");
    }
    let record = decode_line(&line).unwrap();
    assert!(
        record
            .values
            .iter()
            .all(|v| *v == MonthValue::Present(-1.5))
    );
}

#[test]
fn test_header_line_discarded() {
    let lines = vec![
        legacy_header(),
        legacy_line(
            "1987",
            [
                "-0.8", "-5.2", "-10.1", "-14.4", "-15.5", "-15.8", "-18.0", "-18.6", "-18.0",
                "-13.4", "-5.6", "-0.5",
            ],
        ),
    ];
    let records = decode_records(&lines);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].as_ref().unwrap().year, "1987");
}

#[test]
fn test_undecodable_line_isolated() {
    let lines = vec![
        legacy_header(),
        "19".to_string(),
        legacy_line(
            "1988",
            ["-", "-", "-", "-", "-", "-", "-", "-", "-", "-", "-", "-"],
        ),
    ];
    let records = decode_records(&lines);
    assert_eq!(records.len(), 2);
    assert!(records[0].is_err());
    assert!(records[1].is_ok());
}

#[test]
fn test_short_field_is_malformed() {
    // a truncated line leaves an empty field, which is not a valid value
    let line = format!("1987{:<8}", "-0.8");
    assert!(decode_line(&line).is_err());
}

#[test]
fn test_split_station_blocks() {
    let lines = vec![
        "Mawson",
        "1987    -0.8",
        "1988    -1.2",
        "Rothera",
        "1990    -4.1",
    ];
    let blocks = split_station_blocks(lines);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].name, "Mawson");
    assert_eq!(blocks[0].lines.len(), 2);
    assert_eq!(blocks[1].name, "Rothera");
    assert_eq!(blocks[1].lines, vec!["1990    -4.1"]);
}

#[test]
fn test_split_ignores_leading_data_and_blank_lines() {
    let lines = vec!["1980    -3.0", "", "  Mawson  ", "1987    -0.8"];
    let blocks = split_station_blocks(lines);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].name, "Mawson");
    assert_eq!(blocks[0].lines, vec!["1987    -0.8"]);
}
