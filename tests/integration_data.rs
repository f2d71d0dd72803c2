//! Integration tests for the legacy text → data file pipeline
//!
//! These tests run the full conversion — block splitting, fixed-column
//! decode, GHCN-M encode — over combined-file content shaped like the
//! real READER downloads.

use scar_processor::app::models::StationId;
use scar_processor::app::services::temperature_codec::{
    decode_records, split_station_blocks, write_records,
};
use scar_processor::cli::input::WmoMap;
use scar_processor::constants::DATA_LINE_WIDTH;

const WMO_MAP: &str = "\
89564 Mawson.All.temperature.html
89062 Rothera.All.temperature.html
";

/// Two station sections; each block's first data line is the stream
/// header and is discarded by the decoder.
const COMBINED_FILE: &str = "\
Mawson
1901    Jan     Feb     Mar     Apr     May     Jun     Jul     Aug     Sep     Oct     Nov     Dec
1987    -0.8    -5.2   -10.1   -14.4   -15.5   -15.8   -18.0   -18.6   -18.0   -13.4    -5.6    -0.5
1988    -       -       -       -       -       -       -       -       -       -       -       -
Rothera
1901    Jan     Feb     Mar     Apr     May     Jun     Jul     Aug     Sep     Oct     Nov     Dec
1990     2.1     0.4    -2.3    -6.0    -9.8   -12.5   -14.0   -13.2   -10.1    -6.6    -2.4     0.8
";

#[test]
fn test_full_data_conversion() {
    let map = WmoMap::parse(WMO_MAP).unwrap();
    let mut out = Vec::new();
    let mut written = 0;
    let mut skipped = 0;

    for block in split_station_blocks(COMBINED_FILE.lines()) {
        let wmo = map.find_wmo(&block.name).expect("station in map");
        let id = StationId::from_wmo(wmo).unwrap();
        let records: Vec<_> = decode_records(&block.lines)
            .into_iter()
            .collect::<scar_processor::Result<Vec<_>>>()
            .expect("every data line should decode");
        let stats = write_records(&id, &records, &mut out).unwrap();
        written += stats.years_written;
        skipped += stats.years_skipped;
    }

    // 1988 is all-missing and never reaches the output
    assert_eq!(written, 2);
    assert_eq!(skipped, 1);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(line.len(), DATA_LINE_WIDTH);
    }

    assert!(lines[0].starts_with("799895640001987TAVG"));
    assert_eq!(&lines[0][19..27], "  -80  f");
    assert!(lines[1].starts_with("799890620001990TAVG"));
    assert_eq!(&lines[1][19..27], "  210  f");
}

#[test]
fn test_block_header_years_are_discarded() {
    // the leading line of each block never decodes: 1901 is the header
    let blocks = split_station_blocks(COMBINED_FILE.lines());
    let records: Vec<_> = decode_records(&blocks[0].lines)
        .into_iter()
        .filter_map(|r| r.ok())
        .collect();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.year != "1901"));
}

#[test]
fn test_missing_station_resolves_to_none() {
    let map = WmoMap::parse(WMO_MAP).unwrap();
    assert_eq!(map.find_wmo("Vostok"), None);
}
