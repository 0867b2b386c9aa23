//! End-to-end checks of both generators against recorded output.

use heesch_cli::{process_records, write_kite_tables, Error, RecordStats, TableFormat};

const KITE_TABLES: &str = include_str!("data/kite_tables.cpp");
const POLYHEXES: &str = include_str!("data/polyhexes.txt");
const POLYIAMONDS: &str = include_str!("data/polyiamonds.txt");

fn run_records(input: &str) -> Result<(String, RecordStats), Error> {
    let mut out = Vec::new();
    let stats = process_records(input.as_bytes(), &mut out)?;
    Ok((String::from_utf8(out).unwrap(), stats))
}

#[test]
fn kite_tables_match_header_byte_for_byte() {
    let mut out = Vec::new();
    write_kite_tables(&mut out, TableFormat::Cpp).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), KITE_TABLES);
}

#[test]
fn kite_json_carries_the_same_points() {
    let mut out = Vec::new();
    write_kite_tables(&mut out, TableFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let northwest: Vec<(i64, i64)> = value["all_neighbours"]["northwest"]
        .as_array()
        .unwrap()
        .iter()
        .map(|pt| (pt["q"].as_i64().unwrap(), pt["p"].as_i64().unwrap()))
        .collect();
    assert_eq!(
        northwest,
        vec![(-2, 1), (-1, 2), (0, -1), (1, 0), (-2, 0), (0, 2), (2, -2), (1, -2), (2, -1)]
    );
    assert_eq!(value["edge_neighbours"].as_object().unwrap().len(), 6);
}

#[test]
fn polyhexes_expand_to_recorded_polyiamonds() {
    let (out, stats) = run_records(POLYHEXES).unwrap();
    assert_eq!(out, POLYIAMONDS);
    assert_eq!(
        stats,
        RecordStats {
            records: 4,
            hexes: 5,
            expansions: 22,
        }
    );
}

#[test]
fn single_hex_at_origin() {
    let (out, _) = run_records("0 0\n").unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    for line in &lines {
        assert!(line.starts_with("0 0 -2 1 -3 0 -2 -2 0 -3 1 -2 "));
        assert_eq!(line.split(' ').count(), 2 * (6 + 1));
    }
    assert_eq!(lines[5], "0 0 -2 1 -3 0 -2 -2 0 -3 1 -2 3 -3");
}

#[test]
fn line_width_follows_hex_count() {
    let (out, _) = run_records("0 0 4 -2 -3 9\n").unwrap();
    assert_eq!(out.lines().count(), 18);
    for line in out.lines() {
        assert_eq!(line.split_whitespace().count(), 2 * (6 * 3 + 1));
    }
}

#[test]
fn empty_input_writes_nothing() {
    let (out, stats) = run_records("").unwrap();
    assert!(out.is_empty());
    assert_eq!(stats, RecordStats::default());
}

#[test]
fn malformed_record_aborts_with_context() {
    let err = run_records("0 0\n0 0\n3 q\n0 0\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("line 3:"), "{}", msg);
    assert!(msg.contains("\"q\""), "{}", msg);
}

#[test]
fn oversized_coordinate_aborts_with_line_number() {
    let err = run_records("0 0\n9223372036854775807 0\n").unwrap_err();
    assert!(matches!(
        err,
        Error::Record {
            line: 2,
            source: heesch_iamond::Error::CoordinateOutOfRange { .. },
            ..
        }
    ));
}
