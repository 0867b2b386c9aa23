//! Line format shared by input and output: whitespace-separated integer
//! pairs, one point per pair.

use heesch_geom::Point;

use crate::{Error, Result, MAX_HEX_COORDINATE};

fn parse_coordinate(token: &str) -> Result<i64> {
    let value = token.parse::<i64>().map_err(|_| Error::InvalidToken {
        token: token.to_string(),
    })?;
    if value.unsigned_abs() > MAX_HEX_COORDINATE.unsigned_abs() {
        return Err(Error::CoordinateOutOfRange {
            token: token.to_string(),
            max: MAX_HEX_COORDINATE,
        });
    }
    Ok(value)
}

/// Parse one line of `x y x y ...` into points.
///
/// Every coordinate must lie within [`MAX_HEX_COORDINATE`] of zero.
pub fn parse_record(line: &str) -> Result<Vec<Point>> {
    let values = line
        .split_whitespace()
        .map(parse_coordinate)
        .collect::<Result<Vec<_>>>()?;

    if values.len() % 2 != 0 {
        return Err(Error::OddTokenCount {
            count: values.len(),
        });
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

/// Format points as one line of `x y x y ...` without a trailing newline.
pub fn format_record(points: &[Point]) -> String {
    points
        .iter()
        .map(|pt| format!("{} {}", pt.q, pt.p))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        assert_eq!(
            parse_record("0 0 1 -2\n").unwrap(),
            vec![Point::new(0, 0), Point::new(1, -2)]
        );
        assert_eq!(
            parse_record("  3\t4   -5 6 ").unwrap(),
            vec![Point::new(3, 4), Point::new(-5, 6)]
        );
    }

    #[test]
    fn blank_line_is_empty_record() {
        assert!(parse_record("").unwrap().is_empty());
        assert!(parse_record(" \t ").unwrap().is_empty());
    }

    #[test]
    fn rejects_odd_count() {
        assert_eq!(
            parse_record("1 2 3"),
            Err(Error::OddTokenCount { count: 3 })
        );
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(
            parse_record("1 2.5"),
            Err(Error::InvalidToken {
                token: "2.5".to_string()
            })
        );
        assert!(parse_record("a b").is_err());
    }

    #[test]
    fn rejects_coordinates_beyond_embedding_range() {
        assert_eq!(
            parse_record("9223372036854775807 0"),
            Err(Error::CoordinateOutOfRange {
                token: "9223372036854775807".to_string(),
                max: MAX_HEX_COORDINATE,
            })
        );
        assert!(parse_record("0 -2147483648").is_err());
        assert_eq!(
            parse_record("2147483647 -2147483647").unwrap(),
            vec![Point::new(MAX_HEX_COORDINATE, -MAX_HEX_COORDINATE)]
        );
    }

    #[test]
    fn error_messages() {
        let err = parse_record("7").unwrap_err();
        assert_eq!(err.to_string(), "expected an even number of integers, got 1");
        let err = parse_record("1 x").unwrap_err();
        assert_eq!(err.to_string(), "invalid integer token \"x\"");
    }

    #[test]
    fn formats_flat_pairs() {
        assert_eq!(
            format_record(&[Point::new(0, 0), Point::new(-2, 1)]),
            "0 0 -2 1"
        );
        assert_eq!(format_record(&[]), "");
    }

    #[test]
    fn format_then_parse() {
        let pts = vec![Point::new(10, -3), Point::new(-7, 0), Point::new(1, 1)];
        assert_eq!(parse_record(&format_record(&pts)).unwrap(), pts);
    }
}
