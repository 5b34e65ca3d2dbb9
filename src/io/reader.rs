//! Instance file reader.
//!
//! The format is a line-oriented header/data layout:
//!
//! ```text
//! NAME : example
//! COMMENT : three clients on a line
//! TYPE : vrptw
//! NB_DEPOTS : 1
//! NB_CLIENTS : 3
//! MAX_QUANTITY : 10
//! DATA_DEPOTS
//! d1 0 0 0 1000
//! DATA_CLIENTS
//! c1 5 0 0 100 4 0
//! c2 10 0 0 100 4 0
//! c3 15 0 0 100 4 0
//! EOF
//! ```
//!
//! Header lines are `KEY : value`; depot rows carry `id x y ready due`,
//! client rows `id x y ready due demand service`. Blank lines are
//! ignored and `EOF` ends the file early. Declared counts are kept on
//! the instance for reference but the parsed rows are authoritative.

use std::path::Path;

use crate::error::ParseError;
use crate::models::{Client, Depot, Point, ProblemInstance, TimeWindow};

const DEPOT_ROW_FIELDS: usize = 5;
const CLIENT_ROW_FIELDS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Depots,
    Clients,
}

fn parse_i32(line: usize, token: &str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: token.to_string(),
    })
}

fn parse_f64(line: usize, token: &str) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: token.to_string(),
    })
}

fn parse_usize(line: usize, token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: token.to_string(),
    })
}

/// Parses an instance from its textual form.
///
/// Syntactic errors only; semantic checks (duplicate ids, oversized
/// demands, …) are [`ProblemInstance::validate`]'s job.
pub fn parse_instance(input: &str) -> Result<ProblemInstance, ParseError> {
    let mut name = String::new();
    let mut comment = String::new();
    let mut kind = String::new();
    let mut declared_depots = 0usize;
    let mut declared_clients = 0usize;
    let mut capacity = 0i32;
    let mut depots = Vec::new();
    let mut clients = Vec::new();
    let mut section = Section::Header;

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        match text {
            "EOF" => break,
            "DATA_DEPOTS" => {
                section = Section::Depots;
                continue;
            }
            "DATA_CLIENTS" => {
                section = Section::Clients;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Header => {
                let (key, value) = match text.split_once(':') {
                    Some((key, value)) => (key.trim(), value.trim()),
                    None => return Err(ParseError::MissingValue { line }),
                };
                if value.is_empty() {
                    return Err(ParseError::MissingValue { line });
                }
                match key {
                    "NAME" => name = value.to_string(),
                    "COMMENT" => comment = value.to_string(),
                    "TYPE" => kind = value.to_string(),
                    "NB_DEPOTS" => declared_depots = parse_usize(line, value)?,
                    "NB_CLIENTS" => declared_clients = parse_usize(line, value)?,
                    "MAX_QUANTITY" => capacity = parse_i32(line, value)?,
                    // Unknown header keys pass through untouched.
                    _ => {}
                }
            }
            Section::Depots => {
                let fields: Vec<&str> = text.split_whitespace().collect();
                if fields.len() != DEPOT_ROW_FIELDS {
                    return Err(ParseError::MalformedRow {
                        line,
                        expected: DEPOT_ROW_FIELDS,
                        found: fields.len(),
                    });
                }
                depots.push(Depot::new(
                    fields[0],
                    Point::new(parse_i32(line, fields[1])?, parse_i32(line, fields[2])?),
                    TimeWindow::new(parse_f64(line, fields[3])?, parse_f64(line, fields[4])?),
                ));
            }
            Section::Clients => {
                let fields: Vec<&str> = text.split_whitespace().collect();
                if fields.len() != CLIENT_ROW_FIELDS {
                    return Err(ParseError::MalformedRow {
                        line,
                        expected: CLIENT_ROW_FIELDS,
                        found: fields.len(),
                    });
                }
                clients.push(Client::new(
                    fields[0],
                    Point::new(parse_i32(line, fields[1])?, parse_i32(line, fields[2])?),
                    parse_i32(line, fields[5])?,
                    TimeWindow::new(parse_f64(line, fields[3])?, parse_f64(line, fields[4])?),
                    parse_f64(line, fields[6])?,
                ));
            }
        }
    }

    Ok(
        ProblemInstance::new(name, comment, kind, depots, clients, capacity)
            .with_declared_counts(declared_depots, declared_clients),
    )
}

/// Reads and parses an instance file from disk.
pub fn read_instance(path: impl AsRef<Path>) -> Result<ProblemInstance, ParseError> {
    let text = std::fs::read_to_string(path)?;
    parse_instance(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
NAME : line3
COMMENT : three clients on a line
TYPE : vrptw
NB_DEPOTS : 1
NB_CLIENTS : 3
MAX_QUANTITY : 10

DATA_DEPOTS
d1 0 0 0 1000
DATA_CLIENTS
c1 5 0 0 100 4 0
c2 10 0 0 100 4 0
c3 15 0 0 100 4 2.5
EOF
";

    #[test]
    fn test_parse_sample() {
        let inst = parse_instance(SAMPLE).expect("well-formed");
        assert_eq!(inst.name(), "line3");
        assert_eq!(inst.description(), "three clients on a line");
        assert_eq!(inst.kind(), "vrptw");
        assert_eq!(inst.declared_depots(), 1);
        assert_eq!(inst.declared_clients(), 3);
        assert_eq!(inst.max_capacity(), 10);

        assert_eq!(inst.depot().id(), "d1");
        assert_eq!(inst.depot().window().due(), 1000.0);

        assert_eq!(inst.num_clients(), 3);
        let c3 = &inst.clients()[2];
        assert_eq!(c3.id(), "c3");
        assert_eq!(c3.point(), Point::new(15, 0));
        assert_eq!(c3.demand(), 4);
        assert_eq!(c3.service(), 2.5);
        assert!(inst.validate().is_ok());
    }

    #[test]
    fn test_parse_missing_value() {
        let err = parse_instance("NAME :\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingValue { line: 1 }));
    }

    #[test]
    fn test_parse_header_without_colon() {
        let err = parse_instance("NAME line3\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingValue { line: 1 }));
    }

    #[test]
    fn test_parse_invalid_number() {
        let err = parse_instance("MAX_QUANTITY : lots\n").unwrap_err();
        match err {
            ParseError::InvalidNumber { line, value } => {
                assert_eq!(line, 1);
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_malformed_client_row() {
        let input = "DATA_CLIENTS\nc1 5 0 0 100 4\n";
        let err = parse_instance(input).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedRow {
                line: 2,
                expected: 7,
                found: 6,
            }
        ));
    }

    #[test]
    fn test_parse_stops_at_eof_marker() {
        let input = "\
MAX_QUANTITY : 10
DATA_CLIENTS
c1 5 0 0 100 4 0
EOF
this is not part of the file
";
        let inst = parse_instance(input).expect("rows after EOF ignored");
        assert_eq!(inst.num_clients(), 1);
    }

    #[test]
    fn test_read_instance_missing_file() {
        let err = read_instance("/definitely/not/here.vrp").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
