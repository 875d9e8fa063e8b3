//! Reader for delimited-text world files.
//!
//! One body per row:
//!
//! ```text
//! # name, radius, mass, x, y, vx, vy
//! earth, 6371000, 1e25, 0, 0, 0, 0
//! moon, 1737100, 1e22, 0, 20000000, 20220000, 0
//! ```
//!
//! Rows whose first field contains `#` and blank rows are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LoadError;
use crate::simulation::states::{Body, NVec2};

const FIELDS: usize = 7;

/// A body together with the name it was given in the world file
#[derive(Debug, Clone, PartialEq)]
pub struct NamedBody {
    pub name: String,
    pub body: Body,
}

fn parse_number(field: &str, what: &str, line: usize) -> Result<f64, LoadError> {
    field.parse::<f64>().map_err(|e| LoadError::Parse {
        line,
        message: format!("{what}: cannot parse {field:?} as a number ({e})"),
    })
}

fn parse_row(row: &str, line: usize) -> Result<Option<NamedBody>, LoadError> {
    if row.trim().is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields[0].contains('#') {
        return Ok(None);
    }
    if fields.len() != FIELDS {
        return Err(LoadError::Parse {
            line,
            message: format!("expected {FIELDS} fields, found {}", fields.len()),
        });
    }

    let radius = parse_number(fields[1], "radius", line)?;
    let mass = parse_number(fields[2], "mass", line)?;
    let x = NVec2::new(parse_number(fields[3], "x", line)?, parse_number(fields[4], "y", line)?);
    let v = NVec2::new(parse_number(fields[5], "vx", line)?, parse_number(fields[6], "vy", line)?);

    let body = Body::new(radius, mass, x, v).map_err(|e| LoadError::Parse {
        line,
        message: e.to_string(),
    })?;
    Ok(Some(NamedBody { name: fields[0].to_string(), body }))
}

/// Parse a world file from any buffered reader
pub fn read_world<R: BufRead>(reader: R) -> Result<Vec<NamedBody>, LoadError> {
    let mut bodies = Vec::new();
    for (k, row) in reader.lines().enumerate() {
        let row = row?;
        if let Some(named) = parse_row(&row, k + 1)? {
            bodies.push(named);
        }
    }
    Ok(bodies)
}

pub fn load_world(path: &Path) -> Result<Vec<NamedBody>, LoadError> {
    let file = File::open(path)?;
    read_world(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: &str = "\
# name, radius, mass, x, y, vx, vy
heavy, 10, 100, -50, 0, 40, 0

light, 10, 1, 20, 19, -40, 0
";

    #[test]
    fn reads_rows_and_skips_comments() {
        let bodies = read_world(WORLD.as_bytes()).unwrap();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0].name, "heavy");
        assert_eq!(bodies[0].body.mass(), 100.0);
        assert_eq!(bodies[1].body.position(), NVec2::new(20.0, 19.0));
        assert_eq!(bodies[1].body.velocity(), NVec2::new(-40.0, 0.0));
    }

    #[test]
    fn reports_line_of_bad_row() {
        let text = "a, 1, 1, 0, 0, 0, 0\nb, 1, x, 0, 0, 0, 0\n";
        match read_world(text.as_bytes()) {
            Err(LoadError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_short_rows_and_invalid_bodies() {
        assert!(matches!(
            read_world("a, 1, 1, 0, 0\n".as_bytes()),
            Err(LoadError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read_world("a, 1, -5, 0, 0, 0, 0\n".as_bytes()),
            Err(LoadError::Parse { line: 1, .. })
        ));
    }
}
