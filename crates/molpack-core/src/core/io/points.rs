use super::traits::AtomFile;
use crate::core::models::atom::Atom;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const FIELD_NAMES: [&str; 5] = ["symbol", "x", "y", "z", "electronegativity"];

#[derive(Debug, Error)]
pub enum PointsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PointsParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointsParseErrorKind {
    #[error("Expected 5 fields (symbol x y z electronegativity), found {found}")]
    FieldCount { found: usize },
    #[error("Invalid float for field '{field}' (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
}

/// The whitespace-separated points format consumed by visualization tooling.
///
/// One atom per line: `<symbol> <x> <y> <z> <electronegativity>`, numbers with
/// three decimals. Blank lines are ignored when reading.
pub struct PointsFile;

impl PointsFile {
    pub fn format_atom(atom: &Atom) -> String {
        format!(
            "{} {:.3} {:.3} {:.3} {:.3}",
            atom.symbol, atom.position.x, atom.position.y, atom.position.z, atom.electronegativity
        )
    }

    fn parse_line(line: &str, line_num: usize) -> Result<Atom, PointsError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != FIELD_NAMES.len() {
            return Err(PointsError::Parse {
                line: line_num,
                kind: PointsParseErrorKind::FieldCount {
                    found: fields.len(),
                },
            });
        }

        let parse_float = |index: usize| -> Result<f64, PointsError> {
            fields[index].parse::<f64>().map_err(|_| PointsError::Parse {
                line: line_num,
                kind: PointsParseErrorKind::InvalidFloat {
                    field: FIELD_NAMES[index],
                    value: fields[index].to_string(),
                },
            })
        };

        Ok(Atom::new(
            fields[0],
            Point3::new(parse_float(1)?, parse_float(2)?, parse_float(3)?),
            parse_float(4)?,
        ))
    }
}

impl AtomFile for PointsFile {
    type Error = PointsError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Atom>, Self::Error> {
        let mut atoms = Vec::new();
        for (line_idx, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            if line.trim().is_empty() {
                continue;
            }
            atoms.push(Self::parse_line(&line, line_idx + 1)?);
        }
        Ok(atoms)
    }

    fn write_to(atoms: &[Atom], writer: &mut impl Write) -> Result<(), Self::Error> {
        for atom in atoms {
            writeln!(writer, "{}", Self::format_atom(atom))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn sample_atoms() -> Vec<Atom> {
        vec![
            Atom::new("O", Point3::new(1.0, 2.5, -3.25), 3.44),
            Atom::new("H", Point3::new(1.8164, 3.0129, -3.25), 2.20),
        ]
    }

    #[test]
    fn writes_fixed_point_three_decimals() {
        let mut buffer = Vec::new();
        PointsFile::write_to(&sample_atoms(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(
            text,
            "O 1.000 2.500 -3.250 3.440\nH 1.816 3.013 -3.250 2.200\n"
        );
    }

    #[test]
    fn empty_atom_list_writes_empty_output() {
        let mut buffer = Vec::new();
        PointsFile::write_to(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn reads_written_file_back_with_rounded_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points_with_symbols.txt");
        PointsFile::write_to_path(&sample_atoms(), &path).unwrap();

        let atoms = PointsFile::read_from_path(&path).unwrap();
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[1].symbol, "H");
        assert_eq!(atoms[1].position, Point3::new(1.816, 3.013, -3.25));
        assert_eq!(atoms[1].electronegativity, 2.2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let mut reader = Cursor::new("\nC 0.000 0.000 0.000 2.550\n   \n");
        let atoms = PointsFile::read_from(&mut reader).unwrap();
        assert_eq!(atoms.len(), 1);
        assert_eq!(atoms[0].symbol, "C");
    }

    #[test]
    fn wrong_field_count_reports_line_number() {
        let mut reader = Cursor::new("C 0.0 0.0 0.0 2.55\nH 1.0 2.0 3.0\n");
        let err = PointsFile::read_from(&mut reader).unwrap_err();
        match err {
            PointsError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(kind, PointsParseErrorKind::FieldCount { found: 4 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_float_names_the_field() {
        let mut reader = Cursor::new("N 0.0 abc 0.0 3.04\n");
        let err = PointsFile::read_from(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            PointsError::Parse {
                line: 1,
                kind: PointsParseErrorKind::InvalidFloat { field: "y", .. }
            }
        ));
    }
}
