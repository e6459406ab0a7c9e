use crate::core::io::traits::TabularFile;
use crate::core::models::score::{SCORE_MARKER_COLUMN, ScoreRow, ScoreTable};
use std::collections::HashMap;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Missing column header (expected a title line followed by a header line)")]
    MissingHeader,
    #[error("Parse error on line {line}: expected at most {expected} fields, found {found}")]
    TooManyFields {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Reader for whitespace-delimited score files.
///
/// Layout:
///
/// ```text
/// SEQUENCE: MKTAYIAK...
/// SCORE: total_score     rms description
/// SCORE:     -152.3    1.20 design_0001
/// SCORE:     -160.8    0.95 design_0002
/// ```
///
/// The first non-blank line is a title and is ignored; the second is the column
/// header. Fields are split on runs of whitespace. Lines repeating the header verbatim
/// (left behind when runs append to the same file) are skipped, and the `SCORE:`
/// marker column is dropped from the resulting table.
pub struct ScoreFile;

impl TabularFile for ScoreFile {
    type Error = ScoreError;

    fn read_from(reader: &mut impl BufRead) -> Result<ScoreTable, Self::Error> {
        let mut seen_title = false;
        let mut raw_header: Vec<String> = Vec::new();
        let mut table: Option<ScoreTable> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if !seen_title {
                seen_title = true;
                continue;
            }

            let Some(table) = table.as_mut() else {
                raw_header = fields.iter().map(|f| f.to_string()).collect();
                table = Some(ScoreTable::new(disambiguate_columns(&fields)));
                continue;
            };

            if fields == raw_header {
                trace!("Skipping repeated header on line {}", line_num);
                continue;
            }

            let expected = table.columns().len();
            if fields.len() > expected {
                return Err(ScoreError::TooManyFields {
                    line: line_num,
                    expected,
                    found: fields.len(),
                });
            }

            let row = ScoreRow::from_pairs(
                table
                    .columns()
                    .iter()
                    .zip(fields)
                    .map(|(column, value)| (column.clone(), value)),
            );
            table.push_row(row);
        }

        let mut table = table.ok_or(ScoreError::MissingHeader)?;
        table.drop_column(SCORE_MARKER_COLUMN);
        Ok(table)
    }
}

/// Renames repeated header names to `name.1`, `name.2`, ... so every column is unique.
fn disambiguate_columns(fields: &[&str]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    fields
        .iter()
        .map(|&name| {
            let count = counts.entry(name).or_insert(0);
            let column = if *count == 0 {
                name.to_string()
            } else {
                format!("{}.{}", name, count)
            };
            *count += 1;
            column
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn parse(content: &str) -> Result<ScoreTable, ScoreError> {
        ScoreFile::read_from(&mut Cursor::new(content))
    }

    const ROSETTA_SCORES: &str = "\
SEQUENCE: MKTAYIAKQR
SCORE: total_score     rms description
SCORE:     -152.3    1.20 design_0001
SCORE:     -160.8    0.95 design_0002
";

    #[test]
    fn reads_rosetta_layout_and_drops_marker_column() {
        let table = parse(ROSETTA_SCORES).unwrap();

        assert_eq!(table.columns(), &["total_score", "rms", "description"]);
        assert_eq!(table.len(), 2);
        let first = &table.rows()[0];
        assert_eq!(first.get("total_score"), Some("-152.3"));
        assert_eq!(first.get("description"), Some("design_0001"));
        assert_eq!(first.get("SCORE:"), None);
        assert_eq!(table.rows()[1].get("rms"), Some("0.95"));
    }

    #[test]
    fn reads_pdbfile_layout_without_marker_column() {
        let content = "docking results\npdbfile  I_sc  total\nd1.pdb -3.2 -10.0\n";
        let table = parse(content).unwrap();

        assert_eq!(table.columns(), &["pdbfile", "I_sc", "total"]);
        assert_eq!(table.rows()[0].get("pdbfile"), Some("d1.pdb"));
    }

    #[test]
    fn header_only_file_yields_empty_table() {
        let table = parse("SEQUENCE:\nSCORE: total_score description\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns(), &["total_score", "description"]);
    }

    #[test]
    fn blank_lines_do_not_count_as_title_or_header() {
        let content = "\n\nSEQUENCE:\n\nSCORE: total_score description\n\nSCORE: 1.0 m1\n";
        let table = parse(content).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].get("description"), Some("m1"));
    }

    #[test]
    fn repeated_header_lines_are_skipped() {
        let content = "\
SEQUENCE:
SCORE: total_score description
SCORE: 1.0 m1
SCORE: total_score description
SCORE: 2.0 m2
";
        let table = parse(content).unwrap();
        let ids: Vec<_> = table
            .rows()
            .iter()
            .map(|r| r.get("description").unwrap())
            .collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn short_lines_leave_trailing_values_missing() {
        let table = parse("title\nSCORE: total_score rms description\nSCORE: -1.0 0.5\n").unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.get("rms"), Some("0.5"));
        assert_eq!(row.get("description"), None);
    }

    #[test]
    fn long_lines_are_rejected_with_line_number() {
        let result = parse("title\nSCORE: total_score description\nSCORE: -1.0 m1 extra\n");
        match result {
            Err(ScoreError::TooManyFields {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 4);
            }
            other => panic!("Expected TooManyFields, got {:?}", other),
        }
    }

    #[test]
    fn missing_header_is_an_error() {
        assert!(matches!(parse(""), Err(ScoreError::MissingHeader)));
        assert!(matches!(
            parse("SEQUENCE: only a title\n"),
            Err(ScoreError::MissingHeader)
        ));
    }

    #[test]
    fn duplicate_header_names_are_disambiguated() {
        assert_eq!(
            disambiguate_columns(&["a", "b", "a", "a"]),
            vec!["a", "b", "a.1", "a.2"]
        );
    }

    #[test]
    fn read_from_path_tags_rows_with_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run1.sc");
        fs::write(&path, ROSETTA_SCORES).unwrap();

        let table = ScoreFile::read_from_path(&path).unwrap();

        assert_eq!(table.len(), 2);
        for row in table.rows() {
            assert_eq!(row.source(), Some(path.as_path()));
        }
    }

    #[test]
    fn read_from_path_propagates_missing_file() {
        let dir = tempdir().unwrap();
        let result = ScoreFile::read_from_path(dir.path().join("absent.sc"));
        assert!(matches!(result, Err(ScoreError::Io(_))));
    }
}
