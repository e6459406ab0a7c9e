//! Ranking of combined score tables.
//!
//! Two table layouts are recognized:
//!
//! - **Energy layout** (`description` + `total_score`): rows are deduplicated by
//!   `description`, keeping the last occurrence, then sorted by `total_score`
//!   ascending. The structure file name is the identifier plus the structure suffix.
//! - **File layout** (`pdbfile`, no `description`): the first rows are taken in table
//!   order with no deduplication or sorting. The `pdbfile` value is the file name.

use super::error::EngineError;
use crate::core::models::score::{ScoreRow, ScoreTable};
use crate::core::models::selection::{Candidate, Selection};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

pub const IDENTIFIER_COLUMN: &str = "description";
pub const ENERGY_COLUMN: &str = "total_score";
pub const FILE_COLUMN: &str = "pdbfile";

/// Picks at most `hit_length` candidates from `table`, best first.
pub fn rank(
    table: &ScoreTable,
    hit_length: usize,
    structure_suffix: &str,
) -> Result<Selection, EngineError> {
    if table.has_column(IDENTIFIER_COLUMN) {
        rank_by_energy(table, hit_length, structure_suffix)
    } else {
        take_in_table_order(table, hit_length)
    }
}

fn rank_by_energy(
    table: &ScoreTable,
    hit_length: usize,
    structure_suffix: &str,
) -> Result<Selection, EngineError> {
    if !table.has_column(ENERGY_COLUMN) {
        return Err(EngineError::MissingColumn {
            column: ENERGY_COLUMN,
        });
    }

    let mut ranked = latest_rows(table.rows())
        .into_iter()
        .map(|row| parse_energy(row).map(|energy| (energy, row)))
        .collect::<Result<Vec<_>, EngineError>>()?;
    ranked.sort_by(|a, b| compare_energy(a.0, b.0));
    debug!(
        "Ranked {} unique structures out of {} rows.",
        ranked.len(),
        table.len()
    );

    let candidates = ranked
        .into_iter()
        .take(hit_length)
        .filter_map(|(energy, row)| {
            let Some(identifier) = row.get(IDENTIFIER_COLUMN) else {
                warn!(
                    "Dropping a selected row with no '{}' value (from {}).",
                    IDENTIFIER_COLUMN,
                    display_source(row.source())
                );
                return None;
            };
            Some(Candidate {
                identifier: identifier.to_string(),
                file_name: format!("{}{}", identifier, structure_suffix),
                energy,
                source: row.source().map(Path::to_path_buf),
            })
        })
        .collect::<Vec<_>>();

    Ok(candidates.into())
}

fn take_in_table_order(table: &ScoreTable, hit_length: usize) -> Result<Selection, EngineError> {
    if !table.has_column(FILE_COLUMN) {
        return Err(EngineError::MissingColumn {
            column: FILE_COLUMN,
        });
    }

    let candidates = table
        .rows()
        .iter()
        .take(hit_length)
        .filter_map(|row| {
            let Some(file_name) = row.get(FILE_COLUMN) else {
                warn!(
                    "Dropping a selected row with no '{}' value (from {}).",
                    FILE_COLUMN,
                    display_source(row.source())
                );
                return None;
            };
            Some(Candidate {
                identifier: file_name.to_string(),
                file_name: file_name.to_string(),
                energy: None,
                source: row.source().map(Path::to_path_buf),
            })
        })
        .collect::<Vec<_>>();

    Ok(candidates.into())
}

/// Keeps only the last row for each identifier, at that row's position.
///
/// Rows without an identifier share a single key.
fn latest_rows(rows: &[ScoreRow]) -> Vec<&ScoreRow> {
    let mut last_index: HashMap<Option<&str>, usize> = HashMap::new();
    for (i, row) in rows.iter().enumerate() {
        last_index.insert(row.get(IDENTIFIER_COLUMN), i);
    }
    rows.iter()
        .enumerate()
        .filter(|(i, row)| last_index.get(&row.get(IDENTIFIER_COLUMN)) == Some(i))
        .map(|(_, row)| row)
        .collect()
}

/// Missing and NaN energies are `None`; anything else non-numeric is an error.
fn parse_energy(row: &ScoreRow) -> Result<Option<f64>, EngineError> {
    let Some(raw) = row.get(ENERGY_COLUMN) else {
        return Ok(None);
    };
    let value: f64 = raw.parse().map_err(|_| EngineError::InvalidEnergy {
        identifier: row
            .get(IDENTIFIER_COLUMN)
            .unwrap_or("<missing>")
            .to_string(),
        value: raw.to_string(),
    })?;
    Ok((!value.is_nan()).then_some(value))
}

/// Ascending, with missing energies last.
fn compare_energy(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn display_source(source: Option<&Path>) -> String {
    source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown>".to_string())
}
