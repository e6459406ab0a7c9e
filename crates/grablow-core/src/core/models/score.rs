use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Marker column emitted at the start of every score line; it carries no data.
pub const SCORE_MARKER_COLUMN: &str = "SCORE:";

/// A single record of a score table.
///
/// Values are kept as the raw text found in the file. A column listed in the owning
/// [`ScoreTable`] but absent from the row is a missing value (the data line was shorter
/// than the header).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreRow {
    values: HashMap<String, String>,
    source: Option<Arc<Path>>,
}

impl ScoreRow {
    /// Builds a row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            source: None,
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn remove(&mut self, column: &str) -> Option<String> {
        self.values.remove(column)
    }

    /// The score file this row was read from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn set_source(&mut self, source: Arc<Path>) {
        self.source = Some(source);
    }
}

/// An ordered, row-oriented table of score records.
///
/// The column list preserves first-seen order. Row positions are implicit and always
/// contiguous, so concatenating tables renumbers them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    columns: Vec<String>,
    rows: Vec<ScoreRow>,
}

impl ScoreTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn push_row(&mut self, row: ScoreRow) {
        self.rows.push(row);
    }

    /// Removes a column and its values from every row.
    ///
    /// Returns `true` if the column was present.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(pos) = self.columns.iter().position(|c| c == name) else {
            return false;
        };
        self.columns.remove(pos);
        for row in &mut self.rows {
            row.remove(name);
        }
        true
    }

    /// Tags every row with the score file it was read from.
    pub fn attach_source(&mut self, path: &Path) {
        let source: Arc<Path> = Arc::from(path);
        for row in &mut self.rows {
            row.set_source(Arc::clone(&source));
        }
    }

    /// Concatenates tables in iteration order.
    ///
    /// The resulting column set is the union of all input columns in first-seen order.
    /// Returns `None` when there is nothing to concatenate.
    pub fn concat<I>(tables: I) -> Option<Self>
    where
        I: IntoIterator<Item = ScoreTable>,
    {
        let mut tables = tables.into_iter();
        let mut combined = tables.next()?;
        for table in tables {
            for column in table.columns {
                if !combined.has_column(&column) {
                    combined.columns.push(column);
                }
            }
            combined.rows.extend(table.rows);
        }
        Some(combined)
    }
}
