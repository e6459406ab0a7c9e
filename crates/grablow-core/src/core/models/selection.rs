use std::path::PathBuf;

/// A structure chosen by the ranker, together with what it was ranked on.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The value of the identifier column (`description` or `pdbfile`).
    pub identifier: String,
    /// The structure file name the candidate must resolve to.
    pub file_name: String,
    /// The energy used for ranking; `None` for the `pdbfile` layout or a missing value.
    pub energy: Option<f64>,
    /// The score file that contributed the winning row.
    pub source: Option<PathBuf>,
}

/// Candidates for one protein, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    candidates: Vec<Candidate>,
}

impl Selection {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.file_name.as_str())
    }
}

impl From<Vec<Candidate>> for Selection {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self::new(candidates)
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
