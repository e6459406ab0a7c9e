//! Discovery of protein directories and the files inside their results folders.
//!
//! The expected input tree is:
//!
//! ```text
//! <input_root>/
//!     <protein_a>/
//!         results/
//!             run1.sc
//!             run2.sc
//!             design_0001.pdb
//!             ...
//!     <protein_b>/
//!         ...
//! ```
//!
//! Listings are sorted by file name so a run over the same tree always visits proteins
//! and score files in the same order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A protein directory directly under the input root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinUnit {
    pub name: String,
    pub path: PathBuf,
}

impl ProteinUnit {
    pub fn results_dir(&self, results_dir_name: &str) -> PathBuf {
        self.path.join(results_dir_name)
    }
}

/// Score and structure files found in one results directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsListing {
    pub score_files: Vec<PathBuf>,
    pub structure_files: Vec<PathBuf>,
}

impl ResultsListing {
    /// Finds the structure file whose base name is exactly `file_name`.
    pub fn find_structure(&self, file_name: &str) -> Option<&Path> {
        self.structure_files
            .iter()
            .find(|p| base_name(p) == Some(file_name))
            .map(PathBuf::as_path)
    }
}

/// Returns the final path component as UTF-8, if it is representable.
pub fn base_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Lists the immediate subdirectories of `root`, sorted by name.
///
/// Regular files and other non-directory entries are ignored.
pub fn discover_proteins(root: &Path) -> io::Result<Vec<ProteinUnit>> {
    let mut units = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        units.push(ProteinUnit {
            name: name.to_string_lossy().into_owned(),
            path,
        });
    }
    units.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(units)
}

/// Collects the files in `dir` ending with each suffix (non-recursive, sorted by name).
pub fn list_results(
    dir: &Path,
    score_suffix: &str,
    structure_suffix: &str,
) -> io::Result<ResultsListing> {
    let mut listing = ResultsListing::default();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = base_name(&path) else {
            continue;
        };
        let is_score = name.ends_with(score_suffix);
        let is_structure = name.ends_with(structure_suffix);
        if is_score && is_structure {
            listing.score_files.push(path.clone());
            listing.structure_files.push(path);
        } else if is_score {
            listing.score_files.push(path);
        } else if is_structure {
            listing.structure_files.push(path);
        }
    }
    listing.score_files.sort();
    listing.structure_files.sort();
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_proteins_returns_sorted_directories_only() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("P2")).unwrap();
        fs::create_dir(root.path().join("P1")).unwrap();
        fs::write(root.path().join("notes.txt"), b"not a protein").unwrap();

        let units = discover_proteins(root.path()).unwrap();

        let names: Vec<_> = units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2"]);
        assert_eq!(units[0].path, root.path().join("P1"));
        assert_eq!(
            units[0].results_dir("results"),
            root.path().join("P1").join("results")
        );
    }

    #[test]
    fn discover_proteins_fails_for_missing_root() {
        let root = tempdir().unwrap();
        assert!(discover_proteins(&root.path().join("missing")).is_err());
    }

    #[test]
    fn list_results_separates_score_and_structure_files() {
        let dir = tempdir().unwrap();
        for name in ["b.sc", "a.sc", "m2.pdb", "m1.pdb", "log.txt", "m1.pdb.bak"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.sc")).unwrap();

        let listing = list_results(dir.path(), ".sc", ".pdb").unwrap();

        assert_eq!(
            listing.score_files,
            vec![dir.path().join("a.sc"), dir.path().join("b.sc")]
        );
        assert_eq!(
            listing.structure_files,
            vec![dir.path().join("m1.pdb"), dir.path().join("m2.pdb")]
        );
    }

    #[test]
    fn find_structure_matches_exact_base_name() {
        let listing = ResultsListing {
            score_files: vec![],
            structure_files: vec![
                PathBuf::from("/r/model_1.pdb"),
                PathBuf::from("/r/model_10.pdb"),
            ],
        };

        assert_eq!(
            listing.find_structure("model_10.pdb"),
            Some(Path::new("/r/model_10.pdb"))
        );
        assert_eq!(listing.find_structure("model_1"), None);
        assert_eq!(listing.find_structure("odel_1.pdb"), None);
    }
}
