use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writer for the per-protein list of copied structures.
///
/// The manifest is plain text with one structure identifier per line, joined by
/// newlines with no header and no trailing newline. The `.csv` extension is historical.
pub struct ManifestFile;

impl ManifestFile {
    /// `<protein_dir>/<protein_name><suffix>`, e.g. `out/P1/P1_scores.csv`.
    pub fn path_for(protein_dir: &Path, protein_name: &str, suffix: &str) -> PathBuf {
        protein_dir.join(format!("{}{}", protein_name, suffix))
    }

    pub fn write_to<S: AsRef<str>>(identifiers: &[S], writer: &mut impl Write) -> io::Result<()> {
        for (i, id) in identifiers.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            writer.write_all(id.as_ref().as_bytes())?;
        }
        writer.flush()
    }

    /// Writes the manifest unless `identifiers` is empty.
    ///
    /// Returns `true` if a file was written.
    pub fn write_to_path<S: AsRef<str>, P: AsRef<Path>>(
        identifiers: &[S],
        path: P,
    ) -> io::Result<bool> {
        if identifiers.is_empty() {
            return Ok(false);
        }
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(identifiers, &mut writer)?;
        Ok(true)
    }
}
