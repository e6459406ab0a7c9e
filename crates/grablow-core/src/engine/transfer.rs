use crate::core::io::layout::base_name;
use std::fs::{self, File, FileTimes};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(PathBuf),
    /// Something already exists at the destination; it was left untouched.
    AlreadyExists(PathBuf),
}

/// Copies `source` into `dest_dir` under the same base name.
///
/// Contents, permissions and access/modification times are carried over. The data is
/// staged in a temporary file inside `dest_dir` and only moved to its final name once
/// complete, so a failed copy leaves nothing behind. An existing destination is never
/// overwritten.
pub fn copy_structure(source: &Path, dest_dir: &Path) -> io::Result<CopyOutcome> {
    let file_name = source.file_name().ok_or_else(|| {
        io::Error::new(
            ErrorKind::InvalidInput,
            format!("'{}' has no file name", source.display()),
        )
    })?;
    let dest = dest_dir.join(file_name);
    if fs::symlink_metadata(&dest).is_ok() {
        return Ok(CopyOutcome::AlreadyExists(dest));
    }

    let mut reader = File::open(source)?;
    let metadata = reader.metadata()?;
    let mut staged = NamedTempFile::new_in(dest_dir)?;
    io::copy(&mut reader, staged.as_file_mut())?;

    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    staged.as_file().set_times(times)?;
    staged.as_file().set_permissions(metadata.permissions())?;

    match staged.persist_noclobber(&dest) {
        Ok(_) => Ok(CopyOutcome::Copied(dest)),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
            Ok(CopyOutcome::AlreadyExists(dest))
        }
        Err(e) => Err(e.error),
    }
}

/// The structure identifier recorded in the manifest: the base name without `suffix`.
pub fn identifier_for<'a>(path: &'a Path, suffix: &str) -> Option<&'a str> {
    let name = base_name(path)?;
    Some(name.strip_suffix(suffix).unwrap_or(name))
}
