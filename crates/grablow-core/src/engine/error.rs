use super::config::ConfigError;
use crate::core::io::score::ScoreError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Input directory {} does not exist", .0.display())]
    InputRootMissing(PathBuf),

    #[error("Failed to parse score file '{path}': {source}", path = path.display())]
    ScoreFile {
        path: PathBuf,
        #[source]
        source: ScoreError,
    },

    #[error("No score rows to combine for protein '{protein}' ({files} score file(s) were empty)")]
    NoScoreRows { protein: String, files: usize },

    #[error("Required column '{column}' is missing from the combined score table")]
    MissingColumn { column: &'static str },

    #[error("Invalid energy value '{value}' for structure '{identifier}'")]
    InvalidEnergy { identifier: String, value: String },

    #[error("I/O error at '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
