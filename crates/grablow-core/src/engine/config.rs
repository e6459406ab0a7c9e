use std::path::PathBuf;
use thiserror::Error;

/// Name of the per-protein subdirectory holding score and structure files.
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_SCORE_SUFFIX: &str = ".sc";
pub const DEFAULT_STRUCTURE_SUFFIX: &str = ".pdb";
pub const DEFAULT_MANIFEST_SUFFIX: &str = "_scores.csv";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Parameter '{0}' cannot be empty")]
    EmptyParameter(&'static str),
}

/// Parameters of a selection run, fixed for its whole duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Root containing one subdirectory per protein.
    pub input_dir: PathBuf,
    /// Root under which per-protein output folders are created.
    pub output_dir: PathBuf,
    /// Number of top-ranked structures kept per protein.
    pub hit_length: usize,
    pub results_dir: String,
    pub score_suffix: String,
    pub structure_suffix: String,
    pub manifest_suffix: String,
}

#[derive(Default)]
pub struct SelectionConfigBuilder {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    hit_length: Option<usize>,
    results_dir: Option<String>,
    score_suffix: Option<String>,
    structure_suffix: Option<String>,
    manifest_suffix: Option<String>,
}

impl SelectionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, path: PathBuf) -> Self {
        self.input_dir = Some(path);
        self
    }
    pub fn output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = Some(path);
        self
    }
    pub fn hit_length(mut self, n: usize) -> Self {
        self.hit_length = Some(n);
        self
    }
    pub fn results_dir(mut self, name: impl Into<String>) -> Self {
        self.results_dir = Some(name.into());
        self
    }
    pub fn score_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.score_suffix = Some(suffix.into());
        self
    }
    pub fn structure_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.structure_suffix = Some(suffix.into());
        self
    }
    pub fn manifest_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.manifest_suffix = Some(suffix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// The output directory falls back to the input directory, and the file-name
    /// conventions fall back to the `DEFAULT_*` constants.
    pub fn build(self) -> Result<SelectionConfig, ConfigError> {
        let input_dir = self
            .input_dir
            .ok_or(ConfigError::MissingParameter("input_dir"))?;
        let output_dir = self.output_dir.unwrap_or_else(|| input_dir.clone());
        let hit_length = self
            .hit_length
            .ok_or(ConfigError::MissingParameter("hit_length"))?;

        Ok(SelectionConfig {
            input_dir,
            output_dir,
            hit_length,
            results_dir: non_empty(self.results_dir, DEFAULT_RESULTS_DIR, "results_dir")?,
            score_suffix: non_empty(self.score_suffix, DEFAULT_SCORE_SUFFIX, "score_suffix")?,
            structure_suffix: non_empty(
                self.structure_suffix,
                DEFAULT_STRUCTURE_SUFFIX,
                "structure_suffix",
            )?,
            manifest_suffix: non_empty(
                self.manifest_suffix,
                DEFAULT_MANIFEST_SUFFIX,
                "manifest_suffix",
            )?,
        })
    }
}

fn non_empty(
    value: Option<String>,
    default: &str,
    name: &'static str,
) -> Result<String, ConfigError> {
    let value = value.unwrap_or_else(|| default.to_string());
    if value.is_empty() {
        return Err(ConfigError::EmptyParameter(name));
    }
    Ok(value)
}
