mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use grablow::engine::config::{SelectionConfig, SelectionConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings read from an optional TOML file, all of them overridable from the CLI.
///
/// ```toml
/// hit-length = 10
/// results-dir = "results"
/// score-suffix = ".sc"
/// structure-suffix = ".pdb"
/// manifest-suffix = "_scores.csv"
/// ```
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialSelectionConfig {
    hit_length: Option<usize>,
    results_dir: Option<String>,
    score_suffix: Option<String>,
    structure_suffix: Option<String>,
    manifest_suffix: Option<String>,
}

impl PartialSelectionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the final run configuration: CLI flag, then config file, then default.
    ///
    /// `current_dir` is the input directory used when `-i` is not given.
    pub fn merge_with_cli(self, args: &Cli, current_dir: PathBuf) -> Result<SelectionConfig> {
        let defaults = DefaultsConfig::default();

        let input_dir = args.input_dir.clone().unwrap_or(current_dir);
        let output_dir = args.output_dir.clone().unwrap_or_else(|| input_dir.clone());
        let hit_length = args
            .hit_length
            .or(self.hit_length)
            .unwrap_or(defaults.hit_length);

        SelectionConfigBuilder::new()
            .input_dir(input_dir)
            .output_dir(output_dir)
            .hit_length(hit_length)
            .results_dir(self.results_dir.unwrap_or(defaults.results_dir))
            .score_suffix(self.score_suffix.unwrap_or(defaults.score_suffix))
            .structure_suffix(self.structure_suffix.unwrap_or(defaults.structure_suffix))
            .manifest_suffix(self.manifest_suffix.unwrap_or(defaults.manifest_suffix))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn args(argv: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("grablow").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = PartialSelectionConfig::default()
            .merge_with_cli(&args(&[]), PathBuf::from("/work"))
            .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("/work"));
        assert_eq!(config.output_dir, PathBuf::from("/work"));
        assert_eq!(config.hit_length, 5);
        assert_eq!(config.results_dir, "results");
        assert_eq!(config.score_suffix, ".sc");
        assert_eq!(config.structure_suffix, ".pdb");
        assert_eq!(config.manifest_suffix, "_scores.csv");
    }

    #[test]
    fn output_defaults_to_explicit_input() {
        let config = PartialSelectionConfig::default()
            .merge_with_cli(&args(&["-i", "/data/runs"]), PathBuf::from("/work"))
            .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("/data/runs"));
        assert_eq!(config.output_dir, PathBuf::from("/data/runs"));
    }

    #[test]
    fn file_values_override_defaults_and_cli_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grablow.toml");
        fs::write(
            &path,
            "hit-length = 10\nstructure-suffix = \".cif\"\nresults-dir = \"out\"\n",
        )
        .unwrap();
        let partial = PartialSelectionConfig::from_file(&path).unwrap();

        let config = partial
            .merge_with_cli(&args(&["-n", "2", "-o", "/best"]), PathBuf::from("/work"))
            .unwrap();

        assert_eq!(config.hit_length, 2);
        assert_eq!(config.structure_suffix, ".cif");
        assert_eq!(config.results_dir, "out");
        assert_eq!(config.score_suffix, ".sc");
        assert_eq!(config.output_dir, PathBuf::from("/best"));
    }

    #[test]
    fn file_hit_length_is_used_when_flag_is_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grablow.toml");
        fs::write(&path, "hit-length = 12\n").unwrap();

        let config = PartialSelectionConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args(&[]), PathBuf::from("/work"))
            .unwrap();

        assert_eq!(config.hit_length, 12);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grablow.toml");
        fs::write(&path, "hit_length = 3\n").unwrap();

        let result = PartialSelectionConfig::from_file(&path);

        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = PartialSelectionConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn empty_suffix_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grablow.toml");
        fs::write(&path, "score-suffix = \"\"\n").unwrap();

        let result = PartialSelectionConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&args(&[]), PathBuf::from("/work"));

        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
