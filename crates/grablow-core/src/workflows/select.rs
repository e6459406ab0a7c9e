use crate::core::io::layout::{self, ProteinUnit};
use crate::core::io::manifest::ManifestFile;
use crate::core::io::score::ScoreFile;
use crate::core::io::traits::TabularFile;
use crate::core::models::score::ScoreTable;
use crate::engine::config::SelectionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::ranking;
use crate::engine::transfer::{self, CopyOutcome};
use std::fs;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingResultsDir(PathBuf),
    NoScoreFiles,
}

/// What happened to a protein that made it past the skip checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinReport {
    /// Number of candidates the ranker selected.
    pub selected: usize,
    /// Identifiers of the structures copied by this run, best first.
    pub copied: Vec<String>,
    /// Destinations that already existed and were left alone.
    pub already_present: Vec<PathBuf>,
    /// Selected file names with no matching structure file.
    pub unresolved: Vec<String>,
    /// Score files that parsed to an empty table.
    pub empty_score_files: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProteinOutcome {
    Skipped(SkipReason),
    Processed(ProteinReport),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProteinSummary {
    pub name: String,
    pub outcome: ProteinOutcome,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub proteins: Vec<ProteinSummary>,
}

impl RunSummary {
    pub fn processed(&self) -> impl Iterator<Item = (&str, &ProteinReport)> {
        self.proteins.iter().filter_map(|p| match &p.outcome {
            ProteinOutcome::Processed(report) => Some((p.name.as_str(), report)),
            ProteinOutcome::Skipped(_) => None,
        })
    }

    pub fn skipped_count(&self) -> usize {
        self.proteins
            .iter()
            .filter(|p| matches!(p.outcome, ProteinOutcome::Skipped(_)))
            .count()
    }

    pub fn total_copied(&self) -> usize {
        self.processed().map(|(_, r)| r.copied.len()).sum()
    }
}

/// Runs the selection over every protein directory under `config.input_dir`.
///
/// Proteins are processed one at a time in name order. The first fatal error aborts
/// the run; outputs already written for earlier proteins are kept.
#[instrument(skip_all, name = "selection_workflow")]
pub fn run(
    config: &SelectionConfig,
    reporter: &ProgressReporter,
) -> Result<RunSummary, EngineError> {
    if !config.input_dir.exists() {
        return Err(EngineError::InputRootMissing(config.input_dir.clone()));
    }
    if !config.output_dir.exists() {
        info!(
            "Output directory {} does not exist, creating...",
            config.output_dir.display()
        );
        fs::create_dir_all(&config.output_dir).map_err(EngineError::io(&config.output_dir))?;
    }

    let proteins = layout::discover_proteins(&config.input_dir)
        .map_err(EngineError::io(&config.input_dir))?;
    info!(
        "Found {} protein director{} in {}.",
        proteins.len(),
        if proteins.len() == 1 { "y" } else { "ies" },
        config.input_dir.display()
    );

    reporter.report(Progress::PhaseStart {
        name: "Selecting lowest-energy structures",
    });
    reporter.report(Progress::TaskStart {
        total_steps: proteins.len() as u64,
    });

    let mut summary = RunSummary::default();
    for unit in proteins {
        reporter.report(Progress::ProteinStart {
            name: unit.name.clone(),
        });
        let outcome = process_protein(&unit, config)?;
        if let ProteinOutcome::Processed(report) = &outcome {
            reporter.report(Progress::Message(format!(
                "{}: copied {} of {} selected structure(s)",
                unit.name,
                report.copied.len(),
                report.selected
            )));
        }
        summary.proteins.push(ProteinSummary {
            name: unit.name,
            outcome,
        });
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);
    Ok(summary)
}

/// Loads, ranks and copies the structures of a single protein directory.
#[instrument(skip_all, fields(protein = %unit.name))]
pub fn process_protein(
    unit: &ProteinUnit,
    config: &SelectionConfig,
) -> Result<ProteinOutcome, EngineError> {
    info!("Processing {}...", unit.name);

    let results_dir = unit.results_dir(&config.results_dir);
    if !results_dir.is_dir() {
        warn!(
            "Results directory {} does not exist, skipping.",
            results_dir.display()
        );
        return Ok(ProteinOutcome::Skipped(SkipReason::MissingResultsDir(
            results_dir,
        )));
    }

    let listing = layout::list_results(
        &results_dir,
        &config.score_suffix,
        &config.structure_suffix,
    )
    .map_err(EngineError::io(&results_dir))?;
    if listing.score_files.is_empty() {
        warn!("No score files found in {}.", unit.name);
        return Ok(ProteinOutcome::Skipped(SkipReason::NoScoreFiles));
    }

    let output_dir = config.output_dir.join(&unit.name);
    fs::create_dir_all(&output_dir).map_err(EngineError::io(&output_dir))?;

    let mut report = ProteinReport::default();
    let mut tables = Vec::with_capacity(listing.score_files.len());
    for score_file in &listing.score_files {
        info!("Processing score file {}...", score_file.display());
        let table = ScoreFile::read_from_path(score_file).map_err(|source| EngineError::ScoreFile {
            path: score_file.clone(),
            source,
        })?;
        if table.is_empty() {
            warn!(
                "Score table is empty for score file {}.",
                score_file.display()
            );
            report.empty_score_files.push(score_file.clone());
            continue;
        }
        tables.push(table);
    }

    let combined = ScoreTable::concat(tables).ok_or_else(|| EngineError::NoScoreRows {
        protein: unit.name.clone(),
        files: listing.score_files.len(),
    })?;
    let selection = ranking::rank(&combined, config.hit_length, &config.structure_suffix)?;
    report.selected = selection.len();

    for candidate in &selection {
        let Some(source) = listing.find_structure(&candidate.file_name) else {
            warn!(
                "Could not find structure file for {} (listed in score file {}).",
                candidate.file_name,
                candidate
                    .source
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string())
            );
            report.unresolved.push(candidate.file_name.clone());
            continue;
        };

        let outcome = transfer::copy_structure(source, &output_dir)
            .map_err(EngineError::io(source))?;
        match outcome {
            CopyOutcome::AlreadyExists(dest) => {
                info!("Output file {} already exists, skipping.", dest.display());
                report.already_present.push(dest);
            }
            CopyOutcome::Copied(dest) => {
                info!("Copied {} to {}", source.display(), dest.display());
                if let Some(id) = transfer::identifier_for(&dest, &config.structure_suffix) {
                    report.copied.push(id.to_string());
                }
            }
        }
    }

    let manifest_path = ManifestFile::path_for(&output_dir, &unit.name, &config.manifest_suffix);
    if ManifestFile::write_to_path(&report.copied, &manifest_path)
        .map_err(EngineError::io(&manifest_path))?
    {
        info!(
            "Wrote {} identifier(s) to {}",
            report.copied.len(),
            manifest_path.display()
        );
        report.manifest = Some(manifest_path);
    }

    Ok(ProteinOutcome::Processed(report))
}
