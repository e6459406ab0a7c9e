//! # GRABLOW Core Library
//!
//! Selects the lowest-energy structural models from batches of molecular docking and
//! design output. For every protein directory under an input root, the score tables in
//! its `results` folder are combined, ranked by total energy, and the best-scoring
//! structure files are copied to an output location together with a manifest.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ScoreTable`, `Selection`) and
//!   I/O utilities: the score-file parser, the results-directory scanner and the
//!   manifest writer.
//!
//! - **[`engine`]: The Logic Core.** Run configuration, ranking of combined score
//!   tables, structure resolution and copying, progress reporting and the error
//!   taxonomy shared by every stage.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a single
//!   pass over an input directory tree and returns a per-protein summary of the run.

pub mod core;
pub mod engine;
pub mod workflows;
