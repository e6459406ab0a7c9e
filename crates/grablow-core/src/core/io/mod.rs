//! Provides input/output functionality for score tables and selection outputs.
//!
//! This module contains the reader for whitespace-delimited score files, the scanner
//! that discovers protein directories and their results, and the writer for the
//! per-protein manifest of copied structures. Tabular readers share a trait-based
//! interface so that every table carries the path it was loaded from.

pub mod layout;
pub mod manifest;
pub mod score;
pub mod traits;
