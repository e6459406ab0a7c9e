//! # Workflows Module
//!
//! Top-level entry points that run the whole selection pipeline.
//!
//! - **Selection Workflow** ([`select`]) - Scans an input root, ranks every protein's
//!   score tables, copies the best structures and writes the manifests. Returns a
//!   [`select::RunSummary`] describing what happened to each protein.

pub mod select;
