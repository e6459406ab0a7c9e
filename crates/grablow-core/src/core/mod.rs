//! # Core Module
//!
//! Data structures and file-level utilities that the ranking engine builds on.
//!
//! - **Tabular Data** ([`models`]) - Score rows, combined score tables and ranked selections
//! - **File I/O** ([`io`]) - Score-file parsing, results-directory scanning and manifests

pub mod io;
pub mod models;
