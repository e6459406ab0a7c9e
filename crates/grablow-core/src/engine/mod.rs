//! # Engine Module
//!
//! The selection logic that turns combined score tables into copied structure files.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run parameters and their builder
//! - **Ranking** ([`ranking`]) - Deduplication, energy sorting and top-N truncation
//! - **Transfer** ([`transfer`]) - Copying selected structures into the output tree
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Errors that abort a run
//!
//! Recoverable conditions (a protein without results, a structure that cannot be found,
//! a destination that already exists) are logged and recorded in the run summary
//! instead of surfacing as errors.

pub mod config;
pub mod error;
pub mod progress;
pub mod ranking;
pub mod transfer;
