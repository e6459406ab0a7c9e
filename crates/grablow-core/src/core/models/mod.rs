//! # Core Models Module
//!
//! In-memory representations of the data flowing through a selection run.
//!
//! ## Key Components
//!
//! - [`score`] - A single score record ([`score::ScoreRow`]) and the ordered table of
//!   records loaded from one or more score files ([`score::ScoreTable`])
//! - [`selection`] - The ranked, truncated list of candidate structures chosen for a
//!   protein ([`selection::Selection`])
//!
//! Tables are row-oriented: each row maps column names to raw text values, and the
//! table keeps the column order as it was first seen in the files. Values are only
//! interpreted (for example as energies) by the ranking engine.

pub mod score;
pub mod selection;
