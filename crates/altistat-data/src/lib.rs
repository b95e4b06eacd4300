//! Offline parsing and statistics layer for altistat.
//!
//! Responsible for splitting scraped markup fragments into tokens,
//! expanding raw per-day rows into per-token records, filtering by date
//! range, aggregating statistics and persisting raw batches.

pub mod classifier;
pub mod expander;
pub mod filter;
pub mod stats;
pub mod store;
pub mod tokenizer;

pub use altistat_core as core;
