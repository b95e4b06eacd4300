//! Core domain layer for altistat.
//!
//! Holds the record models shared by every stage of the pipeline, the error
//! taxonomy, Danish calendar rules (weekends, public holidays), localized
//! date-text parsing, text cleanup and the CLI settings surface.

pub mod calendar;
pub mod dates;
pub mod error;
pub mod models;
pub mod settings;
pub mod text;
