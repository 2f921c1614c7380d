//! Reporting utilities: formatted terminal output for the CLI front-end.

pub mod format;

pub use format::{format_score_report, format_type_list};
