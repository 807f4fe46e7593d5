//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the tick/band computations stay clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::{format_legend, format_run_summary, format_sample_table};
