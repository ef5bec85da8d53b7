//! Reporting utilities: text summaries and tables for the non-interactive commands.

pub mod format;

pub use format::*;
