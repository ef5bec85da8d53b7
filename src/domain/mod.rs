//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the loaded table rows (`ForecastRecord`, `ActualRecord`, `ActualsTable`)
//! - view outputs (`ReconciledRecord`, `HolidayMark`)
//! - the user-driven filter tuple (`ViewSelection`)

pub mod types;

pub use types::*;
