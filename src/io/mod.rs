//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - reconciled view export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
