//! `sales-view` library crate.
//!
//! The binary (`salesview`) is a thin wrapper around this library so that:
//!
//! - the view pipeline is testable without spawning processes or a terminal
//! - loading, reshaping, and rendering stay in separate modules

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod tui;
pub mod view;
