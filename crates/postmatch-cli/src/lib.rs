//! CLI library components for postmatch.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod report;
