//! CLI library components for the romanus conversion utility.

pub mod cli;
pub mod commands;
pub mod logging;
