//! CLI library components for the bell ringer tools.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
