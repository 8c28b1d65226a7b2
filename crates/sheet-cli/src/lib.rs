//! Library side of the `sheetcheck` CLI: command runners and logging setup.

pub mod commands;
pub mod logging;
pub mod types;
