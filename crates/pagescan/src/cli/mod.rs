//! CLI support for the `pagescan` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
