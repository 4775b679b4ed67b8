//! Library components of the `swath` command-line tool.

pub mod commands;
pub mod logging;
pub mod summary;
