//! File I/O operations for project persistence.
//!
//! This module handles:
//! - Loading project documents with format validation
//! - Saving project documents with atomic writes

mod load;
mod save;

pub use load::read_project;
pub use save::write_project;
