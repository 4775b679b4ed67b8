//! Change tracking and auto-save.
//!
//! Provides:
//! - `ChangeTracker` - Tracks unsaved changes and when they happened
//! - `AutoSavePolicy` - User settings for auto-save behavior

mod config;
mod tracker;

pub use config::AutoSavePolicy;
pub use tracker::ChangeTracker;
