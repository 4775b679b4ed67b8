//! Domain model for swath survey projects.
//!
//! A project is an ordered list of [`SwathGroup`]s. Each group owns antenna
//! [`Array`]s, each array owns [`DataProcessingParameters`] sets, and each
//! parameter set owns [`FilterItem`]s.
//!
//! These are plain data types. Persistence lives in `swath-persistence`.

pub mod filter;
pub mod group;
pub mod processing;

pub use filter::{
    ENABLED_KEY, FilterItem, FilterParameter, NAME_KEY, flag_from_text, flag_text,
};
pub use group::{Array, SwathGroup};
pub use processing::DataProcessingParameters;
