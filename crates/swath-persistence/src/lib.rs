//! Persistent storage for swath survey projects.
//!
//! This crate owns the in-memory project document and its XML file format.
//!
//! # Features
//!
//! - **Typed XML codec** built on quick-xml (parse and emit are symmetric)
//! - **Atomic writes** to prevent data corruption
//! - **All-or-nothing loads**: a failed load never touches the current groups
//! - **Dirty tracking** with an optional debounced auto-save policy
//!
//! # File Format
//!
//! ```text
//! Project[version]
//!   SwathGroup[name,visible]*
//!     Folder (text)
//!     Processing
//!       Array[antennaName,id]*
//!         DataProcessingParameters[cutType,name]*
//!           Range[min,max,mode]
//!           FilterItems
//!             FilterItem[enabled,name]*
//!               Parameter[name,value,uom?]*
//!     PropagationVelocity[value]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use swath_model::SwathGroup;
//! use swath_persistence::ProjectStore;
//!
//! let mut store = ProjectStore::new();
//! store.load("survey.iqproj")?;
//! store.add(SwathGroup::new("Survey_2024-08-01_10-00-00"))?;
//! store.save()?;
//! ```
//!
//! # Architecture
//!
//! - `xml/` - Element tree reader, model parse and emit
//! - `io/` - File I/O operations (load, atomic save)
//! - `autosave/` - Change tracking and auto-save policy
//! - `store.rs` - The `ProjectStore` session object
//! - `error.rs` - Error types with user-friendly messages

mod autosave;
mod error;
mod io;
mod store;
mod xml;

pub use autosave::{AutoSavePolicy, ChangeTracker};
pub use error::{ProjectError, ProjectErrorKind, Result};
pub use io::{read_project, write_project};
pub use store::ProjectStore;
pub use xml::{FORMAT_VERSION, XmlError, parse_project, render_project};
