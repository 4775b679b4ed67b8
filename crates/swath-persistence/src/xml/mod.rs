//! XML codec for project documents.
//!
//! Parsing reads the text into a small owned element tree first, then walks
//! that tree into model types. Emission streams events straight into a
//! quick-xml writer. Both sides share the tag and attribute names below.

mod emit;
mod error;
mod parse;
mod tree;

pub use emit::render_project;
pub use error::XmlError;
pub use parse::parse_project;

/// Value of the `version` attribute written on the root element.
pub const FORMAT_VERSION: &str = "2";

/// Element names.
pub(crate) mod tag {
    pub const PROJECT: &str = "Project";
    pub const SWATH_GROUP: &str = "SwathGroup";
    pub const FOLDER: &str = "Folder";
    pub const PROCESSING: &str = "Processing";
    pub const ARRAY: &str = "Array";
    pub const DATA_PROCESSING_PARAMETERS: &str = "DataProcessingParameters";
    pub const RANGE: &str = "Range";
    pub const FILTER_ITEMS: &str = "FilterItems";
    pub const FILTER_ITEM: &str = "FilterItem";
    pub const PARAMETER: &str = "Parameter";
    pub const PROPAGATION_VELOCITY: &str = "PropagationVelocity";
}

/// Attribute names.
pub(crate) mod attr {
    pub const VERSION: &str = "version";
    pub const NAME: &str = "name";
    pub const VISIBLE: &str = "visible";
    pub const ANTENNA_NAME: &str = "antennaName";
    pub const ID: &str = "id";
    pub const CUT_TYPE: &str = "cutType";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const MODE: &str = "mode";
    pub const ENABLED: &str = "enabled";
    pub const VALUE: &str = "value";
    pub const UOM: &str = "uom";
}
