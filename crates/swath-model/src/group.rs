//! Swath groups and antenna arrays.

use serde::{Deserialize, Serialize};

use crate::processing::DataProcessingParameters;

/// A named survey unit holding antenna arrays and propagation settings.
///
/// The name is the group's key inside a project and must be unique there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwathGroup {
    /// Unique group name.
    pub name: String,

    /// Whether the group is shown in viewers.
    pub visible: bool,

    /// Free-text folder the group's data lives in.
    pub folder: String,

    /// Antenna arrays, in document order.
    pub arrays: Vec<Array>,

    /// Propagation velocity of the medium.
    pub propagation_velocity: f64,
}

impl SwathGroup {
    /// Create a visible, empty group whose folder matches its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            folder: name.clone(),
            name,
            visible: true,
            arrays: Vec::new(),
            propagation_velocity: 0.0,
        }
    }

    /// Set the folder.
    #[must_use]
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Set the visibility flag.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the propagation velocity.
    #[must_use]
    pub fn with_propagation_velocity(mut self, velocity: f64) -> Self {
        self.propagation_velocity = velocity;
        self
    }

    /// Append an array.
    #[must_use]
    pub fn with_array(mut self, array: Array) -> Self {
        self.arrays.push(array);
        self
    }

    /// Look up an array by its id.
    pub fn array(&self, id: i32) -> Option<&Array> {
        self.arrays.iter().find(|a| a.id == id)
    }

    /// Total number of processing parameter sets across all arrays.
    pub fn processing_count(&self) -> usize {
        self.arrays.iter().map(|a| a.processing_params.len()).sum()
    }

    /// Total number of filter items across all arrays.
    pub fn filter_count(&self) -> usize {
        self.arrays
            .iter()
            .flat_map(|a| &a.processing_params)
            .map(|p| p.filter_items.len())
            .sum()
    }
}

/// An antenna array and its processing configurations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Array {
    pub antenna_name: String,
    pub id: i32,
    pub processing_params: Vec<DataProcessingParameters>,
}

impl Array {
    pub fn new(antenna_name: impl Into<String>, id: i32) -> Self {
        Self {
            antenna_name: antenna_name.into(),
            id,
            processing_params: Vec::new(),
        }
    }

    /// Append a processing parameter set.
    #[must_use]
    pub fn with_processing(mut self, params: DataProcessingParameters) -> Self {
        self.processing_params.push(params);
        self
    }
}
