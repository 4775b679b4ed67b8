//! Per-array processing parameter sets.

use serde::{Deserialize, Serialize};

use crate::filter::FilterItem;

/// A named processing configuration: cut type, range and filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataProcessingParameters {
    /// Cut classification (e.g. "Standard").
    pub cut_type: String,

    pub name: String,

    /// Lower bound of the processing range.
    pub range_min: f64,

    /// Upper bound of the processing range.
    pub range_max: f64,

    /// Range interpretation code.
    pub range_mode: i32,

    /// Filters applied by this configuration, in document order.
    pub filter_items: Vec<FilterItem>,
}

impl DataProcessingParameters {
    /// Create a configuration with an empty `0..0` range and no filters.
    pub fn new(cut_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cut_type: cut_type.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the range bounds and mode.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64, mode: i32) -> Self {
        self.range_min = min;
        self.range_max = max;
        self.range_mode = mode;
        self
    }

    /// Append a filter.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterItem) -> Self {
        self.filter_items.push(filter);
        self
    }

    /// First filter with the given name.
    pub fn filter(&self, name: &str) -> Option<&FilterItem> {
        self.filter_items.iter().find(|f| f.name == name)
    }

    /// Filters that are switched on.
    pub fn enabled_filters(&self) -> impl Iterator<Item = &FilterItem> {
        self.filter_items.iter().filter(|f| f.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_range() {
        let params = DataProcessingParameters::new("Standard", "Default").with_range(0.0, 100.0, 2);
        assert_eq!(params.range_min, 0.0);
        assert_eq!(params.range_max, 100.0);
        assert_eq!(params.range_mode, 2);
    }

    #[test]
    fn enabled_filters_skips_disabled() {
        let params = DataProcessingParameters::new("Standard", "Default")
            .with_filter(FilterItem::new(true, "Bandpass"))
            .with_filter(FilterItem::new(false, "Notch"))
            .with_filter(FilterItem::new(true, "Gain"));

        let names: Vec<_> = params.enabled_filters().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Bandpass", "Gain"]);
        assert!(params.filter("Notch").is_some());
    }
}
