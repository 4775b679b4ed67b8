//! Filter items and their unit-carrying parameters.
//!
//! A filter parameter is stored as a typed `(name, value, uom)` triple. The
//! composite text form `"<value> <uom>"` is still available through
//! [`FilterParameter::composite`] and [`FilterItem::get`]/[`FilterItem::set`]
//! for callers that think of a filter as a flat key/value map.

use serde::{Deserialize, Serialize};

/// Map key addressing [`FilterItem::enabled`].
pub const ENABLED_KEY: &str = "enabled";

/// Map key addressing [`FilterItem::name`].
pub const NAME_KEY: &str = "name";

/// A named, enable-flagged set of parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterItem {
    /// Read from `"1"` or `"true"`, written back as `"1"`/`"0"`. Any other
    /// attribute text reads as off, so the original spelling is not kept.
    pub enabled: bool,
    pub name: String,

    /// Parameters in document order. Names are unique within an item and
    /// never equal [`ENABLED_KEY`] or [`NAME_KEY`]; go through
    /// [`FilterItem::set_parameter`] to keep it that way.
    pub parameters: Vec<FilterParameter>,
}

impl FilterItem {
    pub fn new(enabled: bool, name: impl Into<String>) -> Self {
        Self {
            enabled,
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Append or replace a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: FilterParameter) -> Self {
        self.set_parameter(parameter);
        self
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&FilterParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Insert a parameter, replacing any existing one with the same name in
    /// place. New names are appended.
    ///
    /// A parameter named `enabled` or `name` updates the identity field
    /// instead, from its composite value.
    pub fn set_parameter(&mut self, parameter: FilterParameter) {
        if is_reserved_key(&parameter.name) {
            self.set(&parameter.name, &parameter.composite());
            return;
        }
        match self.parameters.iter_mut().find(|p| p.name == parameter.name) {
            Some(existing) => *existing = parameter,
            None => self.parameters.push(parameter),
        }
    }

    /// Remove a parameter by name.
    pub fn remove_parameter(&mut self, name: &str) -> Option<FilterParameter> {
        let index = self.parameters.iter().position(|p| p.name == name)?;
        Some(self.parameters.remove(index))
    }

    /// Map-style read. `enabled` yields `"1"`/`"0"`, `name` yields the filter
    /// name, anything else yields the parameter's composite value.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            ENABLED_KEY => Some(flag_text(self.enabled).to_string()),
            NAME_KEY => Some(self.name.clone()),
            _ => self.parameter(key).map(FilterParameter::composite),
        }
    }

    /// Map-style write. Reserved keys update the identity fields; any other
    /// key stores a parameter parsed from the composite `"<value> <uom>"`.
    pub fn set(&mut self, key: &str, composite: &str) {
        match key {
            ENABLED_KEY => self.enabled = flag_from_text(composite),
            NAME_KEY => self.name = composite.to_string(),
            _ => self.set_parameter(FilterParameter::from_composite(key, composite)),
        }
    }
}

fn is_reserved_key(key: &str) -> bool {
    key == ENABLED_KEY || key == NAME_KEY
}

/// A single filter parameter with an optional unit of measure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParameter {
    pub name: String,
    pub value: String,

    /// Unit of measure. Never `Some("")`.
    pub uom: Option<String>,
}

impl FilterParameter {
    /// Create a unitless parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            uom: None,
        }
    }

    /// Attach a unit. An empty unit clears it.
    #[must_use]
    pub fn with_uom(mut self, uom: impl Into<String>) -> Self {
        let uom = uom.into();
        self.uom = (!uom.is_empty()).then_some(uom);
        self
    }

    /// Split a composite `"<value> <uom>"` on its first space.
    ///
    /// `"12.5 mm"` becomes value `12.5` with unit `mm`; `"7"` has no unit.
    pub fn from_composite(name: impl Into<String>, composite: &str) -> Self {
        match composite.split_once(' ') {
            Some((value, uom)) => Self::new(name, value).with_uom(uom),
            None => Self::new(name, composite),
        }
    }

    /// Value joined with its unit, or the bare value when unitless.
    pub fn composite(&self) -> String {
        match &self.uom {
            Some(uom) => format!("{} {}", self.value, uom),
            None => self.value.clone(),
        }
    }
}

/// Interpret flag text: `"1"` and `"true"` are on, anything else is off.
pub fn flag_from_text(text: &str) -> bool {
    let text = text.trim();
    text == "1" || text.eq_ignore_ascii_case("true")
}

/// Canonical flag text.
pub fn flag_text(flag: bool) -> &'static str {
    if flag { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_with_unit_splits_on_first_space() {
        let param = FilterParameter::from_composite("cutoff", "12.5 mm");
        assert_eq!(param.value, "12.5");
        assert_eq!(param.uom.as_deref(), Some("mm"));
        assert_eq!(param.composite(), "12.5 mm");
    }

    #[test]
    fn composite_without_unit_is_bare() {
        let param = FilterParameter::from_composite("window", "7");
        assert_eq!(param.value, "7");
        assert!(param.uom.is_none());
        assert_eq!(param.composite(), "7");
    }

    #[test]
    fn unit_keeps_everything_after_first_space() {
        let param = FilterParameter::from_composite("rate", "3 m per s");
        assert_eq!(param.value, "3");
        assert_eq!(param.uom.as_deref(), Some("m per s"));
    }

    #[test]
    fn empty_unit_is_dropped() {
        let param = FilterParameter::new("gain", "2").with_uom("");
        assert!(param.uom.is_none());
        assert_eq!(param.composite(), "2");
    }

    #[test]
    fn set_parameter_replaces_in_place() {
        let mut item = FilterItem::new(true, "StandardFilter")
            .with_parameter(FilterParameter::new("threshold", "0.5"))
            .with_parameter(FilterParameter::new("window", "5"));

        item.set("threshold", "0.75 dB");

        let names: Vec<_> = item.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["threshold", "window"]);
        assert_eq!(item.get("threshold").as_deref(), Some("0.75 dB"));
    }

    #[test]
    fn reserved_keys_route_to_identity() {
        let mut item = FilterItem::new(false, "Old");
        item.set(ENABLED_KEY, "1");
        item.set(NAME_KEY, "New");

        assert!(item.enabled);
        assert_eq!(item.name, "New");
        assert!(item.parameters.is_empty());
        assert_eq!(item.get(ENABLED_KEY).as_deref(), Some("1"));
        assert_eq!(item.get(NAME_KEY).as_deref(), Some("New"));
        assert!(item.get("missing").is_none());
    }

    #[test]
    fn reserved_parameter_names_never_become_parameters() {
        let item = FilterItem::new(false, "F")
            .with_parameter(FilterParameter::new(NAME_KEY, "X"))
            .with_parameter(FilterParameter::new(ENABLED_KEY, "true"))
            .with_parameter(FilterParameter::new("gain", "3").with_uom("dB"));

        assert_eq!(item.name, "X");
        assert!(item.enabled);
        let names: Vec<_> = item.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["gain"]);
    }

    #[test]
    fn remove_parameter_returns_removed() {
        let mut item =
            FilterItem::new(true, "F").with_parameter(FilterParameter::new("a", "1").with_uom("s"));
        let removed = item.remove_parameter("a").unwrap();
        assert_eq!(removed.uom.as_deref(), Some("s"));
        assert!(item.remove_parameter("a").is_none());
    }

    #[test]
    fn flag_parsing() {
        assert!(flag_from_text("1"));
        assert!(flag_from_text("true"));
        assert!(flag_from_text(" TRUE "));
        assert!(!flag_from_text("0"));
        assert!(!flag_from_text(""));
        assert!(!flag_from_text("yes"));
        assert_eq!(flag_text(true), "1");
        assert_eq!(flag_text(false), "0");
    }
}
