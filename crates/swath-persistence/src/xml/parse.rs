//! Element tree to model conversion.
//!
//! Parsing is lenient below the root: missing elements and attributes fall
//! back to empty strings and zero, and unparsable numbers are logged and read
//! as zero. Only the root element name is checked.

use std::str::FromStr;

use swath_model::{
    Array, DataProcessingParameters, FilterItem, FilterParameter, SwathGroup, flag_from_text,
};

use super::error::XmlError;
use super::tree::XmlElement;
use super::{attr, tag};

/// Parse a project document into its swath groups.
///
/// Groups are collected from every `SwathGroup` element under the root, in
/// document order.
pub fn parse_project(text: &str) -> Result<Vec<SwathGroup>, XmlError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let root = XmlElement::parse_document(text)?;
    if root.name != tag::PROJECT {
        return Err(XmlError::UnexpectedRoot {
            expected: tag::PROJECT,
            found: root.name,
        });
    }
    if let Some(version) = root.attribute(attr::VERSION)
        && version != super::FORMAT_VERSION
    {
        tracing::debug!("Reading project document version {version}");
    }

    Ok(root
        .descendants(tag::SWATH_GROUP)
        .into_iter()
        .map(parse_swath_group)
        .collect())
}

fn parse_swath_group(element: &XmlElement) -> SwathGroup {
    let folder = element
        .first_child(tag::FOLDER)
        .map(|folder| folder.text().into_owned())
        .unwrap_or_default();

    let arrays = element
        .first_child(tag::PROCESSING)
        .map(|processing| {
            processing
                .descendants(tag::ARRAY)
                .into_iter()
                .map(parse_array)
                .collect()
        })
        .unwrap_or_default();

    let propagation_velocity: f64 = element
        .first_child(tag::PROPAGATION_VELOCITY)
        .map(|velocity| number_attribute(velocity, attr::VALUE))
        .unwrap_or_default();

    SwathGroup {
        name: element.attribute_or_empty(attr::NAME).to_string(),
        visible: element.attribute_or_empty(attr::VISIBLE) == "1",
        folder,
        arrays,
        propagation_velocity,
    }
}

fn parse_array(element: &XmlElement) -> Array {
    Array {
        antenna_name: element.attribute_or_empty(attr::ANTENNA_NAME).to_string(),
        id: number_attribute(element, attr::ID),
        processing_params: element
            .descendants(tag::DATA_PROCESSING_PARAMETERS)
            .into_iter()
            .map(parse_processing_parameters)
            .collect(),
    }
}

fn parse_processing_parameters(element: &XmlElement) -> DataProcessingParameters {
    let (range_min, range_max, range_mode): (f64, f64, i32) = element
        .first_child(tag::RANGE)
        .map(|range| {
            (
                number_attribute(range, attr::MIN),
                number_attribute(range, attr::MAX),
                number_attribute(range, attr::MODE),
            )
        })
        .unwrap_or_default();

    DataProcessingParameters {
        cut_type: element.attribute_or_empty(attr::CUT_TYPE).to_string(),
        name: element.attribute_or_empty(attr::NAME).to_string(),
        range_min,
        range_max,
        range_mode,
        filter_items: element
            .descendants(tag::FILTER_ITEM)
            .into_iter()
            .map(parse_filter_item)
            .collect(),
    }
}

fn parse_filter_item(element: &XmlElement) -> FilterItem {
    let mut item = FilterItem::new(
        flag_from_text(element.attribute_or_empty(attr::ENABLED)),
        element.attribute_or_empty(attr::NAME),
    );

    for parameter in element.descendants(tag::PARAMETER) {
        let name = parameter.attribute_or_empty(attr::NAME);
        let value = parameter.attribute_or_empty(attr::VALUE);
        let uom = parameter.attribute_or_empty(attr::UOM);
        // Reserved names overwrite the filter's own identity.
        item.set_parameter(FilterParameter::new(name, value).with_uom(uom));
    }
    item
}

/// Numeric attribute, zero when absent or unparsable.
fn number_attribute<T>(element: &XmlElement, name: &str) -> T
where
    T: FromStr + Default,
{
    let raw = element.attribute_or_empty(name).trim();
    if raw.is_empty() {
        return T::default();
    }
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(
            "Non-numeric {}.{} value '{}', using 0",
            element.name,
            name,
            raw
        );
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Project version="2">
    <SwathGroup name="Survey_A" visible="1">
        <Folder>Survey_A_data</Folder>
        <Processing>
            <Array antennaName="Antenna1" id="1">
                <DataProcessingParameters cutType="Standard" name="Default">
                    <Range min="0" max="100.5" mode="2"/>
                    <FilterItems>
                        <FilterItem enabled="1" name="Bandpass">
                            <Parameter name="low" value="12.5" uom="MHz"/>
                            <Parameter name="order" value="4"/>
                        </FilterItem>
                    </FilterItems>
                </DataProcessingParameters>
            </Array>
        </Processing>
        <PropagationVelocity value="1500"/>
    </SwathGroup>
</Project>
"#;

    #[test]
    fn parses_full_group() {
        let groups = parse_project(SAMPLE).unwrap();
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.name, "Survey_A");
        assert!(group.visible);
        assert_eq!(group.folder, "Survey_A_data");
        assert_eq!(group.propagation_velocity, 1500.0);

        let array = &group.arrays[0];
        assert_eq!(array.antenna_name, "Antenna1");
        assert_eq!(array.id, 1);

        let params = &array.processing_params[0];
        assert_eq!(params.cut_type, "Standard");
        assert_eq!(params.name, "Default");
        assert_eq!(params.range_min, 0.0);
        assert_eq!(params.range_max, 100.5);
        assert_eq!(params.range_mode, 2);

        let filter = &params.filter_items[0];
        assert!(filter.enabled);
        assert_eq!(filter.name, "Bandpass");
        assert_eq!(filter.get("low").as_deref(), Some("12.5 MHz"));
        assert_eq!(filter.get("order").as_deref(), Some("4"));
    }

    #[test]
    fn rejects_wrong_root() {
        let error = parse_project("<Workspace/>").unwrap_err();
        assert!(matches!(
            error,
            XmlError::UnexpectedRoot { ref found, .. } if found == "Workspace"
        ));
    }

    #[test]
    fn finds_groups_below_wrappers() {
        let groups = parse_project(
            r#"<Project><Groups><SwathGroup name="A"/></Groups><SwathGroup name="B"/></Project>"#,
        )
        .unwrap();
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn missing_elements_default_to_zero() {
        let groups = parse_project(
            r#"<Project>
                <SwathGroup name="Bare" visible="yes">
                    <Processing>
                        <Array antennaName="A">
                            <DataProcessingParameters cutType="Fast" name="P"/>
                        </Array>
                    </Processing>
                </SwathGroup>
            </Project>"#,
        )
        .unwrap();
        let group = &groups[0];
        assert!(!group.visible);
        assert_eq!(group.folder, "");
        assert_eq!(group.propagation_velocity, 0.0);
        assert_eq!(group.arrays[0].id, 0);

        let params = &group.arrays[0].processing_params[0];
        assert_eq!(params.range_min, 0.0);
        assert_eq!(params.range_max, 0.0);
        assert_eq!(params.range_mode, 0);
        assert!(params.filter_items.is_empty());
    }

    #[test]
    fn arrays_outside_processing_are_ignored() {
        let groups = parse_project(
            r#"<Project><SwathGroup name="G">
                <Array antennaName="Stray" id="9"/>
                <Processing><Wrapper><Array antennaName="Nested" id="1"/></Wrapper></Processing>
            </SwathGroup></Project>"#,
        )
        .unwrap();
        let arrays = &groups[0].arrays;
        assert_eq!(arrays.len(), 1);
        assert_eq!(arrays[0].antenna_name, "Nested");
    }

    #[test]
    fn unparsable_numbers_read_as_zero() {
        let groups = parse_project(
            r#"<Project><SwathGroup name="G">
                <Processing><Array antennaName="A" id="one"/></Processing>
                <PropagationVelocity value="fast"/>
            </SwathGroup></Project>"#,
        )
        .unwrap();
        assert_eq!(groups[0].arrays[0].id, 0);
        assert_eq!(groups[0].propagation_velocity, 0.0);
    }

    #[test]
    fn duplicate_parameter_names_last_one_wins() {
        let groups = parse_project(
            r#"<Project><SwathGroup name="G"><Processing><Array>
                <DataProcessingParameters>
                    <FilterItems>
                        <FilterItem enabled="0" name="F">
                            <Parameter name="gain" value="1"/>
                            <Parameter name="width" value="3" uom="m"/>
                            <Parameter name="gain" value="2" uom="dB"/>
                        </FilterItem>
                    </FilterItems>
                </DataProcessingParameters>
            </Array></Processing></SwathGroup></Project>"#,
        )
        .unwrap();
        let filter = &groups[0].arrays[0].processing_params[0].filter_items[0];
        assert!(!filter.enabled);
        assert_eq!(filter.parameters.len(), 2);
        assert_eq!(filter.parameters[0].name, "gain");
        assert_eq!(filter.get("gain").as_deref(), Some("2 dB"));
    }

    #[test]
    fn reserved_parameter_names_override_identity() {
        let groups = parse_project(
            r#"<Project><SwathGroup name="G"><Processing><Array>
                <DataProcessingParameters><FilterItems>
                    <FilterItem enabled="0" name="Old">
                        <Parameter name="name" value="New"/>
                        <Parameter name="enabled" value="1"/>
                    </FilterItem>
                </FilterItems></DataProcessingParameters>
            </Array></Processing></SwathGroup></Project>"#,
        )
        .unwrap();
        let filter = &groups[0].arrays[0].processing_params[0].filter_items[0];
        assert_eq!(filter.name, "New");
        assert!(filter.enabled);
        assert!(filter.parameters.is_empty());
    }

    #[test]
    fn accepts_byte_order_mark() {
        let groups = parse_project("\u{feff}<Project><SwathGroup name=\"G\"/></Project>").unwrap();
        assert_eq!(groups.len(), 1);
    }
}
