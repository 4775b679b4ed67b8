//! Model to XML emission.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use swath_model::{
    Array, DataProcessingParameters, FilterItem, FilterParameter, SwathGroup, flag_text,
};

use super::error::XmlError;
use super::{FORMAT_VERSION, attr, tag};

/// Indentation width of emitted documents.
const INDENT: usize = 4;

/// Render the groups as a complete project document.
///
/// Output is deterministic: the same groups always produce the same bytes.
pub fn render_project(groups: &[SwathGroup]) -> Result<Vec<u8>, XmlError> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', INDENT);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new(tag::PROJECT);
    root.push_attribute((attr::VERSION, FORMAT_VERSION));
    xml.write_event(Event::Start(root))?;
    for group in groups {
        write_swath_group(&mut xml, group)?;
    }
    xml.write_event(Event::End(BytesEnd::new(tag::PROJECT)))?;

    let mut bytes = xml.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_swath_group<W: Write>(xml: &mut Writer<W>, group: &SwathGroup) -> Result<(), XmlError> {
    let mut start = BytesStart::new(tag::SWATH_GROUP);
    start.push_attribute((attr::NAME, group.name.as_str()));
    start.push_attribute((attr::VISIBLE, flag_text(group.visible)));
    xml.write_event(Event::Start(start))?;

    write_text_element(xml, tag::FOLDER, &group.folder)?;

    let processing = BytesStart::new(tag::PROCESSING);
    if group.arrays.is_empty() {
        xml.write_event(Event::Empty(processing))?;
    } else {
        xml.write_event(Event::Start(processing))?;
        for array in &group.arrays {
            write_array(xml, array)?;
        }
        xml.write_event(Event::End(BytesEnd::new(tag::PROCESSING)))?;
    }

    let mut velocity = BytesStart::new(tag::PROPAGATION_VELOCITY);
    let value = format_number(group.propagation_velocity);
    velocity.push_attribute((attr::VALUE, value.as_str()));
    xml.write_event(Event::Empty(velocity))?;

    xml.write_event(Event::End(BytesEnd::new(tag::SWATH_GROUP)))?;
    Ok(())
}

fn write_array<W: Write>(xml: &mut Writer<W>, array: &Array) -> Result<(), XmlError> {
    let mut start = BytesStart::new(tag::ARRAY);
    start.push_attribute((attr::ANTENNA_NAME, array.antenna_name.as_str()));
    let id = array.id.to_string();
    start.push_attribute((attr::ID, id.as_str()));

    if array.processing_params.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }
    xml.write_event(Event::Start(start))?;
    for params in &array.processing_params {
        write_processing_parameters(xml, params)?;
    }
    xml.write_event(Event::End(BytesEnd::new(tag::ARRAY)))?;
    Ok(())
}

fn write_processing_parameters<W: Write>(
    xml: &mut Writer<W>,
    params: &DataProcessingParameters,
) -> Result<(), XmlError> {
    let mut start = BytesStart::new(tag::DATA_PROCESSING_PARAMETERS);
    start.push_attribute((attr::CUT_TYPE, params.cut_type.as_str()));
    start.push_attribute((attr::NAME, params.name.as_str()));
    xml.write_event(Event::Start(start))?;

    let min = format_number(params.range_min);
    let max = format_number(params.range_max);
    let mode = params.range_mode.to_string();
    let mut range = BytesStart::new(tag::RANGE);
    range.push_attribute((attr::MIN, min.as_str()));
    range.push_attribute((attr::MAX, max.as_str()));
    range.push_attribute((attr::MODE, mode.as_str()));
    xml.write_event(Event::Empty(range))?;

    let filters = BytesStart::new(tag::FILTER_ITEMS);
    if params.filter_items.is_empty() {
        xml.write_event(Event::Empty(filters))?;
    } else {
        xml.write_event(Event::Start(filters))?;
        for item in &params.filter_items {
            write_filter_item(xml, item)?;
        }
        xml.write_event(Event::End(BytesEnd::new(tag::FILTER_ITEMS)))?;
    }

    xml.write_event(Event::End(BytesEnd::new(tag::DATA_PROCESSING_PARAMETERS)))?;
    Ok(())
}

fn write_filter_item<W: Write>(xml: &mut Writer<W>, item: &FilterItem) -> Result<(), XmlError> {
    let mut start = BytesStart::new(tag::FILTER_ITEM);
    start.push_attribute((attr::ENABLED, flag_text(item.enabled)));
    start.push_attribute((attr::NAME, item.name.as_str()));

    if item.parameters.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }
    xml.write_event(Event::Start(start))?;
    for parameter in &item.parameters {
        write_parameter(xml, parameter)?;
    }
    xml.write_event(Event::End(BytesEnd::new(tag::FILTER_ITEM)))?;
    Ok(())
}

fn write_parameter<W: Write>(
    xml: &mut Writer<W>,
    parameter: &FilterParameter,
) -> Result<(), XmlError> {
    let mut element = BytesStart::new(tag::PARAMETER);
    element.push_attribute((attr::NAME, parameter.name.as_str()));
    element.push_attribute((attr::VALUE, parameter.value.as_str()));
    if let Some(uom) = parameter.uom.as_deref()
        && !uom.is_empty()
    {
        element.push_attribute((attr::UOM, uom));
    }
    xml.write_event(Event::Empty(element))?;
    Ok(())
}

/// Write a simple text element.
fn write_text_element<W: Write>(
    xml: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), XmlError> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Shortest text that parses back to the same value.
fn format_number(value: f64) -> String {
    value.to_string()
}
