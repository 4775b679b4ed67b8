//! Owned element tree built from a quick-xml event stream.
//!
//! The tree is local to a single parse call; nothing here outlives it.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use super::error::XmlError;

/// Child of an element.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with its attributes and children in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Read a whole document and return its root element.
    ///
    /// Whitespace-only text between elements is dropped, but kept when it is
    /// the whole content of an element. Comments, processing instructions
    /// and the declaration are skipped.
    pub fn parse_document(text: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(text);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut pending = String::new();

        loop {
            let event = reader.read_event().map_err(|source| XmlError::Syntax {
                position: reader.buffer_position(),
                source,
            })?;
            match event {
                Event::Start(start) => {
                    flush_text(&mut pending, &mut stack, false)?;
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    flush_text(&mut pending, &mut stack, false)?;
                    let element = element_from_start(&start)?;
                    attach(element, &mut stack, &mut root)?;
                }
                Event::End(end) => {
                    let sole_content = stack.last().is_some_and(|open| open.children.is_empty());
                    flush_text(&mut pending, &mut stack, sole_content)?;
                    let element = stack.pop().ok_or_else(|| XmlError::UnexpectedEnd {
                        name: String::from_utf8_lossy(end.name().as_ref()).into_owned(),
                    })?;
                    attach(element, &mut stack, &mut root)?;
                }
                Event::Text(text) => {
                    pending.push_str(&unescape(std::str::from_utf8(&text)?)?);
                }
                Event::CData(data) => {
                    pending.push_str(std::str::from_utf8(&data)?);
                }
                Event::GeneralRef(reference) => {
                    let name = std::str::from_utf8(&reference)?;
                    pending.push_str(&unescape(&format!("&{name};"))?);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        flush_text(&mut pending, &mut stack, false)?;
        if let Some(open) = stack.pop() {
            return Err(XmlError::UnclosedElement { open: open.name });
        }
        root.ok_or(XmlError::MissingRoot)
    }

    /// Attribute value, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value, or an empty string when absent.
    pub fn attribute_or_empty(&self, name: &str) -> &str {
        self.attribute(name).unwrap_or_default()
    }

    /// Direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// First direct child element with the given name.
    pub fn first_child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|child| child.name == name)
    }

    /// All descendant elements with the given name, in document order.
    /// The element itself is not included.
    pub fn descendants(&self, name: &str) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        for child in self.child_elements() {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text(&self) -> Cow<'_, str> {
        match self.children.as_slice() {
            [] => Cow::Borrowed(""),
            [XmlNode::Text(text)] => Cow::Borrowed(text),
            _ => {
                let mut out = String::new();
                self.collect_text(&mut out);
                Cow::Owned(out)
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())?.to_string();
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
        let value = unescape(std::str::from_utf8(&attribute.value)?)?.into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn attach(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(XmlNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::MultipleRoots { name: element.name });
    }
    *root = Some(element);
    Ok(())
}

fn flush_text(
    pending: &mut String,
    stack: &mut [XmlElement],
    keep_whitespace: bool,
) -> Result<(), XmlError> {
    if pending.is_empty() || (!keep_whitespace && pending.trim().is_empty()) {
        pending.clear();
        return Ok(());
    }
    let text = std::mem::take(pending);
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Text(text));
            Ok(())
        }
        None => Err(XmlError::TextOutsideRoot),
    }
}
