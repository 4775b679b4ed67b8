//! Errors raised by the XML codec.

use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// XML reading or writing error.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The reader rejected the input.
    #[error("XML syntax error at byte {position}: {source}")]
    Syntax {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// An attribute was malformed or duplicated.
    #[error("invalid attribute: {0}")]
    Attribute(#[from] AttrError),

    /// An entity or character reference could not be resolved.
    #[error("invalid escape sequence: {0}")]
    Escape(#[from] EscapeError),

    /// Names, attribute values or text were not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The input ended while elements were still open.
    #[error("document ended inside <{open}>")]
    UnclosedElement { open: String },

    /// A closing tag appeared with no element open.
    #[error("unexpected closing tag </{name}>")]
    UnexpectedEnd { name: String },

    /// A second top-level element followed the root.
    #[error("second root element <{name}>")]
    MultipleRoots { name: String },

    /// Character data appeared outside the root element.
    #[error("text outside the root element")]
    TextOutsideRoot,

    /// The input contained no element at all.
    #[error("document has no root element")]
    MissingRoot,

    /// Well-formed document with the wrong root element.
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// The writer failed.
    #[error("failed to write XML: {0}")]
    Write(#[from] std::io::Error),
}
