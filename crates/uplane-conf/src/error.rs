// crates/uplane-conf/src/error.rs

use quick_xml::errors::serialize::SeError;
use std::fmt;

/// Errors that can occur during uplane-conf parsing or serialization.
#[derive(Debug)]
pub enum UplaneError {
    /// The input could not be parsed as XML, or has no usable root.
    MalformedDocument(roxmltree::Error),

    /// A required carrier section was not found anywhere in the tree.
    MissingSection { section: &'static str },

    /// An element's text did not parse as the expected type, or a
    /// bounded string field was too long.
    FieldFormat {
        element: &'static str,
        value: String,
    },

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error occurred during string formatting.
    Fmt(fmt::Error),
}

impl From<roxmltree::Error> for UplaneError {
    fn from(e: roxmltree::Error) -> Self {
        UplaneError::MalformedDocument(e)
    }
}

impl From<SeError> for UplaneError {
    fn from(e: SeError) -> Self {
        UplaneError::XmlSerializing(e)
    }
}

impl From<fmt::Error> for UplaneError {
    fn from(e: fmt::Error) -> Self {
        UplaneError::Fmt(e)
    }
}

impl fmt::Display for UplaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UplaneError::MalformedDocument(e) => write!(f, "malformed XML document: {}", e),
            UplaneError::MissingSection { section } => {
                write!(f, "missing required section: <{}>", section)
            }
            UplaneError::FieldFormat { element, value } => {
                write!(f, "invalid value {:?} for element <{}>", value, element)
            }
            UplaneError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            UplaneError::Fmt(e) => write!(f, "formatting error: {}", e),
        }
    }
}

impl std::error::Error for UplaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UplaneError::MalformedDocument(e) => Some(e),
            UplaneError::XmlSerializing(e) => Some(e),
            UplaneError::Fmt(e) => Some(e),
            _ => None,
        }
    }
}
