//! PDF Object Model
//!
//! Values carried by indirect objects, according to ISO 32000-1 Section 7.3.
//! These are produced by the grammar layer and handed back through an
//! [`ObjectSource`](super::ObjectSource); this crate never builds them from
//! tokens itself.

use super::reference::Reference;
use std::collections::HashMap;

/// PDF Name object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PdfName(pub String);

/// PDF String object
#[derive(Debug, Clone, PartialEq)]
pub struct PdfString(pub Vec<u8>);

/// PDF Array object
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfArray(pub Vec<PdfObject>);

/// PDF Dictionary object
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfDictionary(pub HashMap<PdfName, PdfObject>);

/// PDF Object types
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(PdfString),
    Name(PdfName),
    Array(PdfArray),
    Dictionary(PdfDictionary),
    Reference(Reference),
}

impl PdfObject {
    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PdfObject::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PdfObject::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_string(&self) -> Option<&PdfString> {
        match self {
            PdfObject::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as name
    pub fn as_name(&self) -> Option<&PdfName> {
        match self {
            PdfObject::Name(n) => Some(n),
            _ => None,
        }
    }

    /// Get as dictionary
    pub fn as_dict(&self) -> Option<&PdfDictionary> {
        match self {
            PdfObject::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Get as reference
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            PdfObject::Reference(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Reference> for PdfObject {
    fn from(reference: Reference) -> Self {
        PdfObject::Reference(reference)
    }
}

impl PdfDictionary {
    /// Create a new empty dictionary
    pub fn new() -> Self {
        PdfDictionary(HashMap::new())
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.0.get(&PdfName(key.to_string()))
    }

    /// Insert a key-value pair
    pub fn insert(&mut self, key: String, value: PdfObject) {
        self.0.insert(PdfName(key), value);
    }
}

impl PdfString {
    /// Create a new PDF string
    pub fn new(data: Vec<u8>) -> Self {
        PdfString(data)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl PdfName {
    /// Create a new PDF name
    pub fn new(name: String) -> Self {
        PdfName(name)
    }

    /// Get the name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An indirect object record: `number generation obj ... endobj`
///
/// Records are produced by the document collaborator. A record without a
/// value is the placeholder returned when resolution runs into a reference
/// cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub number: u32,
    pub generation: u16,
    pub value: Option<PdfObject>,
    pub stream: Option<Vec<u8>>,
}

impl IndirectObject {
    /// Create a record holding `value`
    pub fn new(number: u32, generation: u16, value: PdfObject) -> Self {
        Self {
            number,
            generation,
            value: Some(value),
            stream: None,
        }
    }

    /// Attach raw stream bytes to the record
    pub fn with_stream(mut self, stream: Vec<u8>) -> Self {
        self.stream = Some(stream);
        self
    }

    /// Cycle-break placeholder: carries only the object number
    pub fn placeholder(number: u32) -> Self {
        Self {
            number,
            generation: 0,
            value: None,
            stream: None,
        }
    }

    /// True for a record with neither value nor stream
    pub fn is_placeholder(&self) -> bool {
        self.value.is_none() && self.stream.is_none()
    }
}
