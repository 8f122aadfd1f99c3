//! Document collaborator interface
//!
//! Reference resolution only needs three things from a document: where its
//! read cursor is, a way to move it, and a way to fetch an indirect object by
//! number. [`ObjectSource`] names those primitives; [`ObjectTable`] is a
//! minimal in-memory implementation backed by a seekable reader.

use super::objects::IndirectObject;
use super::{ParseError, ParseResult};
use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom};

/// The primitives reference resolution is written against
pub trait ObjectSource {
    /// Current read position
    fn current_offset(&mut self) -> ParseResult<u64>;

    /// Reposition the read cursor, returning the new absolute offset
    fn seek(&mut self, pos: SeekFrom) -> ParseResult<u64>;

    /// Fetch the record for object `number`. May move the read cursor.
    fn get_object(&mut self, number: u32) -> ParseResult<IndirectObject>;
}

impl<T: ObjectSource + ?Sized> ObjectSource for &mut T {
    fn current_offset(&mut self) -> ParseResult<u64> {
        (**self).current_offset()
    }

    fn seek(&mut self, pos: SeekFrom) -> ParseResult<u64> {
        (**self).seek(pos)
    }

    fn get_object(&mut self, number: u32) -> ParseResult<IndirectObject> {
        (**self).get_object(number)
    }
}

/// Object records keyed by number, each stored at a byte offset of `reader`.
///
/// Fetching an object seeks the reader to the record's offset, the same side
/// effect a cross-reference driven reader has.
pub struct ObjectTable<R> {
    reader: R,
    entries: HashMap<u32, (u64, IndirectObject)>,
}

impl<R: Read + Seek> ObjectTable<R> {
    /// Create an empty table over `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            entries: HashMap::new(),
        }
    }

    /// Register `object` as stored at `offset`, replacing any previous record
    /// with the same number
    pub fn insert(&mut self, offset: u64, object: IndirectObject) {
        self.entries.insert(object.number, (offset, object));
    }

    /// Offset recorded for object `number`
    pub fn offset_of(&self, number: u32) -> Option<u64> {
        self.entries.get(&number).map(|(offset, _)| *offset)
    }

    /// Check if an object is registered
    pub fn contains(&self, number: u32) -> bool {
        self.entries.contains_key(&number)
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a mutable reference to the underlying reader
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Unwrap the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + Seek> ObjectSource for ObjectTable<R> {
    fn current_offset(&mut self) -> ParseResult<u64> {
        Ok(self.reader.stream_position()?)
    }

    fn seek(&mut self, pos: SeekFrom) -> ParseResult<u64> {
        Ok(self.reader.seek(pos)?)
    }

    fn get_object(&mut self, number: u32) -> ParseResult<IndirectObject> {
        let (offset, object) = self
            .entries
            .get(&number)
            .ok_or(ParseError::InvalidReference(number))?;

        tracing::trace!(number, offset, "seeking to object");
        self.reader.seek(SeekFrom::Start(*offset))?;
        Ok(object.clone())
    }
}
