//! Resolution bookkeeping
//!
//! [`ResolveContext`] tracks the object numbers visited by one top-level
//! resolution so that reference cycles terminate, and optionally bounds the
//! chain length. [`CursorGuard`] saves a source's read offset and puts it
//! back when the guard goes away, on every exit path.

use super::document::ObjectSource;
use super::{ParseError, ParseResult};
use std::collections::HashSet;
use std::io::SeekFrom;
use std::ops::{Deref, DerefMut};

/// Per-call resolution context
#[derive(Debug, Default)]
pub struct ResolveContext {
    /// Object numbers already expanded during this resolution
    pub visited: HashSet<u32>,
    /// Number of objects fetched so far
    pub depth: usize,
    /// Maximum allowed depth, if any
    pub max_depth: Option<usize>,
}

impl ResolveContext {
    /// Create a new, unbounded context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new context with a chain length limit
    pub fn with_limit(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Mark `number` as visited. Returns `false` if it already was.
    pub fn visit(&mut self, number: u32) -> bool {
        self.visited.insert(number)
    }

    /// Account for one more object on the chain
    pub fn enter(&mut self) -> ParseResult<()> {
        if let Some(limit) = self.max_depth {
            if self.depth + 1 > limit {
                return Err(ParseError::RecursionLimit {
                    depth: self.depth + 1,
                    limit,
                });
            }
        }
        self.depth += 1;
        Ok(())
    }
}

/// RAII guard restoring a source's read offset
pub struct CursorGuard<'a, S: ObjectSource + ?Sized> {
    source: &'a mut S,
    offset: u64,
    restored: bool,
}

impl<'a, S: ObjectSource + ?Sized> CursorGuard<'a, S> {
    /// Save the current offset of `source`
    pub fn new(source: &'a mut S) -> ParseResult<Self> {
        let offset = source.current_offset()?;
        tracing::trace!(offset, "saved read offset");
        Ok(Self {
            source,
            offset,
            restored: false,
        })
    }

    /// Seek back to the saved offset, reporting any failure
    pub fn restore(mut self) -> ParseResult<()> {
        self.restored = true;
        self.source.seek(SeekFrom::Start(self.offset))?;
        tracing::trace!(offset = self.offset, "restored read offset");
        Ok(())
    }
}

impl<S: ObjectSource + ?Sized> Deref for CursorGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.source
    }
}

impl<S: ObjectSource + ?Sized> DerefMut for CursorGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.source
    }
}

impl<S: ObjectSource + ?Sized> Drop for CursorGuard<'_, S> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = self.source.seek(SeekFrom::Start(self.offset)) {
            tracing::warn!(offset = self.offset, error = %e, "failed to restore read offset");
        }
    }
}
