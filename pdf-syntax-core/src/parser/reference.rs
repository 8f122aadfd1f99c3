//! Indirect object references
//!
//! A [`Reference`] is a lookup key (`number generation R`) into a document's
//! object space. Resolving it follows chains of references through an
//! [`ObjectSource`] until a non-reference value is reached. Each object
//! number is expanded at most once per resolution, so cycles end in an
//! [`IndirectObject::placeholder`] instead of looping, and the source's read
//! cursor is back where it started when the call returns.

use super::document::ObjectSource;
use super::objects::{IndirectObject, PdfObject};
use super::stack_safe::{CursorGuard, ResolveContext};
use super::{ParseError, ParseOptions, ParseResult};
use std::fmt;
use std::str::FromStr;

/// Indirect reference to object `number` of generation `generation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    number: u32,
    generation: u16,
}

impl Reference {
    /// Create a new reference
    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }

    /// Object number
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Generation number
    pub fn generation(&self) -> u16 {
        self.generation
    }

    /// Resolve to the final value.
    ///
    /// Returns `None` when the chain ends in a cycle or in a record that has
    /// no value.
    pub fn resolve<S: ObjectSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> ParseResult<Option<PdfObject>> {
        Ok(self.resolve_object(source)?.value)
    }

    /// Resolve to the final object's raw stream bytes
    pub fn resolve_stream<S: ObjectSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> ParseResult<Option<Vec<u8>>> {
        Ok(self.resolve_object(source)?.stream)
    }

    /// Resolve to the final object record
    pub fn resolve_object<S: ObjectSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> ParseResult<IndirectObject> {
        self.resolve_with_options(source, &ParseOptions::default())
    }

    /// Resolve to the final object record under `options`.
    ///
    /// The source's read offset is restored before returning, whether the
    /// walk succeeded, hit a cycle or failed.
    pub fn resolve_with_options<S: ObjectSource + ?Sized>(
        &self,
        source: &mut S,
        options: &ParseOptions,
    ) -> ParseResult<IndirectObject> {
        let mut guard = CursorGuard::new(source)?;
        let mut context = ResolveContext::with_limit(options.max_resolve_depth);

        let object = self.walk(&mut *guard, &mut context)?;
        guard.restore()?;
        Ok(object)
    }

    fn walk<S: ObjectSource + ?Sized>(
        &self,
        source: &mut S,
        context: &mut ResolveContext,
    ) -> ParseResult<IndirectObject> {
        let mut current = *self;

        loop {
            if !context.visit(current.number) {
                tracing::debug!(
                    reference = %current,
                    start = %self,
                    "reference cycle, returning placeholder"
                );
                return Ok(IndirectObject::placeholder(current.number));
            }

            context.enter()?;
            let object = source.get_object(current.number)?;

            match &object.value {
                Some(PdfObject::Reference(next)) => current = *next,
                _ => return Ok(object),
            }
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

impl FromStr for Reference {
    type Err = ParseError;

    /// Parse `"<number> <generation> R"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidReferenceSyntax(s.to_string());
        let mut parts = s.split_ascii_whitespace();

        let number = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let generation = parts
            .next()
            .and_then(|p| p.parse::<u16>().ok())
            .ok_or_else(invalid)?;

        match (parts.next(), parts.next()) {
            (Some("R"), None) => Ok(Reference::new(number, generation)),
            _ => Err(invalid()),
        }
    }
}
