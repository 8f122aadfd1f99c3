//! PDF Syntax Module
//!
//! This module implements the byte-level lexer for PDF syntax (ISO 32000-1
//! Section 7.2) and cycle-safe resolution of indirect object references
//! (ISO 32000-1 Section 7.3.10).

pub mod byte_reader;
pub mod document;
pub mod lexer;
pub mod objects;
pub mod reference;
pub mod stack_safe;
pub mod token;

use crate::error::PdfError;

pub use self::byte_reader::ByteReader;
pub use self::document::{ObjectSource, ObjectTable};
pub use self::lexer::Tokenizer;
pub use self::objects::{IndirectObject, PdfArray, PdfDictionary, PdfName, PdfObject, PdfString};
pub use self::reference::Reference;
pub use self::stack_safe::{CursorGuard, ResolveContext};
pub use self::token::Token;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// PDF Parser errors
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Syntax error at position {position}: {message}")]
    SyntaxError { position: usize, message: String },

    #[error("Invalid object reference: object {0} not found")]
    InvalidReference(u32),

    #[error("Reference chain too deep: {depth} (limit: {limit})")]
    RecursionLimit { depth: usize, limit: usize },

    #[error("Invalid reference syntax: {0}")]
    InvalidReferenceSyntax(String),
}

impl From<ParseError> for PdfError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Io(e) => PdfError::Io(e),
            ParseError::InvalidReference(num) => PdfError::InvalidReference(num),
            other => PdfError::ParseError(other.to_string()),
        }
    }
}

/// Options controlling tokenization and reference resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of objects a single resolution may walk through.
    /// `None` leaves chains unbounded; cycles terminate regardless.
    pub max_resolve_depth: Option<usize>,
    /// Record a [`ParseWarning`] for every recovery the tokenizer performs
    pub collect_warnings: bool,
}

impl ParseOptions {
    /// Options with a hard limit on reference chain length
    pub fn strict_depth(limit: usize) -> Self {
        Self {
            max_resolve_depth: Some(limit),
            ..Self::default()
        }
    }

    /// Set the maximum reference chain length
    pub fn with_max_resolve_depth(mut self, limit: usize) -> Self {
        self.max_resolve_depth = Some(limit);
        self
    }

    /// Enable or disable warning collection
    pub fn with_warnings(mut self, collect: bool) -> Self {
        self.collect_warnings = collect;
        self
    }
}

/// A recovery performed while scanning a malformed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// Literal string ran out of input before its closing parenthesis
    UnterminatedString { position: usize },
    /// Hex string ran out of input before its closing `>`
    UnterminatedHexString { position: usize },
    /// Backslash escape at the very end of input
    TruncatedEscape { position: usize },
    /// Three-digit octal escape exceeded 255; only the first two digits were used
    OctalOverflow { position: usize },
    /// Fewer than two hex digits followed `#` in a name
    IncompleteNameEscape { position: usize },
    /// Hex string had an odd number of digits
    OddHexDigits { position: usize },
    /// A read fault ended a token early
    ReadFault { position: usize, message: String },
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::UnterminatedString { position } => {
                write!(f, "unterminated literal string at {position}")
            }
            ParseWarning::UnterminatedHexString { position } => {
                write!(f, "unterminated hex string at {position}")
            }
            ParseWarning::TruncatedEscape { position } => {
                write!(f, "escape truncated by end of input at {position}")
            }
            ParseWarning::OctalOverflow { position } => {
                write!(f, "octal escape out of byte range at {position}")
            }
            ParseWarning::IncompleteNameEscape { position } => {
                write!(f, "incomplete #xx escape in name at {position}")
            }
            ParseWarning::OddHexDigits { position } => {
                write!(f, "odd number of hex digits at {position}")
            }
            ParseWarning::ReadFault { position, message } => {
                write!(f, "read fault at {position}: {message}")
            }
        }
    }
}
