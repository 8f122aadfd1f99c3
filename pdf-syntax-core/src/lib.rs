//! # pdf-syntax
//!
//! The lexical and reference-resolution core of a PDF processor.
//!
//! [`Tokenizer`] turns a raw byte stream into PDF lexical tokens (literal and
//! hex strings, names, numbers, keywords and delimiters), recovering from
//! truncated or malformed input instead of failing. [`Reference`] resolves
//! indirect object references through an [`ObjectSource`], terminating on
//! reference cycles and leaving the source's read cursor where it found it.
//!
//! ```
//! use pdf_syntax::Tokenizer;
//! use std::io::Cursor;
//!
//! let mut tokenizer = Tokenizer::new(Cursor::new(b"/Type /Page (Hi) 42"));
//! let token = tokenizer.next_token().unwrap().unwrap();
//! assert_eq!(token.lexeme(), b"Type");
//! ```

pub mod error;
pub mod parser;

pub use error::{PdfError, Result};
pub use parser::{
    IndirectObject, ObjectSource, ObjectTable, ParseError, ParseOptions, ParseResult,
    ParseWarning, PdfObject, Reference, Token, Tokenizer,
};

use std::io::Read;

/// Tokenize a whole stream.
///
/// Stops at end of input; a read fault before the next token starts is
/// returned as [`PdfError::Io`].
pub fn tokenize<R: Read>(reader: R) -> Result<Vec<Token>> {
    let mut tokenizer = Tokenizer::new(reader);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
