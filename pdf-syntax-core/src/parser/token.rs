//! PDF lexical token
//!
//! A token is the raw lexeme read for one call to
//! [`Tokenizer::next_token`](super::Tokenizer::next_token), together with the
//! byte that started it. Classifying the token (number, keyword, boolean,
//! null, dictionary or array delimiter) is left to the grammar layer.

use std::fmt;

/// A single lexical unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    bytes: Vec<u8>,
    trigger: u8,
    is_number: bool,
}

impl Token {
    /// Start a token with its triggering byte
    pub(crate) fn new(trigger: u8) -> Self {
        Self {
            bytes: vec![trigger],
            trigger,
            is_number: false,
        }
    }

    /// Start an ordinary token, flagged numeric when `trigger` is a digit
    pub(crate) fn new_ordinary(trigger: u8) -> Self {
        Self {
            bytes: vec![trigger],
            trigger,
            is_number: trigger.is_ascii_digit(),
        }
    }

    /// Append a byte to the lexeme
    pub(crate) fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append a byte to an ordinary token, keeping the numeric hint in step
    pub(crate) fn push_ordinary(&mut self, byte: u8) {
        self.is_number = self.is_number && byte.is_ascii_digit();
        self.bytes.push(byte);
    }

    /// The first significant byte of the token
    pub fn trigger(&self) -> u8 {
        self.trigger
    }

    /// Raw token bytes, including the trigger byte and any closing delimiter
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the token, returning its raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Token payload without its syntactic delimiters.
    ///
    /// Literal strings lose the surrounding parentheses, hex strings the
    /// surrounding angle brackets and names the leading slash. Every other
    /// token, including `<<` and `>>`, is returned whole.
    pub fn lexeme(&self) -> &[u8] {
        let bytes = self.bytes.as_slice();
        match self.trigger {
            b'(' => strip(bytes, b')'),
            b'<' if !self.is_dict_start() => strip(bytes, b'>'),
            b'/' => &bytes[1..],
            _ => bytes,
        }
    }

    /// True while every byte of the lexeme is an ASCII decimal digit.
    ///
    /// Signs and decimal points are not digits, so `-5` and `1.5` are not
    /// flagged here.
    pub fn is_number(&self) -> bool {
        self.is_number
    }

    /// True for the dictionary start marker `<<`
    pub fn is_dict_start(&self) -> bool {
        self.bytes == b"<<"
    }

    /// True for the dictionary end marker `>>`
    pub fn is_dict_end(&self) -> bool {
        self.bytes == b">>"
    }

    /// Length of the raw token in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Tokens always hold at least their trigger byte
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn strip(bytes: &[u8], close: u8) -> &[u8] {
    let inner = &bytes[1..];
    inner.strip_suffix(&[close]).unwrap_or(inner)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
