//! PDF Lexer
//!
//! Tokenizes PDF syntax according to ISO 32000-1 Section 7.2
//!
//! Each call to [`Tokenizer::next_token`] produces exactly one [`Token`].
//! Only the whitespace skip in front of a token can fail; once a token has
//! started, end of input or a read fault closes it with whatever was read,
//! adding a synthetic `)` to literal strings and `>` to hex strings.

use super::byte_reader::ByteReader;
use super::token::Token;
use super::{ParseOptions, ParseResult, ParseWarning};
use std::io::Read;

/// PDF whitespace characters (Table 1)
pub const WHITESPACE: &[u8] = b"\x00\t\n\x0C\r ";

/// PDF delimiter characters (Table 2)
pub const DELIMITERS: &[u8] = b"()<>[]/%";

/// Check if a byte is PDF whitespace
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    WHITESPACE.contains(&b)
}

/// Check if a byte is a PDF delimiter
#[inline]
pub fn is_delimiter(b: u8) -> bool {
    DELIMITERS.contains(&b)
}

#[inline]
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// PDF tokenizer over a byte stream
pub struct Tokenizer<R> {
    reader: ByteReader<R>,
    options: ParseOptions,
    warnings: Vec<ParseWarning>,
    failed: bool,
}

impl<R: Read> Tokenizer<R> {
    /// Create a new tokenizer from a reader
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ParseOptions::default())
    }

    /// Create a new tokenizer with custom options
    pub fn with_options(reader: R, options: ParseOptions) -> Self {
        Self {
            reader: ByteReader::new(reader),
            options,
            warnings: Vec::new(),
            failed: false,
        }
    }

    /// Get the next token.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. A read fault while
    /// skipping leading whitespace is returned as an error and no token is
    /// produced.
    pub fn next_token(&mut self) -> ParseResult<Option<Token>> {
        let b = match self.skip_whitespace()? {
            Some(b) => b,
            None => return Ok(None),
        };

        let token = match b {
            b'[' | b']' => Token::new(b),
            b'(' => self.read_literal_string(),
            b'/' => self.read_name(),
            b'<' => self.read_angle_bracket(),
            b'>' => self.read_dict_end(),
            _ => self.read_ordinary(b),
        };

        Ok(Some(token))
    }

    /// Skip whitespace and `%` comments.
    ///
    /// Returns the first significant byte, or `None` at end of stream. A
    /// comment that runs to the end of the stream also yields `None`.
    pub fn skip_whitespace(&mut self) -> ParseResult<Option<u8>> {
        loop {
            let b = match self.reader.read_byte()? {
                Some(b) => b,
                None => return Ok(None),
            };

            if is_whitespace(b) {
                continue;
            }

            if b == b'%' {
                let (_, found) = self.reader.read_until(b'\n')?;
                if !found {
                    return Ok(None);
                }
                continue;
            }

            return Ok(Some(b));
        }
    }

    /// Get current position (bytes consumed)
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Get a reference to the underlying reader
    pub fn get_ref(&self) -> &R {
        self.reader.get_ref()
    }

    /// Warnings recorded so far (empty unless `collect_warnings` is set)
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Take the recorded warnings, leaving the list empty
    pub fn take_warnings(&mut self) -> Vec<ParseWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Unwrap the underlying reader
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    /// Read a byte inside a token; read faults end the token
    fn next_byte(&mut self) -> Option<u8> {
        match self.reader.read_byte() {
            Ok(b) => b,
            Err(e) => {
                let position = self.reader.position();
                self.warn(ParseWarning::ReadFault {
                    position,
                    message: e.to_string(),
                });
                None
            }
        }
    }

    /// Skip whitespace inside a token; read faults end the token
    fn next_significant_byte(&mut self) -> Option<u8> {
        match self.skip_whitespace() {
            Ok(b) => b,
            Err(e) => {
                let position = self.reader.position();
                self.warn(ParseWarning::ReadFault {
                    position,
                    message: e.to_string(),
                });
                None
            }
        }
    }

    fn warn(&mut self, warning: ParseWarning) {
        tracing::debug!(%warning, "recovered malformed token");
        if self.options.collect_warnings {
            self.warnings.push(warning);
        }
    }

    /// Read a literal string (parentheses)
    fn read_literal_string(&mut self) -> Token {
        let start = self.reader.position() - 1;
        let mut token = Token::new(b'(');
        let mut open_parens = 1usize;

        while open_parens > 0 {
            let Some(b) = self.next_byte() else {
                self.warn(ParseWarning::UnterminatedString { position: start });
                token.push(b')');
                return token;
            };

            if b != b'\\' {
                token.push(b);
                match b {
                    b'(' => open_parens += 1,
                    b')' => open_parens -= 1,
                    _ => {}
                }
                continue;
            }

            let Some(escaped) = self.next_byte() else {
                self.warn(ParseWarning::TruncatedEscape {
                    position: self.reader.position(),
                });
                token.push(b'\\');
                token.push(b')');
                return token;
            };

            match escaped {
                // Escaped end of line: \LF, \CR or \CRLF
                b'\n' => {}
                b'\r' => match self.next_byte() {
                    Some(b'\n') => {}
                    Some(_) => {
                        self.reader.unread_byte();
                    }
                    None => {
                        self.warn(ParseWarning::UnterminatedString { position: start });
                        token.push(b')');
                        return token;
                    }
                },
                b'n' => token.push(b'\n'),
                b'r' => token.push(b'\r'),
                b't' => token.push(b'\t'),
                b'b' => token.push(b'\x08'),
                b'f' => token.push(b'\x0C'),
                b'0'..=b'7' => {
                    let value = self.read_octal_escape(escaped);
                    token.push(value);
                }
                // Unknown escape, use literal
                other => token.push(other),
            }
        }

        token
    }

    /// Read the rest of an octal escape whose first digit is `first`.
    ///
    /// At most three digits are used. A three digit code above 255 gives
    /// back its last digit to the stream and uses the first two.
    fn read_octal_escape(&mut self, first: u8) -> u8 {
        let mut digits = [first - b'0', 0, 0];
        let mut len = 1;

        while len < 3 {
            match self.next_byte() {
                Some(d @ b'0'..=b'7') => {
                    digits[len] = d - b'0';
                    len += 1;
                }
                Some(_) => {
                    self.reader.unread_byte();
                    break;
                }
                None => break,
            }
        }

        let value = digits[..len]
            .iter()
            .fold(0u16, |acc, &d| acc * 8 + u16::from(d));

        if value > 0xFF {
            self.reader.unread_byte();
            self.warn(ParseWarning::OctalOverflow {
                position: self.reader.position(),
            });
            return digits[0] * 8 + digits[1];
        }

        value as u8
    }

    /// Read a name object (e.g., /Type)
    fn read_name(&mut self) -> Token {
        let mut token = Token::new(b'/');

        while let Some(b) = self.next_byte() {
            if is_whitespace(b) || is_delimiter(b) {
                self.reader.unread_byte();
                break;
            }

            // Handle hex codes in names (e.g., /A#20B means /A B)
            if b == b'#' {
                let value = self.read_name_escape();
                token.push(value);
            } else {
                token.push(b);
            }
        }

        token
    }

    /// Read the digits of a `#xx` name escape.
    ///
    /// Digits are written over a `"00"` seed, so missing digits count as
    /// zero in the positions that were not filled: `#4` is `0x40`.
    fn read_name_escape(&mut self) -> u8 {
        let mut code = [b'0', b'0'];

        for slot in code.iter_mut() {
            match self.next_byte() {
                Some(d) if d.is_ascii_hexdigit() => *slot = d,
                Some(_) => {
                    self.reader.unread_byte();
                    self.warn(ParseWarning::IncompleteNameEscape {
                        position: self.reader.position(),
                    });
                    break;
                }
                None => {
                    self.warn(ParseWarning::IncompleteNameEscape {
                        position: self.reader.position(),
                    });
                    break;
                }
            }
        }

        (hex_value(code[0]) << 4) | hex_value(code[1])
    }

    /// Read angle bracket tokens (hex strings or dict start)
    fn read_angle_bracket(&mut self) -> Token {
        let start = self.reader.position() - 1;
        let mut token = Token::new(b'<');

        match self.next_byte() {
            Some(b'<') => {
                token.push(b'<');
                return token;
            }
            Some(_) => {
                self.reader.unread_byte();
            }
            None => {
                self.warn(ParseWarning::UnterminatedHexString { position: start });
                token.push(b'>');
                return token;
            }
        }

        let mut high: Option<u8> = None;
        loop {
            match self.next_significant_byte() {
                Some(b'>') => break,
                Some(b) if b.is_ascii_hexdigit() => match high.take() {
                    Some(h) => token.push((h << 4) | hex_value(b)),
                    None => high = Some(hex_value(b)),
                },
                // Anything else inside a hex string is ignored
                Some(_) => {}
                None => {
                    self.warn(ParseWarning::UnterminatedHexString { position: start });
                    break;
                }
            }
        }

        // Pad with 0 if odd number of digits
        if let Some(h) = high {
            self.warn(ParseWarning::OddHexDigits { position: start });
            token.push(h << 4);
        }

        token.push(b'>');
        token
    }

    /// Read `>>` or a lone `>`
    fn read_dict_end(&mut self) -> Token {
        let mut token = Token::new(b'>');

        match self.next_byte() {
            Some(b'>') => token.push(b'>'),
            Some(_) => {
                self.reader.unread_byte();
            }
            None => {}
        }

        token
    }

    /// Read a number or keyword, up to the next whitespace or delimiter
    fn read_ordinary(&mut self, first: u8) -> Token {
        let mut token = Token::new_ordinary(first);

        while let Some(b) = self.next_byte() {
            if is_whitespace(b) || is_delimiter(b) {
                self.reader.unread_byte();
                break;
            }
            token.push_ordinary(b);
        }

        token
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
