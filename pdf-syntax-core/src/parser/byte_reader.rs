//! Buffered byte source with single-byte pushback
//!
//! Wraps a [`BufReader`] and forwards the three operations the lexer needs:
//! read one byte, push the last byte back, and read through a delimiter.

use std::io::{self, BufRead, BufReader, Read};

/// Byte reader used by the tokenizer
pub struct ByteReader<R> {
    reader: BufReader<R>,
    /// Last byte handed out, available for [`ByteReader::unread_byte`]
    last: Option<u8>,
    /// Byte pushed back and not yet re-read
    pending: Option<u8>,
    position: usize,
}

impl<R: Read> ByteReader<R> {
    /// Create a new byte reader
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            last: None,
            pending: None,
            position: 0,
        }
    }

    /// Read the next byte. `Ok(None)` signals end of stream.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.pending.take() {
            self.last = Some(b);
            self.position += 1;
            return Ok(Some(b));
        }

        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    self.last = None;
                    return Ok(None);
                }
                Ok(_) => {
                    self.last = Some(buf[0]);
                    self.position += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.last = None;
                    return Err(e);
                }
            }
        }
    }

    /// Push the most recently read byte back onto the stream.
    ///
    /// Only one byte can be pushed back, and only directly after a
    /// successful [`ByteReader::read_byte`]; other calls are ignored and
    /// return `false`.
    pub fn unread_byte(&mut self) -> bool {
        match self.last.take() {
            Some(b) if self.pending.is_none() => {
                self.pending = Some(b);
                self.position -= 1;
                true
            }
            _ => false,
        }
    }

    /// Read up to and including `delimiter`.
    ///
    /// Returns the bytes read and whether the delimiter was found before end
    /// of stream.
    pub fn read_until(&mut self, delimiter: u8) -> io::Result<(Vec<u8>, bool)> {
        let mut bytes = Vec::new();
        self.last = None;

        if let Some(b) = self.pending.take() {
            self.position += 1;
            bytes.push(b);
            if b == delimiter {
                return Ok((bytes, true));
            }
        }

        let read = self.reader.read_until(delimiter, &mut bytes)?;
        self.position += read;
        let found = bytes.last() == Some(&delimiter);
        Ok((bytes, found))
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get a reference to the wrapped reader
    pub fn get_ref(&self) -> &R {
        self.reader.get_ref()
    }

    /// Unwrap the underlying reader. Buffered bytes are lost.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}
