//! A character source over any [`Read`], with a single character of lookahead.
//!
//! The lexer never needs more than one character to decide whether a token
//! continues, so [`CharSource`] buffers at most one. Every accessor works
//! through that one slot: peeking fills it, reading empties it.
//!
//! Input is decoded as UTF-8, one character at a time, so the reader does not
//! have to be drained up front. Wrap files and sockets in a
//! [`BufReader`](std::io::BufReader); bytes are requested one at a time.

use std::io::{Error as IOError, ErrorKind, Read};

use crate::bang::token::lexer::LexingError;
use crate::bang::types::Location;

/// Single-character lookahead over a byte stream.
#[derive(Debug)]
pub struct CharSource<R> {
    /// The underlying byte stream.
    reader: R,
    /// The next character, if it has already been pulled from `reader`.
    buffered: Option<char>,
    /// Location of the next character to be read. A buffered
    /// character has not been read yet.
    location: Location,
    /// Set once `reader` reported the end of input; it is not asked again.
    exhausted: bool,
}

impl<R: Read> CharSource<R> {
    /// Wraps the given reader. Nothing is read until the first request.
    #[must_use]
    #[inline]
    pub fn new(reader: R) -> Self {
        CharSource {
            reader,
            buffered: None,
            location: Location::default(),
            exhausted: false,
        }
    }

    /// Location of the next character that [`read`](CharSource::read) would return.
    #[must_use]
    #[inline]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Returns the next character without consuming it, or `None` at the end of input.
    ///
    /// # Errors
    ///
    /// [`LexingError::ReadFailure`] if the reader failed or the input is not valid UTF-8.
    #[inline]
    pub fn peek(&mut self) -> Result<Option<char>, LexingError> {
        if let Some(c) = self.buffered {
            return Ok(Some(c));
        }
        let next = self.pull()?;
        self.buffered = next;
        Ok(next)
    }

    /// Discards whitespace, then returns the next character without consuming it.
    /// The returned character is never whitespace.
    ///
    /// # Errors
    ///
    /// See [`peek`](CharSource::peek).
    #[inline]
    pub fn peek_skipping_whitespace(&mut self) -> Result<Option<char>, LexingError> {
        while let Some(c) = self.peek()? {
            if !c.is_whitespace() {
                return Ok(Some(c));
            }
            self.consume(c);
        }
        Ok(None)
    }

    /// Consumes and returns the next character, or `None` at the end of input.
    ///
    /// # Errors
    ///
    /// See [`peek`](CharSource::peek).
    #[inline]
    pub fn read(&mut self) -> Result<Option<char>, LexingError> {
        let next = self.peek()?;
        if let Some(c) = next {
            self.consume(c);
        }
        Ok(next)
    }

    /// Discards whitespace, then consumes and returns the next character.
    ///
    /// # Errors
    ///
    /// See [`peek`](CharSource::peek).
    #[inline]
    pub fn read_skipping_whitespace(&mut self) -> Result<Option<char>, LexingError> {
        let next = self.peek_skipping_whitespace()?;
        if let Some(c) = next {
            self.consume(c);
        }
        Ok(next)
    }

    /// Consumes the next character only if it matches the predicate.
    ///
    /// # Errors
    ///
    /// See [`peek`](CharSource::peek).
    #[inline]
    pub fn read_if<F>(&mut self, test: F) -> Result<Option<char>, LexingError>
    where
        F: FnOnce(char) -> bool,
    {
        match self.peek()? {
            Some(c) if test(c) => {
                self.consume(c);
                Ok(Some(c))
            }
            _ => Ok(None),
        }
    }

    /// Gives back the underlying reader. A buffered character is lost.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Drops the buffered character `c` and moves past it.
    fn consume(&mut self, c: char) {
        debug_assert_eq!(self.buffered, Some(c), "only buffered characters are consumed");
        self.buffered = None;
        self.location = self.location.advanced_by(c);
    }

    /// Decodes the next character straight from the reader, bypassing the buffer.
    fn pull(&mut self) -> Result<Option<char>, LexingError> {
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(lead);
        if width == 0 {
            return Err(self.invalid_data("invalid UTF-8 lead byte"));
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self
                .next_byte()?
                .ok_or_else(|| self.invalid_data("input ended inside a UTF-8 sequence"))?;
        }

        bytes
            .get(..width)
            .and_then(|encoded| core::str::from_utf8(encoded).ok())
            .and_then(|decoded| decoded.chars().next())
            .map(Some)
            .ok_or_else(|| self.invalid_data("invalid UTF-8 sequence"))
    }

    /// Reads one byte, retrying interrupted reads.
    fn next_byte(&mut self) -> Result<Option<u8>, LexingError> {
        if self.exhausted {
            return Ok(None);
        }
        let mut byte = [0_u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.exhausted = true;
                    return Ok(None);
                }
                Ok(_) => {
                    let [value] = byte;
                    return Ok(Some(value));
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(LexingError::ReadFailure(err, self.location)),
            }
        }
    }

    /// A [`LexingError::ReadFailure`] for input that is not UTF-8.
    fn invalid_data(&self, message: &'static str) -> LexingError {
        LexingError::ReadFailure(IOError::new(ErrorKind::InvalidData, message), self.location)
    }
}

/// Number of bytes in the UTF-8 sequence introduced by `lead`,
/// or 0 if `lead` cannot start a sequence.
const fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use std::io::{Cursor, Error as IOError, ErrorKind, Read};

    use super::CharSource;
    use crate::bang::token::lexer::LexingError;
    use crate::bang::types::Location;

    fn source(input: &str) -> CharSource<Cursor<Vec<u8>>> {
        CharSource::new(Cursor::new(input.as_bytes().to_vec()))
    }

    /// A reader that hands out its bytes, then fails.
    struct FailingReader(&'static [u8]);

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match (self.0.split_first(), buf.first_mut()) {
                (Some((&first, rest)), Some(slot)) => {
                    *slot = first;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Err(IOError::other("connection reset")),
            }
        }
    }

    #[test]
    fn reads_every_character_in_order() {
        let mut chars = source("a c\nd\te");
        for expected in ['a', ' ', 'c', '\n', 'd', '\t', 'e'] {
            assert_eq!(chars.read().unwrap(), Some(expected));
        }
        assert_eq!(chars.read().unwrap(), None);
        assert_eq!(chars.read().unwrap(), None);
    }

    #[test]
    fn peek_is_idempotent() {
        let mut chars = source("abcd");
        for _ in 0..4 {
            assert_eq!(chars.peek().unwrap(), Some('a'));
        }
        assert_eq!(chars.read().unwrap(), Some('a'));
        assert_eq!(chars.peek().unwrap(), Some('b'));
    }

    #[test]
    fn peek_skipping_whitespace_is_idempotent() {
        let mut chars = source("  \n\tabcd");
        for _ in 0..8 {
            assert_eq!(chars.peek_skipping_whitespace().unwrap(), Some('a'));
        }
        assert_eq!(chars.peek().unwrap(), Some('a'));
    }

    #[test]
    fn buffered_whitespace_is_skipped() {
        let mut chars = source(" x");
        assert_eq!(chars.peek().unwrap(), Some(' '));
        assert_eq!(chars.peek_skipping_whitespace().unwrap(), Some('x'));
        assert_eq!(chars.read().unwrap(), Some('x'));
    }

    #[test]
    fn read_skipping_whitespace_skips_between_characters() {
        let mut chars = source("1 2\t\t3\n");
        for expected in ['1', '2', '3'] {
            assert_eq!(chars.read_skipping_whitespace().unwrap(), Some(expected));
        }
        assert_eq!(chars.read_skipping_whitespace().unwrap(), None);
    }

    #[test]
    fn read_if_only_consumes_matches() {
        let mut chars = source("7x");
        assert_eq!(chars.read_if(|c| c.is_ascii_alphabetic()).unwrap(), None);
        assert_eq!(chars.read_if(|c| c.is_ascii_digit()).unwrap(), Some('7'));
        assert_eq!(chars.read().unwrap(), Some('x'));
    }

    #[test]
    fn decodes_multibyte_characters() {
        let mut chars = source("\u{e4}\u{20ac}\u{1f600}");
        assert_eq!(chars.read().unwrap(), Some('\u{e4}'));
        assert_eq!(chars.read().unwrap(), Some('\u{20ac}'));
        assert_eq!(chars.read().unwrap(), Some('\u{1f600}'));
        assert_eq!(chars.read().unwrap(), None);
    }

    #[test]
    fn tracks_locations() {
        let mut chars = source("ab\ncd");
        assert_eq!(chars.location(), Location { line: 0, col: 0 });
        assert_eq!(chars.peek().unwrap(), Some('a'));
        assert_eq!(chars.location(), Location { line: 0, col: 0 });
        for _ in 0..3 {
            assert!(chars.read().unwrap().is_some());
        }
        assert_eq!(chars.location(), Location { line: 1, col: 0 });
        assert_eq!(chars.read_skipping_whitespace().unwrap(), Some('c'));
        assert_eq!(chars.location(), Location { line: 1, col: 1 });
    }

    #[test]
    fn invalid_utf8_is_a_read_failure() {
        let mut chars = CharSource::new(&[b'a', 0xFF][..]);
        assert_eq!(chars.read().unwrap(), Some('a'));
        match chars.read() {
            Err(LexingError::ReadFailure(err, location)) => {
                assert_eq!(err.kind(), ErrorKind::InvalidData);
                assert_eq!(location, Location { line: 0, col: 1 });
            }
            other => panic!("expected a read failure, got {other:?}"),
        }
    }

    #[test]
    fn truncated_utf8_is_a_read_failure() {
        let mut chars = CharSource::new(&[0xE2, 0x82][..]);
        assert!(matches!(chars.peek(), Err(LexingError::ReadFailure(_, _))));
    }

    #[test]
    fn reader_errors_are_distinct_from_end_of_input() {
        let mut chars = CharSource::new(FailingReader(b"ok"));
        assert_eq!(chars.read().unwrap(), Some('o'));
        assert_eq!(chars.read().unwrap(), Some('k'));
        match chars.peek() {
            Err(LexingError::ReadFailure(err, _)) => {
                assert_eq!(err.kind(), ErrorKind::Other);
            }
            other => panic!("expected a read failure, got {other:?}"),
        }
    }
}
