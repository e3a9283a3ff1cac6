//! Byte cursor shared by the date, time, offset and duration grammars.

use crate::error::ParseError;

/// Forward-only cursor over ASCII input.
///
/// The cursor only ever steps over ASCII bytes, so [`Cursor::rest`] always
/// lands on a character boundary.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        self.text.get(self.pos..).unwrap_or("")
    }

    /// Consumes `byte` if it is next.
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next byte if it is one of `set`.
    pub(crate) fn eat_any(&mut self, set: &[u8]) -> Option<u8> {
        let byte = self.peek().filter(|b| set.contains(b))?;
        self.pos += 1;
        Some(byte)
    }

    pub(crate) fn expect(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(ParseError::InvalidFormat)
        }
    }

    /// Consumes `byte` only when the extended style asks for a separator.
    pub(crate) fn separator(&mut self, byte: u8, extended: bool) -> Result<(), ParseError> {
        if extended { self.expect(byte) } else { Ok(()) }
    }

    /// Reads exactly `width` ASCII digits.
    pub(crate) fn digits(&mut self, width: usize) -> Result<u32, ParseError> {
        let bytes = self
            .text
            .as_bytes()
            .get(self.pos..self.pos + width)
            .ok_or(ParseError::InvalidFormat)?;
        let mut value = 0u32;
        for &b in bytes {
            if !b.is_ascii_digit() {
                return Err(ParseError::InvalidFormat);
            }
            value = value * 10 + u32::from(b - b'0');
        }
        self.pos += width;
        Ok(value)
    }

    /// Reads two digits as a `u8`.
    pub(crate) fn two_digits(&mut self) -> Result<u8, ParseError> {
        // At most 99.
        self.digits(2).map(|v| v as u8)
    }

    /// Consumes the longest run of ASCII digits, possibly empty.
    pub(crate) fn digit_run(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.text.get(start..self.pos).unwrap_or("")
    }

    /// Fails unless the whole input has been consumed.
    pub(crate) fn finish(&self) -> Result<(), ParseError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ParseError::InvalidFormat)
        }
    }
}

/// Turns a run of fraction digits into `(microseconds, precision)`.
///
/// Digits past the sixth are dropped; the precision is the number of digits
/// kept. Returns `None` for an empty run.
pub(crate) fn fraction_digits(run: &str) -> Option<(u32, u8)> {
    if run.is_empty() {
        return None;
    }
    let kept = &run.as_bytes()[..run.len().min(6)];
    let mut value = 0u32;
    for &b in kept {
        value = value * 10 + u32::from(b - b'0');
    }
    let precision = kept.len() as u8;
    Some((value * 10u32.pow(6 - u32::from(precision)), precision))
}
