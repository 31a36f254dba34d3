//! Position-tracked text cursors for line-oriented wire formats.
//!
//! [`TextCursor`] reads from a borrowed buffer: first isolate a line with
//! [`read_line`](TextCursor::read_line), then open a second cursor over
//! that line and split it with [`read_field`](TextCursor::read_field).
//! Fields are sub-slices of the original buffer; nothing is copied.
//!
//! [`TextWriter`] is the append-only counterpart used when generating.

use crate::error::{ParseErrorKind, Result, RtspError};

/// Single space, the field separator of RTSP start-lines.
pub const SP: u8 = b' ';
/// Line feed.
pub const LF: u8 = b'\n';
/// Carriage return.
pub const CR: u8 = b'\r';

/// A read cursor over a borrowed byte buffer.
///
/// Invariant: `pos <= text.len()`.
#[derive(Debug, Clone)]
pub struct TextCursor<'a> {
    text: &'a [u8],
    pos: usize,
    end_as_terminator: bool,
}

impl<'a> TextCursor<'a> {
    pub fn new(text: &'a [u8]) -> Self {
        TextCursor {
            text,
            pos: 0,
            end_as_terminator: false,
        }
    }

    /// When enabled, [`read_line`](Self::read_line) treats the end of the
    /// buffer as an implicit line terminator.
    pub fn end_as_terminator(mut self, enabled: bool) -> Self {
        self.end_as_terminator = enabled;
        self
    }

    /// Current read offset into the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.text[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Read one line and advance past its terminator.
    ///
    /// The terminator is `LF`, optionally preceded by `CR`; neither is part
    /// of the returned line. Fails with
    /// [`TruncatedInput`](ParseErrorKind::TruncatedInput) when no terminator
    /// is present, unless end-of-buffer counts as one and bytes remain.
    pub fn read_line(&mut self) -> Result<&'a [u8]> {
        let rest = self.remaining();
        match rest.iter().position(|&b| b == LF) {
            Some(lf) => {
                self.pos += lf + 1;
                let line = &rest[..lf];
                Ok(line.strip_suffix(&[CR]).unwrap_or(line))
            }
            None if self.end_as_terminator && !rest.is_empty() => {
                self.pos = self.text.len();
                Ok(rest.strip_suffix(&[CR]).unwrap_or(rest))
            }
            None => Err(RtspError::parse(ParseErrorKind::TruncatedInput)),
        }
    }

    /// Read one field up to (not including) `separator`.
    ///
    /// With `skip_leading`, a run of separators before the field is
    /// consumed first. If no separator follows, the field extends to the end
    /// of the buffer only when `end_is_terminator` is set; otherwise nothing
    /// is consumed and `None` is returned. Empty fields yield `None`.
    pub fn read_field(
        &mut self,
        separator: u8,
        skip_leading: bool,
        end_is_terminator: bool,
    ) -> Option<&'a [u8]> {
        let mut start = self.pos;
        if skip_leading {
            while start < self.text.len() && self.text[start] == separator {
                start += 1;
            }
        }

        let rest = &self.text[start..];
        let (field, next) = match rest.iter().position(|&b| b == separator) {
            Some(n) => (&rest[..n], start + n + 1),
            None if end_is_terminator => (rest, self.text.len()),
            None => return None,
        };

        if field.is_empty() {
            return None;
        }
        self.pos = next;
        Some(field)
    }

    /// Read everything left in the cursor as one field.
    ///
    /// Used for values that may themselves contain the separator, such as a
    /// reason phrase. Empty remainders yield `None`.
    pub fn read_remainder(&mut self, separator: u8, skip_leading: bool) -> Option<&'a [u8]> {
        let mut start = self.pos;
        if skip_leading {
            while start < self.text.len() && self.text[start] == separator {
                start += 1;
            }
        }
        let field = &self.text[start..];
        if field.is_empty() {
            return None;
        }
        self.pos = self.text.len();
        Some(field)
    }
}

/// An append-only output buffer.
#[derive(Debug, Default, Clone)]
pub struct TextWriter {
    buf: Vec<u8>,
}

impl TextWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TextWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_space(&mut self) {
        self.buf.push(SP);
    }

    /// Append `CRLF`.
    pub fn write_eol(&mut self) {
        self.buf.extend_from_slice(&[CR, LF]);
    }

    /// Append an unsigned integer as decimal digits.
    pub fn write_decimal(&mut self, value: u64) {
        self.buf.extend_from_slice(value.to_string().as_bytes());
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_line_strips_crlf() {
        let mut cursor = TextCursor::new(b"SETUP /a RTSP/1.0\r\nCSeq: 1\r\n");
        assert_eq!(cursor.read_line().unwrap(), b"SETUP /a RTSP/1.0");
        assert_eq!(cursor.read_line().unwrap(), b"CSeq: 1");
        assert!(cursor.is_eof());
    }

    #[test]
    fn read_line_accepts_bare_lf() {
        let mut cursor = TextCursor::new(b"one\ntwo\n");
        assert_eq!(cursor.read_line().unwrap(), b"one");
        assert_eq!(cursor.read_line().unwrap(), b"two");
    }

    #[test]
    fn read_line_without_terminator_is_truncated() {
        let mut cursor = TextCursor::new(b"RTSP/1.0 200 OK");
        let err = cursor.read_line().unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseErrorKind::TruncatedInput));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn read_line_end_as_terminator() {
        let mut cursor = TextCursor::new(b"first\r\nlast").end_as_terminator(true);
        assert_eq!(cursor.read_line().unwrap(), b"first");
        assert_eq!(cursor.read_line().unwrap(), b"last");
        assert!(cursor.read_line().is_err());
    }

    #[test]
    fn read_field_splits_on_separator() {
        let mut cursor = TextCursor::new(b"DESCRIBE  /media/synth RTSP/1.0");
        assert_eq!(cursor.read_field(SP, true, true).unwrap(), b"DESCRIBE");
        assert_eq!(cursor.read_field(SP, true, true).unwrap(), b"/media/synth");
        assert_eq!(cursor.read_field(SP, true, true).unwrap(), b"RTSP/1.0");
        assert!(cursor.read_field(SP, true, true).is_none());
    }

    #[test]
    fn read_field_requires_separator_unless_end_terminates() {
        let mut cursor = TextCursor::new(b"tail");
        assert!(cursor.read_field(SP, true, false).is_none());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_field(SP, true, true).unwrap(), b"tail");
    }

    #[test]
    fn read_field_empty_without_skip() {
        let mut cursor = TextCursor::new(b" value");
        assert!(cursor.read_field(SP, false, true).is_none());
        assert_eq!(cursor.read_field(SP, true, true).unwrap(), b"value");
    }

    #[test]
    fn read_remainder_keeps_inner_separators() {
        let mut cursor = TextCursor::new(b"RTSP/1.0 404 Not Found");
        cursor.read_field(SP, true, true).unwrap();
        cursor.read_field(SP, true, true).unwrap();
        assert_eq!(cursor.read_remainder(SP, true).unwrap(), b"Not Found");
        assert!(cursor.read_remainder(SP, true).is_none());
    }

    #[test]
    fn writer_appends() {
        let mut writer = TextWriter::new();
        writer.write_raw(b"RTSP/1.0");
        writer.write_space();
        writer.write_decimal(200);
        writer.write_eol();
        assert_eq!(writer.as_bytes(), b"RTSP/1.0 200\r\n");
        assert_eq!(writer.len(), 14);
    }
}
