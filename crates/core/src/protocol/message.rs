use crate::error::{ParseErrorKind, Result, RtspError};
use crate::protocol::start_line::{RequestLine, StartLine, StatusLine};
use crate::text::{TextCursor, TextWriter};

/// A complete RTSP message: start-line, headers and optional body.
///
/// ```text
/// ANNOUNCE rtsp://host/media/speechsynth RTSP/1.0\r\n
/// CSeq: 4\r\n
/// Content-Type: application/mrcp\r\n
/// Content-Length: 224\r\n
/// \r\n
/// [body]
/// ```
///
/// Header lookup is case-insensitive. `Content-Length` is computed on
/// [`serialize`](Self::serialize) and should not be added by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct RtspMessage {
    pub start_line: StartLine,
    /// Headers as ordered (name, value) pairs, names stored as received.
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RtspMessage {
    pub fn new(start_line: impl Into<StartLine>) -> Self {
        RtspMessage {
            start_line: start_line.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn request(line: RequestLine) -> Self {
        Self::new(line)
    }

    pub fn response(line: StatusLine) -> Self {
        Self::new(line)
    }

    /// Parse one message from the front of `raw`.
    ///
    /// Returns the message and the number of bytes consumed, so a caller
    /// holding several pipelined messages can continue after it.
    pub fn parse(raw: &[u8]) -> Result<(Self, usize)> {
        let mut cursor = TextCursor::new(raw);
        let start_line = StartLine::parse(&mut cursor)?;

        let mut headers = Vec::new();
        loop {
            let line = cursor.read_line()?;
            if line.is_empty() {
                break;
            }
            let line = String::from_utf8_lossy(line);
            let colon_pos = line.find(':').ok_or_else(|| {
                tracing::warn!(%line, "header line without colon");
                RtspError::parse(ParseErrorKind::InvalidHeader)
            })?;

            let name = line[..colon_pos].trim().to_string();
            let value = line[colon_pos + 1..].trim().to_string();
            headers.push((name, value));
        }

        let mut message = RtspMessage {
            start_line,
            headers,
            body: None,
        };

        let length = message.content_length().unwrap_or(0);
        if length > 0 {
            let rest = cursor.remaining();
            if rest.len() < length {
                tracing::debug!(expected = length, available = rest.len(), "incomplete message body");
                return Err(RtspError::parse(ParseErrorKind::TruncatedInput));
            }
            message.body = Some(rest[..length].to_vec());
        }

        let consumed = cursor.position() + length;
        Ok((message, consumed))
    }

    /// Look up a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The CSeq header, which pairs a response with its request.
    pub fn cseq(&self) -> Option<&str> {
        self.header("CSeq")
    }

    /// `Content-Length` as a number. Unparsable values count as absent.
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length")?.parse().ok()
    }

    pub fn add_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize to the RTSP wire format.
    ///
    /// Fails only if the start-line cannot be generated.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut writer = TextWriter::with_capacity(256);
        self.start_line.generate(&mut writer)?;

        for (name, value) in &self.headers {
            if name.eq_ignore_ascii_case("Content-Length") {
                continue;
            }
            writer.write_raw(name.as_bytes());
            writer.write_raw(b": ");
            writer.write_raw(value.as_bytes());
            writer.write_eol();
        }

        match &self.body {
            Some(body) if !body.is_empty() => {
                writer.write_raw(b"Content-Length: ");
                writer.write_decimal(body.len() as u64);
                writer.write_eol();
                writer.write_eol();
                writer.write_raw(body);
            }
            _ => writer.write_eol(),
        }
        Ok(writer.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::method::Method;
    use crate::protocol::status::StatusCode;

    #[test]
    fn parse_setup_with_transport() {
        let raw = b"SETUP rtsp://localhost:1554/media/speechrecog RTSP/1.0\r\n\
                    CSeq: 3\r\n\
                    Transport: RTP/AVP;unicast;client_port=4588-4589\r\n\r\n";
        let (msg, consumed) = RtspMessage::parse(raw).unwrap();
        assert_eq!(consumed, raw.len());
        assert_eq!(msg.cseq(), Some("3"));
        assert_eq!(
            msg.header("transport"),
            Some("RTP/AVP;unicast;client_port=4588-4589")
        );
        match msg.start_line {
            StartLine::Request(req) => assert_eq!(req.resource_name(), Some("speechrecog")),
            other => panic!("expected request, got {other:?}"),
        }
    }

    #[test]
    fn parse_response_with_body() {
        let raw = b"RTSP/1.0 200 OK\r\nCSeq: 4\r\nContent-Length: 5\r\n\r\nhelloRTSP/1.0";
        let (msg, consumed) = RtspMessage::parse(raw).unwrap();
        assert_eq!(msg.body.as_deref(), Some(&b"hello"[..]));
        assert_eq!(&raw[consumed..], b"RTSP/1.0");
    }

    #[test]
    fn short_body_is_truncated() {
        let raw = b"RTSP/1.0 200 OK\r\nContent-Length: 10\r\n\r\nabc";
        let err = RtspMessage::parse(raw).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseErrorKind::TruncatedInput));
    }

    #[test]
    fn missing_blank_line_is_truncated() {
        let err = RtspMessage::parse(b"RTSP/1.0 200 OK\r\nCSeq: 1\r\n").unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseErrorKind::TruncatedInput));
    }

    #[test]
    fn header_without_colon_fails() {
        let err = RtspMessage::parse(b"RTSP/1.0 200 OK\r\nbogus\r\n\r\n").unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseErrorKind::InvalidHeader));
    }

    #[test]
    fn serialize_no_body() {
        let msg = RtspMessage::response(StatusLine::ok()).add_header("CSeq", "1");
        assert_eq!(msg.serialize().unwrap(), b"RTSP/1.0 200 OK\r\nCSeq: 1\r\n\r\n");
    }

    #[test]
    fn serialize_with_body_sets_content_length() {
        let msg = RtspMessage::request(RequestLine::new(Method::Announce, "/media/speechsynth"))
            .add_header("CSeq", "2")
            .add_header("Content-Length", "999")
            .with_body("abc");
        let bytes = msg.serialize().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("ANNOUNCE /media/speechsynth RTSP/1.0\r\n"));
        assert!(text.contains("Content-Length: 3\r\n"));
        assert!(!text.contains("999"));
        assert!(text.ends_with("\r\n\r\nabc"));
    }

    #[test]
    fn serialize_then_parse() {
        let msg = RtspMessage::response(StatusLine::from_status(StatusCode::SESSION_NOT_FOUND))
            .add_header("CSeq", "7")
            .with_body("x");
        let bytes = msg.serialize().unwrap();
        let (parsed, consumed) = RtspMessage::parse(&bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        assert_eq!(parsed.start_line, msg.start_line);
        assert_eq!(parsed.cseq(), Some("7"));
        assert_eq!(parsed.body, msg.body);
    }

    #[test]
    fn serialize_unknown_method_fails() {
        let mut line = RequestLine::new(Method::Setup, "/a");
        line.set_method(Method::Unknown);
        let err = RtspMessage::request(line).serialize().unwrap_err();
        assert!(matches!(err, RtspError::UnresolvedMethod));
    }
}
