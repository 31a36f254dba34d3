use std::fmt;

use crate::error::{ParseErrorKind, Result, RtspError, StartLineField};
use crate::protocol::method::Method;
use crate::protocol::status::{ReasonPhrase, class_reason, parse_status_code};
use crate::protocol::version::{RTSP_NAME, Version};
use crate::text::{SP, TextCursor, TextWriter};

const PATH_SEPARATOR: char = '/';

/// Whether a start-line opens a request or a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Request,
    Response,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => write!(f, "request"),
            Self::Response => write!(f, "response"),
        }
    }
}

/// An RTSP request-line.
///
/// ```text
/// Method SP Request-URI SP RTSP-Version CRLF
/// ```
///
/// The resource name is the last path segment of the URL. It is stored as
/// an offset into `url` and recomputed by [`set_url`](Self::set_url).
///
/// Parsed text fields are stored as `String`. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD; RTSP start-lines are ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: Method,
    method_name: String,
    url: String,
    resource_offset: Option<usize>,
    pub version: Version,
}

impl RequestLine {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        let mut line = RequestLine {
            method,
            method_name: String::new(),
            url: String::new(),
            resource_offset: None,
            version: Version::Rtsp1,
        };
        line.set_method(method);
        line.set_url(url);
        line
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Method token as received, kept even when [`method`](Self::method)
    /// is [`Method::Unknown`]. For a line built locally this is the
    /// canonical token.
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Replace the method. The method name is reset to the canonical token,
    /// or left empty for [`Method::Unknown`].
    pub fn set_method(&mut self, method: Method) {
        self.method = method;
        self.method_name = method.as_str().unwrap_or_default().to_string();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the URL.
    ///
    /// One trailing `/` is dropped, then the resource name is located after
    /// the last remaining `/`. A URL with no `/` has no resource name.
    pub fn set_url(&mut self, url: impl Into<String>) {
        let mut url = url.into();
        if url.ends_with(PATH_SEPARATOR) {
            url.pop();
        }
        self.resource_offset = url.rfind(PATH_SEPARATOR).map(|pos| pos + 1);
        self.url = url;
    }

    /// Final path segment of the URL, e.g. `speechsynth` for
    /// `rtsp://host/media/speechsynth`.
    pub fn resource_name(&self) -> Option<&str> {
        self.resource_offset.map(|offset| &self.url[offset..])
    }

    fn generate(&self, writer: &mut TextWriter) -> Result<()> {
        let Some(name) = self.method.as_str() else {
            tracing::warn!(method = %self.method_name, "cannot generate request-line for unresolved method");
            return Err(RtspError::UnresolvedMethod);
        };
        writer.write_raw(name.as_bytes());
        writer.write_space();
        writer.write_raw(self.url.as_bytes());
        writer.write_space();
        self.version.generate(writer);
        Ok(())
    }
}

/// An RTSP status-line.
///
/// ```text
/// RTSP-Version SP Status-Code SP Reason-Phrase CRLF
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub version: Version,
    pub status_code: u32,
    pub reason: String,
}

impl StatusLine {
    pub fn new(status_code: u32, reason: &str) -> Self {
        StatusLine {
            version: Version::Rtsp1,
            status_code,
            reason: reason.to_string(),
        }
    }

    /// Status-line with the canonical reason phrase for `status_code`.
    /// Codes without one get the text of their class, e.g. "Success" for
    /// 299, so the reason is never empty.
    pub fn from_status(status_code: u32) -> Self {
        let reason = ReasonPhrase::from_status_code(status_code)
            .map(ReasonPhrase::text)
            .unwrap_or_else(|| class_reason(status_code));
        Self::new(status_code, reason)
    }

    /// 200 OK.
    pub fn ok() -> Self {
        Self::from_status(ReasonPhrase::Ok.status_code())
    }

    fn generate(&self, writer: &mut TextWriter) {
        self.version.generate(writer);
        writer.write_space();
        writer.write_decimal(u64::from(self.status_code));
        writer.write_space();
        writer.write_raw(self.reason.as_bytes());
    }
}

/// The first line of an RTSP message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartLine {
    Request(RequestLine),
    Response(StatusLine),
}

impl StartLine {
    pub fn message_kind(&self) -> MessageKind {
        match self {
            StartLine::Request(_) => MessageKind::Request,
            StartLine::Response(_) => MessageKind::Response,
        }
    }

    pub fn version(&self) -> Version {
        match self {
            StartLine::Request(line) => line.version,
            StartLine::Response(line) => line.version,
        }
    }

    /// Read one line from `cursor` and decode it.
    ///
    /// A first field starting with `RTSP` makes the line a status-line;
    /// anything else is a request-line. Unknown methods and versions are
    /// accepted and tagged; missing fields fail the whole line.
    pub fn parse(cursor: &mut TextCursor<'_>) -> Result<StartLine> {
        let raw = cursor.read_line().inspect_err(|_| {
            tracing::warn!("cannot read RTSP start-line: no complete line in buffer");
        })?;

        let mut line = TextCursor::new(raw);
        let Some(first) = line.read_field(SP, true, true) else {
            tracing::warn!(line = %String::from_utf8_lossy(raw), "cannot read first field of start-line");
            return Err(RtspError::parse(ParseErrorKind::MalformedStartLine));
        };

        let start_line = if first.starts_with(RTSP_NAME.as_bytes()) {
            StartLine::Response(parse_status_line(first, &mut line, raw)?)
        } else {
            StartLine::Request(parse_request_line(first, &mut line, raw)?)
        };

        tracing::trace!(kind = %start_line.message_kind(), "parsed start-line");
        Ok(start_line)
    }

    /// Parse a single line. The terminator is optional.
    pub fn from_bytes(bytes: &[u8]) -> Result<StartLine> {
        Self::parse(&mut TextCursor::new(bytes).end_as_terminator(true))
    }

    /// Append the wire form, including `CRLF`, to `writer`.
    ///
    /// Fails with [`RtspError::UnresolvedMethod`] for a request whose method
    /// is not in the method table; nothing is written in that case.
    pub fn generate(&self, writer: &mut TextWriter) -> Result<()> {
        match self {
            StartLine::Request(line) => line.generate(writer)?,
            StartLine::Response(line) => line.generate(writer),
        }
        writer.write_eol();
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = TextWriter::with_capacity(64);
        self.generate(&mut writer)?;
        Ok(writer.into_bytes())
    }
}

impl From<RequestLine> for StartLine {
    fn from(line: RequestLine) -> Self {
        StartLine::Request(line)
    }
}

impl From<StatusLine> for StartLine {
    fn from(line: StatusLine) -> Self {
        StartLine::Response(line)
    }
}

fn missing_field(field: StartLineField, raw: &[u8]) -> RtspError {
    tracing::warn!(%field, line = %String::from_utf8_lossy(raw), "cannot parse start-line field");
    RtspError::parse(ParseErrorKind::MissingField(field))
}

fn parse_status_line(first: &[u8], line: &mut TextCursor<'_>, raw: &[u8]) -> Result<StatusLine> {
    let version = Version::parse(first);
    if version == Version::Unknown {
        tracing::debug!(version = %String::from_utf8_lossy(first), "unknown RTSP version in status-line");
    }

    let code = line
        .read_field(SP, true, true)
        .ok_or_else(|| missing_field(StartLineField::StatusCode, raw))?;
    let reason = line
        .read_remainder(SP, true)
        .ok_or_else(|| missing_field(StartLineField::Reason, raw))?;

    Ok(StatusLine {
        version,
        status_code: parse_status_code(code),
        reason: String::from_utf8_lossy(reason).into_owned(),
    })
}

fn parse_request_line(first: &[u8], line: &mut TextCursor<'_>, raw: &[u8]) -> Result<RequestLine> {
    let method_name = String::from_utf8_lossy(first).into_owned();
    let method = Method::from_token(first);
    if method == Method::Unknown {
        tracing::debug!(method = %method_name, "unrecognized RTSP method");
    }

    let url = line
        .read_field(SP, true, true)
        .ok_or_else(|| missing_field(StartLineField::Url, raw))?;
    let version_field = line
        .read_field(SP, true, true)
        .ok_or_else(|| missing_field(StartLineField::Version, raw))?;

    let version = Version::parse(version_field);
    if version == Version::Unknown {
        tracing::debug!(version = %String::from_utf8_lossy(version_field), "unknown RTSP version in request-line");
    }

    let mut request = RequestLine {
        method,
        method_name,
        url: String::new(),
        resource_offset: None,
        version,
    };
    request.set_url(String::from_utf8_lossy(url).into_owned());
    Ok(request)
}
