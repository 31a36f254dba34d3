//! Error types for the RTSP signaling library.

use std::fmt;

/// Errors that can occur while parsing or generating RTSP messages.
///
/// - **Parse**: [`Parse`](Self::Parse): the input could not be decoded.
/// - **Generate**: [`UnresolvedMethod`](Self::UnresolvedMethod): an
///   outbound request carries a method outside the sanctioned vocabulary.
/// - **I/O**: [`Io`](Self::Io): reading input for the command-line tool.
///
/// An unrecognized method or version on *parse* is not an error; it is
/// recorded as [`Method::Unknown`](crate::Method::Unknown) or
/// [`Version::Unknown`](crate::Version::Unknown) and parsing continues.
#[derive(Debug, thiserror::Error)]
pub enum RtspError {
    /// Underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse an RTSP message.
    #[error("RTSP parse error: {kind}")]
    Parse { kind: ParseErrorKind },

    /// A request line holds a method with no entry in the method table,
    /// so it cannot be written to the wire.
    #[error("request method does not resolve to a known RTSP method")]
    UnresolvedMethod,
}

impl RtspError {
    pub(crate) fn parse(kind: ParseErrorKind) -> Self {
        RtspError::Parse { kind }
    }

    /// Returns the parse failure kind, if this is a parse error.
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            RtspError::Parse { kind } => Some(kind),
            _ => None,
        }
    }
}

/// Specific kind of RTSP parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No complete line (or body) is available in the buffer yet.
    TruncatedInput,
    /// The first field of the start-line is empty.
    MalformedStartLine,
    /// A mandatory start-line field is absent.
    MissingField(StartLineField),
    /// A header line did not contain a colon separator.
    InvalidHeader,
}

/// Names a field of a request-line or status-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartLineField {
    Method,
    Url,
    Version,
    StatusCode,
    Reason,
}

impl fmt::Display for StartLineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Method => "method",
            Self::Url => "url",
            Self::Version => "version",
            Self::StatusCode => "status-code",
            Self::Reason => "reason-phrase",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedInput => write!(f, "truncated input"),
            Self::MalformedStartLine => write!(f, "malformed start-line"),
            Self::MissingField(field) => write!(f, "missing {field} in start-line"),
            Self::InvalidHeader => write!(f, "invalid header"),
        }
    }
}

/// Convenience alias for `Result<T, RtspError>`.
pub type Result<T> = std::result::Result<T, RtspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_missing_field() {
        let err = RtspError::parse(ParseErrorKind::MissingField(StartLineField::Reason));
        assert_eq!(
            err.to_string(),
            "RTSP parse error: missing reason-phrase in start-line"
        );
        assert_eq!(
            err.parse_kind(),
            Some(&ParseErrorKind::MissingField(StartLineField::Reason))
        );
    }

    #[test]
    fn unresolved_method_has_no_parse_kind() {
        assert!(RtspError::UnresolvedMethod.parse_kind().is_none());
    }
}
