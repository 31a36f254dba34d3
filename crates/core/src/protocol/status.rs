use crate::table::{StringTable, TableEntry};

/// Well-known RTSP status codes.
///
/// Status codes are plain integers on the wire; any value may be parsed or
/// generated. These constants cover the codes with a canonical reason phrase.
pub struct StatusCode;

impl StatusCode {
    pub const OK: u32 = 200;
    pub const CREATED: u32 = 201;
    pub const BAD_REQUEST: u32 = 400;
    pub const UNAUTHORIZED: u32 = 401;
    pub const NOT_FOUND: u32 = 404;
    pub const METHOD_NOT_ALLOWED: u32 = 405;
    pub const NOT_ACCEPTABLE: u32 = 406;
    pub const SESSION_NOT_FOUND: u32 = 454;
    pub const METHOD_NOT_VALID_IN_THIS_STATE: u32 = 455;
    pub const UNSUPPORTED_TRANSPORT: u32 = 461;
    pub const INTERNAL_SERVER_ERROR: u32 = 500;
    pub const NOT_IMPLEMENTED: u32 = 501;
}

static REASON_ENTRIES: [TableEntry; 12] = [
    TableEntry::new("OK"),
    TableEntry::new("Created"),
    TableEntry::new("Bad Request"),
    TableEntry::new("Unauthorized"),
    TableEntry::new("Not Found"),
    TableEntry::new("Method Not Allowed"),
    TableEntry::new("Not Acceptable"),
    TableEntry::new("Session Not Found"),
    TableEntry::new("Internal Server Error"),
    TableEntry::new("Not Implemented"),
    TableEntry::alias(5),
    TableEntry::alias(6),
];

/// Reason phrases, indexed by [`ReasonPhrase`] discriminant.
pub static REASON_TABLE: StringTable = StringTable::new(&REASON_ENTRIES);

/// Canonical reason phrases.
///
/// `MethodNotValidInThisState` and `UnsupportedTransport` have no text of
/// their own: they share "Method Not Allowed" and "Not Acceptable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum ReasonPhrase {
    Ok = 0,
    Created,
    BadRequest,
    Unauthorized,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    SessionNotFound,
    InternalServerError,
    NotImplemented,
    MethodNotValidInThisState,
    UnsupportedTransport,
}

impl ReasonPhrase {
    pub fn text(self) -> &'static str {
        // every discriminant indexes a resolvable entry
        REASON_TABLE.get_text(self as usize).unwrap_or_default()
    }

    pub fn status_code(self) -> u32 {
        match self {
            Self::Ok => StatusCode::OK,
            Self::Created => StatusCode::CREATED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Self::SessionNotFound => StatusCode::SESSION_NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            Self::MethodNotValidInThisState => StatusCode::METHOD_NOT_VALID_IN_THIS_STATE,
            Self::UnsupportedTransport => StatusCode::UNSUPPORTED_TRANSPORT,
        }
    }

    pub fn from_status_code(code: u32) -> Option<ReasonPhrase> {
        let reason = match code {
            StatusCode::OK => Self::Ok,
            StatusCode::CREATED => Self::Created,
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::METHOD_NOT_ALLOWED => Self::MethodNotAllowed,
            StatusCode::NOT_ACCEPTABLE => Self::NotAcceptable,
            StatusCode::SESSION_NOT_FOUND => Self::SessionNotFound,
            StatusCode::METHOD_NOT_VALID_IN_THIS_STATE => Self::MethodNotValidInThisState,
            StatusCode::UNSUPPORTED_TRANSPORT => Self::UnsupportedTransport,
            StatusCode::INTERNAL_SERVER_ERROR => Self::InternalServerError,
            StatusCode::NOT_IMPLEMENTED => Self::NotImplemented,
            _ => return None,
        };
        Some(reason)
    }
}

/// Look up the display text of a reason phrase.
pub fn reason_phrase(reason: ReasonPhrase) -> Option<&'static str> {
    REASON_TABLE.get_text(reason as usize)
}

/// Fallback reason for codes without a table entry, by status class.
pub fn class_reason(code: u32) -> &'static str {
    match code / 100 {
        1 => "Informational",
        2 => "Success",
        3 => "Redirection",
        4 => "Client Error",
        5 => "Server Error",
        _ => "Unknown Status",
    }
}

/// Parse a status-code field as an unsigned decimal.
///
/// Leading digits are taken and anything after them is ignored. No digits
/// gives 0 rather than an error; a value beyond `u32` saturates.
pub fn parse_status_code(field: &[u8]) -> u32 {
    field
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        })
}
