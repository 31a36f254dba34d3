pub mod error;
pub mod protocol;
pub mod table;
pub mod text;

pub use error::{ParseErrorKind, Result, RtspError, StartLineField};
pub use protocol::{
    MessageKind, Method, ReasonPhrase, RequestLine, RtspMessage, StartLine, StatusCode,
    StatusLine, Version,
};
pub use text::{TextCursor, TextWriter};
