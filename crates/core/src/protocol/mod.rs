//! RTSP signaling for media-resource control.
//!
//! Resource control messages (MRCPv1) ride on RTSP: a client SETs UP a
//! channel to a remote speech resource, ANNOUNCEs control messages on it
//! and TEARs it DOWN when done.
//!
//! ## Start-line format
//!
//! ```text
//! SETUP rtsp://server/media/speechsynth RTSP/1.0\r\n
//! RTSP/1.0 200 OK\r\n
//! ```
//!
//! - Fields are separated by a single space; the reason phrase runs to the
//!   end of the line and may contain spaces.
//! - A first field starting with `RTSP` marks a response.
//! - Parsing is lenient: unknown methods, unknown versions and unparsable
//!   status codes are recorded rather than rejected.
//! - Generation is strict: only methods from the method table can be
//!   written, and the version is always `RTSP/1.0`.

pub mod message;
pub mod method;
pub mod start_line;
pub mod status;
pub mod version;

pub use message::RtspMessage;
pub use method::{METHOD_TABLE, Method};
pub use start_line::{MessageKind, RequestLine, StartLine, StatusLine};
pub use status::{REASON_TABLE, ReasonPhrase, StatusCode, reason_phrase};
pub use version::Version;
