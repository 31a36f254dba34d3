use crate::text::TextWriter;

/// Protocol name carried in every version field.
pub const RTSP_NAME: &str = "RTSP";

const NAME_VERSION_SEPARATOR: u8 = b'/';
const MAJOR_MINOR_SEPARATOR: u8 = b'.';

/// RTSP protocol version.
///
/// Only major version 1 is recognized. Anything else is kept as
/// [`Unknown`](Self::Unknown) so that a message from a newer or
/// misbehaving peer can still be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Version {
    #[default]
    Unknown,
    Rtsp1,
}

impl Version {
    /// Parse a version field such as `RTSP/1.0`.
    ///
    /// The protocol name is matched case-insensitively. Minor digits are
    /// not inspected.
    pub fn parse(field: &[u8]) -> Version {
        let name = RTSP_NAME.as_bytes();
        if field.len() <= name.len() || !field[..name.len()].eq_ignore_ascii_case(name) {
            return Version::Unknown;
        }

        match &field[name.len()..] {
            [NAME_VERSION_SEPARATOR, b'1', ..] => Version::Rtsp1,
            _ => Version::Unknown,
        }
    }

    /// Write the canonical `RTSP/1.0`.
    ///
    /// Only one version is supported on output, so the major digit is
    /// always 1 and the minor digit always 0, whatever `self` holds.
    pub fn generate(self, writer: &mut TextWriter) {
        writer.write_raw(RTSP_NAME.as_bytes());
        writer.write_raw(&[NAME_VERSION_SEPARATOR, b'1', MAJOR_MINOR_SEPARATOR, b'0']);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_version() {
        assert_eq!(Version::parse(b"RTSP/1.0"), Version::Rtsp1);
        assert_eq!(Version::parse(b"rtsp/1.0"), Version::Rtsp1);
        assert_eq!(Version::parse(b"RTSP/1.1"), Version::Rtsp1);
    }

    #[test]
    fn parse_unknown_versions() {
        assert_eq!(Version::parse(b"FOO/1.0"), Version::Unknown);
        assert_eq!(Version::parse(b"RTSP/2.0"), Version::Unknown);
        assert_eq!(Version::parse(b"RTSP"), Version::Unknown);
        assert_eq!(Version::parse(b"RTSP/"), Version::Unknown);
        assert_eq!(Version::parse(b"RTSP 1.0"), Version::Unknown);
        assert_eq!(Version::parse(b"HTTP/1.1"), Version::Unknown);
    }

    #[test]
    fn generate_is_canonical() {
        for version in [Version::Rtsp1, Version::Unknown] {
            let mut writer = TextWriter::new();
            version.generate(&mut writer);
            assert_eq!(writer.as_bytes(), b"RTSP/1.0");
        }
    }
}
