use crate::table::{StringTable, TableEntry};

static METHOD_ENTRIES: [TableEntry; 4] = [
    TableEntry::new("SETUP"),
    TableEntry::new("ANNOUNCE"),
    TableEntry::new("TEARDOWN"),
    TableEntry::new("DESCRIBE"),
];

/// Method names, indexed by [`Method::id`].
pub static METHOD_TABLE: StringTable = StringTable::new(&METHOD_ENTRIES);

/// RTSP methods used to control a media resource.
///
/// | Method | Purpose |
/// |--------|---------|
/// | SETUP | Allocate a resource channel |
/// | ANNOUNCE | Carry a resource control message |
/// | TEARDOWN | Release the resource channel |
/// | DESCRIBE | Query resource capabilities |
///
/// [`Unknown`](Self::Unknown) marks a token received from a peer that is not
/// in the table. It can be parsed but never generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Setup,
    Announce,
    Teardown,
    Describe,
    Unknown,
}

impl Method {
    const KNOWN: [Method; 4] = [
        Method::Setup,
        Method::Announce,
        Method::Teardown,
        Method::Describe,
    ];

    /// Table id, or `None` for [`Unknown`](Self::Unknown).
    pub fn id(self) -> Option<usize> {
        Self::KNOWN.iter().position(|&m| m == self)
    }

    pub fn from_id(id: usize) -> Option<Method> {
        Self::KNOWN.get(id).copied()
    }

    /// Resolve a wire token, case-insensitively.
    pub fn from_token(token: &[u8]) -> Method {
        METHOD_TABLE
            .find_id(token)
            .and_then(Method::from_id)
            .unwrap_or(Method::Unknown)
    }

    /// Canonical wire token.
    pub fn as_str(self) -> Option<&'static str> {
        METHOD_TABLE.get_text(self.id()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_ids() {
        for (id, method) in Method::KNOWN.iter().enumerate() {
            assert_eq!(method.id(), Some(id));
            assert_eq!(Method::from_id(id), Some(*method));
        }
        assert_eq!(METHOD_TABLE.len(), Method::KNOWN.len());
    }

    #[test]
    fn from_token_ignores_case() {
        assert_eq!(Method::from_token(b"SETUP"), Method::Setup);
        assert_eq!(Method::from_token(b"announce"), Method::Announce);
        assert_eq!(Method::from_token(b"TearDown"), Method::Teardown);
    }

    #[test]
    fn unrecognized_token_is_unknown() {
        assert_eq!(Method::from_token(b"OPTIONS"), Method::Unknown);
        assert_eq!(Method::from_token(b"SET"), Method::Unknown);
        assert_eq!(Method::Unknown.id(), None);
        assert_eq!(Method::Unknown.as_str(), None);
    }

    #[test]
    fn as_str_is_canonical() {
        assert_eq!(Method::Describe.as_str(), Some("DESCRIBE"));
    }
}
