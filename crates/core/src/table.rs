//! Closed protocol vocabularies mapping small integer ids to tokens.
//!
//! A [`StringTable`] is a fixed slice of [`TableEntry`] values; an entry's
//! position in the slice is its id. Tables are `static` data, so they can be
//! shared across threads without synchronization.

/// One row of a [`StringTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    text: &'static str,
    alt: Option<usize>,
}

impl TableEntry {
    /// An entry with its own display text.
    pub const fn new(text: &'static str) -> Self {
        TableEntry { text, alt: None }
    }

    /// An entry without text of its own that borrows the text of entry `id`.
    pub const fn alias(id: usize) -> Self {
        TableEntry { text: "", alt: Some(id) }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn alt(&self) -> Option<usize> {
        self.alt
    }
}

/// An immutable bidirectional id/text mapping.
#[derive(Debug, Clone, Copy)]
pub struct StringTable {
    entries: &'static [TableEntry],
}

impl StringTable {
    pub const fn new(entries: &'static [TableEntry]) -> Self {
        StringTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the id whose own text equals `text`, ignoring ASCII case.
    ///
    /// Only whole-string matches count. Alias entries have no text of their
    /// own and are never returned.
    pub fn find_id(&self, text: &[u8]) -> Option<usize> {
        if text.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .position(|entry| entry.text.as_bytes().eq_ignore_ascii_case(text))
    }

    /// Look up the display text for `id`, following an alias one hop.
    pub fn get_text(&self, id: usize) -> Option<&'static str> {
        let entry = self.entries.get(id)?;
        if !entry.text.is_empty() {
            return Some(entry.text);
        }
        let target = self.entries.get(entry.alt?)?;
        (!target.text.is_empty()).then_some(target.text)
    }
}
