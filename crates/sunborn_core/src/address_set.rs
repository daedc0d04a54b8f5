use std::collections::HashSet;

/// Tokens that spreadsheet exports commonly leave as a header row.
const HEADER_TOKENS: [&str; 2] = ["address", "wallet"];

/// A deduplicated set of normalized wallet addresses built from raw list text.
///
/// Normalization is trim-only: entries are compared case-sensitively, exactly
/// as they appear in the source list. Blank lines and the literal header
/// tokens `address` / `wallet` are excluded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressSet {
    entries: HashSet<String>,
}

impl AddressSet {
    /// Build a set from raw line-delimited list text.
    pub fn parse(raw: &str) -> Self {
        let entries = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !HEADER_TOKENS.contains(line))
            .map(ToOwned::to_owned)
            .collect();
        Self { entries }
    }

    pub fn contains(&self, address: &str) -> bool {
        self.entries.contains(address)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
