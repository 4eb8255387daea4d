//! Version catalog - raw identifier to display version lookup
//!
//! The API ships version bounds as raw identifiers (`FIREFOX_83`); the
//! server config supplies the matching human "dot versions" (`83.0`). The
//! catalog is exact-match only, and a miss is a recoverable no-match rather
//! than an error: stale or unrecognized identifiers must not break listing.

use std::collections::HashMap;

use tracing::debug;

/// Exact-match table from raw version identifiers to display dot versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCatalog {
    entries: HashMap<String, String>,
}

impl VersionCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `(raw, dot_version)` pairs.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use rollout_console::listing::VersionCatalog;
    ///
    /// let catalog = VersionCatalog::from_pairs([
    ///     ("FIREFOX_83", "83.0"),
    ///     ("FIREFOX_91", "91.0"),
    /// ]);
    /// assert_eq!(catalog.dot_version("FIREFOX_83"), Some("83.0"));
    /// assert_eq!(catalog.dot_version("FIREFOX_999"), None);
    /// ```
    #[must_use]
    pub fn from_pairs<R, D>(pairs: impl IntoIterator<Item = (R, D)>) -> Self
    where
        R: Into<String>,
        D: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(raw, dot)| (raw.into(), dot.into()))
                .collect(),
        }
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, raw: impl Into<String>, dot_version: impl Into<String>) {
        self.entries.insert(raw.into(), dot_version.into());
    }

    /// Resolve a raw identifier to its display dot version.
    ///
    /// Returns `None` on a miss; downstream numeric parsing treats that as
    /// not-a-number rather than failing.
    #[must_use]
    pub fn dot_version(&self, raw: &str) -> Option<&str> {
        let hit = self.entries.get(raw).map(String::as_str);
        if hit.is_none() {
            debug!(raw, "version identifier not in catalog");
        }
        hit
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
