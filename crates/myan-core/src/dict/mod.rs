//! Search dictionary: static and custom mappings merged into one list sorted
//! by descending source length.
//!
//! The sort order is the longest-match guarantee. The scanner takes the first
//! entry that matches, so a longer source must always be tried before any
//! shorter one, and entries of equal length keep their priority order.

mod entry;

pub use entry::MappingEntry;

use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::{debug, debug_span, warn};

use crate::custom::CustomMappings;
use crate::settings::settings;

/// Immutable snapshot searched by [`convert`](crate::converter::convert).
///
/// Built once per conversion from the static table plus the custom mappings
/// present at that moment. Holds no interior mutability, so one snapshot can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<MappingEntry>,
    /// Leading char → indices into `entries`, each bucket in dictionary order.
    by_first: HashMap<char, Vec<usize>>,
    unknown_marker: String,
}

impl Dictionary {
    /// Merge custom and static entries into a search list.
    ///
    /// Custom entries are placed ahead of static ones, most recently added
    /// first, so after the stable length sort they win every tie.
    pub fn build(static_entries: &[MappingEntry], custom: &CustomMappings) -> Self {
        let _span = debug_span!(
            "build_dictionary",
            static_count = static_entries.len(),
            custom_count = custom.len()
        )
        .entered();
        Self::from_entries(custom.by_priority().chain(static_entries).cloned())
    }

    /// Build from entries already in priority order (highest first).
    ///
    /// Entries with an empty source are dropped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = MappingEntry>,
    {
        let mut entries: Vec<MappingEntry> = entries.into_iter().collect();
        let before = entries.len();
        entries.retain(|e| !e.source.is_empty());
        let skipped = before - entries.len();
        if skipped > 0 {
            warn!(skipped, "dropped mappings with empty source");
        }

        // Stable: equal lengths keep their priority order.
        entries.sort_by_key(|e| Reverse(e.source_len()));

        let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            if let Some(c) = entry.source.chars().next() {
                by_first.entry(c).or_default().push(idx);
            }
        }

        debug!(entry_count = entries.len(), bucket_count = by_first.len());
        Self {
            entries,
            by_first,
            unknown_marker: settings().conversion.unknown_marker.clone(),
        }
    }

    /// Replace the marker emitted for unmatched characters.
    pub fn with_unknown_marker(mut self, marker: impl Into<String>) -> Self {
        self.unknown_marker = marker.into();
        self
    }

    /// All entries in search order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unknown_marker(&self) -> &str {
        &self.unknown_marker
    }

    /// First entry in search order whose source is a prefix of `rest`.
    ///
    /// Only entries sharing the leading char of `rest` can match, so the
    /// bucket walk returns the same entry a full scan of `entries` would.
    pub fn longest_match(&self, rest: &str) -> Option<&MappingEntry> {
        let first = rest.chars().next()?;
        self.by_first
            .get(&first)?
            .iter()
            .map(|&idx| &self.entries[idx])
            .find(|e| rest.starts_with(e.source.as_str()))
    }

    /// Every entry whose source equals `source`, in search order.
    ///
    /// The first element is the one conversion uses; the rest are shadowed.
    pub fn lookup(&self, source: &str) -> Vec<&MappingEntry> {
        let Some(first) = source.chars().next() else {
            return Vec::new();
        };
        self.by_first
            .get(&first)
            .map(|bucket| {
                bucket
                    .iter()
                    .map(|&idx| &self.entries[idx])
                    .filter(|e| e.source == source)
                    .collect()
            })
            .unwrap_or_default()
    }
}
