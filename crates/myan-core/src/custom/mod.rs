//! Caller-owned registry of custom mappings.
//!
//! Custom mappings augment the static table and shadow static entries with
//! the same source. The registry is plain data: callers mutate it between
//! conversions and rebuild a [`Dictionary`](crate::dict::Dictionary) snapshot
//! before each one.


use crate::dict::MappingEntry;

/// Label attached to every custom mapping.
pub const CUSTOM_LABEL: &str = "Custom mapping";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("custom mapping source is empty")]
    EmptySource,
    #[error("custom mapping target is empty")]
    EmptyTarget,
}

/// Custom mappings in addition order (index 0 is the oldest).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomMappings {
    entries: Vec<MappingEntry>,
}

impl CustomMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mapping. It takes priority over every earlier custom mapping
    /// and every static entry of the same source length.
    pub fn add(&mut self, source: &str, target: &str) -> Result<MappingEntry, MappingError> {
        if source.is_empty() {
            return Err(MappingError::EmptySource);
        }
        if target.is_empty() {
            return Err(MappingError::EmptyTarget);
        }
        let entry = MappingEntry::new(source, target).with_label(CUSTOM_LABEL);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove the mapping at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<MappingEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Mappings in addition order.
    pub fn list(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Mappings in search priority order, most recently added first.
    pub fn by_priority(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
