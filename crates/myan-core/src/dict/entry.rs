use serde::{Deserialize, Serialize};

/// One source → target mapping.
///
/// `source` must be non-empty; entries with an empty source are dropped when a
/// [`Dictionary`](super::Dictionary) is built and never reach the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub source: String,
    pub target: String,
    /// Human-readable gloss shown in breakdowns.
    #[serde(default)]
    pub label: String,
}

impl MappingEntry {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Source length in scan units (chars).
    pub fn source_len(&self) -> usize {
        self.source.chars().count()
    }
}
