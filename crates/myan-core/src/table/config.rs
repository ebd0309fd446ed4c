use serde::Deserialize;

use crate::dict::MappingEntry;

/// Table format version this build understands.
pub const TABLE_VERSION: u32 = 1;

/// The shipped mapping table: entries in static insertion order plus sample
/// texts for demonstration.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticTable {
    pub version: u32,
    pub entries: Vec<MappingEntry>,
    #[serde(default)]
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sample {
    pub name: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("unsupported table version: {0}")]
    UnsupportedVersion(u32),
    #[error("[[entries]] list is empty")]
    Empty,
    #[error("empty source in entry #{0}")]
    EmptySource(usize),
    #[error("empty text in sample: {0}")]
    EmptySample(String),
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a mapping table.
///
/// Entry order is preserved. An empty `target` is accepted: it deliberately
/// maps a mark to nothing (e.g. a tone mark with no Devanagari counterpart).
pub fn parse_table_toml(toml_str: &str) -> Result<StaticTable, TableError> {
    let table: StaticTable =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if table.version != TABLE_VERSION {
        return Err(TableError::UnsupportedVersion(table.version));
    }
    if table.entries.is_empty() {
        return Err(TableError::Empty);
    }
    if let Some(idx) = table.entries.iter().position(|e| e.source.is_empty()) {
        return Err(TableError::EmptySource(idx));
    }
    if let Some(sample) = table.samples.iter().find(|s| s.text.is_empty()) {
        return Err(TableError::EmptySample(sample.name.clone()));
    }

    Ok(table)
}
