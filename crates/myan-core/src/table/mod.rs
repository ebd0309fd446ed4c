//! Static Burmese → Devanagari mapping table.
//!
//! The default table is embedded from `default_table.toml` and parsed once on
//! first use. A replacement table can be installed with [`init_custom`] before
//! that first use.

mod config;

use std::sync::OnceLock;

pub use config::{parse_table_toml, Sample, StaticTable, TableError, TABLE_VERSION};

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `table()` call.
pub fn init_custom(toml_content: String) -> Result<(), TableError> {
    // Validate eagerly
    parse_table_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| TableError::AlreadyInitialized)
}

/// Get or initialize the global table singleton.
pub fn table() -> &'static StaticTable {
    static INSTANCE: OnceLock<StaticTable> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TABLE_TOML);
        parse_table_toml(toml_str).expect("mapping table TOML must be valid")
    })
}

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLE_TOML
}
