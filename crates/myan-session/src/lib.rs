//! Caller-side conversion state.
//!
//! `Workbench` owns what an interactive front end keeps between user actions:
//! the input text, the custom mapping registry, and the last result. Each
//! `convert` builds a fresh dictionary snapshot from the static table and the
//! current custom mappings, so a mutation is always visible to the next
//! conversion and never to one already in progress.

#[cfg(test)]
mod tests;

use tracing::debug_span;

use myan_core::converter::{convert, ConversionResult};
use myan_core::custom::{CustomMappings, MappingError};
use myan_core::dict::{Dictionary, MappingEntry};
use myan_core::table::{table, Sample, StaticTable};

pub struct Workbench<'t> {
    table: &'t StaticTable,
    custom: CustomMappings,
    input: String,
    result: ConversionResult,
    /// Input or custom mappings changed since the last `convert`.
    stale: bool,
}

impl Workbench<'static> {
    /// Workbench over the global mapping table.
    pub fn standard() -> Self {
        Self::new(table())
    }
}

impl<'t> Workbench<'t> {
    pub fn new(table: &'t StaticTable) -> Self {
        Self {
            table,
            custom: CustomMappings::new(),
            input: String::new(),
            result: ConversionResult::default(),
            stale: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.stale = true;
    }

    /// Replace the input with the sample at `index`. Returns the sample, or
    /// `None` (input untouched) when out of range.
    pub fn load_sample(&mut self, index: usize) -> Option<&'t Sample> {
        let table = self.table;
        let sample = table.samples.get(index)?;
        self.set_input(sample.text.as_str());
        Some(sample)
    }

    pub fn samples(&self) -> &'t [Sample] {
        let table = self.table;
        &table.samples
    }

    pub fn custom_mappings(&self) -> &CustomMappings {
        &self.custom
    }

    pub fn add_custom_mapping(
        &mut self,
        source: &str,
        target: &str,
    ) -> Result<MappingEntry, MappingError> {
        let entry = self.custom.add(source, target)?;
        self.stale = true;
        Ok(entry)
    }

    /// Remove the custom mapping at `index`; out of range is a no-op.
    pub fn remove_custom_mapping(&mut self, index: usize) -> Option<MappingEntry> {
        let removed = self.custom.remove(index);
        if removed.is_some() {
            self.stale = true;
        }
        removed
    }

    /// Dictionary snapshot for the current custom mappings.
    pub fn snapshot(&self) -> Dictionary {
        Dictionary::build(&self.table.entries, &self.custom)
    }

    /// Rebuild the snapshot, convert the current input, and keep the result.
    pub fn convert(&mut self) -> &ConversionResult {
        let _span = debug_span!(
            "workbench_convert",
            input_len = self.input.len(),
            custom_count = self.custom.len()
        )
        .entered();
        let dict = self.snapshot();
        self.result = convert(&self.input, &dict);
        self.stale = false;
        &self.result
    }

    /// Result of the last `convert`.
    pub fn result(&self) -> &ConversionResult {
        &self.result
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Clear input and result. Custom mappings are kept.
    pub fn clear(&mut self) {
        self.input.clear();
        self.result = ConversionResult::default();
        self.stale = false;
    }
}
