use std::fs;
use std::io;
use std::path::Path;
use std::process;

use myan_core::settings::{self, SettingsError};
use myan_core::table::{self, TableError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Replace the global mapping table. Must run before the first conversion.
pub fn install_table(path: &Path) -> Result<(), LoadError> {
    table::init_custom(read_file(path)?)?;
    tracing::debug!(path = %path.display(), "installed custom mapping table");
    Ok(())
}

/// Replace the global settings. Must run before the first conversion.
pub fn install_settings(path: &Path) -> Result<(), LoadError> {
    settings::init_custom(read_file(path)?)?;
    tracing::debug!(path = %path.display(), "installed custom settings");
    Ok(())
}

pub fn table_export() {
    print!("{}", table::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(read_file(Path::new(file)), "Error: {}");
    let t = die!(table::parse_table_toml(&content), "Error: {}");
    println!(
        "OK: {} entries, {} samples (version {})",
        t.entries.len(),
        t.samples.len(),
        t.version
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(read_file(Path::new(file)), "Error: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: conversion.unknown_marker={:?}, breakdown.arrow={:?}",
        s.conversion.unknown_marker, s.breakdown.arrow
    );
}

pub fn samples_list() {
    for (i, sample) in table::table().samples.iter().enumerate() {
        println!("{i:>2}: {}\t{}", sample.name, sample.text);
    }
}
