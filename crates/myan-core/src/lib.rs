//! Burmese → Devanagari transliteration by greedy longest-match lookup.
//!
//! The static mapping table ships as TOML (`table`), user overrides live in a
//! caller-owned registry (`custom`), and both are merged into a length-sorted
//! [`dict::Dictionary`] that [`converter::convert`] scans.

pub mod converter;
pub mod custom;
pub mod dict;
pub mod settings;
pub mod table;
