//! Greedy longest-match conversion.
//!
//! `convert` walks the input left to right. At each position the first
//! dictionary entry whose source matches there wins; since the dictionary is
//! sorted by descending source length that entry is the longest match. A
//! position no entry covers yields a single-char unknown token, so every input
//! is fully consumed and conversion never fails.

#[cfg(test)]
mod testutil;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::{Dictionary, MappingEntry};

/// Label carried by tokens for unmatched input.
pub const UNKNOWN_LABEL: &str = "Unknown character";

/// One scan step: which source fragment produced which output fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub matched_source: String,
    pub matched_target: String,
    pub label: String,
    /// No mapping covered `matched_source`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unknown: bool,
}

impl Token {
    fn matched(entry: &MappingEntry) -> Self {
        Self {
            matched_source: entry.source.clone(),
            matched_target: entry.target.clone(),
            label: entry.label.clone(),
            unknown: false,
        }
    }

    fn unmatched(ch: char, marker: &str) -> Self {
        Self {
            matched_source: ch.to_string(),
            matched_target: marker.to_string(),
            label: UNKNOWN_LABEL.to_string(),
            unknown: true,
        }
    }
}

/// Output text plus the aligned token breakdown.
///
/// `output` is always the concatenation of every token's `matched_target`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub output: String,
    pub tokens: Vec<Token>,
}

impl ConversionResult {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn unknown_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.unknown).count()
    }

    /// Reassemble the consumed input from the breakdown.
    pub fn source_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.matched_source.as_str())
            .collect()
    }
}

/// Convert `text` using a dictionary snapshot.
///
/// Empty or whitespace-only input returns an empty result without scanning.
/// The scan unit is a Unicode scalar value: an unmatched position consumes
/// exactly one `char`.
pub fn convert(text: &str, dict: &Dictionary) -> ConversionResult {
    if text.trim().is_empty() {
        return ConversionResult::default();
    }
    let _span = debug_span!("convert", len = text.len(), dict_size = dict.len()).entered();

    let mut tokens = Vec::new();
    let mut output = String::with_capacity(text.len());
    // Byte offset, always on a char boundary.
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        // Empty sources never reach the index, so a match always advances.
        let token = match dict.longest_match(rest) {
            Some(entry) => {
                pos += entry.source.len();
                Token::matched(entry)
            }
            None => {
                let Some(ch) = rest.chars().next() else {
                    break;
                };
                pos += ch.len_utf8();
                Token::unmatched(ch, dict.unknown_marker())
            }
        };
        output.push_str(&token.matched_target);
        tokens.push(token);
    }

    debug!(
        token_count = tokens.len(),
        unknown = tokens.iter().filter(|t| t.unknown).count()
    );
    ConversionResult { output, tokens }
}
