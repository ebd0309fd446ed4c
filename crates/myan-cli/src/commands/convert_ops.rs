use std::process;

use unicode_width::UnicodeWidthStr;

use myan_core::converter::{convert, ConversionResult};
use myan_core::custom::{CustomMappings, MappingError};
use myan_core::dict::Dictionary;
use myan_core::settings::settings;
use myan_core::table::table;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Parse a `SOURCE=TARGET` command-line pair.
pub fn parse_custom_pair(s: &str) -> Result<(String, String), String> {
    let (source, target) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SOURCE=TARGET, got {s:?}"))?;
    if source.is_empty() {
        return Err("custom mapping source is empty".to_string());
    }
    if target.is_empty() {
        return Err("custom mapping target is empty".to_string());
    }
    Ok((source.to_string(), target.to_string()))
}

/// Register `pairs` in order (later pairs win ties) and build a snapshot over
/// the global table.
pub fn build_dictionary(pairs: &[(String, String)]) -> Result<Dictionary, MappingError> {
    let mut custom = CustomMappings::new();
    for (source, target) in pairs {
        custom.add(source, target)?;
    }
    Ok(Dictionary::build(&table().entries, &custom))
}

/// Printable form of a source fragment.
///
/// Combining marks render with zero width on their own, so they get a dotted
/// circle base. Whitespace is made visible.
fn display_source(s: &str) -> String {
    match s {
        "\n" => "\\n".to_string(),
        "\t" => "\\t".to_string(),
        " " => "' '".to_string(),
        _ if s.width() == 0 => format!("\u{25CC}{s}"),
        _ => s.to_string(),
    }
}

/// One line per token: index, source, arrow, target and optional label.
pub fn render_breakdown(result: &ConversionResult, arrow: &str, show_labels: bool) -> String {
    let sources: Vec<String> = result
        .tokens
        .iter()
        .map(|t| display_source(&t.matched_source))
        .collect();
    let col = sources.iter().map(|s| s.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (i, (token, source)) in result.tokens.iter().zip(&sources).enumerate() {
        let pad = " ".repeat(col - source.width());
        out.push_str(&format!(
            "{i:>3}  {source}{pad}  {arrow} {}",
            token.matched_target
        ));
        if show_labels && !token.label.is_empty() {
            out.push_str(&format!("  ({})", token.label));
        }
        out.push('\n');
    }
    out
}

pub fn convert_cmd(text: &str, pairs: &[(String, String)], breakdown: bool, json: bool) {
    let dict = die!(build_dictionary(pairs), "Error: {}");
    let result = convert(text, &dict);

    if json {
        let s = die!(
            serde_json::to_string_pretty(&result),
            "Error serializing result: {}"
        );
        println!("{s}");
        return;
    }

    println!("{}", result.output);
    if breakdown {
        let cfg = &settings().breakdown;
        println!("---");
        print!(
            "{}",
            render_breakdown(&result, &cfg.arrow, cfg.show_labels)
        );
    }
    let unknown = result.unknown_count();
    if unknown > 0 {
        eprintln!("{unknown} unmapped character(s)");
    }
}

pub fn lookup_cmd(source: &str, pairs: &[(String, String)]) {
    let dict = die!(build_dictionary(pairs), "Error: {}");
    let entries = dict.lookup(source);
    if entries.is_empty() {
        match dict.longest_match(source) {
            Some(e) => println!(
                "No entry for {source:?}; longest prefix: {} → {}",
                display_source(&e.source),
                e.target
            ),
            None => println!("No entry for {source:?}"),
        }
        return;
    }
    for (i, e) in entries.iter().enumerate() {
        let status = if i == 0 { "active" } else { "shadowed" };
        println!(
            "{} → {}  ({})  [{status}]",
            display_source(&e.source),
            e.target,
            e.label
        );
    }
}
