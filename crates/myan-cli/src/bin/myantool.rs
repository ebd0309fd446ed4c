use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use myan_cli::commands::{config_ops, convert_ops};
use myan_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "myantool", about = "Burmese to Devanagari transliteration tool")]
struct Cli {
    /// Replace the built-in mapping table with this TOML file
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Replace the built-in settings with this TOML file
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Log conversion internals to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate Burmese text
    Convert {
        /// Text to convert
        text: String,
        /// Custom mapping SOURCE=TARGET (repeatable, later ones win)
        #[arg(long = "custom", value_parser = convert_ops::parse_custom_pair)]
        custom: Vec<(String, String)>,
        /// Show the token breakdown
        #[arg(short, long)]
        breakdown: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the entry used for a source fragment and any it shadows
    Lookup {
        /// Source fragment
        source: String,
        /// Custom mapping SOURCE=TARGET (repeatable, later ones win)
        #[arg(long = "custom", value_parser = convert_ops::parse_custom_pair)]
        custom: Vec<(String, String)>,
    },
    /// List the built-in sample texts
    Samples,
    /// Export the default mapping table as TOML
    TableExport,
    /// Validate a mapping table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(path) = &cli.settings {
        if let Err(e) = config_ops::install_settings(path) {
            eprintln!("Error loading settings: {e}");
            process::exit(1);
        }
    }
    if let Some(path) = &cli.table {
        if let Err(e) = config_ops::install_table(path) {
            eprintln!("Error loading mapping table: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Convert {
            text,
            custom,
            breakdown,
            json,
        } => convert_ops::convert_cmd(&text, &custom, breakdown, json),
        Command::Lookup { source, custom } => convert_ops::lookup_cmd(&source, &custom),
        Command::Samples => config_ops::samples_list(),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
