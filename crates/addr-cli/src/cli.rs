//! CLI argument definitions for the address cleaner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "addrclean",
    version,
    about = "Address cleaner - normalize and deduplicate US address CSV files",
    long_about = "Normalize the street, city, state and zip columns of a CSV file.\n\n\
                  Street suffixes and directions are expanded, misspellings are\n\
                  corrected against a word-frequency dictionary, states become\n\
                  two-letter codes, and repeated addresses are removed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Show the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow address values to appear in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize and deduplicate an address CSV file.
    Clean(CleanArgs),

    /// Show spelling suggestions for words.
    Lookup(LookupArgs),

    /// List the recognized US states and their variants.
    States,

    /// List the street suffixes and directions that get expanded.
    Terms,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV file with street, city, state and zip columns.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT stem>_cleaned.csv next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Run every stage and report, but do not write the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Words to look up.
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Which suggestions to show.
    #[arg(long = "suggestions", value_enum, default_value = "closest")]
    pub suggestions: SuggestionsArg,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Options shared by every command that corrects spelling.
#[derive(Args, Clone)]
pub struct DictionaryArgs {
    /// Frequency dictionary file with one `term count` entry per line.
    ///
    /// Falls back to ADDRCLEAN_DICTIONARY, then to the bundled dictionary.
    #[arg(long = "dictionary", value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Column separator of the dictionary file (default: any whitespace).
    ///
    /// Takes a single character, or `tab` / `\t` for a tab.
    #[arg(
        long = "dictionary-separator",
        value_name = "CHAR",
        value_parser = parse_separator
    )]
    pub separator: Option<char>,

    /// Largest edit distance a correction may have.
    #[arg(long = "max-edit-distance", value_name = "N", default_value_t = 2)]
    pub max_edit_distance: usize,

    /// Characters of each term used to build the lookup index.
    #[arg(long = "prefix-length", value_name = "N", default_value_t = 7)]
    pub prefix_length: usize,
}

/// Parse a separator given as one character, `tab`, or the `\t` escape.
fn parse_separator(value: &str) -> Result<char, String> {
    if value == "\\t" || value.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(format!("expected a single character or `tab`, got `{value}`")),
    }
}

/// CLI suggestion set choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SuggestionsArg {
    Top,
    Closest,
    All,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_separator(extra: &[&str]) -> Option<char> {
        let args = ["addrclean", "lookup", "oak"].iter().chain(extra).copied();
        match Cli::try_parse_from(args).unwrap().command {
            Command::Lookup(lookup) => lookup.dictionary.separator,
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn separator_accepts_tab_spellings() {
        for spelling in ["\\t", "tab", "TAB", "\t"] {
            assert_eq!(
                lookup_separator(&["--dictionary-separator", spelling]),
                Some('\t'),
                "{spelling:?}"
            );
        }
    }

    #[test]
    fn separator_accepts_a_single_character() {
        assert_eq!(lookup_separator(&["--dictionary-separator", ","]), Some(','));
        assert_eq!(lookup_separator(&[]), None);
    }

    #[test]
    fn separator_rejects_longer_values() {
        assert!(parse_separator("ab").is_err());
        assert!(parse_separator("").is_err());
        let args = ["addrclean", "lookup", "oak", "--dictionary-separator", "::"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
