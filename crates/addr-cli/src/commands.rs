use anyhow::Result;
use comfy_table::Table;
use tracing::{debug, info_span};

use addr_normalization::{NormalizationOptions, Verbosity};
use addr_standards::{ADDRESS_TERMS, US_STATES};

use crate::cli::{CleanArgs, DictionaryArgs, LookupArgs, SuggestionsArg};
use addr_cli::pipeline::{
    DictionarySource, PipelineOptions, PipelineResult, default_output_path, load_matcher,
    process_file,
};
use addr_cli::report::apply_table_style;

pub fn run_clean(args: &CleanArgs) -> Result<PipelineResult> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let options = PipelineOptions {
        dictionary: dictionary_source(&args.dictionary),
        normalization: normalization_options(&args.dictionary),
        dry_run: args.dry_run,
    };
    process_file(&args.input, &output, &options)
}

pub fn run_lookup(args: &LookupArgs) -> Result<()> {
    let span = info_span!("lookup", words = args.words.len());
    let _guard = span.enter();

    let options = normalization_options(&args.dictionary);
    let matcher = load_matcher(&dictionary_source(&args.dictionary), options)?;
    let verbosity = match args.suggestions {
        SuggestionsArg::Top => Verbosity::Top,
        SuggestionsArg::Closest => Verbosity::Closest,
        SuggestionsArg::All => Verbosity::All,
    };

    let mut table = Table::new();
    table.set_header(vec!["Word", "Suggestion", "Distance", "Count"]);
    apply_table_style(&mut table);
    for word in &args.words {
        let suggestions =
            matcher.lookup(&word.to_lowercase(), verbosity, options.max_edit_distance);
        debug!(word = %word, found = suggestions.len(), "looked up word");
        if suggestions.is_empty() {
            table.add_row(vec![word.as_str(), "-", "-", "-"]);
        }
        for suggestion in suggestions {
            table.add_row(vec![
                word.clone(),
                suggestion.term,
                suggestion.distance.to_string(),
                suggestion.count.to_string(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_states() -> Result<()> {
    print_lexicon(&["Code", "Variants"], US_STATES);
    Ok(())
}

pub fn run_terms() -> Result<()> {
    print_lexicon(&["Term", "Variants"], ADDRESS_TERMS);
    Ok(())
}

fn print_lexicon(header: &[&str], entries: &[(&str, &[&str])]) {
    let mut table = Table::new();
    table.set_header(header.to_vec());
    apply_table_style(&mut table);
    for (canonical, variants) in entries {
        table.add_row(vec![(*canonical).to_string(), variants.join(", ")]);
    }
    println!("{table}");
}

fn dictionary_source(args: &DictionaryArgs) -> DictionarySource {
    DictionarySource::resolve(args.dictionary.clone(), args.separator)
}

fn normalization_options(args: &DictionaryArgs) -> NormalizationOptions {
    NormalizationOptions::new()
        .with_max_edit_distance(args.max_edit_distance)
        .with_prefix_length(args.prefix_length)
}
