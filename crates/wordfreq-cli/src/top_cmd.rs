use std::process::ExitCode;

use tracing::debug;
use wordfreq_core::{RankedEntry, top_n_words};

use crate::cli::TopArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::read_text;
use crate::validation::MostFrequentWordsRequest;

pub fn run_top(args: TopArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let text = read_text(&args.source)?;
    let query = MostFrequentWordsRequest {
        text: Some(text),
        limit: Some(args.limit),
    }
    .validate(None)?;

    let entries = top_n_words(&query.text, query.limit);
    debug!(limit = query.limit, returned = entries.len(), "Ranked words");

    print_entries(&entries, output_format)?;
    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn print_entries(entries: &[RankedEntry], output_format: OutputFormat) -> CliResult<()> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(entries)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for entry in entries {
                println!("{}: {}", entry.word, entry.frequency);
            }
        }
    }
    Ok(())
}
