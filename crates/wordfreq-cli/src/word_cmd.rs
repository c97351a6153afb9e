use std::process::ExitCode;

use tracing::debug;
use wordfreq_core::frequency_for_word;

use crate::cli::WordArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{print_amount, read_text};
use crate::validation::WordFrequencyRequest;

pub fn run_word(args: WordArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let text = read_text(&args.source)?;
    let query = WordFrequencyRequest {
        text: Some(text),
        word: Some(args.word),
    }
    .validate(None)?;

    let amount = frequency_for_word(&query.text, &query.word);
    debug!(amount, word = %query.word, "Computed word frequency");

    print_amount(amount, output_format)?;
    Ok(ExitCode::from(EXIT_SUCCESS))
}
