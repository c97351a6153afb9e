use std::process::ExitCode;

use tracing::debug;
use wordfreq_core::highest_frequency;

use crate::cli::HighestArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{print_amount, read_text};
use crate::validation::HighestFrequencyRequest;

pub fn run_highest(args: HighestArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let text = read_text(&args.source)?;
    let query = HighestFrequencyRequest { text: Some(text) }.validate(None)?;

    let amount = highest_frequency(&query.text);
    debug!(amount, bytes = query.text.len(), "Computed highest frequency");

    print_amount(amount, output_format)?;
    Ok(ExitCode::from(EXIT_SUCCESS))
}
