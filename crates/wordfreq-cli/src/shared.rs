use std::fs;
use std::io::{self, Read};

use serde::Serialize;

use crate::cli::TextSource;
use crate::error::{CliError, CliResult, OutputFormat};

/// Body returned by the single-number queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountResponse {
    pub amount: usize,
}

/// Resolve the text to analyze: `--text` if given, else the `--input` file or stdin.
pub fn read_text(source: &TextSource) -> CliResult<String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }

    if source.input == "-" {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::runtime(format!("Failed to read stdin: {}", e)))?;
        Ok(buf)
    } else {
        fs::read_to_string(&source.input)
            .map_err(|e| CliError::runtime(format!("Failed to read file '{}': {}", source.input, e)))
    }
}

pub fn print_amount(amount: usize, output_format: OutputFormat) -> CliResult<()> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&AmountResponse { amount })
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => println!("{}", amount),
    }
    Ok(())
}
