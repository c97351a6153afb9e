use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod error;
mod highest_cmd;
mod logging;
mod serve_cmd;
mod server;
mod shared;
mod top_cmd;
mod validation;
mod word_cmd;

use cli::{Cli, Commands};
use error::{OutputFormat, output_format_hint, parse_output_format, render_error};
use highest_cmd::run_highest;
use serve_cmd::run_serve;
use top_cmd::run_top;
use word_cmd::run_word;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Commands::Serve(_) => "info",
        _ => "warn",
    };
    logging::init(cli.verbose, default_level);
    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Highest(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_highest(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Word(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_word(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Top(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_top(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Serve(args) => match run_serve(args) {
            Ok(code) => code,
            Err(err) => render_error(&err, OutputFormat::Text),
        },
    }
}
