use clap::{Parser, Subcommand};

/// Word frequency analysis tool
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version)]
#[command(about = "Word frequency analysis tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the highest frequency of any word
    Highest(HighestArgs),
    /// Print the frequency of one word
    Word(WordArgs),
    /// Print the most frequent words
    Top(TopArgs),
    /// Serve the word frequency HTTP API
    Serve(ServeArgs),
}

/// Where the text to analyze comes from.
#[derive(clap::Args, Debug)]
pub struct TextSource {
    /// Text to analyze (takes precedence over --input)
    #[arg(long)]
    pub text: Option<String>,

    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,
}

#[derive(clap::Args, Debug)]
pub struct HighestArgs {
    #[command(flatten)]
    pub source: TextSource,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct WordArgs {
    /// Word to count (matched case-insensitively, punctuation kept as given)
    #[arg(short, long)]
    pub word: String,

    #[command(flatten)]
    pub source: TextSource,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct TopArgs {
    /// Number of words to return (must be positive)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub limit: i64,

    #[command(flatten)]
    pub source: TextSource,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "WORDFREQ_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "WORDFREQ_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Reject request texts larger than this many bytes
    #[arg(long, env = "WORDFREQ_MAX_TEXT_BYTES", default_value_t = 1024 * 1024)]
    pub max_text_bytes: usize,
}
