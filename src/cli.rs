use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// "2 minutes ago"
    Sentence,
    /// "2 minutes"
    Short,
    /// "2:00"
    Counter,
    /// "2 minutes, 5 seconds"
    Breakdown,
    /// "2m:05s"
    Compact,
    /// Every rendering as a JSON object
    Json,
}

#[derive(Parser)]
#[clap(about, version, author)]
pub struct Cli {
    /// Language code to describe the timestamp in
    #[clap(short = 'l', long, env = "TIMESTAMPER_LANG", default_value = "es")]
    pub lang: String,

    /// Extra TOML locale file, registered under its file stem
    #[clap(short = 'L', long = "locale")]
    pub locales: Vec<PathBuf>,

    /// How to render the timestamp
    #[clap(short = 'f', long, value_enum, default_value_t = OutputFormat::Sentence)]
    pub format: OutputFormat,

    /// Milliseconds since the epoch to treat as the current time
    #[clap(short = 'n', long, allow_hyphen_values = true)]
    pub now: Option<i64>,

    /// Log debug messages
    #[clap(short = 'v', long)]
    pub verbose: bool,

    /// Milliseconds since the epoch to describe
    #[clap(allow_hyphen_values = true)]
    pub timestamp: f64,
}
