mod cli;

use crate::cli::{Cli, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use timestamper::{clock, Locales, Timestamper};

fn main() -> Result<()> {
    let cli = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init()?;

    let mut locales = Locales::builtin();
    for path in &cli.locales {
        let lang = locales
            .load_file(path)
            .with_context(|| format!("Failed to register locale {}", path.display()))?;
        debug!("Registered locale {lang} from {}", path.display());
    }

    let locale = locales.get(&cli.lang).with_context(|| {
        format!(
            "Language {} is not available, choose one of: {}",
            cli.lang,
            locales.languages().join(", ")
        )
    })?;
    let now = cli.now.unwrap_or_else(clock::now_millis);
    let timestamper = Timestamper::relative_to(cli.timestamp, now, locale)
        .context("Failed to describe timestamp")?;

    let output = match cli.format {
        OutputFormat::Sentence => timestamper.to_sentence(),
        OutputFormat::Short => timestamper.to_short_phrase(),
        OutputFormat::Counter => timestamper.to_counter(),
        OutputFormat::Breakdown => timestamper.to_breakdown(),
        OutputFormat::Compact => timestamper.to_compact_counter(),
        OutputFormat::Json => serde_json::to_string_pretty(&timestamper.summary())
            .context("Failed to serialize summary")?,
    };
    println!("{output}");

    Ok(())
}
