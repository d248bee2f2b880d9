//! Detect command: find haikus in a block of text.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use tracing::{debug, instrument};

use wildhaiku_core::{Config, Detection, Haiku};

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug, Default)]
pub struct DetectArgs {
    /// File to search (omit or `-` to read stdin).
    pub file: Option<Utf8PathBuf>,

    /// Search this text instead of reading a file.
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Syllables per line, comma-separated (default: 5,7,5).
    #[arg(short, long, value_delimiter = ',', value_name = "SIZES")]
    pub lines: Option<Vec<usize>>,
}

#[derive(Serialize)]
struct DetectReport {
    count: usize,
    #[serde(flatten)]
    detection: Detection,
}

/// Find haikus in a file, inline text, or stdin and print them.
#[instrument(name = "cmd_detect", skip_all, fields(file = ?args.file))]
pub fn cmd_detect(args: DetectArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(lines = ?args.lines, inline = args.text.is_some(), "executing detect command");

    let max_input = config.max_input();
    let text = match args.text {
        Some(text) => {
            if let Some(max) = max_input
                && text.len() > max
            {
                bail!("input too large: {} bytes (limit: {max} bytes)", text.len());
            }
            text
        }
        None => super::read_input(args.file.as_deref(), max_input)?,
    };

    let detector = super::load_detector(config, args.lines)?;
    let detection = detector.detect(&text);
    debug!(
        syllables = detection.syllables,
        sentences = detection.sentences,
        haikus = detection.haikus.len(),
        "detection finished"
    );

    if global_json {
        let report = DetectReport {
            count: detection.haikus.len(),
            detection,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if detection.haikus.is_empty() {
        println!("{}", "No haikus found.".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        print_haikus(&detection.haikus);
    }

    Ok(())
}

fn print_haikus(haikus: &[Haiku]) {
    for (index, haiku) in haikus.iter().enumerate() {
        if index > 0 {
            println!();
        }
        let number = format!("{}.", index + 1);
        println!("{}", number.if_supports_color(Stdout, |t| t.dimmed()));
        for line in haiku.render() {
            println!("  {}", line.if_supports_color(Stdout, |t| t.cyan()));
        }
    }
}
