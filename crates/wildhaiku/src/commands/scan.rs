//! Scan command: batch-process a captured tweet stream.
//!
//! Tweets arrive as JSON lines from a file or stdin. Lines are read in
//! batches and each batch is processed on a rayon pool; results are handled
//! in input order, so output is deterministic regardless of worker count.

use std::fs::File;
use std::io::{BufRead, BufReader, IsTerminal};

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream::Stdout};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use wildhaiku_core::tweet::parse_stream_line;
use wildhaiku_core::{Config, DiskArchiver, HaikuOutput, Processor, SuffixBlacklist};

/// Lines handed to the pool at once.
const BATCH_SIZE: usize = 512;

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// JSON-lines tweet file (omit or `-` to read stdin).
    pub file: Option<Utf8PathBuf>,

    /// Archive accepted haikus into this directory.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Worker threads (default: one per CPU).
    #[arg(short, long)]
    pub workers: Option<usize>,
}

/// Counters reported when a scan finishes.
///
/// `tweets` counts every decoded line, including tweets skipped for their
/// language or keywords.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
struct ScanSummary {
    tweets: usize,
    malformed: usize,
    haikus: usize,
    archived: usize,
}

/// What became of one input line.
#[derive(Debug)]
enum LineOutcome {
    Blank,
    Tweet(Option<HaikuOutput>),
}

type LineResult = Result<LineOutcome, serde_json::Error>;

/// Find haikus in a stream of tweets.
#[instrument(name = "cmd_scan", skip_all, fields(file = ?args.file))]
pub fn cmd_scan(args: ScanArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let workers = args.workers.or(config.worker_count);
    if workers == Some(0) {
        bail!("--workers must be at least 1");
    }
    let output_dir = args.output_dir.or_else(|| config.output_dir.clone());
    debug!(?workers, output_dir = ?output_dir, "executing scan command");

    let detector = super::load_detector(config, None)?;
    let processor = Processor::new(detector)
        .with_keywords(config.tracking_keywords.iter().flatten());
    let blacklist = config.suffix_blacklist();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.unwrap_or(0))
        .build()
        .context("failed to start worker pool")?;

    let mut archiver = output_dir
        .as_deref()
        .map(|dir| DiskArchiver::open(dir, blacklist.clone()))
        .transpose()
        .context("failed to open haiku archive")?;

    let reader = open_stream(args.file.as_ref())?;
    let progress = progress_bar(global_json);
    let mut scan = Scan {
        blacklist: &blacklist,
        archiver: archiver.as_mut(),
        progress: &progress,
        json: global_json,
        summary: ScanSummary::default(),
    };

    let mut batch = Vec::with_capacity(BATCH_SIZE);
    for line in reader.lines() {
        batch.push(line.context("failed to read tweet stream")?);
        if batch.len() == BATCH_SIZE {
            let results = pool.install(|| process_batch(&processor, &batch));
            scan.handle(results)?;
            batch.clear();
        }
    }
    if !batch.is_empty() {
        let results = pool.install(|| process_batch(&processor, &batch));
        scan.handle(results)?;
    }
    progress.finish_and_clear();

    let summary = scan.summary;
    info!(
        tweets = summary.tweets,
        malformed = summary.malformed,
        haikus = summary.haikus,
        archived = summary.archived,
        "scan finished"
    );
    if !global_json {
        println!(
            "{} {} tweets, found {} haikus",
            "Scanned".if_supports_color(Stdout, |t| t.bold()),
            summary.tweets,
            summary.haikus.if_supports_color(Stdout, |t| t.green())
        );
        if let Some(archiver) = &archiver {
            println!(
                "{}: {}",
                "Archive".if_supports_color(Stdout, |t| t.dimmed()),
                archiver.path().if_supports_color(Stdout, |t| t.cyan())
            );
        }
    }

    Ok(())
}

fn open_stream(path: Option<&Utf8PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path.as_str() != "-" => {
            let file =
                File::open(path.as_std_path()).with_context(|| format!("failed to open {path}"))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(std::io::stdin().lock())),
    }
}

fn progress_bar(global_json: bool) -> ProgressBar {
    if global_json || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {pos} tweets scanned {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    bar.set_style(style);
    bar
}

fn process_batch(processor: &Processor, lines: &[String]) -> Vec<LineResult> {
    lines
        .par_iter()
        .map(|line| {
            if line.trim().is_empty() {
                return Ok(LineOutcome::Blank);
            }
            let output = parse_stream_line(line)?.and_then(|tweet| processor.process(tweet));
            Ok(LineOutcome::Tweet(output))
        })
        .collect()
}

/// Sequential half of a scan: printing, archiving and counting.
struct Scan<'a> {
    blacklist: &'a SuffixBlacklist,
    archiver: Option<&'a mut DiskArchiver>,
    progress: &'a ProgressBar,
    json: bool,
    summary: ScanSummary,
}

impl Scan<'_> {
    fn handle(&mut self, results: Vec<LineResult>) -> anyhow::Result<()> {
        for result in results {
            match result {
                Err(err) => {
                    warn!(error = %err, "skipping malformed tweet");
                    self.summary.malformed += 1;
                }
                Ok(LineOutcome::Blank) => {}
                Ok(LineOutcome::Tweet(output)) => {
                    self.summary.tweets += 1;
                    self.progress.inc(1);
                    if let Some(output) = output {
                        self.accept(&output)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn accept(&mut self, output: &HaikuOutput) -> anyhow::Result<()> {
        let Some(kept) = self.blacklist.filter(output) else {
            return Ok(());
        };
        self.summary.haikus += kept.haikus.len();
        if let Some(archiver) = self.archiver.as_deref_mut() {
            self.summary.archived += archiver
                .archive(output)
                .with_context(|| format!("failed to archive tweet {}", output.tweet.id_str))?;
        }

        if self.json {
            let line = serde_json::to_string(&kept)?;
            self.progress.suspend(|| println!("{line}"));
        } else {
            self.progress.suspend(|| print_output(&kept));
        }
        Ok(())
    }
}

fn print_output(output: &HaikuOutput) {
    for haiku in &output.haikus {
        for line in haiku.render() {
            println!("  {}", line.if_supports_color(Stdout, |t| t.cyan()));
        }
        let permalink = output.tweet.permalink();
        println!("  {}", permalink.if_supports_color(Stdout, |t| t.dimmed()));
        println!();
    }
}
