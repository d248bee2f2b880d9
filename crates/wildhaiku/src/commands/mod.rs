//! Command implementations.

use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, bail};
use camino::Utf8Path;
use wildhaiku_core::haiku::form_syllables;
use wildhaiku_core::{Config, HaikuDetector, SyllableDictionary};

pub mod detect;
pub mod info;
pub mod scan;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read all of stdin, refusing more than `max_bytes`.
pub fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            stdin
                .take(limit)
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            if content.len() > max {
                bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            let mut stdin = stdin;
            stdin
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
        }
    }
    Ok(content)
}

/// Read from `path`, or stdin when the path is missing or `-`.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => read_input_file(path, max_bytes),
        _ => read_stdin(max_bytes),
    }
}

/// Check that every line of a haiku form holds at least one syllable.
pub fn validate_line_sizes(line_sizes: &[usize]) -> anyhow::Result<()> {
    if line_sizes.is_empty() {
        bail!("line sizes must name at least one line");
    }
    if line_sizes.contains(&0) {
        bail!("line sizes must be positive, got {line_sizes:?}");
    }
    if form_syllables(line_sizes).is_none() {
        bail!("line sizes are too large to add up, got {line_sizes:?}");
    }
    Ok(())
}

/// Load the configured pronouncing dictionary.
pub fn load_dictionary(config: &Config) -> anyhow::Result<Arc<SyllableDictionary>> {
    let path = config.resolve_dictionary_path().context(
        "no pronouncing dictionary configured; pass --dictionary or set dictionary_path",
    )?;
    let dictionary = SyllableDictionary::load(&path)
        .with_context(|| format!("failed to load dictionary {path}"))?;
    Ok(Arc::new(dictionary))
}

/// Build a detector from configuration, with optional per-command line sizes.
pub fn load_detector(
    config: &Config,
    line_sizes: Option<Vec<usize>>,
) -> anyhow::Result<HaikuDetector> {
    let line_sizes = line_sizes.unwrap_or_else(|| config.line_sizes());
    validate_line_sizes(&line_sizes)?;
    let dictionary = load_dictionary(config)?;
    Ok(HaikuDetector::new(dictionary).with_line_sizes(line_sizes))
}
