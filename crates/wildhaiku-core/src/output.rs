//! Output filtering and the on-disk haiku archive.

use std::collections::HashSet;
use std::fs::File;
use std::io::{LineWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{SecondsFormat, Utc};

use crate::error::{ArchiveError, ArchiveResult};
use crate::haiku::Haiku;
use crate::processor::HaikuOutput;

/// Final words that make a haiku read as cut off.
pub const DEFAULT_SUFFIX_BLACKLIST: &[&str] = &[
    "or", "a", "and", "are", "his", "but", "to", "is", "in", "he", "she", "as", "our", "the",
    "of", "if", "an", "my", "your",
];

/// Name of the symlink that tracks the archive currently being written.
pub const CURRENT_LINK: &str = "current.json";

/// Rejects haikus ending in low-information words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixBlacklist {
    words: HashSet<String>,
}

impl Default for SuffixBlacklist {
    fn default() -> Self {
        Self::from_words(DEFAULT_SUFFIX_BLACKLIST)
    }
}

impl SuffixBlacklist {
    /// Build a blacklist from `words`, ignoring case.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Whether `haiku` may be published.
    ///
    /// A haiku with no final word is never allowed.
    pub fn allows(&self, haiku: &Haiku) -> bool {
        haiku
            .final_word()
            .is_some_and(|word| !self.words.contains(&word.to_lowercase()))
    }

    /// Copy of `output` keeping only allowed haikus, or `None` if none remain.
    pub fn filter(&self, output: &HaikuOutput) -> Option<HaikuOutput> {
        let haikus: Vec<Haiku> = output
            .haikus
            .iter()
            .filter(|haiku| self.allows(haiku))
            .cloned()
            .collect();
        if haikus.is_empty() {
            return None;
        }
        Some(HaikuOutput {
            haikus,
            tweet: output.tweet.clone(),
        })
    }
}

/// Appends accepted haikus to a timestamped JSON-lines file.
#[derive(Debug)]
pub struct DiskArchiver {
    path: Utf8PathBuf,
    writer: LineWriter<File>,
    blacklist: SuffixBlacklist,
}

impl DiskArchiver {
    /// Create `haiku_<timestamp>.json` in `output_dir`.
    ///
    /// On Unix, `current.json` in the same directory is pointed at the new
    /// file, replacing any previous link. The link holds the bare file name so
    /// it resolves no matter how `output_dir` was spelled.
    #[tracing::instrument(skip_all, fields(output_dir = %output_dir))]
    pub fn open(output_dir: &Utf8Path, blacklist: SuffixBlacklist) -> ArchiveResult<Self> {
        let metadata = std::fs::metadata(output_dir).map_err(io_error(output_dir))?;
        if !metadata.is_dir() {
            return Err(ArchiveError::Io {
                path: output_dir.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotADirectory,
                    "output path is not a directory",
                ),
            });
        }

        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let file_name = format!("haiku_{stamp}.json");
        let path = output_dir.join(&file_name);
        let file = File::create(&path).map_err(io_error(&path))?;

        #[cfg(unix)]
        link_current(output_dir, &file_name)?;

        tracing::info!(path = %path, "archiving haikus");
        Ok(Self {
            path,
            writer: LineWriter::new(file),
            blacklist,
        })
    }

    /// Path of the archive file.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Write the allowed haikus of `output` as one JSON line.
    ///
    /// Returns how many haikus were written; outputs left empty by the
    /// blacklist write nothing.
    pub fn archive(&mut self, output: &HaikuOutput) -> ArchiveResult<usize> {
        let Some(kept) = self.blacklist.filter(output) else {
            return Ok(0);
        };
        let mut line = serde_json::to_vec(&kept)?;
        line.push(b'\n');
        self.writer
            .write_all(&line)
            .map_err(io_error(&self.path))?;
        Ok(kept.haikus.len())
    }
}

#[cfg(unix)]
fn link_current(output_dir: &Utf8Path, file_name: &str) -> ArchiveResult<()> {
    let link = output_dir.join(CURRENT_LINK);
    if std::fs::symlink_metadata(&link).is_ok() {
        std::fs::remove_file(&link).map_err(io_error(&link))?;
    }
    std::os::unix::fs::symlink(file_name, &link).map_err(io_error(&link))
}

fn io_error(path: &Utf8Path) -> impl FnOnce(std::io::Error) -> ArchiveError + use<> {
    let path = path.to_path_buf();
    move |source| ArchiveError::Io { path, source }
}
