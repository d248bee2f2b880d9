//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! The following configuration file formats are supported:
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `wildhaiku.<ext>` in current directory or any parent
//! - `.wildhaiku.<ext>` in current directory or any parent
//! - `haiku.<ext>` in current directory or any parent
//! - `.haiku.<ext>` in current directory or any parent
//! - `~/.config/wildhaiku/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use wildhaiku_core::config::{Config, ConfigLoader};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("{:?}", config.line_sizes());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::haiku::form_syllables;
use crate::output::SuffixBlacklist;
use crate::{DEFAULT_LINE_SIZES, DEFAULT_MAX_INPUT_BYTES};

/// File name looked up in the user data directory when no dictionary is configured.
pub const DEFAULT_DICTIONARY_FILE: &str = "cmudict.dict";

/// The configuration for wildhaiku.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON) and `WILDHAIKU_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No log file is written when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// CMU-format pronouncing dictionary.
    ///
    /// Falls back to `cmudict.dict` in the user data directory.
    pub dictionary_path: Option<Utf8PathBuf>,
    /// Directory that `scan` archives found haikus into.
    pub output_dir: Option<Utf8PathBuf>,
    /// Worker threads for `scan`. Defaults to one per CPU.
    pub worker_count: Option<usize>,
    /// Syllables per line. Defaults to 5, 7, 5.
    pub line_sizes: Option<Vec<usize>>,
    /// Final words that disqualify a haiku from the archive.
    pub suffix_blacklist: Option<Vec<String>>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs in both CLI and MCP server.
    /// Omit to use the default (5 MiB). Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    /// Default: `false`.
    #[serde(default)]
    pub disable_input_limit: bool,
    /// Keep only tweets mentioning one of these words (case-insensitive).
    pub tracking_keywords: Option<Vec<String>>,
}

impl Config {
    /// Configured line sizes, or 5-7-5.
    pub fn line_sizes(&self) -> Vec<usize> {
        self.line_sizes
            .clone()
            .unwrap_or_else(|| DEFAULT_LINE_SIZES.to_vec())
    }

    /// Configured suffix blacklist, or the built-in one.
    pub fn suffix_blacklist(&self) -> SuffixBlacklist {
        self.suffix_blacklist
            .as_ref()
            .map_or_else(SuffixBlacklist::default, SuffixBlacklist::from_words)
    }

    /// Effective input size limit, `None` when disabled.
    pub fn max_input(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// Configured dictionary, else the default file in the user data directory.
    pub fn resolve_dictionary_path(&self) -> Option<Utf8PathBuf> {
        self.dictionary_path
            .clone()
            .or_else(|| user_data_dir().map(|dir| dir.join(DEFAULT_DICTIONARY_FILE)))
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(sizes) = &self.line_sizes
            && (sizes.is_empty() || sizes.contains(&0))
        {
            return Err(ConfigError::Invalid(format!(
                "line_sizes must be non-empty and positive, got {sizes:?}"
            )));
        }
        if let Some(sizes) = &self.line_sizes
            && form_syllables(sizes).is_none()
        {
            return Err(ConfigError::Invalid(format!(
                "line_sizes sum overflows, got {sizes:?}"
            )));
        }
        if self.worker_count == Some(0) {
            return Err(ConfigError::Invalid(
                "worker_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "wildhaiku";

/// Application names to search for config files (in precedence order, lowest first).
const APP_NAMES: &[&str] = &["haiku", "wildhaiku"];

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "WILDHAIKU_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/wildhaiku/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `WILDHAIKU_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/wildhaiku/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // WILDHAIKU_OUTPUT_DIR=/srv/haiku, WILDHAIKU_WORKER_COUNT=8, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        config.validate()?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has any
    /// match, ordered low-to-high precedence: `haiku` names before `wildhaiku`
    /// names, dotfiles before regular files within each app name.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for app_name in APP_NAMES {
                for ext in CONFIG_EXTENSIONS {
                    let dotfile = dir.join(format!(".{app_name}.{ext}"));
                    if dotfile.is_file() {
                        found.push(dotfile);
                    }
                }
                for ext in CONFIG_EXTENSIONS {
                    let regular = dir.join(format!("{app_name}.{ext}"));
                    if regular.is_file() {
                        found.push(regular);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config beside the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/wildhaiku/` on Linux, `~/Library/Application Support/wildhaiku/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Get the user data directory path.
///
/// Returns `~/.local/share/wildhaiku/` on Linux, `~/Library/Application Support/wildhaiku/`
/// on macOS, and equivalent on other platforms.
pub fn user_data_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn load_file(name: &str, content: &str) -> ConfigResult<Config> {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(name);
        fs::write(&config_path, content).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .map(|(config, _)| config)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.line_sizes(), vec![5, 7, 5]);
        assert_eq!(config.max_input(), Some(DEFAULT_MAX_INPUT_BYTES));
        assert_eq!(config.suffix_blacklist(), SuffixBlacklist::default());
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let loader = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker();

        let (config, sources) = loader.load().unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let config = load_file(
            "config.toml",
            r#"log_level = "debug"
log_dir = "/tmp/wildhaiku"
dictionary_path = "/usr/share/cmudict.dict"
output_dir = "/srv/haiku"
worker_count = 4
line_sizes = [3, 5, 3]
tracking_keywords = ["poem", "haiku"]
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.log_dir.as_ref().map(|dir| dir.as_str()),
            Some("/tmp/wildhaiku")
        );
        assert_eq!(
            config.resolve_dictionary_path().as_deref(),
            Some(Utf8Path::new("/usr/share/cmudict.dict"))
        );
        assert_eq!(config.output_dir.as_deref(), Some(Utf8Path::new("/srv/haiku")));
        assert_eq!(config.worker_count, Some(4));
        assert_eq!(config.line_sizes(), vec![3, 5, 3]);
        assert_eq!(
            config.tracking_keywords,
            Some(vec!["poem".to_string(), "haiku".to_string()])
        );
    }

    #[test]
    fn later_file_replaces_lists() {
        let tmp = TempDir::new().unwrap();

        let base = tmp.path().join("base.toml");
        fs::write(&base, "line_sizes = [5, 7, 5, 7, 7]\nworker_count = 2\n").unwrap();
        let override_file = tmp.path().join("override.yaml");
        fs::write(&override_file, "line_sizes: [3, 5, 3]\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(Utf8PathBuf::try_from(base).unwrap())
            .with_file(Utf8PathBuf::try_from(override_file).unwrap())
            .load()
            .unwrap();

        assert_eq!(config.line_sizes(), vec![3, 5, 3]);
        assert_eq!(config.worker_count, Some(2));
        assert_eq!(sources.explicit_files.len(), 2);
    }

    #[test]
    fn test_project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("src").join("deep");
        fs::create_dir_all(&sub_dir).unwrap();

        fs::write(project_dir.join(".wildhaiku.toml"), r#"log_level = "debug""#).unwrap();

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!sources.project_files.is_empty());
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();

        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();

        fs::write(parent.join(".wildhaiku.toml"), "output_dir = \"/srv/haiku\"\n").unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert!(config.output_dir.is_none());
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn test_explicit_file_overrides_project_config() {
        let tmp = TempDir::new().unwrap();

        fs::write(tmp.path().join(".wildhaiku.toml"), r#"log_level = "warn""#).unwrap();

        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, r#"log_level = "error""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .with_file(&override_config)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert!(!sources.project_files.is_empty());
        assert_eq!(sources.explicit_files.len(), 1);
        assert_eq!(sources.primary_file(), Some(override_config.as_path()));
    }

    #[test]
    fn test_user_dirs() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("wildhaiku"));
        }
        if let Some(path) = user_data_dir() {
            assert!(path.as_str().contains("wildhaiku"));
        }
    }

    #[test]
    fn dictionary_defaults_to_user_data_dir() {
        let config = Config::default();
        if let Some(path) = config.resolve_dictionary_path() {
            assert_eq!(path.file_name(), Some(DEFAULT_DICTIONARY_FILE));
        }
    }

    #[test]
    fn disable_input_limit_overrides_max_bytes() {
        let config = load_file(
            "config.toml",
            "max_input_bytes = 1024\ndisable_input_limit = true\n",
        )
        .unwrap();

        assert!(config.disable_input_limit);
        assert_eq!(config.max_input_bytes, Some(1024));
        assert_eq!(config.max_input(), None);
    }

    #[test]
    fn max_input_bytes_is_honored() {
        let config = load_file("config.toml", "max_input_bytes = 1024\n").unwrap();
        assert_eq!(config.max_input(), Some(1024));
    }

    #[test]
    fn invalid_line_sizes_are_rejected() {
        let empty = load_file("config.toml", "line_sizes = []\n");
        assert!(matches!(empty, Err(ConfigError::Invalid(_))));

        let zero = load_file("config.toml", "line_sizes = [5, 0, 5]\n");
        assert!(matches!(zero, Err(ConfigError::Invalid(_))));

        let huge = load_file(
            "config.json",
            &format!(r#"{{"line_sizes": [{}, 1]}}"#, usize::MAX),
        );
        assert!(matches!(huge, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_workers_are_rejected() {
        let result = load_file("config.json", r#"{"worker_count": 0}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn suffix_blacklist_replaces_default() {
        let config = load_file("config.yaml", "suffix_blacklist: [\"Very\"]\n").unwrap();
        assert_eq!(config.suffix_blacklist(), SuffixBlacklist::from_words(["very"]));
    }

    #[test]
    fn config_deserializes_from_yaml() {
        let yaml = r#"
log_level: warn
line_sizes: [5, 7, 5, 7, 7]
suffix_blacklist:
  - the
  - of
tracking_keywords:
  - moon
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.line_sizes(), vec![5, 7, 5, 7, 7]);
        assert_eq!(config.suffix_blacklist.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.tracking_keywords, Some(vec!["moon".to_string()]));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "output_dir = \"/from/file\"\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        // SAFETY: test-only; the mutex serializes env access across tests.
        unsafe {
            std::env::set_var("WILDHAIKU_OUTPUT_DIR", "/from/env");
        }

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("WILDHAIKU_OUTPUT_DIR");
        }

        let (config, _sources) = result.unwrap();
        assert_eq!(config.output_dir.as_deref(), Some(Utf8Path::new("/from/env")));
    }

    #[test]
    fn wildhaiku_overrides_haiku_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".haiku.toml"), r#"log_level = "debug""#).unwrap();
        fs::write(tmp.path().join(".wildhaiku.toml"), r#"log_level = "warn""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn haiku_and_wildhaiku_merge() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".haiku.toml"), "worker_count = 3\n").unwrap();
        fs::write(tmp.path().join(".wildhaiku.toml"), r#"log_level = "warn""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.worker_count, Some(3));
    }

    #[test]
    fn dotfile_before_regular_same_app_name() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".wildhaiku.toml"), r#"log_level = "debug""#).unwrap();
        fs::write(tmp.path().join("wildhaiku.toml"), r#"log_level = "error""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn only_closest_directory_contributes() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();

        fs::write(parent.join(".haiku.toml"), r#"log_level = "warn""#).unwrap();
        fs::write(child.join(".wildhaiku.toml"), r#"log_level = "error""#).unwrap();

        let child_path = Utf8PathBuf::try_from(child).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&child_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn haiku_yaml_discovered() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("haiku.yaml"), "log_level: debug\n").unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }
}
