//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout, Style};
use serde::Serialize;
use tracing::{debug, instrument};
use wildhaiku_core::config::{Config, ConfigSources};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dictionary_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    worker_count: Option<usize>,
    line_sizes: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tracking_keywords: Vec<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            dictionary_path: config.resolve_dictionary_path().map(|p| p.to_string()),
            output_dir: config.output_dir.as_ref().map(|p| p.to_string()),
            worker_count: config.worker_count,
            line_sizes: config.line_sizes(),
            max_input_bytes: config.max_input(),
            tracking_keywords: config.tracking_keywords.clone().unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stdout, |t| t.bold()),
        package.version.if_supports_color(Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", label("License"), package.license);
    }
    if !package.repository.is_empty() {
        println!(
            "{}: {}",
            label("Repository"),
            package.repository.if_supports_color(Stdout, |t| t.cyan())
        );
    }

    let info = &full_info.config;
    println!();
    println!("{}", heading("Configuration"));
    match info.config_file {
        Some(ref path) => println!(
            "{}: {}",
            label("Config file"),
            path.if_supports_color(Stdout, |t| t.cyan())
        ),
        None => println!(
            "{}: {}",
            label("Config file"),
            "none loaded".if_supports_color(Stdout, |t| t.yellow())
        ),
    }
    println!("{}: {}", label("Log level"), info.log_level);
    print_opt("Log directory", &info.log_dir);

    println!();
    println!("{}", heading("Detection"));
    print_opt("Dictionary", &info.dictionary_path);
    let sizes: Vec<String> = info.line_sizes.iter().map(ToString::to_string).collect();
    println!("{}: {}", label("Line sizes"), sizes.join("-"));
    match info.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", label("Input limit")),
        None => println!(
            "{}: {}",
            label("Input limit"),
            "disabled".if_supports_color(Stdout, |t| t.yellow())
        ),
    }

    println!();
    println!("{}", heading("Scanning"));
    print_opt("Output directory", &info.output_dir);
    print_opt("Workers", &info.worker_count);
    if !info.tracking_keywords.is_empty() {
        println!("{}: {}", label("Keywords"), info.tracking_keywords.join(", "));
    }

    Ok(())
}

fn heading(text: &str) -> String {
    let style = Style::new().bold().underline();
    text.if_supports_color(Stdout, |t| t.style(style)).to_string()
}

fn label(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.dimmed()).to_string()
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(name: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label(name), v),
        None => println!("{}: {}", label(name), label("(not set)")),
    }
}
