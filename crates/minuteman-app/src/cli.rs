//! CLI argument definitions for the Minuteman binary.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Minuteman — extracts actionable tasks from meeting transcripts and
/// assigns them to team members.
#[derive(Parser, Debug)]
#[command(name = "minuteman", version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["transcript", "audio"])))]
pub struct CliArgs {
    /// Path to the transcript text file.
    pub transcript: Option<PathBuf>,

    /// Path to a meeting audio file to transcribe instead of a transcript.
    #[arg(short = 'a', long = "audio")]
    pub audio: Option<PathBuf>,

    /// Path to the team roster (JSON array of {name, role, skills}).
    #[arg(short = 'r', long = "roster")]
    pub roster: PathBuf,

    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write the JSON report to this file instead of stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Render a plain-text assignment table instead of JSON.
    #[arg(long = "table")]
    pub table: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > MINUTEMAN_CONFIG env var > platform
    /// default (~/.minuteman/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("MINUTEMAN_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > RUST_LOG env var (handled by the
    /// subscriber) > "info".
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".minuteman").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".minuteman").join("config.toml");
    }
    PathBuf::from("config.toml")
}
