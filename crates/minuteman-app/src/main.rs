//! Minuteman application binary - composition root.
//!
//! Ties together the Minuteman crates into a single executable:
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Read the transcript (or transcribe an audio file) and the roster (JSON)
//! 4. Run the extraction pipeline
//! 5. Emit the report as pretty JSON or a plain-text table

mod cli;
mod table;

use std::fs;

use clap::Parser;

use minuteman_core::config::EngineConfig;
use minuteman_core::types::{RosterRecord, TeamMember};
use minuteman_engine::TaskEngine;
use minuteman_transcribe::{PlainTextTranscriptionService, TranscriptionService};

use cli::CliArgs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing.
    let default_level = args.resolve_log_level().unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!("Starting Minuteman v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    let config = EngineConfig::load_or_default(&config_file);
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Inputs. The arg group guarantees exactly one of transcript / audio.
    let transcript = if let Some(path) = &args.transcript {
        let transcript = fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), bytes = transcript.len(), "Transcript read");
        transcript
    } else if let Some(path) = &args.audio {
        let audio = fs::read(path)?;
        let service: Box<dyn TranscriptionService> = Box::new(PlainTextTranscriptionService);
        let transcript = service.transcribe(&audio)?;
        tracing::info!(path = %path.display(), bytes = audio.len(), "Audio transcribed");
        transcript
    } else {
        return Err("a transcript path or --audio is required".into());
    };

    let roster_json = fs::read_to_string(&args.roster)?;
    let records: Vec<RosterRecord> = serde_json::from_str(&roster_json)?;
    let members: Vec<TeamMember> = records.into_iter().map(RosterRecord::into_member).collect();
    tracing::info!(path = %args.roster.display(), members = members.len(), "Roster read");

    // Pipeline.
    let engine = TaskEngine::new(&config)?;
    let report = engine.run(&transcript, &members)?;

    // Output.
    let rendered = if args.table {
        table::render(&report)
    } else {
        serde_json::to_string_pretty(&report)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
