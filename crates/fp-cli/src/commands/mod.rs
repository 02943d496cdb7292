pub mod export;
pub mod pick;
pub mod team_topics;
pub mod teams;
pub mod topics;

use std::path::Path;

use fp_core::{PickConfig, Picker, Report};

use export::Format;

/// Where to send a report, if anywhere.
pub struct ExportTarget<'a> {
    pub format: Option<&'a str>,
    pub output: Option<&'a Path>,
}

impl ExportTarget<'_> {
    /// Resolve the requested format. An output path without a format is an error.
    fn format(&self) -> Result<Option<Format>, String> {
        match (self.format, self.output) {
            (Some(f), _) => Format::parse(f).map(Some),
            (None, Some(_)) => Err("--output requires --export <format>".into()),
            (None, None) => Ok(None),
        }
    }

    /// Returns true if the report goes to stdout instead of the table view.
    fn replaces_table(&self) -> bool {
        self.format.is_some() && self.output.is_none()
    }

    fn write(&self, format: Option<Format>, report: &Report) -> Result<(), String> {
        match format {
            Some(format) => export::run(report, format, self.output),
            None => Ok(()),
        }
    }
}

/// Team size ceiling for plain team formation.
const TEAMS_MAX_SIZE: usize = 15;
/// Team size ceiling when teams also receive topics.
const TEAM_TOPICS_MAX_SIZE: usize = 10;

fn picker(seed: Option<u64>) -> Picker {
    picker_with_ceiling(seed, fp_core::config::DEFAULT_MAX_TEAM_SIZE)
}

fn picker_with_ceiling(seed: Option<u64>, max_team_size: usize) -> Picker {
    let config = PickConfig::default().with_max_team_size(max_team_size);
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    Picker::new(config)
}

/// Enforce a minimum entry count with a user-facing message.
fn require(entries: &[String], min: usize, msg: &str) -> Result<(), String> {
    if entries.len() < min {
        Err(msg.to_string())
    } else {
        Ok(())
    }
}

fn plural(n: usize, word: &str) -> String {
    format!("{n} {word}{}", if n == 1 { "" } else { "s" })
}
