use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fp_core::Report;

use super::ExportTarget;
use crate::input;

pub fn run(
    participants: &Path,
    topics: &Path,
    seed: Option<u64>,
    target: &ExportTarget<'_>,
) -> Result<(), String> {
    let format = target.format()?;
    let (people, topics) = input::read_lists(participants, topics)?;
    if people.is_empty() || topics.is_empty() {
        return Err("fill both participant and topic lists".into());
    }

    let mut picker = super::picker(seed);
    let allocations = picker
        .allocate_topics(&people, &topics)
        .map_err(|e| e.to_string())?;
    let report = Report::topics(&allocations);

    if !target.replaces_table() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Participant", "Assigned Topic"]);
        for a in &allocations {
            table.add_row(vec![&a.participant, &a.topic]);
        }

        println!("  {}", "Topics Allocated".bold());
        println!("{table}");
        println!();
        println!(
            "  {} across {}",
            super::plural(allocations.len(), "participant"),
            super::plural(topics.len(), "topic")
        );
    }

    target.write(format, &report)
}
