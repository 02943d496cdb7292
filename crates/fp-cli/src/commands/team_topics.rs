use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fp_core::Report;
use fp_core::report::team_label;

use super::ExportTarget;
use crate::input;

pub fn run(
    participants: &Path,
    topics: &Path,
    team_size: usize,
    seed: Option<u64>,
    target: &ExportTarget<'_>,
) -> Result<(), String> {
    let format = target.format()?;
    let (people, topics) = input::read_lists(participants, topics)?;
    if people.len() < 2 || topics.is_empty() {
        return Err("enter participants and at least one topic".into());
    }

    let mut picker = super::picker_with_ceiling(seed, super::TEAM_TOPICS_MAX_SIZE);
    let allocations = picker
        .allocate_team_topics(&people, &topics, team_size)
        .map_err(|e| e.to_string())?;
    let report = Report::team_topics(&allocations);

    if !target.replaces_table() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Team", "Topic", "Members"]);
        for (i, a) in allocations.iter().enumerate() {
            table.add_row(vec![team_label(i), a.topic.clone(), a.team.members.join("\n")]);
        }

        println!("  {}", "Team & Topic Allocation Complete".bold());
        println!("{table}");
        println!();
        println!("  {} allocated", super::plural(allocations.len(), "team"));
    }

    target.write(format, &report)
}
