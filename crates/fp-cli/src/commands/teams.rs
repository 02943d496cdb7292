use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fp_core::Report;
use fp_core::report::team_label;

use super::ExportTarget;
use crate::input;

pub fn run(
    inline: &[String],
    file: Option<&Path>,
    team_size: usize,
    seed: Option<u64>,
    target: &ExportTarget<'_>,
) -> Result<(), String> {
    let format = target.format()?;
    let entries = input::gather(inline, file)?;
    super::require(&entries, 2, "provide at least 2 participants")?;

    let mut picker = super::picker_with_ceiling(seed, super::TEAMS_MAX_SIZE);
    let teams = picker
        .form_teams(&entries, team_size)
        .map_err(|e| e.to_string())?;
    let report = Report::teams(&teams);

    if !target.replaces_table() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Team", "Members"]);
        for (i, team) in teams.iter().enumerate() {
            table.add_row(vec![team_label(i), team.members.join("\n")]);
        }

        println!("  {}", "Teams Generated".bold());
        println!("{table}");
        println!();
        println!(
            "  {} from {}",
            super::plural(teams.len(), "team"),
            super::plural(entries.len(), "participant")
        );
    }

    target.write(format, &report)
}
