use std::path::Path;

use fp_core::Report;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
    Markdown,
    Html,
}

impl Format {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            _ => Err(format!(
                "unsupported format: \"{s}\". Use: json, csv, markdown, html"
            )),
        }
    }
}

/// Current local time as shown in report headers.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render a report and write it to `output`, or stdout when `None`.
pub fn run(report: &Report, format: Format, output: Option<&Path>) -> Result<(), String> {
    let content = render(report, format, &timestamp())?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), rows = report.len(), "exported report");
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

pub fn render(report: &Report, format: Format, generated: &str) -> Result<String, String> {
    match format {
        Format::Json => export_json(report, generated),
        Format::Csv => Ok(export_csv(report)),
        Format::Markdown => Ok(export_markdown(report, generated)),
        Format::Html => Ok(export_html(report, generated)),
    }
}

fn export_json(report: &Report, generated: &str) -> Result<String, String> {
    let records: Vec<serde_json::Map<String, serde_json::Value>> = report
        .rows
        .iter()
        .map(|row| {
            report
                .columns
                .iter()
                .zip(row)
                .map(|(col, cell)| (col.clone(), serde_json::Value::from(cell.as_str())))
                .collect()
        })
        .collect();

    let export = serde_json::json!({
        "title": report.title,
        "kind": report.kind,
        "generated": generated,
        "columns": report.columns,
        "rows": records,
    });

    let mut out = serde_json::to_string_pretty(&export)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    out.push('\n');
    Ok(out)
}

fn csv_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn csv_line(cells: &[String]) -> String {
    let cells: Vec<String> = cells.iter().map(|c| csv_cell(c)).collect();
    cells.join(",")
}

/// Spreadsheet rows only: a header line, then one line per row.
fn export_csv(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&csv_line(&report.columns));
    out.push('\n');
    for row in &report.rows {
        out.push_str(&csv_line(row));
        out.push('\n');
    }
    out
}

fn md_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

fn export_markdown(report: &Report, generated: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", report.title));
    out.push_str(&format!("Generated: {generated}\n\n"));

    let header: Vec<String> = report.columns.iter().map(|c| md_cell(c)).collect();
    out.push_str(&format!("| {} |\n", header.join(" | ")));
    let rule: Vec<&str> = report.columns.iter().map(|_| "---").collect();
    out.push_str(&format!("| {} |\n", rule.join(" | ")));

    for row in &report.rows {
        let cells: Vec<String> = row.iter().map(|c| md_cell(c)).collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn export_html(report: &Report, generated: &str) -> String {
    let title = html_escape(&report.title);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str(&format!(
        "  <meta charset=\"utf-8\">\n  <title>{title}</title>\n"
    ));
    html.push_str("  <style>\n");
    html.push_str("    body { font-family: Helvetica, Arial, sans-serif; max-width: 800px; margin: 2em auto; padding: 0 1em; color: #212121; }\n");
    html.push_str("    h1 { border-bottom: 1px solid #c8c8c8; padding-bottom: 0.3em; }\n");
    html.push_str("    .generated { color: #646464; font-size: 0.9em; }\n");
    html.push_str("    table { border-collapse: collapse; width: 100%; }\n");
    html.push_str("    th { background: #f0f4f8; text-align: left; }\n");
    html.push_str("    th, td { padding: 0.4em 0.6em; border-bottom: 1px solid #e5e5e5; }\n");
    html.push_str("  </style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"generated\">Generated: {}</p>\n",
        html_escape(generated)
    ));
    html.push_str("<table>\n  <tr>");
    for col in &report.columns {
        html.push_str(&format!("<th>{}</th>", html_escape(col)));
    }
    html.push_str("</tr>\n");
    for row in &report.rows {
        html.push_str("  <tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", html_escape(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_core::{Team, TopicAllocation};

    const GENERATED: &str = "2026-01-01 09:00:00";

    fn roster() -> Report {
        Report::teams(&[
            Team {
                members: vec!["Ada".into(), "Grace".into()],
            },
            Team {
                members: vec!["Linus".into()],
            },
        ])
    }

    #[test]
    fn parse_formats() {
        assert_eq!(Format::parse("json").unwrap(), Format::Json);
        assert_eq!(Format::parse("CSV").unwrap(), Format::Csv);
        assert_eq!(Format::parse("md").unwrap(), Format::Markdown);
        assert_eq!(Format::parse("html").unwrap(), Format::Html);
        let err = Format::parse("pdf").unwrap_err();
        assert!(err.contains("unsupported format: \"pdf\""));
    }

    #[test]
    fn markdown_table() {
        let md = render(&roster(), Format::Markdown, GENERATED).unwrap();
        insta::assert_snapshot!(md.trim_end(), @r"
        # Team Roster Report

        Generated: 2026-01-01 09:00:00

        | Team | Member |
        | --- | --- |
        | Team 1 | Ada |
        | Team 1 | Grace |
        | Team 2 | Linus |
        ");
    }

    #[test]
    fn csv_quotes_special_cells() {
        let report = Report::topics(&[TopicAllocation {
            participant: "Lovelace, Ada".into(),
            topic: "The \"Engine\"".into(),
        }]);
        let csv = render(&report, Format::Csv, GENERATED).unwrap();
        assert_eq!(
            csv,
            "Participant,Topic\n\"Lovelace, Ada\",\"The \"\"Engine\"\"\"\n"
        );
    }

    #[test]
    fn csv_is_header_and_rows_only() {
        let csv = render(&roster(), Format::Csv, GENERATED).unwrap();
        assert!(!csv.contains("Generated"));
        assert!(!csv.contains(GENERATED));
        assert_eq!(
            csv.lines().collect::<Vec<_>>(),
            vec!["Team,Member", "Team 1,Ada", "Team 1,Grace", "Team 2,Linus"]
        );
    }

    #[test]
    fn json_records_keyed_by_column() {
        let json = render(&roster(), Format::Json, GENERATED).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Team Roster Report");
        assert_eq!(value["kind"], "teams");
        assert_eq!(value["generated"], GENERATED);
        assert_eq!(value["rows"][2]["Member"], "Linus");
        assert_eq!(value["rows"][2]["Team"], "Team 2");
    }

    #[test]
    fn html_escapes_cells() {
        let report = Report::topics(&[TopicAllocation {
            participant: "<script>".into(),
            topic: "R&D".into(),
        }]);
        let html = render(&report, Format::Html, GENERATED).unwrap();
        assert!(html.contains("<title>Allocation Report</title>"));
        assert!(html.contains("<td>&lt;script&gt;</td><td>R&amp;D</td>"));
        assert!(!html.contains("<td><script>"));
    }
}
