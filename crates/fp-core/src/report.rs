//! Flat tabular views of allocation results.
//!
//! Every result shape maps onto rows of plain strings so that exporters can
//! write spreadsheets or documents without knowing about teams or topics.

use serde::Serialize;

use crate::allocate::{TeamAllocation, TopicAllocation};
use crate::team::Team;

/// Which tool produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Team formation.
    Teams,
    /// Individual topic allocation.
    Topics,
    /// Combined team and topic allocation.
    TeamTopics,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Teams => write!(f, "teams"),
            Self::Topics => write!(f, "topics"),
            Self::TeamTopics => write!(f, "team-topics"),
        }
    }
}

/// A titled table of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The tool that produced this report.
    pub kind: ReportKind,
    /// Human-readable heading.
    pub title: String,
    /// Column headers.
    pub columns: Vec<String>,
    /// One entry per row, one cell per column.
    pub rows: Vec<Vec<String>>,
}

/// Label for the team at zero-based position `idx`.
pub fn team_label(idx: usize) -> String {
    format!("Team {}", idx + 1)
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Report {
    /// One row per member, labelled with its team.
    pub fn teams(teams: &[Team]) -> Self {
        let rows = teams
            .iter()
            .enumerate()
            .flat_map(|(i, team)| {
                team.members
                    .iter()
                    .map(move |m| vec![team_label(i), m.clone()])
            })
            .collect();
        Self {
            kind: ReportKind::Teams,
            title: "Team Roster Report".to_string(),
            columns: columns(&["Team", "Member"]),
            rows,
        }
    }

    /// One row per participant with their topic.
    pub fn topics(allocations: &[TopicAllocation]) -> Self {
        let rows = allocations
            .iter()
            .map(|a| vec![a.participant.clone(), a.topic.clone()])
            .collect();
        Self {
            kind: ReportKind::Topics,
            title: "Allocation Report".to_string(),
            columns: columns(&["Participant", "Topic"]),
            rows,
        }
    }

    /// One row per team member, with the team label and the team's topic.
    pub fn team_topics(allocations: &[TeamAllocation]) -> Self {
        let rows = allocations
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                a.team
                    .members
                    .iter()
                    .map(move |m| vec![team_label(i), a.topic.clone(), m.clone()])
            })
            .collect();
        Self {
            kind: ReportKind::TeamTopics,
            title: "Team-Topic Report".to_string(),
            columns: columns(&["Team", "Topic", "Member"]),
            rows,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(members: &[&str]) -> Team {
        Team {
            members: members.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn team_rows() {
        let report = Report::teams(&[team(&["Ada", "Grace"]), team(&["Linus"])]);
        assert_eq!(report.kind, ReportKind::Teams);
        assert_eq!(report.columns, vec!["Team", "Member"]);
        assert_eq!(report.len(), 3);
        assert_eq!(report.rows[2], vec!["Team 2", "Linus"]);
    }

    #[test]
    fn topic_rows() {
        let report = Report::topics(&[
            TopicAllocation {
                participant: "Ada".into(),
                topic: "Compilers".into(),
            },
            TopicAllocation {
                participant: "Grace".into(),
                topic: "Networks".into(),
            },
        ]);
        assert_eq!(report.title, "Allocation Report");
        assert_eq!(report.rows[1], vec!["Grace", "Networks"]);
    }

    #[test]
    fn team_topic_rows() {
        let report = Report::team_topics(&[
            TeamAllocation {
                team: team(&["Ada", "Grace"]),
                topic: "Compilers".into(),
            },
            TeamAllocation {
                team: team(&["Linus"]),
                topic: "Kernels".into(),
            },
        ]);
        assert_eq!(report.columns, vec!["Team", "Topic", "Member"]);
        assert_eq!(report.len(), 3);
        assert_eq!(report.rows[0], vec!["Team 1", "Compilers", "Ada"]);
        assert_eq!(report.rows[2], vec!["Team 2", "Kernels", "Linus"]);
    }

    #[test]
    fn empty_report() {
        let report = Report::teams(&[]);
        assert!(report.is_empty());
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let report = Report::team_topics(&[]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "team_topics");
        assert_eq!(json["title"], "Team-Topic Report");
        assert_eq!(ReportKind::TeamTopics.to_string(), "team-topics");
    }
}
