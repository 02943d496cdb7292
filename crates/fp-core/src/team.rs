//! Team formation by shuffling and chunking.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PickError, PickResult};
use crate::shuffle::shuffle;

/// An ordered group of participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team members in draw order.
    pub members: Vec<String>,
}

impl Team {
    /// Number of members on the team.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the team has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.members.join(", "))
    }
}

pub(crate) fn check_team_size(team_size: usize) -> PickResult<()> {
    if team_size < 1 {
        return Err(PickError::invalid("team size must be at least 1"));
    }
    Ok(())
}

/// Split an already-ordered list into consecutive teams of `team_size`.
///
/// The last team holds the remainder and may be smaller. No randomness is
/// involved.
pub fn chunk_teams(ordered: &[String], team_size: usize) -> PickResult<Vec<Team>> {
    check_team_size(team_size)?;
    Ok(ordered
        .chunks(team_size)
        .map(|chunk| Team {
            members: chunk.to_vec(),
        })
        .collect())
}

/// Shuffle `participants` and partition them into teams of `team_size`.
///
/// Produces `ceil(n / team_size)` teams. Each call re-shuffles.
pub fn form_teams<R: Rng + ?Sized>(
    participants: &[String],
    team_size: usize,
    rng: &mut R,
) -> PickResult<Vec<Team>> {
    check_team_size(team_size)?;
    if participants.is_empty() {
        return Err(PickError::invalid("no participants to form teams from"));
    }

    let shuffled = shuffle(participants, rng);
    let teams = chunk_teams(&shuffled, team_size)?;
    tracing::debug!(
        participants = participants.len(),
        team_size,
        teams = teams.len(),
        "formed teams"
    );
    Ok(teams)
}
