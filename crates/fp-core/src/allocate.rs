//! Round-robin topic allocation to individuals and teams.
//!
//! Topics are shuffled once and then handed out by position modulo the topic
//! count. Each topic ends up assigned `floor(n/m)` or `ceil(n/m)` times,
//! while which participant gets which topic is still random.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PickError, PickResult};
use crate::shuffle::shuffle;
use crate::team::{Team, check_team_size, form_teams};

/// One participant paired with one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicAllocation {
    /// The participant receiving the topic.
    pub participant: String,
    /// The assigned topic.
    pub topic: String,
}

/// One team paired with one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAllocation {
    /// The team receiving the topic.
    pub team: Team,
    /// The assigned topic.
    pub topic: String,
}

fn round_robin(shuffled_topics: &[String], idx: usize) -> &str {
    &shuffled_topics[idx % shuffled_topics.len()]
}

/// Assign one topic to each participant.
///
/// Participant order is preserved; only the topic list is shuffled.
pub fn allocate_topics<R: Rng + ?Sized>(
    participants: &[String],
    topics: &[String],
    rng: &mut R,
) -> PickResult<Vec<TopicAllocation>> {
    if participants.is_empty() {
        return Err(PickError::invalid("no participants to allocate"));
    }
    if topics.is_empty() {
        return Err(PickError::invalid("no topics to allocate"));
    }

    let shuffled_topics = shuffle(topics, rng);
    let allocations: Vec<TopicAllocation> = participants
        .iter()
        .enumerate()
        .map(|(i, participant)| TopicAllocation {
            participant: participant.clone(),
            topic: round_robin(&shuffled_topics, i).to_string(),
        })
        .collect();

    tracing::debug!(
        participants = participants.len(),
        topics = topics.len(),
        "allocated topics"
    );
    Ok(allocations)
}

/// Form teams from a shuffled roster and give each team a topic.
///
/// Participants and topics are shuffled independently. Team `i` receives
/// `shuffled_topics[i % topics.len()]`.
pub fn allocate_team_topics<R: Rng + ?Sized>(
    participants: &[String],
    topics: &[String],
    team_size: usize,
    rng: &mut R,
) -> PickResult<Vec<TeamAllocation>> {
    check_team_size(team_size)?;
    if participants.is_empty() {
        return Err(PickError::invalid("no participants to allocate"));
    }
    if topics.is_empty() {
        return Err(PickError::invalid("no topics to allocate"));
    }

    let teams = form_teams(participants, team_size, rng)?;
    let shuffled_topics = shuffle(topics, rng);
    let allocations: Vec<TeamAllocation> = teams
        .into_iter()
        .enumerate()
        .map(|(i, team)| TeamAllocation {
            team,
            topic: round_robin(&shuffled_topics, i).to_string(),
        })
        .collect();

    tracing::debug!(
        teams = allocations.len(),
        topics = topics.len(),
        "allocated team topics"
    );
    Ok(allocations)
}
