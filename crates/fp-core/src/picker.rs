//! A seeded front door to the allocation engine.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::allocate::{TeamAllocation, TopicAllocation, allocate_team_topics, allocate_topics};
use crate::config::PickConfig;
use crate::draw::draw;
use crate::error::{PickError, PickResult};
use crate::shuffle::shuffle;
use crate::team::{Team, form_teams};

/// Owns a random source and applies the configured team size ceiling.
///
/// Holds no state between calls other than the RNG position.
#[derive(Debug)]
pub struct Picker {
    config: PickConfig,
    rng: StdRng,
}

impl Picker {
    /// Create a picker from a configuration.
    pub fn new(config: PickConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// The configuration this picker was built with.
    pub fn config(&self) -> &PickConfig {
        &self.config
    }

    /// Validate a requested team size and clamp it to the ceiling.
    pub fn effective_team_size(&self, requested: usize) -> PickResult<usize> {
        if requested < 1 {
            return Err(PickError::invalid("team size must be at least 1"));
        }
        let size = requested.min(self.config.max_team_size);
        if size != requested {
            tracing::debug!(requested, size, "clamped team size");
        }
        Ok(size)
    }

    /// Return a shuffled copy of `items`.
    pub fn shuffle(&mut self, items: &[String]) -> Vec<String> {
        shuffle(items, &mut self.rng)
    }

    /// Draw one entry.
    pub fn draw<'a>(&mut self, items: &'a [String]) -> PickResult<&'a String> {
        draw(items, &mut self.rng)
    }

    /// Shuffle participants into teams.
    pub fn form_teams(
        &mut self,
        participants: &[String],
        team_size: usize,
    ) -> PickResult<Vec<Team>> {
        let size = self.effective_team_size(team_size)?;
        form_teams(participants, size, &mut self.rng)
    }

    /// Give each participant a topic.
    pub fn allocate_topics(
        &mut self,
        participants: &[String],
        topics: &[String],
    ) -> PickResult<Vec<TopicAllocation>> {
        allocate_topics(participants, topics, &mut self.rng)
    }

    /// Form teams and give each team a topic.
    pub fn allocate_team_topics(
        &mut self,
        participants: &[String],
        topics: &[String],
        team_size: usize,
    ) -> PickResult<Vec<TeamAllocation>> {
        let size = self.effective_team_size(team_size)?;
        allocate_team_topics(participants, topics, size, &mut self.rng)
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new(PickConfig::default())
    }
}
