//! Configuration for a [`Picker`](crate::Picker).

/// Largest team size offered by default.
pub const DEFAULT_MAX_TEAM_SIZE: usize = 10;

/// Configuration for a picker.
#[derive(Debug, Clone)]
pub struct PickConfig {
    /// RNG seed for reproducible draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Upper bound applied to requested team sizes.
    pub max_team_size: usize,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_team_size: DEFAULT_MAX_TEAM_SIZE,
        }
    }
}

impl PickConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the team size ceiling (at least 1).
    pub fn with_max_team_size(mut self, max: usize) -> Self {
        self.max_team_size = max.max(1);
        self
    }
}
