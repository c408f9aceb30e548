/// Knobs the search recognizes: how deep to look, how long one move
/// may take, and how often the selector plays a deliberate blunder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Iterative-deepening depth ceiling, in plies.
    pub max_depth: u8,
    /// Per-move time ceiling in milliseconds. Zero or negative means
    /// unlimited.
    pub time_limit_ms: i64,
    /// Probability in [0, 1] that the selector ignores scores and
    /// picks a uniformly random candidate. Zero disables.
    pub randomness: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            time_limit_ms: 2000,
            randomness: 0.0,
        }
    }
}

/// Named presets mapping to search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Depth 2, unlimited time, blunders one move in four.
    Easy,
    /// Depth 3, 2 second ceiling, occasional blunders.
    Medium,
    /// Depth 4, 5 second ceiling, rare blunders.
    Hard,
    /// Depth 6, 5 second ceiling, never blunders on purpose.
    Expert,
}

impl Difficulty {
    pub fn max_depth(&self) -> u8 {
        match self {
            Self::Easy => 2,
            Self::Medium => 3,
            Self::Hard => 4,
            Self::Expert => 6,
        }
    }

    pub fn time_limit_ms(&self) -> i64 {
        match self {
            Self::Easy => 0,
            Self::Medium => 2000,
            Self::Hard => 5000,
            Self::Expert => 5000,
        }
    }

    pub fn randomness(&self) -> f64 {
        match self {
            Self::Easy => 0.25,
            Self::Medium => 0.1,
            Self::Hard => 0.02,
            Self::Expert => 0.0,
        }
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.max_depth(),
            time_limit_ms: self.time_limit_ms(),
            randomness: self.randomness(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}
