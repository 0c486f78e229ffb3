use digitmind_game::{AttemptLimit, GameConfig};

/// Attempt limits offered by the settings panel.
pub(crate) const ATTEMPT_LIMIT_CHOICES: [AttemptLimit; 5] = [
    AttemptLimit::limited(5),
    AttemptLimit::limited(10),
    AttemptLimit::limited(15),
    AttemptLimit::limited(20),
    AttemptLimit::Unbounded,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) digit_count: usize,
    pub(crate) allow_duplicates: bool,
    pub(crate) attempt_limit: AttemptLimit,
}

impl Settings {
    #[must_use]
    pub(crate) fn from_config(config: &GameConfig) -> Self {
        Self {
            digit_count: config.digit_count(),
            allow_duplicates: config.allow_duplicates(),
            attempt_limit: config.attempt_limit(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
