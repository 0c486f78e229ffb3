//! The game state machine.

use digitmind_core::{DigitSequence, Feedback};
use digitmind_generator::{DigitSource, SeededSource};

use crate::{AttemptLimit, GameConfig, GameError, validate_guess};

/// Where a game stands.
///
/// ```text
/// NotStarted ──start──▶ InProgress ──guess──▶ Won | Lost
///                            ▲                   │
///                            └──────start────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum GameState {
    /// No game has been started yet.
    NotStarted,
    /// A secret is set and guesses are accepted.
    InProgress,
    /// The secret was guessed.
    Won,
    /// The attempt limit ran out.
    Lost,
}

impl GameState {
    /// Returns whether the game has ended (won or lost).
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One scored guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    index: usize,
    guess: DigitSequence,
    feedback: Feedback,
}

impl Attempt {
    /// One-based position of this attempt within the game.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The validated guess.
    #[must_use]
    pub fn guess(&self) -> &DigitSequence {
        &self.guess
    }

    /// Feedback for the guess.
    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Guesses left before the game is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum RemainingAttempts {
    /// There is no limit.
    Unbounded,
    /// This many guesses remain.
    Remaining(usize),
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameOutcome {
    /// The secret was guessed on attempt number `attempts`.
    Won {
        /// Number of attempts used, including the winning one.
        attempts: usize,
    },
    /// The attempt limit ran out.
    Lost {
        /// The secret the player failed to find.
        secret: DigitSequence,
    },
}

#[derive(Debug, Clone)]
struct Round {
    secret: DigitSequence,
    attempts: Vec<Attempt>,
    state: GameState,
}

/// A Digitmind game session.
///
/// Owns the configuration, the randomness source, and the current round.
/// Configuration changes after the first round has started discard the
/// current round and start a new one with the new settings.
///
/// # Example
///
/// ```
/// use digitmind_game::{AttemptLimit, Game, GameConfig, GameState};
///
/// let config = GameConfig::new(3, false, AttemptLimit::limited(1)).unwrap();
/// let mut game = Game::new(config);
/// assert_eq!(game.state(), GameState::NotStarted);
///
/// game.start_new_game();
/// assert_eq!(game.state(), GameState::InProgress);
/// assert!(game.revealed_secret().is_none());
/// ```
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    source: Box<dyn DigitSource>,
    round: Option<Round>,
}

impl Game {
    /// Creates a game drawing secrets from a randomly seeded source.
    ///
    /// No round is started; call [`Game::start_new_game`].
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_source(config, Box::new(SeededSource::from_random_seed()))
    }

    /// Creates a game drawing secrets from `source`.
    #[must_use]
    pub fn with_source(config: GameConfig, source: Box<dyn DigitSource>) -> Self {
        Self {
            config,
            source,
            round: None,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Once a round exists (running, won, or lost) it is discarded and a new
    /// one starts with the new settings, so the shown round always matches
    /// [`Game::config`]. Returns whether that restart happened.
    pub fn set_config(&mut self, config: GameConfig) -> bool {
        log::debug!(
            "configuration changed: {} digits, duplicates {}, limit {}",
            config.digit_count(),
            config.allow_duplicates(),
            config.attempt_limit()
        );
        self.config = config;
        if self.state().is_not_started() {
            false
        } else {
            self.start_new_game();
            true
        }
    }

    /// Validates and applies new settings, see [`Game::set_config`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if the settings are invalid. The current
    /// configuration and round are left untouched in that case.
    pub fn set_configuration(
        &mut self,
        digit_count: usize,
        allow_duplicates: bool,
        attempt_limit: AttemptLimit,
    ) -> Result<bool, GameError> {
        let config = GameConfig::new(digit_count, allow_duplicates, attempt_limit)?;
        Ok(self.set_config(config))
    }

    /// Starts a new round with a fresh secret.
    ///
    /// Legal in every state; any current round is discarded.
    pub fn start_new_game(&mut self) {
        let secret = self
            .config
            .secret_generator()
            .generate_from(&mut self.source);
        log::debug!(
            "new game: {} digits, duplicates {}, limit {}",
            self.config.digit_count(),
            self.config.allow_duplicates(),
            self.config.attempt_limit()
        );
        log::trace!("secret: {secret}");
        self.round = Some(Round {
            secret,
            attempts: Vec::new(),
            state: GameState::InProgress,
        });
    }

    /// Submits a guess typed by the player.
    ///
    /// Surrounding whitespace is ignored. A rejected guess does not consume an
    /// attempt. An accepted guess is scored and recorded, and ends the game
    /// when it matches the secret or uses up the last attempt.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameNotStarted`] before the first [`Game::start_new_game`].
    /// - [`GameError::GameAlreadyOver`] once the round is won or lost.
    /// - [`GameError::InvalidGuess`] when validation fails.
    pub fn submit_guess(&mut self, raw: &str) -> Result<&Attempt, GameError> {
        let Some(round) = &mut self.round else {
            return Err(GameError::GameNotStarted);
        };
        if round.state.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let guess = validate_guess(raw.trim(), &self.config)?;
        let feedback = Feedback::score(&round.secret, &guess);
        let index = round.attempts.len() + 1;
        round.attempts.push(Attempt {
            index,
            guess,
            feedback,
        });

        if feedback.is_solved() {
            log::debug!("game won after {index} attempts");
            round.state = GameState::Won;
        } else if self.config.attempt_limit().is_exhausted_by(index) {
            log::debug!("game lost after {index} attempts");
            round.state = GameState::Lost;
        }

        Ok(&round.attempts[index - 1])
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.round
            .as_ref()
            .map_or(GameState::NotStarted, |round| round.state)
    }

    /// Returns whether the current round has been won or lost.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state().is_over()
    }

    /// Returns the attempts of the current round, oldest first.
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        self.round
            .as_ref()
            .map(|round| round.attempts.as_slice())
            .unwrap_or_default()
    }

    /// Returns how many attempts the current round has consumed.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts().len()
    }

    /// Returns how many guesses remain under the current configuration.
    #[must_use]
    pub fn remaining_attempts(&self) -> RemainingAttempts {
        match self.config.attempt_limit() {
            AttemptLimit::Unbounded => RemainingAttempts::Unbounded,
            AttemptLimit::Limited(limit) => {
                let limit = usize::try_from(limit.get()).unwrap_or(usize::MAX);
                RemainingAttempts::Remaining(limit.saturating_sub(self.attempt_count()))
            }
        }
    }

    /// Returns how the round ended, or `None` while it is not over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        let round = self.round.as_ref()?;
        match round.state {
            GameState::Won => Some(GameOutcome::Won {
                attempts: round.attempts.len(),
            }),
            GameState::Lost => Some(GameOutcome::Lost {
                secret: round.secret.clone(),
            }),
            GameState::NotStarted | GameState::InProgress => None,
        }
    }

    /// Returns the secret once the round is over.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&DigitSequence> {
        self.round
            .as_ref()
            .filter(|round| round.state.is_over())
            .map(|round| &round.secret)
    }
}

#[cfg(test)]
mod tests {
    use digitmind_core::Digit;
    use digitmind_generator::{SecretSeed, testing::ScriptedSource};
    use proptest::prelude::*;

    use super::*;
    use crate::{ConfigError, GuessError};

    fn seq(s: &str) -> DigitSequence {
        s.parse().expect("valid digit sequence")
    }

    fn scripted(config: GameConfig, secrets: &[&str]) -> Game {
        let mut source = ScriptedSource::default();
        for secret in secrets {
            let secret = seq(secret);
            let script = if config.allow_duplicates() {
                ScriptedSource::for_secret_with_duplicates(&secret)
            } else {
                ScriptedSource::for_distinct_secret(&secret)
            };
            source.extend(script.into_values());
        }
        Game::with_source(config, Box::new(source))
    }

    fn started(config: GameConfig, secret: &str) -> Game {
        let mut game = scripted(config, &[secret]);
        game.start_new_game();
        game
    }

    fn config(digit_count: usize, allow_duplicates: bool, limit: AttemptLimit) -> GameConfig {
        GameConfig::new(digit_count, allow_duplicates, limit).unwrap()
    }

    #[test]
    fn test_new_game_is_not_started() {
        let game = Game::new(GameConfig::default());
        assert_eq!(game.state(), GameState::NotStarted);
        assert!(game.attempts().is_empty());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.remaining_attempts(), RemainingAttempts::Remaining(10));
    }

    #[test]
    fn test_submit_before_start() {
        let mut game = Game::new(GameConfig::default());
        assert_eq!(game.submit_guess("1234"), Err(GameError::GameNotStarted));
        assert_eq!(game.state(), GameState::NotStarted);
    }

    #[test]
    fn test_feedback_is_recorded() {
        let mut game = started(GameConfig::default(), "1234");

        let attempt = game.submit_guess("1243").unwrap();
        assert_eq!(attempt.index(), 1);
        assert_eq!(attempt.guess(), &seq("1243"));
        assert_eq!(attempt.feedback().as_tuple(), (2, 2, 0));

        let attempt = game.submit_guess("5678").unwrap();
        assert_eq!(attempt.index(), 2);
        assert_eq!(attempt.feedback().as_tuple(), (0, 0, 4));

        assert_eq!(game.attempt_count(), 2);
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.remaining_attempts(), RemainingAttempts::Remaining(8));
        assert!(game.revealed_secret().is_none());
    }

    #[test]
    fn test_win() {
        let mut game = started(GameConfig::default(), "0987");
        game.submit_guess("0123").unwrap();
        let attempt = game.submit_guess("0987").unwrap();
        assert!(attempt.feedback().is_solved());

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.outcome(), Some(GameOutcome::Won { attempts: 2 }));
        assert_eq!(game.revealed_secret(), Some(&seq("0987")));
    }

    #[test]
    fn test_win_uses_configured_digit_count() {
        let mut game = started(config(6, false, AttemptLimit::limited(3)), "501234");
        game.submit_guess("501234").unwrap();
        assert_eq!(game.state(), GameState::Won);

        let mut game = started(config(2, true, AttemptLimit::limited(3)), "77");
        game.submit_guess("77").unwrap();
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_single_attempt_loss_reveals_secret() {
        let mut game = started(config(4, false, AttemptLimit::limited(1)), "1234");
        game.submit_guess("4321").unwrap();

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(
            game.outcome(),
            Some(GameOutcome::Lost {
                secret: seq("1234")
            })
        );
        assert_eq!(game.remaining_attempts(), RemainingAttempts::Remaining(0));
    }

    #[test]
    fn test_winning_on_last_attempt_is_a_win() {
        let mut game = started(config(4, false, AttemptLimit::limited(2)), "1234");
        game.submit_guess("5678").unwrap();
        game.submit_guess("1234").unwrap();
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_unbounded_never_loses() {
        let mut game = started(config(4, false, AttemptLimit::Unbounded), "1234");
        for _ in 0..50 {
            game.submit_guess("5678").unwrap();
        }
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.attempt_count(), 50);
        assert_eq!(game.remaining_attempts(), RemainingAttempts::Unbounded);
    }

    #[test]
    fn test_invalid_guess_consumes_nothing() {
        let mut game = started(config(2, false, AttemptLimit::limited(1)), "12");

        assert_eq!(
            game.submit_guess("11"),
            Err(GameError::InvalidGuess(GuessError::DuplicateDigits {
                digit: Digit::D1
            }))
        );
        assert!(matches!(
            game.submit_guess("123"),
            Err(GameError::InvalidGuess(GuessError::LengthMismatch { .. }))
        ));
        assert!(matches!(
            game.submit_guess("1a"),
            Err(GameError::InvalidGuess(GuessError::NonDigitCharacter { .. }))
        ));

        assert!(game.attempts().is_empty());
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.remaining_attempts(), RemainingAttempts::Remaining(1));
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut game = started(GameConfig::default(), "1234");
        let attempt = game.submit_guess("  1234\n").unwrap();
        assert!(attempt.feedback().is_solved());
    }

    #[test]
    fn test_guesses_after_game_over_are_rejected() {
        let mut game = started(config(4, false, AttemptLimit::limited(1)), "1234");
        game.submit_guess("1234").unwrap();
        assert_eq!(game.submit_guess("5678"), Err(GameError::GameAlreadyOver));
        assert_eq!(game.submit_guess("bad"), Err(GameError::GameAlreadyOver));
        assert_eq!(game.attempt_count(), 1);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_start_new_game_resets_round() {
        let mut game = scripted(config(4, false, AttemptLimit::limited(1)), &["1234", "5678"]);
        game.start_new_game();
        game.submit_guess("4321").unwrap();
        assert_eq!(game.state(), GameState::Lost);

        game.start_new_game();
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.attempts().is_empty());
        game.submit_guess("5678").unwrap();
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_config_change_mid_game_restarts() {
        let mut source = ScriptedSource::for_distinct_secret(&seq("1234"));
        // The restart draws a 3-digit secret: pool indices 9, 8, 7 give 987.
        source.extend([9, 8, 7]);
        let mut game = Game::with_source(GameConfig::default(), Box::new(source));
        game.start_new_game();
        game.submit_guess("5678").unwrap();

        let restarted = game
            .set_configuration(3, false, AttemptLimit::Unbounded)
            .unwrap();

        assert!(restarted);
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.attempts().is_empty());
        assert_eq!(game.config().digit_count(), 3);
        game.submit_guess("987").unwrap();
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_config_change_before_first_game_does_not_start() {
        let mut game = Game::new(GameConfig::default());
        let restarted = game.set_config(config(5, true, AttemptLimit::Unbounded));
        assert!(!restarted);
        assert_eq!(game.state(), GameState::NotStarted);
        assert_eq!(game.config().digit_count(), 5);
    }

    #[test]
    fn test_config_change_after_win_restarts() {
        let mut source = ScriptedSource::for_distinct_secret(&seq("1234"));
        source.extend([0, 0, 0, 0, 0, 0]);
        let mut game = Game::with_source(
            config(4, false, AttemptLimit::limited(1)),
            Box::new(source),
        );
        game.start_new_game();
        game.submit_guess("1234").unwrap();
        assert_eq!(game.state(), GameState::Won);

        assert!(game.set_config(config(6, false, AttemptLimit::limited(1))));
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.attempts().is_empty());
        assert!(game.revealed_secret().is_none());
        assert_eq!(game.remaining_attempts(), RemainingAttempts::Remaining(1));
    }

    #[test]
    fn test_config_change_after_loss_keeps_attempts_within_limit() {
        let mut source = ScriptedSource::for_distinct_secret(&seq("1234"));
        source.extend([0, 0, 0, 0, 0, 0]);
        let mut game = Game::with_source(
            config(4, false, AttemptLimit::limited(3)),
            Box::new(source),
        );
        game.start_new_game();
        for _ in 0..3 {
            game.submit_guess("5678").unwrap();
        }
        assert_eq!(game.state(), GameState::Lost);

        let restarted = game
            .set_configuration(6, false, AttemptLimit::limited(1))
            .unwrap();

        assert!(restarted);
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.attempt_count() <= 1);
        assert_eq!(game.config().digit_count(), 6);
        assert!(game.revealed_secret().is_none());
        game.submit_guess("012345").unwrap();
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let mut game = started(GameConfig::default(), "1234");
        game.submit_guess("5678").unwrap();

        assert_eq!(
            game.set_configuration(11, true, AttemptLimit::Unbounded),
            Err(GameError::Config(ConfigError::DigitCountOutOfRange {
                digit_count: 11
            }))
        );
        assert_eq!(game.config(), &GameConfig::default());
        assert_eq!(game.attempt_count(), 1);
    }

    #[test]
    fn test_seeded_games_replay() {
        let seed = SecretSeed::from_phrase("replay");
        let mut a = Game::with_source(GameConfig::default(), Box::new(SeededSource::new(seed)));
        let mut b = Game::with_source(GameConfig::default(), Box::new(SeededSource::new(seed)));
        for _ in 0..3 {
            a.start_new_game();
            b.start_new_game();
            assert_eq!(a.round.as_ref().unwrap().secret, b.round.as_ref().unwrap().secret);
        }
    }

    proptest! {
        #[test]
        fn prop_attempts_stay_within_limit(
            limit in 1u32..8,
            seed: [u8; 32],
            guesses in prop::collection::vec("[0-9]{4}", 1..20),
        ) {
            let source = SeededSource::new(SecretSeed::from_bytes(seed));
            let config = config(4, true, AttemptLimit::limited(limit));
            let mut game = Game::with_source(config, Box::new(source));
            game.start_new_game();

            for guess in &guesses {
                let result = game.submit_guess(guess);
                let accepted = matches!(result, Ok(_) | Err(GameError::GameAlreadyOver));
                prop_assert!(accepted);
            }

            prop_assert!(game.attempt_count() <= usize::try_from(limit).unwrap());
            prop_assert_eq!(game.is_over(), game.outcome().is_some());
            prop_assert_eq!(game.is_over(), game.revealed_secret().is_some());
        }
    }
}
