//! A single round: one target word, up to six guesses
//!
//! # State machine
//! `AwaitingGuess` accepts guesses until one matches the target or the
//! sixth guess misses, then the round moves to `Ended`. Evaluation and the
//! win/loss checks happen inside [`Round::submit`], so they never show up
//! as an observable state.

use super::constraints::{ConstraintTracker, Violation};
use super::keyboard::KeyboardState;
use crate::core::{Feedback, Word, WordError};
use crate::wordlists::WordStore;
use log::{debug, info};
use std::fmt;

/// Guesses allowed per round
pub const MAX_GUESSES: usize = 6;

/// Points lost when the round runs out of guesses
pub const LOSS_PENALTY: i32 = 5;

/// Points for winning on guess number `guesses` (1-based)
///
/// Guess 1 earns 7, guess 6 earns 2.
#[must_use]
pub const fn win_score(guesses: usize) -> i32 {
    8 - guesses as i32
}

/// Why a guess was rejected; the round is unaffected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not exactly five letters
    InvalidLength(usize),
    /// Five characters, but not all letters
    NotAWord,
    /// A well-formed word the word list doesn't know
    NotInWordList(String),
    /// Hard mode is on and the guess ignores earlier feedback
    HardMode(Violation),
    /// The round already ended
    RoundOver,
    /// No round has been started
    NoActiveRound,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) if *len < 5 => {
                write!(f, "too short: guesses must be 5 letters, got {len}")
            }
            Self::InvalidLength(len) => {
                write!(f, "too long: guesses must be 5 letters, got {len}")
            }
            Self::NotAWord => write!(f, "guesses may only contain the letters a-z"),
            Self::NotInWordList(word) => write!(f, "'{word}' is not in the word list"),
            Self::HardMode(violation) => write!(f, "hard mode: {violation}"),
            Self::RoundOver => write!(f, "the round is over"),
            Self::NoActiveRound => write!(f, "no round in progress"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HardMode(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength(len),
            WordError::NonAscii | WordError::InvalidCharacters => Self::NotAWord,
        }
    }
}

impl From<Violation> for GuessError {
    fn from(violation: Violation) -> Self {
        Self::HardMode(violation)
    }
}

/// How a round finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { guesses: usize, score_delta: i32 },
    Lost { target: Word, score_delta: i32 },
}

impl RoundOutcome {
    #[must_use]
    pub const fn score_delta(&self) -> i32 {
        match self {
            Self::Won { score_delta, .. } | Self::Lost { score_delta, .. } => *score_delta,
        }
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Ended(RoundOutcome),
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub feedback: Feedback,
    /// Set when this guess ended the round
    pub outcome: Option<RoundOutcome>,
}

/// State of one round
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    hard_mode: bool,
    history: Vec<Feedback>,
    constraints: ConstraintTracker,
    keyboard: KeyboardState,
    state: RoundState,
}

impl Round {
    #[must_use]
    pub fn new(target: Word, hard_mode: bool) -> Self {
        Self {
            target,
            hard_mode,
            history: Vec::with_capacity(MAX_GUESSES),
            constraints: ConstraintTracker::new(),
            keyboard: KeyboardState::new(),
            state: RoundState::AwaitingGuess,
        }
    }

    /// Play a guess
    ///
    /// Input is trimmed and lowercased. A rejected guess leaves the round
    /// exactly as it was.
    ///
    /// # Errors
    /// Returns a `GuessError` naming the first problem with the guess, or
    /// `RoundOver` once the round has ended.
    pub fn submit(&mut self, input: &str, words: &WordStore) -> Result<Turn, GuessError> {
        if self.is_over() {
            return Err(GuessError::RoundOver);
        }

        let guess = Word::new(input.trim())?;
        if !words.contains(&guess) {
            return Err(GuessError::NotInWordList(guess.text().to_string()));
        }
        if self.hard_mode && !self.history.is_empty() {
            self.constraints.validate(&guess)?;
        }

        let feedback = Feedback::evaluate(&guess, &self.target);
        self.history.push(feedback);
        self.constraints.record(&feedback);
        self.keyboard.merge(&feedback);
        debug!("guess {} of {MAX_GUESSES}: {feedback}", self.history.len());

        let outcome = if guess == self.target {
            let guesses = self.history.len();
            Some(RoundOutcome::Won {
                guesses,
                score_delta: win_score(guesses),
            })
        } else if self.history.len() >= MAX_GUESSES {
            Some(RoundOutcome::Lost {
                target: self.target.clone(),
                score_delta: -LOSS_PENALTY,
            })
        } else {
            None
        };

        if let Some(outcome) = &outcome {
            info!(
                "round ended: {} after {} guesses ({:+})",
                if outcome.is_won() { "won" } else { "lost" },
                self.history.len(),
                outcome.score_delta()
            );
            self.state = RoundState::Ended(outcome.clone());
        }

        Ok(Turn { feedback, outcome })
    }

    /// Give up on an unfinished round
    ///
    /// A round with at least one guess counts as lost. Returns `None` when
    /// the round already ended or nothing was guessed yet.
    pub fn forfeit(&mut self) -> Option<RoundOutcome> {
        if self.is_over() || self.history.is_empty() {
            return None;
        }
        let outcome = RoundOutcome::Lost {
            target: self.target.clone(),
            score_delta: -LOSS_PENALTY,
        };
        info!(
            "round forfeited after {} guesses ({:+})",
            self.history.len(),
            outcome.score_delta()
        );
        self.state = RoundState::Ended(outcome.clone());
        Some(outcome)
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Feedback rows in the order they were guessed
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintTracker {
        &self.constraints
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Ended(_))
    }
}
