//! A play session: the word store, the random source and a running score
//!
//! The score is the only state that outlives a round.

use super::round::{GuessError, Round, RoundOutcome, Turn};
use crate::wordlists::WordStore;
use log::{debug, info};
use rand::Rng;

/// Owns everything that persists between rounds
///
/// Generic over the random source so tests can seed it.
#[derive(Debug)]
pub struct Session<R: Rng> {
    words: WordStore,
    rng: R,
    score: i32,
    round: Option<Round>,
    rounds_played: usize,
    rounds_won: usize,
}

impl<R: Rng> Session<R> {
    #[must_use]
    pub const fn new(words: WordStore, rng: R) -> Self {
        Self {
            words,
            rng,
            score: 0,
            round: None,
            rounds_played: 0,
            rounds_won: 0,
        }
    }

    /// Draw a new target and start a round
    ///
    /// An unfinished round with guesses in it is settled as lost first.
    pub fn start_round(&mut self, hard_mode: bool) -> &Round {
        self.abandon_round();
        let target = self.words.sample(&mut self.rng).clone();
        info!("new round (hard mode: {hard_mode})");
        debug!("target is '{target}'");
        self.round.insert(Round::new(target, hard_mode))
    }

    /// End the current round early, charging the loss penalty if any
    /// guess was made
    pub fn abandon_round(&mut self) -> Option<RoundOutcome> {
        let outcome = self.round.as_mut()?.forfeit()?;
        self.settle(&outcome);
        Some(outcome)
    }

    /// Play a guess in the current round
    ///
    /// The round's score delta is applied once, on the guess that ends it.
    ///
    /// # Errors
    /// `NoActiveRound` before the first round, otherwise whatever
    /// [`Round::submit`] rejects the guess with.
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        let round = self.round.as_mut().ok_or(GuessError::NoActiveRound)?;
        let turn = round.submit(input, &self.words).inspect_err(|err| {
            debug!("guess '{}' rejected: {err}", input.trim());
        })?;

        if let Some(outcome) = &turn.outcome {
            self.settle(outcome);
        }

        Ok(turn)
    }

    fn settle(&mut self, outcome: &RoundOutcome) {
        self.score += outcome.score_delta();
        self.rounds_played += 1;
        if outcome.is_won() {
            self.rounds_won += 1;
        }
        info!("score is now {}", self.score);
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// The current (or most recently finished) round
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    #[must_use]
    pub const fn rounds_won(&self) -> usize {
        self.rounds_won
    }
}
