//! Per-letter feedback for a guess
//!
//! Each position of a guess is marked as:
//! - `Correct`: the letter sits at this exact position in the target
//! - `Present`: the letter occurs elsewhere in the target
//! - `Absent`: no unclaimed copy of the letter is left in the target
//!
//! Statuses are ordered `Absent < Present < Correct`, which is the priority
//! the keyboard uses when the same letter earns different marks.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback status for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter not in the target (or every copy already claimed)
    Absent,
    /// Letter in the target at another position
    Present,
    /// Letter in the target at this position
    Correct,
}

impl LetterStatus {
    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Lowercase label for logs and debug output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }
}

/// A guessed letter paired with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: u8,
    pub status: LetterStatus,
}

impl LetterFeedback {
    /// The letter as a `char`
    #[inline]
    #[must_use]
    pub fn char(self) -> char {
        char::from(self.letter)
    }
}

/// Feedback for a whole guess, position-aligned with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Duplicate letters are credited at most as many times as they occur
    /// in the target, with exact matches claiming their copies first.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool
    /// 2. Second pass: left to right, mark a letter present if an unclaimed
    ///    copy remains in the pool (and claim it), otherwise absent
    ///
    /// # Examples
    /// ```
    /// use console_wordle::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("bobby").unwrap();
    /// let target = Word::new("abbey").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     [
    ///         LetterStatus::Present,
    ///         LetterStatus::Absent,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Absent,
    ///         LetterStatus::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut statuses = [None; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                statuses[i] = Some(LetterStatus::Correct);
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present elsewhere, consuming one copy each
        for (i, &g) in guess.letters().iter().enumerate() {
            if statuses[i].is_some() {
                continue;
            }
            statuses[i] = match available.get_mut(&g) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    Some(LetterStatus::Present)
                }
                _ => Some(LetterStatus::Absent),
            };
        }

        let letters = guess.letters();
        Self(std::array::from_fn(|i| LetterFeedback {
            letter: letters[i],
            status: statuses[i].unwrap_or(LetterStatus::Absent),
        }))
    }

    /// Iterate over the letters in guess order
    pub fn iter(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.0.iter().copied()
    }

    /// The per-position letter feedback
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Just the statuses, in guess order
    #[must_use]
    pub fn statuses(&self) -> [LetterStatus; WORD_LENGTH] {
        self.0.map(|lf| lf.status)
    }

    /// Every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|lf| lf.status == LetterStatus::Correct)
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|lf| lf.status == status).count()
    }

    /// Whether `letter` earned `Correct` or `Present` anywhere in this guess
    #[must_use]
    pub fn credits(&self, letter: u8) -> bool {
        self.0
            .iter()
            .any(|lf| lf.letter == letter && lf.status != LetterStatus::Absent)
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|lf| lf.status.emoji()).collect()
    }

    /// The guessed word as text
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|lf| lf.char()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lf) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", lf.char(), lf.status.label())?;
        }
        Ok(())
    }
}
