//! Hard-mode constraint tracking
//!
//! Every evaluated guess is recorded here, hard mode or not, so the
//! constraints are current whenever hard mode is consulted.

use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word};
use std::collections::BTreeSet;
use std::fmt;

/// Why a candidate guess breaks hard mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Letters revealed as present are missing from the guess
    MissingLetters(Vec<u8>),
    /// The guess reuses letters known to be absent
    ExcludedLetters(Vec<u8>),
    /// A position revealed as correct holds a different letter
    LockedPosition {
        position: usize,
        expected: u8,
        found: u8,
    },
}

fn join_letters(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&l| char::from(l.to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLetters(letters) => {
                write!(f, "missing required letter(s): {}", join_letters(letters))
            }
            Self::ExcludedLetters(letters) => {
                write!(f, "contains excluded letter(s): {}", join_letters(letters))
            }
            Self::LockedPosition {
                position,
                expected,
                found,
            } => write!(
                f,
                "locked position violated: letter {} must be {}, not {}",
                position + 1,
                char::from(expected.to_ascii_uppercase()),
                char::from(found.to_ascii_uppercase())
            ),
        }
    }
}

impl std::error::Error for Violation {}

/// Constraints accumulated from the feedback of one round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintTracker {
    required_positions: [Option<u8>; WORD_LENGTH],
    required_letters: BTreeSet<u8>,
    excluded_letters: BTreeSet<u8>,
}

impl ConstraintTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess's feedback into the constraints
    ///
    /// A letter is only excluded when no copy of it was credited in this
    /// guess and it has never been required by an earlier one. Requiring a
    /// letter later lifts any exclusion recorded for it.
    pub fn record(&mut self, feedback: &Feedback) {
        for (i, lf) in feedback.iter().enumerate() {
            match lf.status {
                LetterStatus::Correct => {
                    if self.required_positions[i].is_none() {
                        self.required_positions[i] = Some(lf.letter);
                    }
                    self.excluded_letters.remove(&lf.letter);
                }
                LetterStatus::Present => {
                    self.required_letters.insert(lf.letter);
                    self.excluded_letters.remove(&lf.letter);
                }
                LetterStatus::Absent => {
                    if !feedback.credits(lf.letter) && !self.is_required(lf.letter) {
                        self.excluded_letters.insert(lf.letter);
                    }
                }
            }
        }
    }

    /// Check a candidate guess against everything revealed so far
    ///
    /// Rules are checked in a fixed order and the first failure wins:
    /// required letters, then excluded letters, then locked positions.
    ///
    /// # Errors
    /// Returns the first `Violation` found.
    pub fn validate(&self, guess: &Word) -> Result<(), Violation> {
        let missing: Vec<u8> = self
            .required_letters
            .iter()
            .copied()
            .filter(|&letter| !guess.contains_letter(letter))
            .collect();
        if !missing.is_empty() {
            return Err(Violation::MissingLetters(missing));
        }

        let excluded: BTreeSet<u8> = guess
            .letters()
            .iter()
            .copied()
            .filter(|letter| self.excluded_letters.contains(letter))
            .collect();
        if !excluded.is_empty() {
            return Err(Violation::ExcludedLetters(excluded.into_iter().collect()));
        }

        for (position, locked) in self.required_positions.iter().enumerate() {
            if let Some(expected) = *locked {
                let found = guess.letter_at(position);
                if found != expected {
                    return Err(Violation::LockedPosition {
                        position,
                        expected,
                        found,
                    });
                }
            }
        }

        Ok(())
    }

    /// No feedback has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required_positions.iter().all(Option::is_none)
            && self.required_letters.is_empty()
            && self.excluded_letters.is_empty()
    }

    #[must_use]
    pub const fn required_positions(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.required_positions
    }

    #[must_use]
    pub const fn required_letters(&self) -> &BTreeSet<u8> {
        &self.required_letters
    }

    #[must_use]
    pub const fn excluded_letters(&self) -> &BTreeSet<u8> {
        &self.excluded_letters
    }

    fn is_required(&self, letter: u8) -> bool {
        self.required_letters.contains(&letter) || self.required_positions.contains(&Some(letter))
    }
}

/// Renders as `locked: S____ required: E excluded: A, L, T`
impl fmt::Display for ConstraintTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locked: String = self
            .required_positions()
            .iter()
            .map(|slot| slot.map_or('_', |l| char::from(l.to_ascii_uppercase())))
            .collect();
        let required: Vec<u8> = self.required_letters().iter().copied().collect();
        let excluded: Vec<u8> = self.excluded_letters().iter().copied().collect();
        write!(
            f,
            "locked: {locked} required: {} excluded: {}",
            join_letters(&required),
            join_letters(&excluded)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn tracker_after(guesses: &[&str], target: &str) -> ConstraintTracker {
        let mut tracker = ConstraintTracker::new();
        for guess in guesses {
            tracker.record(&Feedback::evaluate(&word(guess), &word(target)));
        }
        tracker
    }

    #[test]
    fn empty_tracker_accepts_anything() {
        let tracker = ConstraintTracker::new();
        assert!(tracker.is_empty());
        for guess in ["crane", "zzzzz", "abbey", "qajaq"] {
            assert_eq!(tracker.validate(&word(guess)), Ok(()));
        }
    }

    #[test]
    fn record_collects_each_kind() {
        // SLATE vs SHEEP: S correct at 0, E present, L/A/T absent
        let tracker = tracker_after(&["slate"], "sheep");
        assert_eq!(tracker.required_positions()[0], Some(b's'));
        assert!(tracker.required_positions()[1..].iter().all(Option::is_none));
        assert!(tracker.required_letters().contains(&b'e'));
        assert_eq!(
            tracker.excluded_letters().iter().copied().collect::<Vec<_>>(),
            vec![b'a', b'l', b't']
        );
    }

    #[test]
    fn missing_letter_reported_first() {
        let tracker = tracker_after(&["slate"], "sheep");
        // SHORT also contains the excluded T
        assert_eq!(
            tracker.validate(&word("short")),
            Err(Violation::MissingLetters(vec![b'e']))
        );
    }

    #[test]
    fn locked_position_checked_even_with_required_letters() {
        let tracker = tracker_after(&["slate"], "sheep");
        assert_eq!(
            tracker.validate(&word("cheer")),
            Err(Violation::LockedPosition {
                position: 0,
                expected: b's',
                found: b'c',
            })
        );
    }

    #[test]
    fn excluded_letter_rejected() {
        let tracker = tracker_after(&["slate"], "sheep");
        assert_eq!(
            tracker.validate(&word("steep")),
            Err(Violation::ExcludedLetters(vec![b't']))
        );
    }

    #[test]
    fn excluded_reported_before_locked() {
        let tracker = tracker_after(&["slate"], "sheep");
        // THEME has E, but T is excluded and the first slot is not S
        assert_eq!(
            tracker.validate(&word("theme")),
            Err(Violation::ExcludedLetters(vec![b't']))
        );
    }

    #[test]
    fn display_lists_every_constraint() {
        let tracker = tracker_after(&["slate"], "sheep");
        assert_eq!(
            tracker.to_string(),
            "locked: S____ required: E excluded: A, L, T"
        );
        assert_eq!(
            ConstraintTracker::new().to_string(),
            "locked: _____ required:  excluded: "
        );
    }

    #[test]
    fn consistent_guess_accepted() {
        let tracker = tracker_after(&["slate"], "sheep");
        assert_eq!(tracker.validate(&word("sheep")), Ok(()));
        assert_eq!(tracker.validate(&word("spree")), Ok(()));
    }

    #[test]
    fn duplicate_with_one_credited_copy_not_excluded() {
        // SPEED vs ABBEY: one E is correct at index 3, the other is absent
        let tracker = tracker_after(&["speed"], "abbey");
        assert!(!tracker.excluded_letters().contains(&b'e'));
        assert_eq!(tracker.required_positions()[3], Some(b'e'));
        assert!(tracker.excluded_letters().contains(&b's'));
    }

    #[test]
    fn surplus_copy_of_credited_letter_not_excluded() {
        let mut tracker = ConstraintTracker::new();
        tracker.record(&Feedback::evaluate(&word("geese"), &word("crane")));
        assert!(!tracker.excluded_letters().contains(&b'e'));

        // GEESE vs SHEEP: E correct and present, the third E absent
        let mut tracker = ConstraintTracker::new();
        tracker.record(&Feedback::evaluate(&word("geese"), &word("sheep")));
        assert!(!tracker.excluded_letters().contains(&b'e'));
        assert!(tracker.excluded_letters().contains(&b'g'));
        assert!(tracker.required_letters().contains(&b's'));
    }

    #[test]
    fn required_letter_never_excluded_by_later_guess() {
        let target = word("sheep");
        let mut tracker = ConstraintTracker::new();
        tracker.record(&Feedback::evaluate(&word("slate"), &target));
        // ERROR vs SHEEP: E present, R/O absent, second R absent
        tracker.record(&Feedback::evaluate(&word("error"), &target));
        tracker.record(&Feedback::evaluate(&word("mamma"), &target));
        for letter in tracker.required_letters() {
            assert!(!tracker.excluded_letters().contains(letter));
        }
        for letter in tracker.required_positions().iter().flatten() {
            assert!(!tracker.excluded_letters().contains(letter));
        }
    }

    #[test]
    fn locked_positions_never_change() {
        let target = word("sheep");
        let mut tracker = ConstraintTracker::new();
        tracker.record(&Feedback::evaluate(&word("slate"), &target));
        let before = *tracker.required_positions();
        tracker.record(&Feedback::evaluate(&word("shore"), &target));
        assert_eq!(tracker.required_positions()[0], before[0]);
        assert_eq!(tracker.required_positions()[1], Some(b'h'));
    }

    #[test]
    fn violation_messages_name_the_rule() {
        assert_eq!(
            Violation::MissingLetters(vec![b'e', b'r']).to_string(),
            "missing required letter(s): E, R"
        );
        assert_eq!(
            Violation::ExcludedLetters(vec![b't']).to_string(),
            "contains excluded letter(s): T"
        );
        assert_eq!(
            Violation::LockedPosition {
                position: 0,
                expected: b's',
                found: b'c'
            }
            .to_string(),
            "locked position violated: letter 1 must be S, not C"
        );
    }
}
