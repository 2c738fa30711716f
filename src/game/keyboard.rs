//! Best-known status per letter, for the on-screen keyboard

use crate::core::{Feedback, LetterStatus};

const ALPHABET_LEN: usize = 26;

/// QWERTY rows, in display order
pub const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Per-letter status, only ever upgraded within a round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    statuses: [Option<LetterStatus>; ALPHABET_LEN],
}

fn slot(letter: u8) -> Option<usize> {
    letter
        .to_ascii_lowercase()
        .checked_sub(b'a')
        .map(usize::from)
        .filter(|&i| i < ALPHABET_LEN)
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one guess's feedback
    ///
    /// A letter's status is replaced only by a strictly higher one
    /// (`Absent < Present < Correct`), so merging is monotonic and
    /// merging the same feedback twice changes nothing.
    pub fn merge(&mut self, feedback: &Feedback) {
        for lf in feedback.iter() {
            let Some(i) = slot(lf.letter) else {
                continue;
            };
            let current = &mut self.statuses[i];
            if current.is_none_or(|seen| lf.status > seen) {
                *current = Some(lf.status);
            }
        }
    }

    /// Best status seen for a letter, `None` if never guessed
    #[must_use]
    pub fn status_of(&self, letter: char) -> Option<LetterStatus> {
        u8::try_from(letter)
            .ok()
            .and_then(slot)
            .and_then(|i| self.statuses[i])
    }

    /// Clear every letter back to unset
    pub fn reset(&mut self) {
        self.statuses = [None; ALPHABET_LEN];
    }

    /// Letters a-z with their statuses
    pub fn alphabetical(&self) -> impl Iterator<Item = (char, Option<LetterStatus>)> + '_ {
        (b'a'..=b'z').map(move |b| (char::from(b), self.statuses[usize::from(b - b'a')]))
    }

    /// Letters grouped by QWERTY row
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<(char, Option<LetterStatus>)>> {
        QWERTY_ROWS
            .iter()
            .map(|row| row.chars().map(|c| (c, self.status_of(c))).collect())
            .collect()
    }
}
