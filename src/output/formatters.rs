//! Color mapping for terminal output

use crate::core::LetterStatus;
use colored::{ColoredString, Colorize};

/// Maps letter statuses to terminal colors
///
/// Contrast mode uses the same hues, bolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    contrast: bool,
}

impl Palette {
    #[must_use]
    pub const fn new(contrast: bool) -> Self {
        Self { contrast }
    }

    fn finish(self, text: ColoredString) -> ColoredString {
        if self.contrast { text.bold() } else { text }
    }

    /// Paint text for a letter status; unset letters stay plain
    #[must_use]
    pub fn status(self, text: &str, status: Option<LetterStatus>) -> ColoredString {
        match status {
            None => text.normal(),
            Some(LetterStatus::Absent) => self.finish(text.bright_black().on_black()),
            Some(LetterStatus::Present) => self.finish(text.bright_yellow().on_black()),
            Some(LetterStatus::Correct) => self.finish(text.bright_green().on_black()),
        }
    }

    /// Placeholder tile for an unused grid slot
    #[must_use]
    pub fn empty_tile(self) -> ColoredString {
        self.finish("_".bright_black().on_black())
    }

    /// Red when negative, green otherwise
    #[must_use]
    pub fn score(self, score: i32) -> ColoredString {
        let text = score.to_string();
        if score < 0 {
            self.finish(text.bright_red())
        } else {
            self.finish(text.bright_green())
        }
    }

    #[must_use]
    pub fn error(self, text: &str) -> ColoredString {
        self.finish(text.bright_red())
    }
}

/// Join feedback squares for a finished round, one row per guess
#[must_use]
pub fn share_grid(rows: &[crate::core::Feedback]) -> String {
    rows.iter()
        .map(crate::core::Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    #[test]
    fn unset_status_keeps_text() {
        let painted = Palette::new(false).status("Q", None);
        assert_eq!(painted.to_string(), "Q");
    }

    #[test]
    fn share_grid_has_one_line_per_guess() {
        let target = Word::new("sheep").unwrap();
        let rows: Vec<Feedback> = ["slate", "sheep"]
            .iter()
            .map(|g| Feedback::evaluate(&Word::new(*g).unwrap(), &target))
            .collect();
        assert_eq!(share_grid(&rows), "🟩⬜⬜⬜🟨\n🟩🟩🟩🟩🟩");
    }
}
