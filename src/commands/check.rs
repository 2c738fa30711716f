//! Feedback for a single guess/target pair
//!
//! Shows exactly how a guess would be marked, duplicate letters included.

use crate::core::{Feedback, Word, WordError};
use crate::output::Palette;
use colored::Colorize;

/// Evaluate `guess` against `target`
///
/// # Errors
/// Returns a `WordError` if either input is not a five-letter word.
pub fn check_pair(guess: &str, target: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(Feedback::evaluate(&guess, &target))
}

/// Print a feedback row with its per-letter breakdown
pub fn print_check(feedback: &Feedback, target: &str, palette: Palette) {
    let tiles: String = feedback
        .iter()
        .map(|lf| {
            palette
                .status(&lf.char().to_ascii_uppercase().to_string(), Some(lf.status))
                .to_string()
        })
        .collect();

    println!(
        "\n{} vs {}",
        feedback.word().to_uppercase().bright_white().bold(),
        target.to_uppercase().bright_yellow().bold()
    );
    println!("  {tiles}  {}", feedback.to_emoji());
    for (i, lf) in feedback.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            lf.char().to_ascii_uppercase(),
            lf.status.label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    #[test]
    fn check_pair_evaluates() {
        let feedback = check_pair("BOBBY", "abbey").unwrap();
        assert_eq!(feedback.statuses()[2], LetterStatus::Correct);
        assert_eq!(feedback.statuses()[3], LetterStatus::Absent);
    }

    #[test]
    fn check_pair_rejects_bad_words() {
        assert_eq!(
            check_pair("bob", "abbey"),
            Err(WordError::InvalidLength(3))
        );
        assert_eq!(
            check_pair("bobby", "abb3y"),
            Err(WordError::InvalidCharacters)
        );
    }
}
