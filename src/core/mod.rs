//! Core domain types for the game
//!
//! Words and the per-letter feedback a guess earns. Nothing here touches
//! the terminal, the word store or any round state: these are pure values.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterFeedback, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
