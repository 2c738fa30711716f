//! Typed-out printing and board rendering for the console game

use super::formatters::Palette;
use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{KeyboardState, MAX_GUESSES};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Pause between characters of typed-out text
pub const DEFAULT_DELAY: Duration = Duration::from_millis(20);

/// Letters per keyboard line in the alphabetical layout
const KEYBOARD_WIDTH: usize = 13;

/// Writes game output, optionally one character at a time
pub struct Printer<W: Write> {
    out: W,
    delay: Duration,
}

impl<W: Write> Printer<W> {
    pub const fn new(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    /// Type out a line of text character by character
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn typed(&mut self, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            return writeln!(self.out, "{text}");
        }
        for ch in text.chars() {
            write!(self.out, "{ch}")?;
            self.out.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(self.out)
    }

    /// Write a line at once
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Write a prompt without a newline and flush it
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Draw every guess so far, then blank rows for the attempts left
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn grid(&mut self, history: &[Feedback], palette: Palette) -> io::Result<()> {
        for row in history {
            for lf in row.iter() {
                let letter = lf.char().to_ascii_uppercase().to_string();
                write!(self.out, "{}", palette.status(&letter, Some(lf.status)))?;
            }
            writeln!(self.out)?;
        }
        for _ in history.len()..MAX_GUESSES {
            for _ in 0..WORD_LENGTH {
                write!(self.out, "{}", palette.empty_tile())?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Draw the alphabet colored by best-known status
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn keyboard(&mut self, keyboard: &KeyboardState, palette: Palette) -> io::Result<()> {
        writeln!(self.out, "\nKeyboard:")?;
        for (i, (letter, status)) in keyboard.alphabetical().enumerate() {
            let letter = letter.to_ascii_uppercase().to_string();
            write!(self.out, "{} ", palette.status(&letter, status))?;
            if (i + 1) % KEYBOARD_WIDTH == 0 {
                writeln!(self.out)?;
            }
        }
        writeln!(self.out)
    }
}
