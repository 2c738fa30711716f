//! Console game: start menu, mode toggles and the round loop
//!
//! Generic over the input and output streams so a whole session can be
//! scripted in tests.

use crate::game::{MAX_GUESSES, RoundOutcome, Session};
use crate::output::{Palette, Printer, share_grid};
use crate::settings::{Mode, PreferenceStore, Preferences};
use anyhow::Result;
use log::warn;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Duration;

const HELP: &str = "Wordle is a game where you have to guess a 5 letter word in 6 tries or less. \
After each guess, the letters will be colored to show how close your guess was. \
Green means the letter is in the correct position, yellow means the letter is in the word \
but in the wrong position and grey means the letter is not in the word at all. \
You can also enable hard mode, which forces you to use the clues you have been given. Good luck!";

/// Console front-end state
pub struct Console<'s, R: BufRead, W: Write, G: Rng> {
    input: R,
    printer: Printer<W>,
    session: &'s mut Session<G>,
    prefs: Preferences,
    store: PreferenceStore,
    forced: Preferences,
}

impl<'s, R: BufRead, W: Write, G: Rng> Console<'s, R, W, G> {
    /// `forced` modes are on for this run regardless of the saved preferences
    pub fn new(
        input: R,
        output: W,
        delay: Duration,
        session: &'s mut Session<G>,
        store: PreferenceStore,
        forced: Preferences,
    ) -> Self {
        let prefs = store.load();
        Self {
            input,
            printer: Printer::new(output, delay),
            session,
            prefs,
            store,
            forced,
        }
    }

    fn enabled(&self, mode: Mode) -> bool {
        self.prefs.get(mode) || self.forced.get(mode)
    }

    fn palette(&self) -> Palette {
        Palette::new(self.enabled(Mode::Contrast))
    }

    /// Next trimmed line, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Run the start menu until the player exits
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        self.printer.typed("Welcome to Console Wordle!")?;
        loop {
            self.printer.typed("type start, exit, help or modes")?;
            self.printer.line("")?;
            let Some(command) = self.read_line()? else {
                break;
            };
            match command.to_lowercase().as_str() {
                "start" => {
                    if !self.play()? {
                        break;
                    }
                }
                "help" => self.printer.typed(HELP)?,
                "modes" => {
                    if !self.modes()? {
                        break;
                    }
                }
                "exit" => break,
                _ => self.printer.typed("Invalid command.")?,
            }
        }
        self.printer.typed("Goodbye!")?;
        Ok(())
    }

    /// Toggle modes by name; `false` when input ran out
    fn modes(&mut self) -> Result<bool> {
        self.printer
            .typed("type a mode name to toggle it, type 'back' to go back")?;
        for mode in Mode::ALL {
            let line = format!(
                "{mode} ({}): {}",
                mode.description(),
                status_word(self.enabled(mode))
            );
            self.printer.typed(&line)?;
        }

        loop {
            self.printer.prompt("Enter mode name: ")?;
            let Some(name) = self.read_line()? else {
                return Ok(false);
            };
            if name.eq_ignore_ascii_case("back") {
                return Ok(true);
            }
            let Some(mode) = Mode::parse(&name) else {
                self.printer.typed("Invalid mode name.")?;
                continue;
            };

            self.prefs.toggle(mode);
            if let Err(err) = self.store.save(&self.prefs) {
                warn!("could not save preferences: {err:#}");
                self.printer
                    .typed(&format!("(could not save preferences: {err})"))?;
            }
            let mut line = format!("{mode}: {}", status_word(self.enabled(mode)));
            if self.forced.get(mode) {
                line.push_str(" (forced on for this run)");
            }
            self.printer.typed(&line)?;
        }
    }

    /// Play rounds until the player declines another; `false` when input ran out
    fn play(&mut self) -> Result<bool> {
        loop {
            match self.round()? {
                Some(true) => {}
                Some(false) => break,
                None => return Ok(false),
            }
        }
        let farewell = format!("Thanks for playing! score: {}", self.session.score());
        self.printer.typed(&farewell)?;
        Ok(true)
    }

    /// One round; `Some(play_again)`, or `None` when input ran out
    fn round(&mut self) -> Result<Option<bool>> {
        let hard_mode = self.enabled(Mode::Hard);
        let debug = self.enabled(Mode::Debug);
        let target = self.session.start_round(hard_mode).target().clone();

        if debug {
            self.printer
                .typed(&format!("DEBUG: The word to guess is '{target}'"))?;
        }
        let palette = self.palette();
        self.printer.line("")?;
        self.printer
            .line(format!("Score: {}", palette.score(self.session.score())))?;
        self.printer.grid(&[], palette)?;

        loop {
            self.printer.prompt("Enter your guess: ")?;
            let Some(guess) = self.read_line()? else {
                return Ok(None);
            };

            let turn = match self.session.submit(&guess) {
                Ok(turn) => turn,
                Err(err) => {
                    self.printer
                        .typed(&format!("Invalid guess, try again. {err}"))?;
                    self.render_round()?;
                    continue;
                }
            };

            self.render_round()?;
            if debug {
                let (used, constraints) = self
                    .session
                    .round()
                    .map(|r| (r.guesses_used(), r.constraints().to_string()))
                    .unwrap_or_default();
                self.printer.typed(&format!("DEBUG: {}", turn.feedback))?;
                self.printer
                    .typed(&format!("DEBUG: guess {used} of {MAX_GUESSES}"))?;
                self.printer.typed(&format!("DEBUG: {constraints}"))?;
            }

            match turn.outcome {
                None => {}
                Some(RoundOutcome::Won { guesses, .. }) => {
                    let noun = if guesses == 1 { "guess" } else { "guesses" };
                    let line = format!(
                        "\nCongratulations! You've guessed the word in {guesses} {noun}! score: {}",
                        self.session.score()
                    );
                    self.printer.typed(&line)?;
                    if let Some(round) = self.session.round() {
                        self.printer.line(share_grid(round.history()))?;
                    }
                    return self.play_again();
                }
                Some(RoundOutcome::Lost { target, .. }) => {
                    let line = format!(
                        "\nGame over! The word was '{target}'. score: {}",
                        self.session.score()
                    );
                    let painted = self.palette().error(&line).to_string();
                    self.printer.typed(&painted)?;
                    return self.play_again();
                }
            }
        }
    }

    fn render_round(&mut self) -> Result<()> {
        let palette = self.palette();
        if let Some(round) = self.session.round() {
            self.printer.grid(round.history(), palette)?;
            if !round.history().is_empty() {
                self.printer.keyboard(round.keyboard(), palette)?;
            }
        }
        Ok(())
    }

    fn play_again(&mut self) -> Result<Option<bool>> {
        self.printer.prompt("Do you want to play again? (y/n): ")?;
        Ok(self
            .read_line()?
            .map(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes")))
    }
}

const fn status_word(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

/// Run the console game on the given streams
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run_console<R: BufRead, W: Write, G: Rng>(
    input: R,
    output: W,
    delay: Duration,
    session: &mut Session<G>,
    store: PreferenceStore,
    forced: Preferences,
) -> Result<()> {
    Console::new(input, output, delay, session, store, forced).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn session(words: &[&str]) -> Session<StdRng> {
        Session::new(
            WordStore::from_words(words.iter().copied()).unwrap(),
            StdRng::seed_from_u64(11),
        )
    }

    /// Session whose first draw is `target`
    fn session_targeting(words: &[&str], target: &str) -> Session<StdRng> {
        let store = WordStore::from_words(words.iter().copied()).unwrap();
        let seed = (0..1000)
            .find(|&seed| store.sample(&mut StdRng::seed_from_u64(seed)).text() == target)
            .unwrap();
        Session::new(store, StdRng::seed_from_u64(seed))
    }

    fn play(session: &mut Session<StdRng>, script: &str, forced: Preferences) -> String {
        let mut out = Vec::new();
        run_console(
            Cursor::new(script.to_string()),
            &mut out,
            Duration::ZERO,
            session,
            PreferenceStore::in_memory(),
            forced,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_says_goodbye() {
        let mut session = session(&["crane"]);
        let out = play(&mut session, "exit\n", Preferences::default());
        assert!(out.contains("Welcome to Console Wordle!"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn unknown_command_and_help() {
        let mut session = session(&["crane"]);
        let out = play(&mut session, "dance\nhelp\nexit\n", Preferences::default());
        assert!(out.contains("Invalid command."));
        assert!(out.contains("hard mode, which forces you"));
    }

    #[test]
    fn winning_round_scores_and_reports() {
        let mut session = session(&["crane"]);
        let out = play(&mut session, "start\ncrane\nn\nexit\n", Preferences::default());
        assert!(out.contains("You've guessed the word in 1 guess! score: 7"));
        assert!(out.contains("Thanks for playing! score: 7"));
        assert_eq!(session.score(), 7);
    }

    #[test]
    fn invalid_guesses_are_explained() {
        let mut session = session(&["crane", "slate"]);
        let script = "start\ncran\nzzzzz\ncranes\n";
        let out = play(&mut session, script, Preferences::default());
        assert!(out.contains("Invalid guess, try again. too short"));
        assert!(out.contains("Invalid guess, try again. 'zzzzz' is not in the word list"));
        assert!(out.contains("Invalid guess, try again. too long"));
        assert_eq!(session.round().map(|r| r.guesses_used()), Some(0));
    }

    #[test]
    fn losing_round_reveals_word_and_penalizes() {
        let mut session = session_targeting(&["sheep", "slate"], "sheep");
        let script = format!("start\n{}n\nexit\n", "slate\n".repeat(6));
        let out = play(&mut session, &script, Preferences::default());
        assert!(out.contains("Game over! The word was 'sheep'. score: -5"));
        assert_eq!(session.score(), -5);
    }

    #[test]
    fn debug_mode_reveals_target() {
        let mut session = session(&["crane"]);
        let forced = Preferences {
            debug: true,
            ..Preferences::default()
        };
        let out = play(&mut session, "start\ncrane\nn\nexit\n", forced);
        assert!(out.contains("DEBUG: The word to guess is 'crane'"));
        assert!(out.contains("DEBUG: guess 1 of 6"));
        assert!(out.contains("DEBUG: locked: CRANE required:  excluded: "));
    }

    #[test]
    fn hard_mode_rejection_is_specific() {
        let mut session = session_targeting(&["sheep", "slate", "short", "cheer"], "sheep");
        let forced = Preferences {
            hard: true,
            ..Preferences::default()
        };
        let out = play(&mut session, "start\nslate\nshort\ncheer\n", forced);
        assert!(out.contains("hard mode: missing required letter(s): E"));
        assert!(out.contains("hard mode: locked position violated"));
        assert_eq!(session.round().map(|r| r.guesses_used()), Some(1));
    }

    #[test]
    fn modes_menu_toggles_and_rejects_unknown() {
        let mut session = session(&["crane"]);
        let out = play(
            &mut session,
            "modes\nhard\nwobbly\ncontrast mode\nback\nexit\n",
            Preferences::default(),
        );
        assert!(out.contains("hard mode: enabled"));
        assert!(out.contains("contrast mode: enabled"));
        assert!(out.contains("Invalid mode name."));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut session = session(&["crane"]);
        let out = play(&mut session, "start\n", Preferences::default());
        assert!(out.ends_with("Goodbye!\n"));
    }
}
