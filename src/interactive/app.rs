//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{RoundOutcome, Session};
use crate::settings::{Mode, PreferenceStore, Preferences};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<R: Rng> {
    pub session: Session<R>,
    pub prefs: Preferences,
    pub forced: Preferences,
    pub store: PreferenceStore,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>, store: PreferenceStore, forced: Preferences) -> Self {
        let prefs = store.load();
        let mut app = Self {
            session,
            prefs,
            forced,
            store,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Guess the 5 letter word in 6 tries.",
            MessageStyle::Info,
        );
        app.new_round();
        app
    }

    #[must_use]
    pub fn enabled(&self, mode: Mode) -> bool {
        self.prefs.get(mode) || self.forced.get(mode)
    }

    /// The current round is finished
    #[must_use]
    pub fn round_over(&self) -> bool {
        self.session.round().is_some_and(crate::game::Round::is_over)
    }

    pub fn new_round(&mut self) {
        if let Some(RoundOutcome::Lost {
            target,
            score_delta,
        }) = self.session.abandon_round()
        {
            self.add_message(
                &format!(
                    "Round abandoned. The word was {} ({score_delta:+})",
                    target.text().to_uppercase()
                ),
                MessageStyle::Error,
            );
        }
        let hard_mode = self.enabled(Mode::Hard);
        let target = self.session.start_round(hard_mode).target().clone();
        self.input_buffer.clear();
        if hard_mode {
            self.add_message("New round (hard mode).", MessageStyle::Info);
        } else {
            self.add_message("New round.", MessageStyle::Info);
        }
        if self.enabled(Mode::Debug) {
            self.add_message(
                &format!("DEBUG: the word is '{}'", target.text().to_uppercase()),
                MessageStyle::Info,
            );
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        match self.session.submit(&guess) {
            Err(err) => {
                self.add_message(&format!("Invalid guess: {err}"), MessageStyle::Error);
                // Keep what was typed so it can be edited
                self.input_buffer = guess;
            }
            Ok(turn) => match turn.outcome {
                None => {}
                Some(RoundOutcome::Won { guesses, score_delta }) => {
                    let celebration = match guesses {
                        1 => "HOLE IN ONE!",
                        2 => "Magnificent!",
                        3 => "Splendid!",
                        4 => "Great!",
                        5 => "Nice work!",
                        _ => "Phew!",
                    };
                    self.add_message(
                        &format!("{celebration} Solved in {guesses} ({score_delta:+})"),
                        MessageStyle::Success,
                    );
                    self.add_message("Press Enter for a new round.", MessageStyle::Info);
                }
                Some(RoundOutcome::Lost {
                    target,
                    score_delta,
                }) => {
                    self.add_message(
                        &format!(
                            "Game over! The word was {} ({score_delta:+})",
                            target.text().to_uppercase()
                        ),
                        MessageStyle::Error,
                    );
                    self.add_message("Press Enter for a new round.", MessageStyle::Info);
                }
            },
        }
    }

    /// Toggle a mode and persist it; hard mode applies from the next round
    pub fn toggle_mode(&mut self, mode: Mode) {
        self.prefs.toggle(mode);
        if let Err(err) = self.store.save(&self.prefs) {
            warn!("could not save preferences: {err:#}");
            self.add_message("Could not save preferences", MessageStyle::Error);
        }
        let state = if self.enabled(mode) { "on" } else { "off" };
        let suffix = if mode == Mode::Hard && !self.round_over() {
            " from the next round"
        } else {
            ""
        };
        self.add_message(&format!("{mode} {state}{suffix}"), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    farewell(res)
}

/// Print the final score, or pass the error on once the terminal is restored
fn farewell(res: Result<i32>) -> Result<()> {
    res.map(|score| println!("Thanks for playing! score: {score}"))
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<i32> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('n') if ctrl => app.new_round(),
                KeyCode::Tab => app.toggle_mode(Mode::Hard),
                KeyCode::F(2) => app.toggle_mode(Mode::Contrast),
                KeyCode::F(3) => app.toggle_mode(Mode::Debug),
                KeyCode::Enter if app.round_over() => app.new_round(),
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) if !app.round_over() => app.push_char(c),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(words: &[&str]) -> App<StdRng> {
        let session = Session::new(
            WordStore::from_words(words.iter().copied()).unwrap(),
            StdRng::seed_from_u64(5),
        );
        App::new(session, PreferenceStore::in_memory(), Preferences::default())
    }

    fn type_word(app: &mut App<StdRng>, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn input_is_limited_to_five_letters() {
        let mut app = app(&["crane"]);
        type_word(&mut app, "Cr4anesx");
        assert_eq!(app.input_buffer, "crane");
    }

    #[test]
    fn winning_submission_ends_round() {
        let mut app = app(&["crane"]);
        type_word(&mut app, "crane");
        app.submit();
        assert!(app.round_over());
        assert_eq!(app.session.score(), 7);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn rejected_submission_keeps_input() {
        let mut app = app(&["crane"]);
        type_word(&mut app, "zzzzz");
        app.submit();
        assert_eq!(app.input_buffer, "zzzzz");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("not in the word list"));
    }

    #[test]
    fn new_round_resets_board() {
        let mut app = app(&["crane"]);
        type_word(&mut app, "crane");
        app.submit();
        app.new_round();
        assert!(!app.round_over());
        assert_eq!(app.session.round().map(|r| r.guesses_used()), Some(0));
    }

    #[test]
    fn new_round_mid_game_charges_the_loss() {
        let mut app = app(&["crane", "slate"]);
        let target = app.session.round().unwrap().target().text().to_string();
        let miss = if target == "crane" { "slate" } else { "crane" };
        type_word(&mut app, miss);
        app.submit();

        app.new_round();
        assert_eq!(app.session.score(), -crate::game::LOSS_PENALTY);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.starts_with("Round abandoned"))
        );
    }

    #[test]
    fn toggling_hard_mode_applies_next_round() {
        let mut app = app(&["crane"]);
        app.toggle_mode(Mode::Hard);
        assert!(app.enabled(Mode::Hard));
        assert_eq!(app.session.round().map(|r| r.hard_mode()), Some(false));
        app.new_round();
        assert_eq!(app.session.round().map(|r| r.hard_mode()), Some(true));
    }

    #[test]
    fn event_loop_failure_is_returned() {
        assert!(farewell(Ok(3)).is_ok());
        let err = farewell(Err(anyhow::anyhow!("terminal went away"))).unwrap_err();
        assert_eq!(err.to_string(), "terminal went away");
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app(&["crane"]);
        for i in 0..20 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "msg 19");
    }
}
