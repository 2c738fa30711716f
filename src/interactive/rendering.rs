//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{MAX_GUESSES, Round};
use crate::settings::Mode;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Board
            Constraint::Length(3),  // Input
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_messages(f, app, side_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile colors for a letter status
fn tile_style(status: Option<LetterStatus>, contrast: bool) -> Style {
    let style = match status {
        None => Style::default().fg(Color::White),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        Some(LetterStatus::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
    };
    if contrast {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("CONSOLE WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn grid_lines(round: Option<&Round>, typing: &str, contrast: bool) -> Vec<Line<'static>> {
    let history = round.map(Round::history).unwrap_or_default();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in history {
        let spans: Vec<Span> = row
            .iter()
            .map(|lf| {
                Span::styled(
                    format!(" {} ", lf.char().to_ascii_uppercase()),
                    tile_style(Some(lf.status), contrast),
                )
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let in_progress = round.is_some_and(|r| !r.is_over());
    for i in history.len()..MAX_GUESSES {
        let letters: Vec<char> = if i == history.len() && in_progress {
            typing.chars().collect()
        } else {
            Vec::new()
        };
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .map(|pos| {
                let text = letters
                    .get(pos)
                    .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
                Span::styled(text, tile_style(None, contrast))
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_grid<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let lines = grid_lines(
        app.session.round(),
        &app.input_buffer,
        app.enabled(Mode::Contrast),
    );
    let title = app.session.round().map_or_else(
        || " Board ".to_string(),
        |round| format!(" Board ({} left) ", round.remaining()),
    );
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let contrast = app.enabled(Mode::Contrast);
    let lines: Vec<Line> = app
        .session
        .round()
        .map(|round| round.keyboard().rows())
        .unwrap_or_default()
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(c, status)| {
                        Span::styled(
                            format!(" {}", c.to_ascii_uppercase()),
                            tile_style(status, contrast),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, color) = if app.round_over() {
        (" Round over | Enter: new round | Esc: quit ", Color::Green)
    } else {
        (" Type your guess | Enter: submit | Esc: quit ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let score = app.session.score();
    let score_color = if score < 0 { Color::Red } else { Color::Green };
    let score_line = Line::from(vec![
        Span::raw("Score: "),
        Span::styled(score.to_string(), Style::default().fg(score_color)),
    ]);
    f.render_widget(
        Paragraph::new(score_line).alignment(Alignment::Center),
        chunks[0],
    );

    let hard = app.session.round().is_some_and(Round::hard_mode);
    let mode_text = format!(
        "Hard: {} | Won {}/{}",
        if hard { "on" } else { "off" },
        app.session.rounds_won(),
        app.session.rounds_played()
    );
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Tab: hard mode | F2: contrast | F3: debug | Ctrl-N: new round")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordStore;

    #[test]
    fn grid_shows_typing_on_next_row() {
        let words = WordStore::from_words(["crane", "slate"]).unwrap();
        let mut round = Round::new(Word::new("crane").unwrap(), false);
        round.submit("slate", &words).unwrap();

        let lines = grid_lines(Some(&round), "cr", false);
        assert_eq!(lines.len(), MAX_GUESSES * 2);
        let typed: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(typed, " C  R  _  _  _ ");
    }

    #[test]
    fn tile_styles_differ_by_status() {
        let absent = tile_style(Some(LetterStatus::Absent), false);
        let correct = tile_style(Some(LetterStatus::Correct), false);
        assert_ne!(absent, correct);
        assert!(
            tile_style(None, true)
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }
}
