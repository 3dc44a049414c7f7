//! TUI rendering with ratatui
//!
//! Tile grid, on-screen keyboard, toasts, the game-over dialog, and the help
//! and settings screens.

use super::app::{App, Screen};
use crate::core::{Classification, LetterState, WORD_LEN};
use crate::game::{GameStatus, MAX_TRIES};
use crate::output::formatters::{KEYBOARD_ROWS, classification_rgb, letter_state_rgb};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use std::rc::Rc;

const COLOR_BLANK: Color = Color::Rgb(0x12, 0x12, 0x13);
const COLOR_EMPTY_BORDER: Color = Color::Rgb(0x3a, 0x3a, 0x3c);
const COLOR_BORDER_HIGHLIGHT: Color = Color::Rgb(0x56, 0x57, 0x58);
const COLOR_TEXT: Color = Color::Rgb(0xd7, 0xda, 0xdc);

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const GAP: u16 = 1;

const GRID_WIDTH: u16 = WORD_LEN as u16 * (TILE_WIDTH + GAP) - GAP;
const GRID_HEIGHT: u16 = MAX_TRIES as u16 * TILE_HEIGHT;
const KEYBOARD_HEIGHT: u16 = KEYBOARD_ROWS.len() as u16 * TILE_HEIGHT;

/// A key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCap {
    Letter(char),
    Enter,
    Backspace,
}

impl KeyCap {
    fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    const fn width(self) -> u16 {
        match self {
            Self::Enter => WIDE_KEY_WIDTH,
            Self::Letter(_) | Self::Backspace => KEY_WIDTH,
        }
    }

    /// The key press this key stands for
    #[must_use]
    pub const fn key_code(self) -> KeyCode {
        match self {
            Self::Letter(c) => KeyCode::Char(c),
            Self::Enter => KeyCode::Enter,
            Self::Backspace => KeyCode::Backspace,
        }
    }
}

fn main_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(1),               // Toast
            Constraint::Min(GRID_HEIGHT),        // Grid
            Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
            Constraint::Length(1),               // Key hints
        ])
        .split(area)
}

/// The on-screen key under a terminal cell, for a UI drawn into `area`
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<KeyCap> {
    let chunks = main_layout(area);
    keyboard_layout(chunks[3])
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(key, _)| key)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = main_layout(f.area());

    render_header(f, chunks[0]);

    match app.screen {
        Screen::Playing => {
            render_toast(f, app, chunks[1]);
            render_grid(f, app, chunks[2]);
            render_keyboard(f, app, chunks[3]);
            if app.dialog_visible() {
                let area = f.area();
                render_game_over(f, app, area);
            }
        }
        Screen::Help => render_help(f, body_area(&chunks)),
        Screen::Settings => render_settings(f, app, body_area(&chunks)),
    }

    render_hints(f, app, chunks[4]);
}

/// Everything between the header and the key hints
fn body_area(chunks: &[Rect]) -> Rect {
    chunks[1].union(chunks[3])
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height).intersection(area)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_EMPTY_BORDER)),
        );
    f.render_widget(header, area);
}

fn render_toast(f: &mut Frame, app: &App, area: Rect) {
    let Some(toast) = &app.toast else {
        return;
    };

    let width = (toast.text.len() as u16 + 2).min(area.width);
    let paragraph = Paragraph::new(toast.text.as_str())
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(paragraph, centered(area, width, 1));
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = centered(area, GRID_WIDTH, GRID_HEIGHT);
    let game = &app.game;

    for row in 0..MAX_TRIES {
        for col in 0..WORD_LEN {
            let tile_area = Rect::new(
                grid.x + col as u16 * (TILE_WIDTH + GAP),
                grid.y + row as u16 * TILE_HEIGHT,
                TILE_WIDTH,
                TILE_HEIGHT,
            )
            .intersection(grid);
            if tile_area.is_empty() {
                continue;
            }

            let (letter, state) = if let Some(record) = game.guesses().get(row) {
                let letter = char::from(record.word.char_at(col));
                (Some(letter), TileState::Evaluated(record.feedback.classifications()[col]))
            } else if row == game.row() {
                let letter = game.current_guess().chars().nth(col);
                (letter, if letter.is_some() { TileState::Pending } else { TileState::Empty })
            } else {
                (None, TileState::Empty)
            };

            render_tile(f, tile_area, letter, state);
        }
    }
}

#[derive(Clone, Copy)]
enum TileState {
    Empty,
    Pending,
    Evaluated(Classification),
}

fn render_tile(f: &mut Frame, area: Rect, letter: Option<char>, state: TileState) {
    let (border, background) = match state {
        TileState::Empty => (COLOR_EMPTY_BORDER, COLOR_BLANK),
        TileState::Pending => (COLOR_BORDER_HIGHLIGHT, COLOR_BLANK),
        TileState::Evaluated(c) => {
            let (r, g, b) = classification_rgb(c);
            let color = Color::Rgb(r, g, b);
            (color, color)
        }
    };

    let text = letter.map(String::from).unwrap_or_default();
    let tile = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(COLOR_TEXT)
                .bg(background)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(tile, area);
}

/// Every visible key with the cells it covers
fn keyboard_layout(area: Rect) -> Vec<(KeyCap, Rect)> {
    let mut layout = Vec::new();

    for (i, letters) in KEYBOARD_ROWS.iter().enumerate() {
        // The last row carries ENTER on the left and backspace on the right
        let last = i == KEYBOARD_ROWS.len() - 1;
        let mut keys: Vec<KeyCap> = Vec::new();
        if last {
            keys.push(KeyCap::Enter);
        }
        keys.extend(letters.chars().map(KeyCap::Letter));
        if last {
            keys.push(KeyCap::Backspace);
        }

        let row_width: u16 = keys.iter().map(|k| k.width() + GAP).sum::<u16>() - GAP;
        let row_area = Rect::new(area.x, area.y + i as u16 * TILE_HEIGHT, area.width, TILE_HEIGHT)
            .intersection(area);
        let mut x = centered(row_area, row_width, TILE_HEIGHT).x;

        for key in keys {
            let key_area =
                Rect::new(x, row_area.y, key.width(), TILE_HEIGHT).intersection(row_area);
            x += key.width() + GAP;
            if !key_area.is_empty() {
                layout.push((key, key_area));
            }
        }
    }
    layout
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();

    for (key, key_area) in keyboard_layout(area) {
        let state = match key {
            KeyCap::Letter(c) => keyboard.get(c),
            KeyCap::Enter | KeyCap::Backspace => LetterState::Unknown,
        };
        render_key(f, key_area, &key.label(), state);
    }
}

fn render_key(f: &mut Frame, area: Rect, label: &str, state: LetterState) {
    let (border, background) = match letter_state_rgb(state) {
        Some((r, g, b)) => (Color::Rgb(r, g, b), Color::Rgb(r, g, b)),
        None => (COLOR_EMPTY_BORDER, COLOR_BLANK),
    };

    let key = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(COLOR_TEXT).bg(background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(key, area);
}

fn render_game_over(f: &mut Frame, app: &App, area: Rect) {
    let status = app.game.status();
    let (Some(headline), Some(prompt)) = (status.headline(), status.prompt(app.game.answer()))
    else {
        return;
    };

    let title_color = if matches!(status, GameStatus::Won(_)) {
        Color::Green
    } else {
        Color::Red
    };

    let mut lines: Vec<Line> = prompt.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "[y] Hell Yeah!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            "[n] Nah",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let dialog_area = centered(area, 40, lines.len() as u16 + 4);
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(COLOR_EMPTY_BORDER))
        .block(
            Block::default()
                .title(Line::from(format!(" {headline} ")).centered())
                .title_style(Style::default().fg(title_color).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .padding(Padding::vertical(1)),
        );

    f.render_widget(Clear, dialog_area);
    f.render_widget(dialog, dialog_area);
}

fn example_row(word: &str, highlight: usize, classification: Classification) -> Line<'static> {
    let spans = word
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let style = if i == highlight {
                let (r, g, b) = classification_rgb(classification);
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(r, g, b))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD)
            };
            Span::styled(format!(" {c} "), style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn render_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "HOW TO PLAY",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Guess the word in {MAX_TRIES} tries.")),
        Line::from(format!("Each guess must be a valid {WORD_LEN}-letter word.")),
        Line::from("The color of the tiles will change to show how close your guess was."),
        Line::from(""),
        example_row("WEARY", 0, Classification::Correct),
        Line::from("W is in the word and in the correct spot."),
        Line::from(""),
        example_row("PILLS", 1, Classification::Present),
        Line::from("I is in the word but in the wrong spot."),
        Line::from(""),
        example_row("VAGUE", 3, Classification::Absent),
        Line::from("U is not in the word in any spot."),
        Line::from(""),
        Line::from("Type letters, Backspace to delete, Enter to submit."),
    ];

    let help = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(help, area);
}

fn render_settings(f: &mut Frame, app: &App, area: Rect) {
    let settings = &app.settings;
    let seed = settings
        .seed
        .map_or_else(|| "random".to_string(), |s| s.to_string());

    let lines = vec![
        Line::from(Span::styled(
            "SETTINGS",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Answers:      {} ({} words)",
            settings.answers_source, settings.answer_count
        )),
        Line::from(format!(
            "Guesses:      {} ({} accepted)",
            settings.allowed_source, settings.accepted_count
        )),
        Line::from(format!("Word length:  {WORD_LEN}")),
        Line::from(format!("Tries:        {MAX_TRIES}")),
        Line::from(format!("Seed:         {seed}")),
        Line::from(format!("Games played: {}", app.games_started)),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.screen {
        Screen::Help | Screen::Settings => "Esc: Back",
        Screen::Playing if app.dialog_visible() => "y: New Game | n: Quit | ?: Help",
        Screen::Playing => "Enter: Submit | Backspace: Delete | ?: Help | F2: Settings | Esc: Quit",
    };

    let hints = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, area);
}
