//! TUI application state and logic

use crate::game::{Game, GameStatus, MAX_TRIES};
use crate::wordlists::WordLists;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// How often the event loop wakes up to expire toasts
const TICK_RATE: Duration = Duration::from_millis(100);

/// Which screen is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Playing,
    Help,
    Settings,
}

/// A transient message shown above the grid
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub shown_at: Instant,
}

/// Effective configuration, shown on the settings screen
#[derive(Debug, Clone)]
pub struct Settings {
    pub answers_source: String,
    pub allowed_source: String,
    pub answer_count: usize,
    pub accepted_count: usize,
    pub seed: Option<u64>,
}

impl Settings {
    #[must_use]
    pub fn new(lists: &WordLists, seed: Option<u64>) -> Self {
        Self {
            answers_source: lists.answers_source().to_string(),
            allowed_source: lists.allowed_source().to_string(),
            answer_count: lists.answers().len(),
            accepted_count: lists.accepted_count(),
            seed,
        }
    }
}

/// Application state
pub struct App<'a> {
    pub lists: &'a WordLists,
    pub game: Game,
    pub screen: Screen,
    pub toast: Option<Toast>,
    pub settings: Settings,
    pub games_started: usize,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(lists: &'a WordLists, settings: Settings, mut rng: StdRng) -> Self {
        let game = Game::start(lists, &mut rng);

        Self {
            lists,
            game,
            screen: Screen::Playing,
            toast: None,
            settings,
            games_started: 1,
            should_quit: false,
            rng,
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::start(self.lists, &mut self.rng);
        self.games_started += 1;
        self.screen = Screen::Playing;
        self.toast = None;
    }

    pub fn show_toast(&mut self, text: &str) {
        self.toast = Some(Toast {
            text: text.to_string(),
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once it has been visible for `TOAST_DURATION`
    pub fn expire_toast(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|t| now.saturating_duration_since(t.shown_at) >= TOAST_DURATION)
        {
            self.toast = None;
        }
    }

    /// Whether the game-over dialog is showing
    #[must_use]
    pub fn dialog_visible(&self) -> bool {
        self.screen == Screen::Playing && self.game.status().is_over()
    }

    /// Dispatch one key press according to the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('q' | '?') => {
                    self.screen = Screen::Playing;
                }
                KeyCode::F(2) => self.screen = Screen::Settings,
                _ => {}
            },
            Screen::Settings => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::F(2) | KeyCode::Char('q') => {
                    self.screen = Screen::Playing;
                }
                KeyCode::F(1) | KeyCode::Char('?') => self.screen = Screen::Help,
                _ => {}
            },
            Screen::Playing if self.game.status().is_over() => self.handle_dialog_key(key),
            Screen::Playing => self.handle_playing_key(key),
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => self.new_game(),
            KeyCode::Esc | KeyCode::Char('n' | 'N') => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('?') => self.screen = Screen::Help,
            KeyCode::F(2) => self.screen = Screen::Settings,
            _ => {
                // Letters are locked until a new game starts
            }
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('?') => self.screen = Screen::Help,
            KeyCode::F(2) => self.screen = Screen::Settings,
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.game.enter_letter(c);
            }
            KeyCode::Backspace => {
                self.game.remove_letter();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.game.submit(self.lists) {
            Ok(submission) => {
                if let GameStatus::Won(attempts) = submission.status {
                    log::debug!("Solved in {attempts}/{MAX_TRIES}");
                }
            }
            Err(e) => self.show_toast(&e.to_string()),
        }
    }

    /// Left clicks on the on-screen keyboard act like the matching key press
    ///
    /// `area` is the full frame the UI was last drawn into.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || self.screen != Screen::Playing
            || self.dialog_visible()
        {
            return;
        }

        if let Some(key) = super::rendering::key_at(area, mouse.column, mouse.row) {
            self.handle_key(KeyEvent::new(key.key_code(), KeyModifiers::NONE));
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| super::rendering::ui(f, &app))?.area;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, area),
                _ => {}
            }
        }

        app.expire_toast(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterState, Word};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn lists() -> WordLists {
        WordLists::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["trace", "speed", "erase", "irate", "octet", "nymph"]),
        )
        .unwrap()
    }

    fn app(lists: &WordLists) -> App<'_> {
        App::new(
            lists,
            Settings::new(lists, Some(3)),
            StdRng::seed_from_u64(3),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_and_submit(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_builds_current_guess() {
        let lists = lists();
        let mut app = app(&lists);

        for c in "trx".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.game.current_guess(), "TR");
        assert_eq!(app.game.answer(), &Word::new("crane").unwrap());
    }

    #[test]
    fn short_guess_shows_toast_and_keeps_row() {
        let lists = lists();
        let mut app = app(&lists);

        type_and_submit(&mut app, "tra");

        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.text, "Not Enough Letters");
        assert_eq!(app.game.row(), 0);
    }

    #[test]
    fn unknown_word_shows_toast() {
        let lists = lists();
        let mut app = app(&lists);

        type_and_submit(&mut app, "zzzzz");
        assert_eq!(app.toast.as_ref().unwrap().text, "Not in word list");
    }

    #[test]
    fn toast_expires_after_duration() {
        let lists = lists();
        let mut app = app(&lists);
        app.show_toast("hello");
        let shown_at = app.toast.as_ref().unwrap().shown_at;

        app.expire_toast(shown_at + Duration::from_millis(500));
        assert!(app.toast.is_some());

        app.expire_toast(shown_at + TOAST_DURATION);
        assert!(app.toast.is_none());
    }

    #[test]
    fn accepted_guess_colours_keyboard() {
        let lists = lists();
        let mut app = app(&lists);

        type_and_submit(&mut app, "trace");
        assert_eq!(app.game.row(), 1);
        assert_eq!(app.game.keyboard().get('R'), LetterState::Correct);
        assert!(app.toast.is_none());
    }

    #[test]
    fn help_and_settings_screens_switch() {
        let lists = lists();
        let mut app = app(&lists);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.screen, Screen::Help);

        // Letters do not reach the game while help is shown
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.game.current_guess(), "");

        press(&mut app, KeyCode::F(2));
        assert_eq!(app.screen, Screen::Settings);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Playing);
        assert!(!app.should_quit);
    }

    #[test]
    fn win_shows_dialog_and_yes_starts_new_game() {
        let lists = lists();
        let mut app = app(&lists);

        type_and_submit(&mut app, "crane");
        assert_eq!(app.game.status(), GameStatus::Won(1));
        assert!(app.dialog_visible());

        // Letters are ignored while the dialog is up
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.game.current_guess(), "");

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.game.status(), GameStatus::InProgress);
        assert_eq!(app.game.row(), 0);
        assert_eq!(app.games_started, 2);
        assert!(!app.dialog_visible());
    }

    #[test]
    fn loss_then_no_quits() {
        let lists = lists();
        let mut app = app(&lists);

        for word in ["trace", "speed", "erase", "irate", "octet", "nymph"] {
            type_and_submit(&mut app, word);
        }
        assert_eq!(app.game.status(), GameStatus::Lost);
        assert!(app.dialog_visible());

        press(&mut app, KeyCode::Char('n'));
        assert!(app.should_quit);
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let lists = lists();
        let mut app = app(&lists);

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert_eq!(app.game.current_guess(), "");

        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game.current_guess(), "CR");
        assert!(!app.should_quit);
    }

    #[test]
    fn clicks_outside_keys_are_ignored() {
        let lists = lists();
        let mut app = app(&lists);
        let area = Rect::new(0, 0, 80, 40);
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        app.handle_mouse(click(0, 0), area);
        app.handle_mouse(click(40, 10), area);
        assert_eq!(app.game.current_guess(), "");
        assert!(app.toast.is_none());
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let lists = lists();
        let mut app = app(&lists);
        press(&mut app, KeyCode::F(1));

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn settings_snapshot_reflects_lists() {
        let lists = lists();
        let app = app(&lists);
        assert_eq!(app.settings.answer_count, 1);
        assert_eq!(app.settings.accepted_count, 7);
        assert_eq!(app.settings.answers_source, "built-in");
        assert_eq!(app.settings.seed, Some(3));
    }
}
