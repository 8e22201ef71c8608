use crate::config::AppConfig;
use crate::game::{Cell, GameState, GameStatus, MoveError, COLS, ROWS};
use crate::ui::name_entry::{NameEntry, PlayerNames};
use crate::ui::{game_view, start_view};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

/// Which screen the application is showing.
enum Screen {
    Start(NameEntry),
    Playing(GameSession),
}

/// Main application: owns the current screen and drives the event loop.
pub struct App {
    screen: Screen,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        info!(tick_rate_ms = config.ui.tick_rate_ms, "app starting");

        let one = config.players.one.trim();
        let two = config.players.two.trim();

        // Skip the start screen when both names are already configured.
        let screen = if !one.is_empty() && !two.is_empty() {
            Screen::Playing(GameSession::new(PlayerNames {
                one: one.to_string(),
                two: two.to_string(),
            }))
        } else {
            Screen::Start(NameEntry::new(one, two))
        };

        App {
            screen,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            should_quit: false,
        }
    }

    /// Run the main loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if self.should_quit {
                break;
            }
            self.handle_events()?;
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        match &self.screen {
            Screen::Start(entry) => start_view::render(frame, entry),
            Screen::Playing(session) => session.render(frame),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Windows terminals report both press and release events.
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            Screen::Start(entry) => {
                if key.code == KeyCode::Esc {
                    self.should_quit = true;
                    return;
                }
                if let Some(names) = entry.handle_key(key) {
                    self.screen = Screen::Playing(GameSession::new(names));
                }
            }
            Screen::Playing(session) => {
                if session.handle_key(key) {
                    self.should_quit = true;
                }
            }
        }
    }
}

/// One sitting at the board: the engine state plus everything the game
/// screen needs to draw itself.
struct GameSession {
    names: PlayerNames,
    game: GameState,
    selected_column: usize,
    message: Option<String>,
    show_rules: bool,
}

impl GameSession {
    fn new(names: PlayerNames) -> Self {
        info!(player_one = %names.one, player_two = %names.two, "game started");
        GameSession {
            names,
            game: GameState::new(),
            selected_column: COLS / 2, // start in the middle
            message: None,
            show_rules: false,
        }
    }

    fn render(&self, frame: &mut Frame) {
        game_view::render(
            frame,
            &self.game,
            &self.names,
            self.selected_column,
            &self.message,
            self.show_rules,
        );
    }

    /// Handle a key press on the game screen. Returns true when the user
    /// asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.show_rules {
            // The popup is modal: the next key closes it and is consumed.
            self.show_rules = false;
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.drop_disc(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('h') => self.show_rules = true,
            _ => {}
        }
        false
    }

    fn drop_disc(&mut self) {
        if self.game.is_terminal() {
            warn!("move rejected: the game is already over");
            self.message = Some("Game over! Press 'r' to play again.".to_string());
            return;
        }

        let player = self.game.current_player();
        let column = self.selected_column;
        // Where a successful drop will land: the lowest empty row.
        let row = (0..ROWS).find(|&r| self.game.board().get(r, column) == Cell::Empty);

        match self.game.apply_move_mut(column) {
            Ok(GameStatus::Won(winner)) => {
                info!(?winner, column, row, "game over: four in a row");
                self.message = Some(format!("{} wins !", self.names.name_of(winner)));
            }
            Ok(GameStatus::Draw) => {
                info!(column, row, "game over: board full with no winner");
                self.message = Some("We have a draw !".to_string());
            }
            Ok(GameStatus::InProgress) => {
                info!(?player, column, row, "disc dropped");
                self.message = None;
            }
            Err(MoveError::ColumnFull(_)) => {
                warn!(column, "move rejected: column full");
                self.message = Some("Column is full! Choose another one.".to_string());
            }
            Err(err) => {
                // The selector is clamped to the board and the terminal
                // state is gated above, so this arm should stay quiet.
                warn!(column, "move rejected: {err}");
                self.message = Some(err.to_string());
            }
        }
    }

    fn restart(&mut self) {
        info!("board reset");
        self.game = GameState::new();
        self.selected_column = COLS / 2;
        self.message = Some("New game started!".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> GameSession {
        GameSession::new(PlayerNames {
            one: "Alice".to_string(),
            two: "Bob".to_string(),
        })
    }

    fn drop_in(session: &mut GameSession, column: usize) {
        session.selected_column = column;
        session.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn test_selector_stays_on_the_board() {
        let mut s = session();
        for _ in 0..10 {
            s.handle_key(key(KeyCode::Right));
        }
        assert_eq!(s.selected_column, COLS - 1);
        for _ in 0..10 {
            s.handle_key(key(KeyCode::Left));
        }
        assert_eq!(s.selected_column, 0);
    }

    #[test]
    fn test_winning_drop_announces_winner_by_name() {
        let mut s = session();
        // Alice stacks column 3 while Bob answers in column 0.
        for _ in 0..3 {
            drop_in(&mut s, 3);
            drop_in(&mut s, 0);
        }
        drop_in(&mut s, 3);

        assert_eq!(s.game.status(), GameStatus::Won(crate::game::Player::One));
        assert_eq!(s.message.as_deref(), Some("Alice wins !"));
    }

    #[test]
    fn test_drop_after_game_over_shows_restart_hint() {
        let mut s = session();
        for _ in 0..3 {
            drop_in(&mut s, 3);
            drop_in(&mut s, 0);
        }
        drop_in(&mut s, 3);
        assert!(s.game.is_terminal());

        drop_in(&mut s, 5);
        assert_eq!(
            s.message.as_deref(),
            Some("Game over! Press 'r' to play again.")
        );
        // The extra press must not touch the board.
        assert_eq!(s.game.status(), GameStatus::Won(crate::game::Player::One));
    }

    #[test]
    fn test_full_column_prompts_for_another() {
        let mut s = session();
        // Six alternating drops fill column 2 without a vertical run.
        for _ in 0..6 {
            drop_in(&mut s, 2);
        }
        drop_in(&mut s, 2);
        assert_eq!(
            s.message.as_deref(),
            Some("Column is full! Choose another one.")
        );
    }

    #[test]
    fn test_restart_clears_the_board() {
        let mut s = session();
        for _ in 0..3 {
            drop_in(&mut s, 3);
            drop_in(&mut s, 0);
        }
        drop_in(&mut s, 3);
        assert!(s.game.is_terminal());

        s.handle_key(key(KeyCode::Char('r')));
        assert!(!s.game.is_terminal());
        assert!(s.game.is_column_playable(3));
        assert_eq!(s.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_rules_popup_swallows_game_keys() {
        let mut s = session();
        s.handle_key(key(KeyCode::Char('h')));
        assert!(s.show_rules);

        // A drop attempt while the popup is open closes it without
        // reaching the board.
        s.handle_key(key(KeyCode::Char(' ')));
        assert!(!s.show_rules);
        assert_eq!(s.game.board().get(0, s.selected_column), Cell::Empty);

        // Quit keys are consumed by the popup too.
        s.handle_key(key(KeyCode::Char('h')));
        assert!(!s.handle_key(key(KeyCode::Esc)));
        assert!(!s.show_rules);
    }

    #[test]
    fn test_quit_keys_request_exit() {
        let mut s = session();
        assert!(s.handle_key(key(KeyCode::Char('q'))));
        let mut s = session();
        assert!(s.handle_key(key(KeyCode::Esc)));
        let mut s = session();
        assert!(!s.handle_key(key(KeyCode::Left)));
    }

    #[test]
    fn test_app_skips_start_screen_when_names_configured() {
        let mut config = AppConfig::default();
        config.players.one = "Alice".to_string();
        config.players.two = "Bob".to_string();

        let app = App::new(&config);
        assert!(matches!(app.screen, Screen::Playing(_)));
    }

    #[test]
    fn test_app_asks_for_missing_names() {
        let mut config = AppConfig::default();
        config.players.one = "Alice".to_string();

        let app = App::new(&config);
        assert!(matches!(app.screen, Screen::Start(_)));
    }
}
