//! Core Connect Four game logic: board representation, player identity, and
//! the game state machine. Free of any UI concern so it can be driven and
//! tested headless.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DropError, COLS, ROWS};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveError};
