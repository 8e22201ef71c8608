//! Terminal user interface built on Ratatui.
//!
//! The UI is split into a start screen where the players enter their
//! names and a game screen where the match is played. [`App`] owns the
//! event loop and decides which screen is live.

mod app;
mod game_view;
mod name_entry;
mod start_view;

pub use app::App;
