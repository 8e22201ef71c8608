//! # Connect Four
//!
//! A two-player Connect Four game for the terminal. The rules live in a
//! headless engine that knows nothing about rendering; the Ratatui front
//! end forwards column choices into it and displays whatever comes back.
//!
//! ## Modules
//!
//! - [`game`] - Core game logic: board, players, and the move state machine
//! - [`ui`] - Terminal UI: start screen, game view, and the event loop
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types for configuration handling

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
