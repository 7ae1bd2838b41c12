//! # Connect Four
//!
//! Two-player Connect Four on the fixed 6x7 grid, played from the terminal
//! either as a line-oriented prompt session or in a full-screen Ratatui view.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, turn controller
//! - [`session`] — Prompt-driven session loop and text rendering of the grid
//! - [`ui`] — Full-screen terminal front end
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod session;
pub mod ui;
