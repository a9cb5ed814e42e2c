//! # Connect Four
//!
//! A two-player Connect Four game: a rules engine with gravity placement and
//! piece-anchored win detection, played in a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, rules engine, turn state machine
//! - [`ui`]: Terminal UI: game view, keyboard and mouse input
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File-backed tracing setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
