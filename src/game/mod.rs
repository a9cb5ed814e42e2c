//! Core Connect Four game logic: board, players, the rules engine, and the
//! turn state machine built on top of it.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, Position, CONNECT, DEFAULT_COLS, DEFAULT_ROWS};
pub use engine::RulesEngine;
pub use player::Player;
pub use state::{Game, MoveOutcome, Phase};

pub use crate::error::MoveError;
