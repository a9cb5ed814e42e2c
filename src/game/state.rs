use tracing::info;

use super::{Board, Player, Position, RulesEngine, DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    GameOver { winner: Player },
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Piece placed, game continues with `next` to move.
    Placed { position: Position, next: Player },
    /// Piece placed and completed a line.
    Won { position: Position, winner: Player },
}

impl MoveOutcome {
    pub fn position(&self) -> Position {
        match *self {
            MoveOutcome::Placed { position, .. } | MoveOutcome::Won { position, .. } => position,
        }
    }
}

/// Turn-by-turn state machine driving a [`RulesEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    engine: RulesEngine,
    first: Player,
    phase: Phase,
}

impl Game {
    /// Create initial game state
    pub fn new(rows: usize, cols: usize, first: Player) -> Self {
        Game {
            engine: RulesEngine::with_size(rows, cols, first),
            first,
            phase: Phase::AwaitingMove,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            Phase::AwaitingMove => None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.engine.turn()
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// Play the current player's piece into `column`.
    ///
    /// A rejected move leaves the game untouched and the same player to move.
    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if let Phase::GameOver { winner } = self.phase {
            return Err(MoveError::GameOver { winner });
        }

        let mover = self.engine.turn();
        let position = self.engine.place_piece(column)?;

        if self.engine.check_win(position) {
            self.phase = Phase::GameOver { winner: mover };
            return Ok(MoveOutcome::Won {
                position,
                winner: mover,
            });
        }

        self.engine.switch_turn();
        Ok(MoveOutcome::Placed {
            position,
            next: self.engine.turn(),
        })
    }

    /// Start over on an empty board of the same size.
    pub fn reset(&mut self) {
        let (rows, cols) = (self.board().rows(), self.board().cols());
        *self = Game::new(rows, cols, self.first);
        info!("new game started");
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(DEFAULT_ROWS, DEFAULT_COLS, Player::default())
    }
}
