use tracing::{debug, info, warn};

use super::{Board, Player, Position};
use crate::error::MoveError;

/// Owns the grid and the turn, and enforces the placement rules.
///
/// The engine only provides primitives; sequencing them (place, check, then
/// switch) is up to the caller, see [`Game`](super::Game). Once
/// [`check_win`](Self::check_win) reports a win the engine records the winner
/// and refuses any further placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesEngine {
    board: Board,
    turn: Player,
    winner: Option<Player>,
}

impl RulesEngine {
    /// Standard 6x7 board, `first` to move
    pub fn new(first: Player) -> Self {
        Self::with_board(Board::new(), first)
    }

    pub fn with_size(rows: usize, cols: usize, first: Player) -> Self {
        Self::with_board(Board::with_size(rows, cols), first)
    }

    fn with_board(board: Board, first: Player) -> Self {
        RulesEngine {
            board,
            turn: first,
            winner: None,
        }
    }

    /// Read access for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player allowed to move next (or the winner, once decided)
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn is_column_playable(&self, col: usize) -> bool {
        self.board.is_column_playable(col)
    }

    /// Drop the current player's piece into `col`. Does not advance the turn.
    pub fn place_piece(&mut self, col: usize) -> Result<Position, MoveError> {
        if let Some(winner) = self.winner {
            warn!(col, winner = winner.name(), "placement after game was decided");
            return Err(MoveError::GameOver { winner });
        }

        match self.board.drop_piece(col, self.turn) {
            Ok(pos) => {
                debug!(
                    player = self.turn.name(),
                    row = pos.row,
                    col = pos.col,
                    "piece placed"
                );
                Ok(pos)
            }
            Err(err) => {
                warn!(col, %err, "placement rejected");
                Err(err)
            }
        }
    }

    /// Whether the piece at `pos` completes a line. A positive result records
    /// that piece's owner as the winner.
    pub fn check_win(&mut self, pos: Position) -> bool {
        if !self.board.check_win(pos) {
            return false;
        }
        if self.winner.is_none() {
            self.winner = self.board.cell(pos).and_then(|cell| cell.owner());
            if let Some(winner) = self.winner {
                info!(winner = winner.name(), row = pos.row, col = pos.col, "game won");
            }
        }
        true
    }

    /// Hand the move to the other player. Ignored once a winner is recorded.
    pub fn switch_turn(&mut self) {
        if self.winner.is_some() {
            return;
        }
        self.turn = self.turn.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_engine() {
        let engine = RulesEngine::new(Player::Red);
        assert_eq!(engine.turn(), Player::Red);
        assert_eq!(engine.winner(), None);
        assert!((0..7).all(|col| engine.is_column_playable(col)));
        assert!(!engine.is_column_playable(7));
    }

    #[test]
    fn test_place_piece_does_not_switch_turn() {
        let mut engine = RulesEngine::new(Player::Red);
        let pos = engine.place_piece(3).unwrap();
        assert_eq!(pos, Position::new(5, 3));
        assert_eq!(engine.board().get(5, 3), Cell::Occupied(Player::Red));
        assert_eq!(engine.turn(), Player::Red);

        engine.switch_turn();
        assert_eq!(engine.turn(), Player::Yellow);
        let pos = engine.place_piece(3).unwrap();
        assert_eq!(engine.board().get(pos.row, pos.col), Cell::Occupied(Player::Yellow));
    }

    #[test]
    fn test_full_column_rejected_without_mutation() {
        let mut engine = RulesEngine::new(Player::Yellow);
        for _ in 0..6 {
            engine.place_piece(0).unwrap();
        }
        let before = engine.clone();
        assert_eq!(engine.place_piece(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_invalid_column_rejected() {
        let mut engine = RulesEngine::with_size(6, 7, Player::Red);
        assert_eq!(
            engine.place_piece(12),
            Err(MoveError::InvalidColumn { col: 12, cols: 7 })
        );
    }

    #[test]
    fn test_win_is_recorded_and_locks_engine() {
        let mut engine = RulesEngine::new(Player::Red);
        let mut last = None;
        for col in 0..4 {
            last = Some(engine.place_piece(col).unwrap());
        }
        let pos = last.unwrap();
        assert!(engine.check_win(pos));
        assert_eq!(engine.winner(), Some(Player::Red));

        engine.switch_turn();
        assert_eq!(engine.turn(), Player::Red);

        let before = engine.clone();
        assert_eq!(
            engine.place_piece(5),
            Err(MoveError::GameOver {
                winner: Player::Red
            })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_check_win_false_keeps_game_open() {
        let mut engine = RulesEngine::new(Player::Red);
        let pos = engine.place_piece(0).unwrap();
        assert!(!engine.check_win(pos));
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_check_win_on_empty_cell() {
        let mut engine = RulesEngine::new(Player::Red);
        assert!(!engine.check_win(Position::new(5, 0)));
        assert_eq!(engine.winner(), None);
    }
}
