use crate::board::Board;
use crate::bot::choose_random_move;
use crate::rng::GameRng;
use crate::rules::evaluate;
use crate::types::{GameStatus, Mark};

/// The whole game: board, mover, derived status. X always starts.
///
/// Invalid input never signals an error; the move is silently ignored and
/// no state changes.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    turn: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Writes the current mover's mark into `cell`, recomputes the status
    /// and, while the game is still running, passes the turn. A no-op when
    /// the game is over, the index is out of range, or the cell is taken.
    pub fn apply_move(&mut self, cell: usize) {
        if self.status != GameStatus::InProgress {
            return;
        }
        if !self.board.is_valid_move(cell) {
            return;
        }

        self.board.set(cell, self.turn);
        self.last_move = Some(cell);
        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }
    }

    /// Plays O's turn with a uniformly random legal move. A no-op unless
    /// the game is running and it is actually O's turn.
    pub fn automated_move(&mut self, rng: &mut GameRng) {
        if self.status != GameStatus::InProgress || self.turn != Mark::O {
            return;
        }
        if let Some(cell) = choose_random_move(&self.board, rng) {
            self.apply_move(cell);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.turn.opponent() {
            self.turn = next;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
