use crate::board::Board;
use crate::types::{GameStatus, Mark};

/// The 8 winning triples, evaluated in order: rows, columns, diagonals.
pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    winning_triple(board).map(|(_, mark)| mark)
}

/// First uniformly marked triple, with its mark.
pub fn winning_triple(board: &Board) -> Option<([usize; 3], Mark)> {
    for triple in WINNING_TRIPLES {
        let [a, b, c] = triple;
        let mark = board.cell(a);
        if mark != Mark::Empty && board.cell(b) == mark && board.cell(c) == mark {
            return Some((triple, mark));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner_mark) = check_win(board) {
        return match winner_mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.is_full() {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}
