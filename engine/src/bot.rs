use crate::board::Board;
use crate::rng::GameRng;

/// Uniformly random choice among the empty cells. No lookahead.
pub fn choose_random_move(board: &Board, rng: &mut GameRng) -> Option<usize> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return None;
    }
    let index = rng.random_range(0..moves.len());
    Some(moves[index])
}
