mod board;
mod bot;
mod game_state;
mod rng;
mod rules;
mod types;

pub use board::Board;
pub use bot::choose_random_move;
pub use game_state::GameState;
pub use rng::GameRng;
pub use rules::{WINNING_TRIPLES, check_win, evaluate, winning_triple};
pub use types::{CELL_COUNT, GameStatus, Mark};
