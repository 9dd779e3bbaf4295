use crate::types::{CELL_COUNT, Mark};

/// 3x3 board stored row-major: cells 0,1,2 are the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index] == Mark::Empty
    }

    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
