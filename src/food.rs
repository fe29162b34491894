use std::collections::HashSet;

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::geometry::{Board, Cell};

/// Places food on a uniformly random free cell.
#[derive(Debug)]
pub struct FoodSpawner<R = ThreadRng> {
    rng: R,
}

impl FoodSpawner<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for FoodSpawner<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FoodSpawner<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Samples cells of `board` until one is not in `occupied`.
    ///
    /// # Panics
    ///
    /// Panics if `occupied` covers the whole board, since no free cell exists.
    pub fn spawn(&mut self, occupied: &HashSet<Cell>, board: Board) -> Cell {
        let free = board
            .cell_count()
            .saturating_sub(occupied.iter().filter(|c| board.contains(**c)).count());
        if free == 0 {
            tracing::error!(cols = board.cols, rows = board.rows, "no free cell left for food");
            panic!("cannot place food on a full {}x{} board", board.cols, board.rows);
        }

        loop {
            let x = self.rng.random_range(0..board.cols);
            let y = self.rng.random_range(0..board.rows);
            let cell = Cell::new(x, y);
            if !occupied.contains(&cell) {
                tracing::debug!(x, y, "food spawned");
                return cell;
            }
        }
    }
}
