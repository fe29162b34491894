use std::collections::VecDeque;

use crate::geometry::{Board, Cell, Direction};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Advanced,
    Grew,
    Collided,
}

/// Ordered snake body, head first. Never empty and never holds a cell twice.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    next_direction: Direction,
}

impl Snake {
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction,
            next_direction: direction,
        }
    }

    /// Builds a snake from explicit cells, head first. Returns `None` for an
    /// empty body or one with repeated cells.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        for (i, cell) in body.iter().enumerate() {
            if body.iter().skip(i + 1).any(|c| c == cell) {
                return None;
            }
        }
        Some(Self {
            body,
            direction,
            next_direction: direction,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    // pairs with `len` for clippy::len_without_is_empty
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.next_direction
    }

    /// Buffers `direction` for the next move unless it would reverse the
    /// current direction of travel. Returns whether the request was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.next_direction = direction;
        true
    }

    /// Applies the buffered direction and moves one cell.
    pub fn advance(&mut self, food: Cell, board: Board) -> MoveResult {
        self.direction = self.next_direction;
        self.move_to(self.direction, food, board)
    }

    pub fn move_to(&mut self, direction: Direction, food: Cell, board: Board) -> MoveResult {
        let new_head = self.head().step(direction);

        if !board.contains(new_head) {
            return MoveResult::Collided;
        }
        // the tail cell is vacated by this move, so running into it is fine
        let keep = self.body.len() - 1;
        if self.body.iter().take(keep).any(|c| *c == new_head) {
            return MoveResult::Collided;
        }

        self.body.push_front(new_head);
        if new_head == food {
            MoveResult::Grew
        } else {
            self.body.pop_back();
            MoveResult::Advanced
        }
    }
}
