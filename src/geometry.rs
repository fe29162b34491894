use macroquad::math::Rect;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Distance from the bottom edge of the window to the score text baseline.
const SCORE_BAR_BASELINE_OFFSET: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`. May lie outside the board.
    pub fn step(self, direction: Direction) -> Cell {
        match direction {
            Direction::Up => Cell { x: self.x, y: self.y - 1 },
            Direction::Down => Cell { x: self.x, y: self.y + 1 },
            Direction::Left => Cell { x: self.x - 1, y: self.y },
            Direction::Right => Cell { x: self.x + 1, y: self.y },
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Playable area in grid units. The score bar is not part of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cols: i32,
    pub rows: i32,
}

impl Board {
    pub const fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.cols && cell.y < self.rows
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.cols.max(0) as usize) * (self.rows.max(0) as usize)
    }
}

/// Pixel layout of the window: a grid of square cells whose bottom row is
/// reserved for the score bar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGeometry {
    cell_size: i32,
    width: i32,
    height: i32,
    board: Board,
}

impl GridGeometry {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, ConfigError> {
        if cell_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "cell size must be positive, got {cell_size}"
            )));
        }
        let cols = width / cell_size;
        let total_rows = height / cell_size;
        // one row goes to the score bar
        let rows = total_rows - 1;
        if cols < 1 || rows < 1 {
            return Err(ConfigError::Invalid(format!(
                "window {width}x{height} cannot hold a board of {cell_size}px cells"
            )));
        }
        let board = Board::new(cols, rows);
        // the snake's start cell plus at least one cell for food
        if board.cell_count() < 2 {
            return Err(ConfigError::Invalid(format!(
                "window {width}x{height} leaves a {cols}x{rows} board, no room for food"
            )));
        }
        Ok(Self {
            cell_size,
            width,
            height,
            board,
        })
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Top-left pixel of `cell`.
    pub fn cell_to_pixel(&self, cell: Cell) -> (f32, f32) {
        (
            (cell.x * self.cell_size) as f32,
            (cell.y * self.cell_size) as f32,
        )
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let (x, y) = self.cell_to_pixel(cell);
        Rect::new(x, y, self.cell_size as f32, self.cell_size as f32)
    }

    pub fn score_bar_baseline(&self) -> f32 {
        self.height as f32 - SCORE_BAR_BASELINE_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_reserves_score_row() {
        let geometry = GridGeometry::new(600, 600, 25).unwrap();
        assert_eq!(geometry.board(), Board::new(24, 23));
    }

    #[test]
    fn rejects_window_without_playable_row() {
        assert!(GridGeometry::new(600, 25, 25).is_err());
        assert!(GridGeometry::new(600, 600, 0).is_err());
    }

    #[test]
    fn rejects_single_cell_board() {
        assert!(matches!(
            GridGeometry::new(25, 50, 25),
            Err(ConfigError::Invalid(_))
        ));
        assert_eq!(GridGeometry::new(50, 50, 25).unwrap().board(), Board::new(2, 1));
    }

    #[test]
    fn cell_pixels() {
        let geometry = GridGeometry::new(600, 600, 25).unwrap();
        assert_eq!(geometry.cell_to_pixel(Cell::new(3, 4)), (75.0, 100.0));
        assert_eq!(geometry.cell_rect(Cell::new(1, 0)), Rect::new(25.0, 0.0, 25.0, 25.0));
        // the last playable row sits just above the score bar
        assert_eq!(geometry.cell_to_pixel(Cell::new(0, 22)), (0.0, 550.0));
        assert!(geometry.score_bar_baseline() > 575.0);
    }

    #[test]
    fn board_bounds() {
        let board = Board::new(10, 10);
        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(9, 9)));
        assert!(!board.contains(Cell::new(10, 0)));
        assert!(!board.contains(Cell::new(0, -1)));
        assert_eq!(board.cell_count(), 100);
    }

    #[test]
    fn opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
    }
}
