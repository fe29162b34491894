use std::collections::HashSet;

use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::food::FoodSpawner;
use crate::geometry::{Board, Cell, Direction};
use crate::scheduler::{Scheduler, tick_period};
use crate::snake::{MoveResult, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Slug,
    Worm,
    Python,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Slug, Difficulty::Worm, Difficulty::Python];

    /// Ticks per second when a game starts.
    pub fn tick_rate(self) -> u32 {
        match self {
            Difficulty::Slug => 10,
            Difficulty::Worm => 20,
            Difficulty::Python => 30,
        }
    }

    pub fn score_multiplier(self) -> u32 {
        match self {
            Difficulty::Slug => 1,
            Difficulty::Worm => 2,
            Difficulty::Python => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Slug => "SLUG",
            Difficulty::Worm => "WORM",
            Difficulty::Python => "PYTHON",
        }
    }
}

/// The speed ramp never goes past the fastest difficulty.
pub const MAX_TICK_RATE: u32 = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Welcome,
    Playing,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SetDirection(Direction),
    SelectDifficulty(Difficulty),
    Restart,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub mode: GameMode,
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
    pub tick_rate: u32,
    pub board: Board,
}

pub struct GameStateMachine<S, R = ThreadRng> {
    mode: GameMode,
    board: Board,
    snake: Snake,
    food: Cell,
    score: u32,
    high_score: u32,
    new_high_score: bool,
    tick_rate: u32,
    score_multiplier: u32,
    spawner: FoodSpawner<R>,
    scheduler: S,
}

impl<S: Scheduler> GameStateMachine<S, ThreadRng> {
    pub fn new(board: Board, scheduler: S) -> Self {
        Self::with_rng(board, scheduler, rand::rng())
    }
}

impl<S: Scheduler, R: Rng> GameStateMachine<S, R> {
    pub fn with_rng(board: Board, scheduler: S, rng: R) -> Self {
        let mut spawner = FoodSpawner::with_rng(rng);
        let snake = Snake::new(board.center(), Direction::Right);
        let food = spawner.spawn(&HashSet::from([snake.head()]), board);
        let start = Difficulty::Worm;
        Self {
            mode: GameMode::Welcome,
            board,
            snake,
            food,
            score: 0,
            high_score: 0,
            new_high_score: false,
            tick_rate: start.tick_rate(),
            score_multiplier: start.score_multiplier(),
            spawner,
            scheduler,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::SetDirection(direction) => self.set_direction(direction),
            Command::SelectDifficulty(difficulty) => self.select_difficulty(difficulty),
            Command::Restart => self.restart(),
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.mode != GameMode::Welcome {
            trace!(?difficulty, mode = ?self.mode, "difficulty ignored");
            return;
        }
        self.tick_rate = difficulty.tick_rate();
        self.score_multiplier = difficulty.score_multiplier();
        self.reset_round();
        self.mode = GameMode::Playing;
        self.scheduler.set_period(tick_period(self.tick_rate));
        info!(?difficulty, tick_rate = self.tick_rate, "game started");
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.mode != GameMode::Playing {
            trace!(?direction, mode = ?self.mode, "direction ignored");
            return;
        }
        if !self.snake.steer(direction) {
            trace!(?direction, "reversal rejected");
        }
    }

    /// Runs one game step. Returns `None` when no game is in progress.
    pub fn tick(&mut self) -> Option<MoveResult> {
        if self.mode != GameMode::Playing {
            return None;
        }

        let result = self.snake.advance(self.food, self.board);
        match result {
            MoveResult::Collided => self.finish_round(),
            MoveResult::Grew => {
                self.score += self.score_multiplier;
                if self.snake.len() >= self.board.cell_count() {
                    info!(length = self.snake.len(), "board filled");
                    self.finish_round();
                    return Some(result);
                }
                let occupied: HashSet<Cell> = self.snake.body().copied().collect();
                self.food = self.spawner.spawn(&occupied, self.board);
                debug!(score = self.score, length = self.snake.len(), "food eaten");
                if self.tick_rate < MAX_TICK_RATE {
                    self.tick_rate += 1;
                    self.scheduler.set_period(tick_period(self.tick_rate));
                }
            }
            MoveResult::Advanced => {}
        }
        Some(result)
    }

    pub fn restart(&mut self) {
        if self.mode != GameMode::GameOver {
            trace!(mode = ?self.mode, "restart ignored");
            return;
        }
        self.reset_round();
        self.mode = GameMode::Welcome;
        info!(high_score = self.high_score, "back to welcome screen");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            snake: self.snake.body().copied().collect(),
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            new_high_score: self.new_high_score,
            tick_rate: self.tick_rate,
            board: self.board,
        }
    }

    fn reset_round(&mut self) {
        self.snake = Snake::new(self.board.center(), Direction::Right);
        self.food = self
            .spawner
            .spawn(&HashSet::from([self.snake.head()]), self.board);
        self.score = 0;
        self.new_high_score = false;
    }

    fn finish_round(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_high_score = true;
        }
        self.mode = GameMode::GameOver;
        info!(
            score = self.score,
            high_score = self.high_score,
            new_high_score = self.new_high_score,
            "game over"
        );
    }

    #[cfg(test)]
    fn place(&mut self, snake: Snake, food: Cell) {
        self.snake = snake;
        self.food = food;
    }

    #[cfg(test)]
    fn set_score(&mut self, score: u32, high_score: u32) {
        self.score = score;
        self.high_score = high_score;
    }
}
