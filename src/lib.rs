//! Classic single-player Snake: a tick-driven game state machine with a thin
//! macroquad front end.

pub mod config;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod logging;
pub mod render;
pub mod scheduler;
pub mod snake;

pub use config::{ConfigError, GameConfig};
pub use food::FoodSpawner;
pub use game::{Command, Difficulty, GameMode, GameStateMachine, MAX_TICK_RATE, Snapshot};
pub use geometry::{Board, Cell, Direction, GridGeometry};
pub use scheduler::{FrameTimer, RecordingScheduler, Scheduler, tick_period};
pub use snake::{MoveResult, Snake};
