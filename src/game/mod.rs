//! Core simulation for the snake game.
//!
//! Everything in here is free of I/O, timers and rendering: the engine owns
//! the game state and advances it one tick at a time when told to. Timing,
//! key capture and drawing are collaborators layered on top.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod state;

pub use config::GameConfig;
pub use direction::Direction;
pub use engine::SimEngine;
pub use grid::Grid;
pub use state::{GameState, Position, Snake};
