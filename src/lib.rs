//! gridsnake - a grid-based snake game with a headless-testable core
//!
//! This library provides:
//! - Core simulation (game module): grid, state, and the tick engine
//! - Control surface (control module): the adapter collaborators talk to
//! - Terminal input translation (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - Execution modes (modes module): interactive TUI and a headless harness

pub mod control;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
