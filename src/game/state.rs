use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A position on the game board, in board units.
///
/// On-board positions have both coordinates in `[0, board_extent)` and
/// aligned to the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one cell away in the given direction
    pub fn stepped(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// The snake: head at the front, tail at the back.
///
/// A deque gives O(1) head-insert and tail-remove, the only two mutations
/// a tick performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Create a single-segment snake at the given position
    pub fn spawn(head: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(head);
        Self { body }
    }

    pub fn head(&self) -> Position {
        // Invariant: length >= 1 at all times
        *self.body.front().expect("snake is never empty")
    }

    /// Push a new head segment at the front
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Drop the tail segment, but never below a single segment
    pub fn pop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    /// Whether the head overlaps any other segment
    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments in order, head first
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }
}

/// Complete game state, owned by the simulation engine.
///
/// Collaborators receive clones of this, never a mutable handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub is_over: bool,
    pub is_paused: bool,
}

impl GameState {
    pub fn new(snake: Snake, direction: Direction, food: Position) -> Self {
        Self {
            snake,
            direction,
            food,
            score: 0,
            is_over: false,
            is_paused: false,
        }
    }
}
