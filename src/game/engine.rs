use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::direction::Direction;
use super::grid::Grid;
use super::state::{GameState, Snake};

/// The simulation engine: sole owner and sole mutator of the game state.
///
/// Advancing the game is entirely the caller's job; the engine exposes one
/// step function and applies it only when the game is running. Timing,
/// rendering and input capture live outside.
pub struct SimEngine {
    grid: Grid,
    rng: ThreadRng,
    state: GameState,
}

impl SimEngine {
    /// Create an engine with a freshly initialized game
    pub fn new(config: &GameConfig) -> Self {
        let grid = Grid::new(config);
        let mut rng = rand::thread_rng();
        let state = Self::fresh_state(&grid, &mut rng);
        Self { grid, rng, state }
    }

    fn fresh_state(grid: &Grid, rng: &mut ThreadRng) -> GameState {
        let snake = Snake::spawn(grid.center());
        let food = grid.random_cell(rng);
        GameState::new(snake, Direction::Right, food)
    }

    /// Replace the game state with a new start condition
    pub fn reset(&mut self) -> &GameState {
        self.state = Self::fresh_state(&self.grid, &mut self.rng);
        &self.state
    }

    /// Request a direction change for the next tick.
    ///
    /// Ignored while paused, and ignored when the request would reverse the
    /// current direction (a reversal would fold the head straight into the
    /// neck). Both are policy, not errors. Last accepted request before the
    /// next tick wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.state.is_paused {
            return;
        }
        if self.state.direction.is_opposite(requested) {
            return;
        }
        self.state.direction = requested;
    }

    /// Flip the pause flag. A paused engine never advances.
    pub fn toggle_pause(&mut self) {
        self.state.is_paused = !self.state.is_paused;
    }

    /// Advance the simulation by one step.
    ///
    /// A no-op while the game is over or paused, so a misbehaving scheduler
    /// cannot corrupt state. Order of effects is fixed: move, eat or shrink,
    /// then collide (walls before self).
    pub fn tick(&mut self) -> &GameState {
        if self.state.is_over || self.state.is_paused {
            return &self.state;
        }

        let new_head = self
            .state
            .snake
            .head()
            .stepped(self.state.direction, self.grid.cell_size());
        self.state.snake.push_head(new_head);

        if new_head == self.state.food {
            // Tail retained: net growth of one segment. Food may respawn
            // on a snake-occupied cell; that matches the original rules.
            self.state.score += 1;
            self.state.food = self.grid.random_cell(&mut self.rng);
        } else {
            self.state.snake.pop_tail();
        }

        if !self.grid.is_in_bounds(new_head) {
            self.state.is_over = true;
        } else if self.state.snake.head_hits_body() {
            self.state.is_over = true;
        }

        &self.state
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state, safe to hand to collaborators
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Position;

    fn engine() -> SimEngine {
        SimEngine::new(&GameConfig::default())
    }

    /// Food placed where no tick in the test can reach it
    fn park_food(engine: &mut SimEngine) {
        engine.state_mut().food = Position::new(0, 0);
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        let state = engine.state();

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(200, 200));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert!(!state.is_over);
        assert!(!state.is_paused);
        assert!(engine.grid().is_in_bounds(state.food));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        engine.state_mut().snake = Snake::spawn(Position::new(160, 160));
        park_food(&mut engine);

        let state = engine.tick();

        assert_eq!(state.snake.head(), Position::new(180, 160));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 0);
        assert!(!state.is_over);
    }

    #[test]
    fn test_single_segment_snake_does_not_shrink() {
        let mut engine = engine();
        park_food(&mut engine);

        for _ in 0..3 {
            engine.tick();
            assert_eq!(engine.state().snake.len(), 1);
        }
    }

    #[test]
    fn test_growth_law() {
        let mut engine = engine();
        let head = engine.state().snake.head();
        engine.state_mut().food = head.stepped(Direction::Right, 20);

        let state = engine.tick();

        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 1);
        assert!(!state.is_over);
    }

    #[test]
    fn test_no_food_no_growth_no_score() {
        let mut engine = engine();
        park_food(&mut engine);
        let len_before = engine.state().snake.len();

        let state = engine.tick();

        assert_eq!(state.snake.len(), len_before);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_food_respawns_in_bounds() {
        let mut engine = engine();
        for _ in 0..50 {
            let head = engine.state().snake.head();
            let dir = engine.state().direction;
            engine.state_mut().food = head.stepped(dir, 20);
            engine.tick();
            if engine.state().is_over {
                break;
            }
            let food = engine.state().food;
            assert!(engine.grid().is_in_bounds(food));
        }
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut engine = engine();
        assert_eq!(engine.state().direction, Direction::Right);

        engine.set_direction(Direction::Left);
        assert_eq!(engine.state().direction, Direction::Right);

        engine.set_direction(Direction::Up);
        assert_eq!(engine.state().direction, Direction::Up);
        engine.set_direction(Direction::Down);
        assert_eq!(engine.state().direction, Direction::Up);
    }

    #[test]
    fn test_direction_ignored_while_paused() {
        let mut engine = engine();
        engine.toggle_pause();

        engine.set_direction(Direction::Down);
        assert_eq!(engine.state().direction, Direction::Right);

        engine.toggle_pause();
        engine.set_direction(Direction::Down);
        assert_eq!(engine.state().direction, Direction::Down);
    }

    #[test]
    fn test_tick_is_noop_while_paused() {
        let mut engine = engine();
        park_food(&mut engine);
        engine.toggle_pause();
        let before = engine.snapshot();

        let after = engine.tick().clone();
        assert_eq!(before, after);

        // Resuming picks up exactly where the game left off
        engine.toggle_pause();
        let state = engine.tick();
        assert_eq!(state.snake.head(), Position::new(220, 200));
    }

    #[test]
    fn test_wall_collision_at_rightmost_column() {
        let mut engine = engine();
        engine.state_mut().snake = Snake::spawn(Position::new(380, 160));
        park_food(&mut engine);

        let state = engine.tick();

        assert!(state.is_over);
        assert_eq!(state.score, 0);
        // The head has stepped off the board; nothing else changed.
        assert_eq!(state.snake.head(), Position::new(400, 160));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_self_collision() {
        let mut engine = engine();
        park_food(&mut engine);

        // A folded snake whose next step lands on its own body:
        // head (200,200), then a hook back over (200,220).
        let mut snake = Snake::spawn(Position::new(180, 220));
        snake.push_head(Position::new(200, 220));
        snake.push_head(Position::new(220, 220));
        snake.push_head(Position::new(220, 200));
        snake.push_head(Position::new(200, 200));
        engine.state_mut().snake = snake;
        engine.state_mut().direction = Direction::Down;

        let state = engine.tick();

        assert!(state.is_over);
        assert_eq!(state.snake.head(), Position::new(200, 220));
    }

    #[test]
    fn test_head_may_follow_departing_tail() {
        let mut engine = engine();
        park_food(&mut engine);

        // Square of length 4: the head moves into the cell the tail is
        // vacating this same tick, which is legal.
        let mut snake = Snake::spawn(Position::new(200, 220));
        snake.push_head(Position::new(220, 220));
        snake.push_head(Position::new(220, 200));
        snake.push_head(Position::new(200, 200));
        engine.state_mut().snake = snake;
        engine.state_mut().direction = Direction::Down;

        let state = engine.tick();

        assert!(!state.is_over);
        assert_eq!(state.snake.head(), Position::new(200, 220));
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let mut engine = engine();
        engine.state_mut().snake = Snake::spawn(Position::new(380, 160));
        park_food(&mut engine);
        engine.tick();
        assert!(engine.state().is_over);

        let before = engine.snapshot();
        engine.tick();
        engine.tick();
        assert_eq!(*engine.state(), before);
    }

    #[test]
    fn test_reset_restores_start_condition() {
        let mut engine = engine();
        let head = engine.state().snake.head();
        engine.state_mut().food = head.stepped(Direction::Right, 20);
        engine.tick();
        engine.set_direction(Direction::Down);
        engine.toggle_pause();
        assert_eq!(engine.state().score, 1);

        let state = engine.reset();

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(200, 200));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert!(!state.is_over);
        assert!(!state.is_paused);
        let food = state.food;
        assert!(engine.grid().is_in_bounds(food));
    }

    #[test]
    fn test_segments_stay_aligned_and_in_bounds_while_alive() {
        let mut engine = engine();
        park_food(&mut engine);

        let walk = [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];
        for dir in walk.iter().cycle().take(40) {
            engine.set_direction(*dir);
            engine.tick();
            if engine.state().is_over {
                break;
            }
            let grid = *engine.grid();
            assert!(engine.state().snake.len() >= 1);
            for seg in engine.state().snake.segments() {
                assert!(grid.is_in_bounds(seg));
            }
        }
    }
}
