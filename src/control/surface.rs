use crate::game::{Direction, GameConfig, GameState, SimEngine};

/// A discrete request from the outside world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Turn(Direction),
    TogglePause,
}

/// Thin adapter between external collaborators and the simulation engine.
///
/// Input sources push `ControlEvent`s in, the scheduler drives `tick`, and
/// renderers read owned snapshots back out. No game logic lives here.
pub struct ControlSurface {
    engine: SimEngine,
}

impl ControlSurface {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            engine: SimEngine::new(config),
        }
    }

    /// Forward one input event to the engine
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Turn(direction) => self.engine.set_direction(direction),
            ControlEvent::TogglePause => self.engine.toggle_pause(),
        }
    }

    /// Advance the simulation one step and return the resulting state
    pub fn tick(&mut self) -> &GameState {
        self.engine.tick()
    }

    /// Start a fresh game
    pub fn reset(&mut self) -> &GameState {
        self.engine.reset()
    }

    /// Borrowed read-only view, for render paths that do not need ownership
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Owned copy of the current state for external consumers
    pub fn snapshot(&self) -> GameState {
        self.engine.snapshot()
    }
}
