use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::control::{ControlEvent, ControlSurface};
use crate::game::{Direction, GameConfig};

/// One parsed line of the harness protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Reset,
    Tick,
    Dir(Direction),
    Pause,
    State,
    Quit,
}

/// Line-oriented harness over stdin/stdout.
///
/// The caller plays the scheduler: `tick` advances the game exactly once,
/// `state` (and every `tick`) prints the current state as one JSON line.
/// Unknown input is reported and ignored.
pub struct HeadlessMode {
    surface: ControlSurface,
}

impl HeadlessMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            surface: ControlSurface::new(&config),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("headless harness ready");
        let mut lines = BufReader::new(stdin()).lines();

        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match parse_command(trimmed) {
                Some(Command::Quit) => break,
                Some(command) => {
                    if let Some(output) = self.execute(command)? {
                        println!("{output}");
                    }
                }
                None => {
                    warn!("unknown command: {trimmed}");
                    println!("error: unknown command: {trimmed}");
                }
            }
        }

        Ok(())
    }

    /// Apply one command; returns the line to print, if any
    fn execute(&mut self, command: Command) -> Result<Option<String>> {
        let output = match command {
            Command::Reset => {
                self.surface.reset();
                None
            }
            Command::Tick => {
                let state = self.surface.tick();
                Some(serde_json::to_string(state).context("Failed to serialize state")?)
            }
            Command::Dir(direction) => {
                self.surface.apply(ControlEvent::Turn(direction));
                None
            }
            Command::Pause => {
                self.surface.apply(ControlEvent::TogglePause);
                None
            }
            Command::State => {
                let state = self.surface.state();
                Some(serde_json::to_string(state).context("Failed to serialize state")?)
            }
            Command::Quit => None,
        };
        Ok(output)
    }
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match (words.next()?, words.next()) {
        ("reset", None) => Command::Reset,
        ("tick", None) => Command::Tick,
        ("pause", None) => Command::Pause,
        ("state", None) => Command::State,
        ("quit", None) => Command::Quit,
        ("dir", Some(dir)) => Command::Dir(parse_direction(dir)?),
        _ => return None,
    };
    // Trailing tokens make the line malformed
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

fn parse_direction(word: &str) -> Option<Direction> {
    match word {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}
