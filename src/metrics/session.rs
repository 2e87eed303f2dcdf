use std::time::{Duration, Instant};

/// One finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub score: u32,
    pub duration: Duration,
}

/// Tally of the games played since the process started. Lives only for the
/// session; nothing is written to disk.
pub struct SessionMetrics {
    game_started: Instant,
    elapsed: Duration,
    history: Vec<GameRecord>,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            game_started: Instant::now(),
            elapsed: Duration::ZERO,
            history: Vec::new(),
        }
    }

    /// Refresh the clock for the game in progress
    pub fn update(&mut self) {
        self.elapsed = self.game_started.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.game_started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    /// Close out the game in progress and record it
    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.history.push(GameRecord {
            score: final_score,
            duration: self.elapsed,
        });
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn games_played(&self) -> usize {
        self.history.len()
    }

    pub fn best_score(&self) -> u32 {
        self.history.iter().map(|game| game.score).max().unwrap_or(0)
    }

    pub fn average_score(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let total: u64 = self.history.iter().map(|game| u64::from(game.score)).sum();
        total as f64 / self.history.len() as f64
    }

    pub fn history(&self) -> &[GameRecord] {
        &self.history
    }

    /// mm:ss clock for the game in progress
    pub fn format_time(&self) -> String {
        format_clock(self.elapsed)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn format_clock(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
