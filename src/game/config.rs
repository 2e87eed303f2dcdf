use serde::{Deserialize, Serialize};

/// Configuration for the game board and tick cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board, in the same units as positions
    pub board_extent: i32,
    /// Side length of one grid cell; all positions are multiples of this
    pub cell_size: i32,
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_extent: 400,
            cell_size: 20,
            tick_ms: 100,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board
    pub fn new(board_extent: i32, cell_size: i32) -> Self {
        Self {
            board_extent,
            cell_size,
            ..Default::default()
        }
    }

    /// Number of cells along one side of the board
    pub fn cells_per_side(&self) -> i32 {
        self.board_extent / self.cell_size
    }

    /// A board must hold at least a 2x2 grid of whole cells
    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size <= 0 {
            return Err(format!("cell size must be positive, got {}", self.cell_size));
        }
        if self.board_extent <= 0 || self.board_extent % self.cell_size != 0 {
            return Err(format!(
                "board extent {} must be a positive multiple of cell size {}",
                self.board_extent, self.cell_size
            ));
        }
        if self.cells_per_side() < 2 {
            return Err("board must be at least 2 cells wide".to_string());
        }
        Ok(())
    }

    /// Small board for tests
    pub fn small() -> Self {
        Self::new(100, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_extent, 400);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.cells_per_side(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(200, 10);
        assert_eq!(config.cells_per_side(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        assert!(GameConfig::new(0, 20).validate().is_err());
        assert!(GameConfig::new(410, 20).validate().is_err());
        assert!(GameConfig::new(400, 0).validate().is_err());
        assert!(GameConfig::new(20, 20).validate().is_err());
    }
}
