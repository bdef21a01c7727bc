//! Game configuration.
//!
//! Board size and the RNG seed are passed in explicitly rather than read
//! from globals, so tests can build isolated boards of any size.

use serde::{Deserialize, Serialize};

/// Side length of the standard board.
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board (1-255).
    pub board_size: u8,

    /// Seed for the game RNG (starting turn selection).
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: u8) -> Self {
        assert!(size > 0, "Board must have at least 1 cell per side");
        self.board_size = size;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
