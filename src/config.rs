//! Game configuration and builder
//!
//! This module provides configuration types for deterministic game setup:
//! which solid to tile, how finely, and how dense the minefield is.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SweeperError};

/// Maximum supported sphere subdivision frequency
///
/// `frequency = 64` yields 40,962 tiles, which is already far beyond what a
/// playable board needs.
pub const MAX_FREQUENCY: usize = 64;

/// Maximum supported cube grid size per face
///
/// Cube neighbor detection is a pairwise O(N²) scan over tile centers, so the
/// grid size is capped to keep N in the low thousands (`32` gives 6,144 tiles).
pub const MAX_GRID_SIZE: usize = 32;

/// The solid whose surface is tiled into a game board
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Goldberg polyhedron: a subdivided icosahedron's dual.
    /// Produces `10·frequency² + 2` tiles (12 pentagons, the rest hexagons).
    Sphere {
        /// Subdivision level of the base icosahedron (>= 1)
        frequency: usize,
    },
    /// Cube surface: an `n×n` quad grid on each of the 6 faces of `[-1,1]³`.
    /// Produces `6·grid_size²` tiles.
    Cube {
        /// Grid size per face (>= 1)
        grid_size: usize,
    },
}

impl Surface {
    /// Number of tiles this surface will generate
    pub fn tile_count(self) -> usize {
        match self {
            Surface::Sphere { frequency } => 10 * frequency * frequency + 2,
            Surface::Cube { grid_size } => 6 * grid_size * grid_size,
        }
    }

    /// Get a human-readable name for this surface
    pub fn name(self) -> &'static str {
        match self {
            Surface::Sphere { .. } => "Sphere",
            Surface::Cube { .. } => "Cube",
        }
    }
}

impl Default for Surface {
    fn default() -> Self {
        Surface::Sphere { frequency: 5 }
    }
}

/// Difficulty presets
///
/// Each preset maps to a sphere subdivision frequency and a mine density
/// (fraction of tiles that carry a mine).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// 92 tiles, 15% mines
    Easy,
    /// 252 tiles, 18% mines
    Medium,
    /// 492 tiles, 20% mines
    Hard,
}

impl Difficulty {
    /// Sphere surface for this difficulty
    pub fn surface(self) -> Surface {
        let frequency = match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 7,
        };
        Surface::Sphere { frequency }
    }

    /// Mine density (fraction of tiles carrying a mine)
    pub fn mine_density(self) -> f32 {
        match self {
            Difficulty::Easy => 0.15,
            Difficulty::Medium => 0.18,
            Difficulty::Hard => 0.20,
        }
    }

    /// Get a human-readable name for this difficulty
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Configuration for a deterministic game setup
///
/// The same configuration always produces the identical board layout and,
/// given the same sequence of reveals, the identical mine placement.
///
/// # Example
///
/// ```rust
/// use polyhedral_sweeper::*;
///
/// let config = GameConfigBuilder::new()
///     .seed(42)
///     .surface(Surface::Sphere { frequency: 3 }).unwrap()
///     .mine_density(0.15).unwrap()
///     .build();
///
/// assert_eq!(config.surface.tile_count(), 92);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Random seed for deterministic mine placement
    pub seed: u64,

    /// Which solid to tile, and how finely
    pub surface: Surface,

    /// Fraction of tiles carrying a mine, in (0, 1)
    pub mine_density: f32,
}

impl GameConfig {
    /// Create a configuration from a difficulty preset
    pub fn from_difficulty(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            seed,
            surface: difficulty.surface(),
            mine_density: difficulty.mine_density(),
        }
    }

    /// Number of mines for this configuration: `floor(tile_count * density)`
    #[inline]
    pub fn mine_count(&self) -> usize {
        (self.surface.tile_count() as f32 * self.mine_density) as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfigBuilder::new().build()
    }
}

/// Builder for creating a [`GameConfig`] with validation
///
/// # Example
///
/// ```rust
/// use polyhedral_sweeper::*;
///
/// // Use defaults (medium sphere, random seed)
/// let config = GameConfigBuilder::new().build();
///
/// // Customize
/// let config = GameConfigBuilder::new()
///     .seed(12345)
///     .surface(Surface::Cube { grid_size: 8 }).unwrap()
///     .mine_density(0.2).unwrap()
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct GameConfigBuilder {
    seed: Option<u64>,
    surface: Surface,
    mine_density: f32,
}

impl GameConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - surface: Sphere with frequency 5 (252 tiles)
    /// - mine_density: 0.18
    pub fn new() -> Self {
        Self {
            seed: None,
            surface: Surface::default(),
            mine_density: 0.18,
        }
    }

    /// Set the random seed for mine placement
    ///
    /// Using the same seed with the same other parameters and the same
    /// first-reveal tile will produce an identical minefield every time.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the surface to tile
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the sphere frequency is 0 or exceeds
    /// [`MAX_FREQUENCY`], or the cube grid size is 0 or exceeds
    /// [`MAX_GRID_SIZE`].
    pub fn surface(mut self, surface: Surface) -> Result<Self> {
        match surface {
            Surface::Sphere { frequency } => {
                if frequency == 0 || frequency > MAX_FREQUENCY {
                    return Err(SweeperError::InvalidConfig(format!(
                        "sphere frequency must be in 1..={} (got {})",
                        MAX_FREQUENCY, frequency
                    )));
                }
            }
            Surface::Cube { grid_size } => {
                if grid_size == 0 || grid_size > MAX_GRID_SIZE {
                    return Err(SweeperError::InvalidConfig(format!(
                        "cube grid size must be in 1..={} (got {})",
                        MAX_GRID_SIZE, grid_size
                    )));
                }
            }
        }
        self.surface = surface;
        Ok(self)
    }

    /// Set the difficulty preset (surface and mine density together)
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.surface = difficulty.surface();
        self.mine_density = difficulty.mine_density();
        self
    }

    /// Set the mine density
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if density is not strictly between 0 and 1.
    pub fn mine_density(mut self, density: f32) -> Result<Self> {
        if !(density > 0.0 && density < 1.0) {
            return Err(SweeperError::InvalidConfig(format!(
                "mine density must be in (0, 1) (got {})",
                density
            )));
        }
        self.mine_density = density;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> GameConfig {
        GameConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            surface: self.surface,
            mine_density: self.mine_density,
        }
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
