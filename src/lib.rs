//! Minesweeper on polyhedral surfaces
//!
//! A standalone puzzle core that tiles the surface of a 3D solid (a Goldberg
//! sphere or a cube) and runs deterministic minesweeper-state transitions
//! over the resulting adjacency graph. Rendering, cameras, input devices,
//! and timers are left to the caller; the crate only produces data.
//!
//! # Quick Start
//!
//! ```rust
//! use polyhedral_sweeper::*;
//!
//! // Start a game on an easy sphere
//! let config = GameConfigBuilder::new()
//!     .seed(42)
//!     .difficulty(Difficulty::Easy)
//!     .build();
//!
//! let mut game = GameSession::new(config).unwrap();
//!
//! // Mines are placed on the first reveal, so the opening move is safe
//! game.reveal(0).unwrap();
//! assert!(game.tiles()[0].is_revealed);
//!
//! // Produce vertex buffers for rendering
//! let mesh = generate_board_mesh(game.tiles(), &ClassicColorMapper);
//! println!("{} triangles", mesh.triangle_count());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): O(log n) position-to-tile lookups using a KD-tree
//! - `serde`: Serialization support for configuration types

// Modules
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod mesh;
pub mod session;
pub mod tile;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use config::{
    Difficulty, GameConfig, GameConfigBuilder, Surface, MAX_FREQUENCY, MAX_GRID_SIZE,
};
pub use engine::{
    check_win, init_game_tiles, place_mines, reveal_all_mines, reveal_tile, toggle_flag,
};
pub use error::{Result, SweeperError};
pub use generation::{generate_cube_surface, generate_goldberg, generate_surface_tiles, MeshTile};
pub use mesh::{
    generate_board_mesh, ClassicColorMapper, CustomColorMapper, MeshData, TileColor,
    TileColorMapper,
};
pub use session::{GamePhase, GameSession};
pub use tile::GameTile;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec3 for convenience
pub use glam::Vec3;
