//! Game session state machine
//!
//! Owns the current tile array and drives the phase transitions around the
//! pure engine operations: deferred mine placement on the first reveal,
//! win/loss detection, flag counting, and a one-shot undo after a loss.
//! Elapsed time, input handling, and rendering stay with the caller.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::engine;
use crate::error::{Result, SweeperError};
use crate::generation::generate_surface_tiles;
use crate::tile::GameTile;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;
#[cfg(feature = "spatial-index")]
use glam::Vec3;

/// Phase of the current game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Accepting reveals and flags
    Playing,
    /// Every non-mine tile is revealed (terminal)
    Won,
    /// A mine was revealed; terminal unless the one-shot undo is taken
    Lost,
}

/// Board state captured immediately before a fatal reveal
#[derive(Debug, Clone)]
struct Snapshot {
    tiles: Vec<GameTile>,
    flag_count: usize,
    mines_placed: bool,
}

/// A running game on a generated surface
///
/// Mines are not placed at construction. They are placed on the first
/// reveal, with the revealed tile and its neighbors excluded, so the opening
/// move is always safe.
///
/// # Example
///
/// ```rust
/// use polyhedral_sweeper::*;
///
/// let config = GameConfigBuilder::new()
///     .seed(42)
///     .difficulty(Difficulty::Easy)
///     .build();
///
/// let mut game = GameSession::new(config).unwrap();
/// assert_eq!(game.phase(), GamePhase::Playing);
///
/// game.reveal(0).unwrap();
/// assert!(game.tiles()[0].is_revealed);
/// ```
pub struct GameSession {
    config: GameConfig,

    /// Current board state (indexed by tile ID)
    tiles: Vec<GameTile>,

    phase: GamePhase,
    mine_count: usize,
    flag_count: usize,

    /// Whether mines have been placed yet (false until the first reveal)
    mines_placed: bool,

    /// Deterministic RNG for mine placement, seeded from the configuration
    rng: ChaCha8Rng,

    /// Pre-loss board state; consumed by [`GameSession::undo`]
    snapshot: Option<Snapshot>,

    /// Spatial index over tile centers for pointer-pick lookups
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl GameSession {
    /// Start a new game: generate the surface and a blank board
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the surface parameters are out of range.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mesh_tiles = generate_surface_tiles(config.surface)?;
        let tiles = engine::init_game_tiles(mesh_tiles);
        let mine_count = config.mine_count();

        #[cfg(feature = "spatial-index")]
        let spatial_index = {
            let centers: Vec<Vec3> = tiles.iter().map(|t| t.center).collect();
            SpatialIndex::new(&centers)
        };

        Ok(Self {
            config,
            tiles,
            phase: GamePhase::Playing,
            mine_count,
            flag_count: 0,
            mines_placed: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            snapshot: None,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Reveal a tile, returning the resulting phase
    ///
    /// On the first reveal of the game, mines are placed beforehand with the
    /// target and its neighbors excluded. Revealing a mine captures a
    /// snapshot for [`GameSession::undo`], reveals every mine, and moves the
    /// game to `Lost`. Revealing the last safe tile moves it to `Won`.
    ///
    /// No-op outside `Playing` and for already-revealed or flagged targets.
    ///
    /// # Errors
    ///
    /// Returns `TileNotFound` if `tile_id` is out of range.
    pub fn reveal(&mut self, tile_id: usize) -> Result<GamePhase> {
        if self.phase != GamePhase::Playing {
            return Ok(self.phase);
        }
        let tile = self
            .tiles
            .get(tile_id)
            .ok_or(SweeperError::TileNotFound(tile_id))?;
        if tile.is_revealed || tile.is_flagged {
            return Ok(self.phase);
        }

        if !self.mines_placed {
            self.tiles = engine::place_mines(&self.tiles, self.mine_count, tile_id, &mut self.rng)?;
            self.mines_placed = true;
        }

        if self.tiles[tile_id].is_mine {
            self.snapshot = Some(Snapshot {
                tiles: self.tiles.clone(),
                flag_count: self.flag_count,
                mines_placed: self.mines_placed,
            });
            self.tiles = engine::reveal_all_mines(&self.tiles);
            self.phase = GamePhase::Lost;
            return Ok(self.phase);
        }

        self.tiles = engine::reveal_tile(&self.tiles, tile_id)?;
        if engine::check_win(&self.tiles) {
            self.phase = GamePhase::Won;
        }
        Ok(self.phase)
    }

    /// Toggle a flag on a tile, maintaining the running flag count
    ///
    /// No-op outside `Playing` and on revealed tiles.
    ///
    /// # Errors
    ///
    /// Returns `TileNotFound` if `tile_id` is out of range.
    pub fn flag(&mut self, tile_id: usize) -> Result<()> {
        if self.phase != GamePhase::Playing {
            return Ok(());
        }
        let tile = self
            .tiles
            .get(tile_id)
            .ok_or(SweeperError::TileNotFound(tile_id))?;
        if tile.is_revealed {
            return Ok(());
        }

        let was_flagged = tile.is_flagged;
        self.tiles = engine::toggle_flag(&self.tiles, tile_id)?;
        if was_flagged {
            self.flag_count -= 1;
        } else {
            self.flag_count += 1;
        }
        Ok(())
    }

    /// Undo the fatal reveal after a loss
    ///
    /// Restores the board, flag count, and mine-placement flag to the state
    /// captured immediately before the losing reveal and returns the game to
    /// `Playing`. Available at most once per loss event; a later loss
    /// captures a fresh snapshot. Returns `false` when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        if self.phase != GamePhase::Lost {
            return false;
        }
        match self.snapshot.take() {
            Some(snapshot) => {
                self.tiles = snapshot.tiles;
                self.flag_count = snapshot.flag_count;
                self.mines_placed = snapshot.mines_placed;
                self.phase = GamePhase::Playing;
                true
            }
            None => false,
        }
    }

    /// Get the configuration this game was started from
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the current board as a slice
    #[inline]
    pub fn tiles(&self) -> &[GameTile] {
        &self.tiles
    }

    /// Get the current phase
    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Total number of mines on the board once placed
    #[inline]
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Number of currently flagged tiles
    #[inline]
    pub fn flag_count(&self) -> usize {
        self.flag_count
    }

    /// Whether mines have been placed (true after the first reveal)
    #[inline]
    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    /// Find the tile nearest to a 3D position (requires `spatial-index`)
    ///
    /// Converts a position on the rendered surface, typically a raycast hit
    /// from a pointer gesture, into a tile ID.
    #[cfg(feature = "spatial-index")]
    pub fn find_tile_at(&self, position: Vec3) -> usize {
        self.spatial_index.find_nearest(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Difficulty, GameConfigBuilder, Surface};

    fn easy_session(seed: u64) -> GameSession {
        let config = GameConfigBuilder::new()
            .seed(seed)
            .difficulty(Difficulty::Easy)
            .build();
        GameSession::new(config).unwrap()
    }

    /// Reveal tile 0, then return some still-hidden mine's id
    fn open_and_find_mine(game: &mut GameSession) -> usize {
        game.reveal(0).unwrap();
        assert_eq!(game.phase(), GamePhase::Playing);
        game.tiles()
            .iter()
            .find(|t| t.is_mine)
            .map(|t| t.id)
            .expect("easy board should have mines")
    }

    #[test]
    fn test_new_session() {
        let game = easy_session(42);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.tiles().len(), 92);
        assert_eq!(game.mine_count(), 13);
        assert_eq!(game.flag_count(), 0);
        assert!(!game.mines_placed());
    }

    #[test]
    fn test_first_reveal_places_mines_safely() {
        let mut game = easy_session(42);
        game.reveal(7).unwrap();

        assert!(game.mines_placed());
        assert_eq!(
            game.tiles().iter().filter(|t| t.is_mine).count(),
            game.mine_count()
        );
        assert!(game.tiles()[7].is_revealed);
        assert!(!game.tiles()[7].is_mine);
        for &n in &game.tiles()[7].neighbors {
            assert!(!game.tiles()[n].is_mine);
        }
    }

    #[test]
    fn test_loss_and_one_shot_undo() {
        let mut game = easy_session(42);
        let mine_id = open_and_find_mine(&mut game);
        let flags_before = game.flag_count();

        assert_eq!(game.reveal(mine_id).unwrap(), GamePhase::Lost);
        assert!(game
            .tiles()
            .iter()
            .filter(|t| t.is_mine)
            .all(|t| t.is_revealed));

        assert!(game.undo());
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.flag_count(), flags_before);
        assert!(game.mines_placed());
        assert!(game
            .tiles()
            .iter()
            .filter(|t| t.is_mine)
            .all(|t| !t.is_revealed));

        // The snapshot is consumed; a second undo has nothing to restore.
        assert!(!game.undo());
    }

    #[test]
    fn test_fresh_undo_after_second_loss() {
        let mut game = easy_session(42);
        let mine_id = open_and_find_mine(&mut game);

        game.reveal(mine_id).unwrap();
        assert!(game.undo());

        game.reveal(mine_id).unwrap();
        assert_eq!(game.phase(), GamePhase::Lost);
        assert!(game.undo(), "a new loss event grants a new undo");
    }

    #[test]
    fn test_undo_only_after_loss() {
        let mut game = easy_session(42);
        assert!(!game.undo());
        game.reveal(0).unwrap();
        assert!(!game.undo());
    }

    #[test]
    fn test_flag_counting() {
        let mut game = easy_session(42);
        game.flag(3).unwrap();
        assert_eq!(game.flag_count(), 1);
        assert!(game.tiles()[3].is_flagged);

        game.flag(5).unwrap();
        assert_eq!(game.flag_count(), 2);

        game.flag(3).unwrap();
        assert_eq!(game.flag_count(), 1);
        assert!(!game.tiles()[3].is_flagged);
    }

    #[test]
    fn test_flag_ignored_on_revealed_tile() {
        let mut game = easy_session(42);
        game.reveal(0).unwrap();
        game.flag(0).unwrap();
        assert_eq!(game.flag_count(), 0);
        assert!(!game.tiles()[0].is_flagged);
    }

    #[test]
    fn test_reveal_flagged_tile_is_noop() {
        let mut game = easy_session(42);
        game.flag(0).unwrap();
        game.reveal(0).unwrap();
        assert!(!game.tiles()[0].is_revealed);
        assert!(!game.mines_placed(), "a blocked reveal must not place mines");
    }

    #[test]
    fn test_terminal_phase_ignores_input() {
        let mut game = easy_session(42);
        let mine_id = open_and_find_mine(&mut game);
        game.reveal(mine_id).unwrap();

        let revealed_before = game.tiles().iter().filter(|t| t.is_revealed).count();
        assert_eq!(game.reveal(1).unwrap(), GamePhase::Lost);
        game.flag(1).unwrap();
        assert_eq!(
            game.tiles().iter().filter(|t| t.is_revealed).count(),
            revealed_before
        );
        assert_eq!(game.flag_count(), 0);
    }

    #[test]
    fn test_invalid_id_fails_fast() {
        let mut game = easy_session(42);
        assert!(game.reveal(10_000).is_err());
        assert!(game.flag(10_000).is_err());
    }

    #[test]
    fn test_mineless_board_wins_on_first_reveal() {
        // 6 tiles at 15% density floors to zero mines; one reveal floods the
        // whole surface.
        let config = GameConfigBuilder::new()
            .seed(1)
            .surface(Surface::Cube { grid_size: 1 })
            .unwrap()
            .mine_density(0.15)
            .unwrap()
            .build();
        let mut game = GameSession::new(config).unwrap();
        assert_eq!(game.mine_count(), 0);

        assert_eq!(game.reveal(0).unwrap(), GamePhase::Won);
        assert!(game.tiles().iter().all(|t| t.is_revealed));
    }

    #[test]
    fn test_same_seed_same_minefield() {
        let mut a = easy_session(1234);
        let mut b = easy_session(1234);
        a.reveal(0).unwrap();
        b.reveal(0).unwrap();
        for (ta, tb) in a.tiles().iter().zip(b.tiles().iter()) {
            assert_eq!(ta.is_mine, tb.is_mine);
        }
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_find_tile_at_center() {
        let game = easy_session(42);
        let center = game.tiles()[17].center;
        assert_eq!(game.find_tile_at(center), 17);
    }
}
