//! Geometry-agnostic puzzle engine
//!
//! Operates purely on tile ids, neighbor lists, and puzzle-state fields;
//! nothing here depends on which solid produced the tiles. Every operation
//! is a pure transform: tile slice in, fresh tile vector out, with no
//! aliasing of the input. That makes snapshots (and undo) a plain clone of
//! the pre-operation vector.

use std::collections::{HashSet, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SweeperError};
use crate::generation::MeshTile;
use crate::tile::GameTile;

/// Augment raw surface geometry with blank puzzle state
///
/// Every tile starts unmined, unrevealed, unflagged, with a zero adjacent
/// count.
pub fn init_game_tiles(mesh_tiles: Vec<MeshTile>) -> Vec<GameTile> {
    mesh_tiles.into_iter().map(GameTile::from_mesh).collect()
}

/// Place mines randomly, avoiding the first-revealed tile and its neighbors
///
/// The safe zone is `exclude_id` plus all of its neighbors; every other tile
/// is a candidate. The candidate pool is shuffled (Fisher-Yates) and the
/// first `mine_count` ids become mines. Adjacent-mine counts are computed
/// here, once, for every tile; they never change afterward.
///
/// When `mine_count` exceeds the candidate pool, it is silently clamped to
/// the pool size; callers wanting an error must check the pool size
/// beforehand.
///
/// # Errors
///
/// Returns `TileNotFound` if `exclude_id` is out of range.
pub fn place_mines<R: Rng>(
    tiles: &[GameTile],
    mine_count: usize,
    exclude_id: usize,
    rng: &mut R,
) -> Result<Vec<GameTile>> {
    let exclude = tiles
        .get(exclude_id)
        .ok_or(SweeperError::TileNotFound(exclude_id))?;

    let safe_zone: HashSet<usize> = std::iter::once(exclude_id)
        .chain(exclude.neighbors.iter().copied())
        .collect();

    let mut candidates: Vec<usize> = tiles
        .iter()
        .map(|t| t.id)
        .filter(|id| !safe_zone.contains(id))
        .collect();
    candidates.shuffle(rng);

    let actual_count = mine_count.min(candidates.len());
    let mine_ids: HashSet<usize> = candidates[..actual_count].iter().copied().collect();

    let mut new_tiles: Vec<GameTile> = tiles
        .iter()
        .map(|t| {
            let mut tile = t.clone();
            tile.is_mine = mine_ids.contains(&tile.id);
            tile
        })
        .collect();

    for id in 0..new_tiles.len() {
        let count = new_tiles[id]
            .neighbors
            .iter()
            .filter(|&&n| mine_ids.contains(&n))
            .count();
        new_tiles[id].adjacent_mines = count as u8;
    }

    Ok(new_tiles)
}

/// Reveal a tile, flood-filling through zero-adjacency regions
///
/// An already-revealed or flagged target is a no-op: the result equals the
/// input. Otherwise a breadth-first flood fill runs from the target. Flagged
/// tiles and mines are never marked revealed and never expanded through; a
/// revealed tile with `adjacent_mines == 0` enqueues every unvisited,
/// unrevealed neighbor. The visited set terminates the traversal on the
/// cyclic adjacency graph and makes the revealed set independent of visit
/// order.
///
/// # Errors
///
/// Returns `TileNotFound` if `tile_id` is out of range.
pub fn reveal_tile(tiles: &[GameTile], tile_id: usize) -> Result<Vec<GameTile>> {
    if tile_id >= tiles.len() {
        return Err(SweeperError::TileNotFound(tile_id));
    }

    let mut new_tiles = tiles.to_vec();
    if new_tiles[tile_id].is_revealed || new_tiles[tile_id].is_flagged {
        return Ok(new_tiles);
    }

    let mut queue = VecDeque::from([tile_id]);
    let mut visited: HashSet<usize> = HashSet::new();

    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        if new_tiles[id].is_flagged || new_tiles[id].is_mine {
            continue;
        }

        new_tiles[id].is_revealed = true;

        if new_tiles[id].adjacent_mines == 0 {
            for i in 0..new_tiles[id].neighbors.len() {
                let neighbor_id = new_tiles[id].neighbors[i];
                if !visited.contains(&neighbor_id) && !new_tiles[neighbor_id].is_revealed {
                    queue.push_back(neighbor_id);
                }
            }
        }
    }

    Ok(new_tiles)
}

/// Toggle the flag on a tile
///
/// Ignored (not an error) when the tile is already revealed.
///
/// # Errors
///
/// Returns `TileNotFound` if `tile_id` is out of range.
pub fn toggle_flag(tiles: &[GameTile], tile_id: usize) -> Result<Vec<GameTile>> {
    if tile_id >= tiles.len() {
        return Err(SweeperError::TileNotFound(tile_id));
    }

    let mut new_tiles = tiles.to_vec();
    if !new_tiles[tile_id].is_revealed {
        new_tiles[tile_id].is_flagged = !new_tiles[tile_id].is_flagged;
    }
    Ok(new_tiles)
}

/// Check whether the board is won: every non-mine tile is revealed
///
/// Mines do not need to be flagged.
pub fn check_win(tiles: &[GameTile]) -> bool {
    tiles.iter().all(|t| t.is_mine || t.is_revealed)
}

/// Reveal every mine tile (loss display); non-mine tiles are untouched
pub fn reveal_all_mines(tiles: &[GameTile]) -> Vec<GameTile> {
    tiles
        .iter()
        .map(|t| {
            let mut tile = t.clone();
            if tile.is_mine {
                tile.is_revealed = true;
            }
            tile
        })
        .collect()
}
