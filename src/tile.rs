//! Game tile structure
//!
//! Represents an individual tile on the board surface with geometry,
//! adjacency, and puzzle state.

use glam::Vec3;

use crate::generation::MeshTile;

/// A single tile on the board surface
///
/// Each tile carries:
/// - A unique ID for identification
/// - Boundary geometry for rendering (center, normal, ordered vertices)
/// - Neighbor connectivity for flood fill and adjacent-mine counts
/// - Puzzle state (mine, revealed, flagged, adjacent mine count)
///
/// # Design Notes
///
/// Tiles live in a flat array indexed by `id`, and `neighbors` holds indices
/// into that same array. There are no object references between tiles, so a
/// snapshot of the whole board is a plain `Vec` clone.
#[derive(Debug, Clone)]
pub struct GameTile {
    /// Unique identifier for this tile (0 to tile_count-1)
    ///
    /// Tile IDs are dense and stable for the lifetime of a generated board.
    pub id: usize,

    /// Center point of the tile on the solid's surface
    ///
    /// Unit-length for sphere tiles; the centroid of the quad for cube tiles.
    pub center: Vec3,

    /// Outward unit normal
    ///
    /// Equal to `center.normalize()` for sphere tiles; the face normal for
    /// cube tiles.
    pub normal: Vec3,

    /// Vertices defining the tile's boundary polygon (for rendering)
    ///
    /// Ordered around the center so the polygon is simple (non-crossing),
    /// winding consistent with `normal`.
    pub vertices: Vec<Vec3>,

    /// IDs of adjacent tiles
    ///
    /// The relation is symmetric: `j` lists `i` whenever `i` lists `j`.
    pub neighbors: Vec<usize>,

    /// Boundary vertex count (5 or 6 for sphere tiles, 4 for cube tiles)
    pub sides: usize,

    /// Whether this tile carries a mine (immutable once mines are placed)
    pub is_mine: bool,

    /// Whether this tile has been revealed
    pub is_revealed: bool,

    /// Whether this tile is flagged (only meaningful while unrevealed)
    pub is_flagged: bool,

    /// Count of neighboring tiles carrying a mine
    ///
    /// Computed exactly once at mine placement and never changed afterward.
    pub adjacent_mines: u8,
}

impl GameTile {
    /// Create a game tile from raw surface geometry with blank puzzle state
    pub fn from_mesh(mesh: MeshTile) -> Self {
        Self {
            id: mesh.id,
            center: mesh.center,
            normal: mesh.normal,
            vertices: mesh.vertices,
            neighbors: mesh.neighbors,
            sides: mesh.sides,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            adjacent_mines: 0,
        }
    }

    /// Get the number of neighboring tiles
    ///
    /// 5-6 for sphere tiles; up to 11 for cube tiles sitting on an edge or
    /// corner of the cube, where cross-face neighbors come into play.
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if this tile is a neighbor of another tile
    #[inline]
    pub fn is_neighbor_of(&self, other_tile_id: usize) -> bool {
        self.neighbors.contains(&other_tile_id)
    }

    /// Get the boundary vertex count (polygon complexity)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_tile() -> MeshTile {
        MeshTile {
            id: 0,
            center: Vec3::new(1.0, 0.0, 0.0),
            normal: Vec3::new(1.0, 0.0, 0.0),
            vertices: vec![
                Vec3::new(1.0, 0.1, 0.1),
                Vec3::new(1.0, 0.1, -0.1),
                Vec3::new(1.0, -0.1, 0.0),
            ],
            neighbors: vec![1, 2, 3],
            sides: 3,
        }
    }

    #[test]
    fn test_from_mesh_blank_state() {
        let tile = GameTile::from_mesh(mesh_tile());

        assert_eq!(tile.id, 0);
        assert_eq!(tile.neighbor_count(), 3);
        assert_eq!(tile.vertex_count(), 3);
        assert!(!tile.is_mine);
        assert!(!tile.is_revealed);
        assert!(!tile.is_flagged);
        assert_eq!(tile.adjacent_mines, 0);
    }

    #[test]
    fn test_is_neighbor_of() {
        let tile = GameTile::from_mesh(mesh_tile());
        assert!(tile.is_neighbor_of(1));
        assert!(!tile.is_neighbor_of(99));
    }
}
