//! Cube surface tile generator
//!
//! Tiles the six faces of the cube `[-1,1]³` with `n×n` quads and connects
//! them with 8-neighborhood adjacency, including diagonal and cross-face
//! links across the cube's edges.

use glam::Vec3;

use super::MeshTile;
use crate::error::{Result, SweeperError};

/// Relative tolerance added to the neighbor distance threshold
///
/// Absorbs floating-point error in the computed tile centers; expressed as a
/// fraction of the cell size.
const NEIGHBOR_EPSILON: f32 = 0.01;

/// A cube face frame: origin corner, two spanning directions, outward normal
struct FaceFrame {
    origin: Vec3,
    u_dir: Vec3,
    v_dir: Vec3,
    normal: Vec3,
}

/// The six face frames, together tiling the surface of `[-1,1]³` without
/// gaps or overlaps. Spanning directions are chosen so each face's quads
/// wind consistently with its outward normal.
const FACES: [FaceFrame; 6] = [
    // +Z front
    FaceFrame {
        origin: Vec3::new(-1.0, -1.0, 1.0),
        u_dir: Vec3::X,
        v_dir: Vec3::Y,
        normal: Vec3::Z,
    },
    // -Z back
    FaceFrame {
        origin: Vec3::new(1.0, -1.0, -1.0),
        u_dir: Vec3::NEG_X,
        v_dir: Vec3::Y,
        normal: Vec3::NEG_Z,
    },
    // -X left
    FaceFrame {
        origin: Vec3::new(-1.0, -1.0, -1.0),
        u_dir: Vec3::Z,
        v_dir: Vec3::Y,
        normal: Vec3::NEG_X,
    },
    // +X right
    FaceFrame {
        origin: Vec3::new(1.0, -1.0, 1.0),
        u_dir: Vec3::NEG_Z,
        v_dir: Vec3::Y,
        normal: Vec3::X,
    },
    // +Y top
    FaceFrame {
        origin: Vec3::new(-1.0, 1.0, 1.0),
        u_dir: Vec3::X,
        v_dir: Vec3::NEG_Z,
        normal: Vec3::Y,
    },
    // -Y bottom
    FaceFrame {
        origin: Vec3::new(-1.0, -1.0, -1.0),
        u_dir: Vec3::X,
        v_dir: Vec3::Z,
        normal: Vec3::NEG_Y,
    },
];

/// Generate a quad tiling of the cube surface
///
/// Each face carries an `n×n` grid of square tiles with `cell_size = 2/n`.
/// Neighbors are detected by pairwise center distance with threshold
/// `cell_size·√2 + cell_size·0.01`, which captures the 8 surrounding tiles
/// on the same face plus the matching tiles across a shared cube edge,
/// without seam-stitching tables. This is a documented heuristic, not a
/// seam proof, and the scan is O(N²); grid sizes are capped accordingly in
/// the configuration layer.
///
/// # Arguments
///
/// * `grid_size` - Grid size per face (>= 1). Tile count is `6·grid_size²`
///
/// # Errors
///
/// Returns `InvalidConfig` if `grid_size` is 0.
///
/// # Example
///
/// ```rust
/// use polyhedral_sweeper::generate_cube_surface;
///
/// let tiles = generate_cube_surface(4).unwrap();
/// assert_eq!(tiles.len(), 96);
/// ```
pub fn generate_cube_surface(grid_size: usize) -> Result<Vec<MeshTile>> {
    if grid_size == 0 {
        return Err(SweeperError::InvalidConfig(
            "cube grid size must be >= 1".to_string(),
        ));
    }

    let n = grid_size;
    let cell_size = 2.0 / n as f32;
    let mut tiles: Vec<MeshTile> = Vec::with_capacity(6 * n * n);

    for face in &FACES {
        for row in 0..n {
            for col in 0..n {
                // Corners in boundary order: top-left, top-right,
                // bottom-right, bottom-left in face-local coordinates.
                let corners = [
                    (col, row),
                    (col + 1, row),
                    (col + 1, row + 1),
                    (col, row + 1),
                ];
                let vertices: Vec<Vec3> = corners
                    .iter()
                    .map(|&(u, v)| {
                        face.origin
                            + face.u_dir * (u as f32 * cell_size)
                            + face.v_dir * (v as f32 * cell_size)
                    })
                    .collect();

                let center = vertices.iter().copied().sum::<Vec3>() / 4.0;

                tiles.push(MeshTile {
                    id: tiles.len(),
                    center,
                    normal: face.normal,
                    vertices,
                    neighbors: Vec::new(),
                    sides: 4,
                });
            }
        }
    }

    // Pairwise center-distance neighbor detection. Same-face orthogonal
    // neighbors sit at distance `cell`, diagonals at `cell·√2`; tiles
    // directly across a cube edge sit at `cell/√2` and diagonally across at
    // `cell·√1.5`, all under the threshold.
    let threshold = cell_size * std::f32::consts::SQRT_2 + cell_size * NEIGHBOR_EPSILON;
    let threshold_sq = threshold * threshold;

    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i].center.distance_squared(tiles[j].center) <= threshold_sq {
                tiles[i].neighbors.push(j);
                tiles[j].neighbors.push(i);
            }
        }
    }

    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_count_law() {
        for n in 1..=5 {
            let tiles = generate_cube_surface(n).unwrap();
            assert_eq!(tiles.len(), 6 * n * n, "grid size {}", n);
        }
    }

    #[test]
    fn test_all_quads() {
        let tiles = generate_cube_surface(3).unwrap();
        for tile in &tiles {
            assert_eq!(tile.sides, 4);
            assert_eq!(tile.vertices.len(), 4);
        }
    }

    #[test]
    fn test_single_cell_faces_all_adjacent() {
        // At n=1 every face's single tile touches every other face, so each
        // of the 6 tiles lists the other 5 as neighbors.
        let tiles = generate_cube_surface(1).unwrap();
        assert_eq!(tiles.len(), 6);
        for tile in &tiles {
            assert_eq!(tile.neighbors.len(), 5);
        }
    }

    #[test]
    fn test_interior_tile_has_eight_neighbors() {
        let n = 4;
        let tiles = generate_cube_surface(n).unwrap();
        // Face 0, row 1, col 1 is interior: no cube edge in its 8-neighborhood.
        let interior = &tiles[n + 1];
        assert_eq!(interior.neighbors.len(), 8);
    }

    #[test]
    fn test_neighbor_symmetry() {
        let tiles = generate_cube_surface(3).unwrap();
        for tile in &tiles {
            for &neighbor_id in &tile.neighbors {
                assert!(tiles[neighbor_id].neighbors.contains(&tile.id));
            }
        }
    }

    #[test]
    fn test_cross_face_adjacency() {
        // A tile along a face edge must reach tiles on the adjacent face:
        // face 0 (+Z) tiles near the top seam border face 4 (+Y) tiles.
        let tiles = generate_cube_surface(3).unwrap();
        let front_top = tiles
            .iter()
            .find(|t| t.normal == Vec3::Z && t.center.y > 0.5)
            .unwrap();
        assert!(front_top
            .neighbors
            .iter()
            .any(|&id| tiles[id].normal == Vec3::Y));
    }

    #[test]
    fn test_centers_on_surface() {
        // Each tile center lies on its face plane, one coordinate at ±1.
        let tiles = generate_cube_surface(2).unwrap();
        for tile in &tiles {
            let on_plane = tile
                .center
                .to_array()
                .iter()
                .filter(|c| (c.abs() - 1.0).abs() < 1e-6)
                .count();
            assert_eq!(on_plane, 1, "tile {} center {:?}", tile.id, tile.center);
        }
    }

    #[test]
    fn test_center_is_corner_mean() {
        let tiles = generate_cube_surface(3).unwrap();
        for tile in &tiles {
            let mean = tile.vertices.iter().copied().sum::<Vec3>() / 4.0;
            assert!(mean.distance(tile.center) < 1e-6);
        }
    }

    #[test]
    fn test_zero_grid_size_rejected() {
        assert!(generate_cube_surface(0).is_err());
    }
}
