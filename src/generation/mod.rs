//! Surface tiling generators
//!
//! Produces the tile geometry and adjacency graph for each supported solid:
//! Goldberg polyhedra (sphere) and cube surfaces. The output is geometry
//! only; puzzle state is layered on by the engine.

mod cube;
mod goldberg;
mod icosahedron;

pub use cube::generate_cube_surface;
pub use goldberg::generate_goldberg;

use glam::Vec3;

use crate::config::Surface;
use crate::error::Result;

/// A surface tile without puzzle state (geometry only)
///
/// This is the intermediate representation produced by the generators.
/// Puzzle state is added later to create the final [`crate::GameTile`].
#[derive(Debug, Clone)]
pub struct MeshTile {
    /// Unique tile identifier
    pub id: usize,
    /// Center point on the solid's surface
    pub center: Vec3,
    /// Outward unit normal
    pub normal: Vec3,
    /// Vertices defining the tile boundary, ordered into a simple polygon
    pub vertices: Vec<Vec3>,
    /// IDs of neighboring tiles (symmetric relation)
    pub neighbors: Vec<usize>,
    /// Boundary vertex count (5/6 for sphere tiles, 4 for cube tiles)
    pub sides: usize,
}

/// Generate the tiles for a configured surface
///
/// Dispatches to the matching generator.
pub fn generate_surface_tiles(surface: Surface) -> Result<Vec<MeshTile>> {
    match surface {
        Surface::Sphere { frequency } => generate_goldberg(frequency),
        Surface::Cube { grid_size } => generate_cube_surface(grid_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_surface() {
        let sphere = generate_surface_tiles(Surface::Sphere { frequency: 2 }).unwrap();
        assert_eq!(sphere.len(), 42);

        let cube = generate_surface_tiles(Surface::Cube { grid_size: 3 }).unwrap();
        assert_eq!(cube.len(), 54);
    }
}
