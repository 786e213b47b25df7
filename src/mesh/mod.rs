//! Board mesh generation
//!
//! Generates engine-agnostic vertex data from the current board state, one
//! color per tile driven by its puzzle state. The output is raw buffers
//! suitable for any rendering engine; this crate never renders anything
//! itself.

mod colors;

pub use colors::{ClassicColorMapper, CustomColorMapper, TileColor, TileColorMapper};

use glam::Vec3;

use crate::tile::GameTile;

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with attributes
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (3D coordinates)
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals (per-tile outward normal)
    pub normals: Vec<[f32; 3]>,
    /// Vertex colors (RGBA)
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate a board mesh with state-driven coloring
///
/// Each tile is triangulated as a fan from its center to its boundary
/// vertices; all vertices of a tile share the tile's normal and its mapped
/// color. Regenerate after each engine operation to reflect the new state.
pub fn generate_board_mesh<C>(tiles: &[GameTile], color_mapper: &C) -> MeshData
where
    C: TileColorMapper,
{
    let mut mesh = MeshData::default();

    for tile in tiles {
        // Skip degenerate tiles
        if tile.vertices.len() < 3 {
            continue;
        }
        let color = color_mapper.map_color(tile);
        triangulate_tile(tile.center, tile.normal, &tile.vertices, color, &mut mesh);
    }

    mesh
}

/// Triangulate a single tile as a triangle fan
fn triangulate_tile(
    center: Vec3,
    normal: Vec3,
    vertices: &[Vec3],
    color: TileColor,
    mesh: &mut MeshData,
) {
    let base_idx = mesh.positions.len() as u32;
    let normal = normal.to_array();

    mesh.positions.push(center.to_array());
    mesh.normals.push(normal);
    mesh.colors.push(color);

    for vertex in vertices {
        mesh.positions.push(vertex.to_array());
        mesh.normals.push(normal);
        mesh.colors.push(color);
    }

    let num_vertices = vertices.len();
    for i in 0..num_vertices {
        let next_i = (i + 1) % num_vertices;
        mesh.indices.push(base_idx); // Center
        mesh.indices.push(base_idx + 1 + i as u32); // Current vertex
        mesh.indices.push(base_idx + 1 + next_i as u32); // Next vertex
    }
}
