//! Goldberg polyhedron generator
//!
//! Subdivides the icosahedron and computes its dual, producing a sphere-like
//! tiling of 12 pentagons and `10·frequency² − 10` hexagons
//! (`10·frequency² + 2` tiles total).

use std::collections::{HashMap, HashSet};

use glam::{DVec3, Vec3};

use super::icosahedron;
use super::MeshTile;
use crate::error::{Result, SweeperError};

/// Quantization step for vertex deduplication keys
///
/// Each icosahedron edge and vertex is shared by multiple faces, so the
/// per-face barycentric grids generate the boundary points more than once.
/// Points are merged by keying on their coordinates rounded to this step.
/// Subdivision math runs in f64, where the accumulated error (~1e-15 for
/// unit-sphere magnitudes) is far below the step, so equal points cannot
/// straddle a quantization boundary.
const DEDUP_QUANTUM: f64 = 1e-8;

fn dedup_key(v: DVec3) -> (i64, i64, i64) {
    (
        (v.x / DEDUP_QUANTUM).round() as i64,
        (v.y / DEDUP_QUANTUM).round() as i64,
        (v.z / DEDUP_QUANTUM).round() as i64,
    )
}

/// Insert a point, reusing the first-seen index for duplicates
fn insert_vertex(
    point: DVec3,
    vertices: &mut Vec<DVec3>,
    keys: &mut HashMap<(i64, i64, i64), usize>,
) -> usize {
    let key = dedup_key(point);
    if let Some(&idx) = keys.get(&key) {
        return idx;
    }
    let idx = vertices.len();
    vertices.push(point);
    keys.insert(key, idx);
    idx
}

/// Generate a Goldberg polyhedron tiling of the unit sphere
///
/// Subdivides each icosahedron face into a barycentric grid of `frequency²`
/// small triangles, then builds the dual: every distinct geodesic vertex
/// becomes a tile bounded by the centroids of its incident triangles, and
/// two tiles are neighbors iff their vertices share a triangulation edge.
///
/// # Arguments
///
/// * `frequency` - Subdivision level (>= 1). Tile count is `10·frequency² + 2`
///
/// # Errors
///
/// Returns `InvalidConfig` if `frequency` is 0.
///
/// # Example
///
/// ```rust
/// use polyhedral_sweeper::generate_goldberg;
///
/// let tiles = generate_goldberg(2).unwrap();
/// assert_eq!(tiles.len(), 42);
/// ```
pub fn generate_goldberg(frequency: usize) -> Result<Vec<MeshTile>> {
    if frequency == 0 {
        return Err(SweeperError::InvalidConfig(
            "sphere frequency must be >= 1".to_string(),
        ));
    }

    let ico_vertices = icosahedron::vertices();
    let f = frequency;

    let mut vertices: Vec<DVec3> = Vec::new();
    let mut vertex_keys: HashMap<(i64, i64, i64), usize> = HashMap::new();
    let mut triangles: Vec<[usize; 3]> = Vec::new();

    for face in &icosahedron::FACES {
        let a = ico_vertices[face[0]];
        let b = ico_vertices[face[1]];
        let c = ico_vertices[face[2]];

        // Barycentric grid: P(i,j) = normalize((i·A + j·B + k·C) / f)
        // with k = f - i - j. Boundary points repeat across faces and are
        // merged through the dedup map.
        let mut grid: Vec<Vec<usize>> = Vec::with_capacity(f + 1);
        for i in 0..=f {
            let mut row = Vec::with_capacity(f - i + 1);
            for j in 0..=(f - i) {
                let k = f - i - j;
                let point =
                    ((a * i as f64 + b * j as f64 + c * k as f64) / f as f64).normalize();
                row.push(insert_vertex(point, &mut vertices, &mut vertex_keys));
            }
            grid.push(row);
        }

        // Two triangles per grid quad, one at the row's end.
        for i in 0..f {
            for j in 0..(f - i) {
                triangles.push([grid[i][j], grid[i + 1][j], grid[i][j + 1]]);
                if i + j < f - 1 {
                    triangles.push([grid[i + 1][j], grid[i + 1][j + 1], grid[i][j + 1]]);
                }
            }
        }
    }

    // Vertex -> incident triangles
    let mut vertex_triangles: Vec<Vec<usize>> = vec![Vec::new(); vertices.len()];
    for (tri_idx, tri) in triangles.iter().enumerate() {
        for &v in tri {
            vertex_triangles[v].push(tri_idx);
        }
    }

    // Triangle centroids projected back onto the sphere become the dual
    // tiles' boundary vertices.
    let centroids: Vec<DVec3> = triangles
        .iter()
        .map(|tri| ((vertices[tri[0]] + vertices[tri[1]] + vertices[tri[2]]) / 3.0).normalize())
        .collect();

    // Unique undirected triangulation edges carry the dual adjacency.
    let mut edges: HashSet<(usize, usize)> = HashSet::new();
    for tri in &triangles {
        for i in 0..3 {
            let a = tri[i];
            let b = tri[(i + 1) % 3];
            edges.insert((a.min(b), a.max(b)));
        }
    }
    let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); vertices.len()];
    for &(a, b) in &edges {
        neighbors[a].push(b);
        neighbors[b].push(a);
    }

    let mut tiles = Vec::with_capacity(vertices.len());
    for (id, &vertex) in vertices.iter().enumerate() {
        let boundary = order_dual_boundary(&vertex_triangles[id], &centroids, vertex);
        let mut tile_neighbors = std::mem::take(&mut neighbors[id]);
        tile_neighbors.sort_unstable(); // deterministic ordering

        tiles.push(MeshTile {
            id,
            center: vertex.as_vec3(),
            normal: vertex.as_vec3(),
            vertices: boundary,
            neighbors: tile_neighbors,
            sides: vertex_triangles[id].len(),
        });
    }

    Ok(tiles)
}

/// Order a dual tile's boundary centroids into a simple polygon
///
/// Projects each incident-triangle centroid into the tangent plane at the
/// geodesic vertex and sorts by angle, which yields a non-crossing boundary
/// regardless of triangle traversal order.
fn order_dual_boundary(incident: &[usize], centroids: &[DVec3], vertex: DVec3) -> Vec<Vec3> {
    // The vertex is unit length, so it doubles as the tile normal.
    let normal = vertex;
    let reference = if normal.y.abs() < 0.9 { DVec3::Y } else { DVec3::X };
    let tangent_u = normal.cross(reference).normalize();
    let tangent_v = normal.cross(tangent_u);

    let mut with_angles: Vec<(DVec3, f64)> = incident
        .iter()
        .map(|&tri_idx| {
            let to_centroid = centroids[tri_idx] - vertex;
            let u = to_centroid.dot(tangent_u);
            let v = to_centroid.dot(tangent_v);
            (centroids[tri_idx], v.atan2(u))
        })
        .collect();

    with_angles.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    with_angles.into_iter().map(|(c, _)| c.as_vec3()).collect()
}
