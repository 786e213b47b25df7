//! Regular icosahedron base solid
//!
//! 12 vertices on the unit sphere at coordinates derived from the golden
//! ratio, plus a fixed table of 20 triangular faces. Used only as the
//! starting point for the Goldberg generator.

use glam::DVec3;

/// Golden ratio φ = (1 + √5) / 2
const PHI: f64 = 1.618033988749895;

/// The 20 triangular faces as vertex-index triples
///
/// This table is a constant of the solid, not derived at runtime. Winding is
/// counter-clockwise when viewed from outside the sphere.
pub(crate) const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// The 12 icosahedron vertices, normalized to the unit sphere
pub(crate) fn vertices() -> [DVec3; 12] {
    let t = PHI;
    [
        DVec3::new(-1.0, t, 0.0),
        DVec3::new(1.0, t, 0.0),
        DVec3::new(-1.0, -t, 0.0),
        DVec3::new(1.0, -t, 0.0),
        DVec3::new(0.0, -1.0, t),
        DVec3::new(0.0, 1.0, t),
        DVec3::new(0.0, -1.0, -t),
        DVec3::new(0.0, 1.0, -t),
        DVec3::new(t, 0.0, -1.0),
        DVec3::new(t, 0.0, 1.0),
        DVec3::new(-t, 0.0, -1.0),
        DVec3::new(-t, 0.0, 1.0),
    ]
    .map(|v| v.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertices_on_unit_sphere() {
        for v in vertices() {
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_each_vertex_in_five_faces() {
        let mut incidence = [0usize; 12];
        for face in &FACES {
            for &v in face {
                incidence[v] += 1;
            }
        }
        assert!(incidence.iter().all(|&count| count == 5));
    }

    #[test]
    fn test_thirty_unique_edges() {
        let mut edges = HashSet::new();
        for face in &FACES {
            for i in 0..3 {
                let a = face[i];
                let b = face[(i + 1) % 3];
                edges.insert((a.min(b), a.max(b)));
            }
        }
        assert_eq!(edges.len(), 30);
    }

    #[test]
    fn test_face_edge_lengths_equal() {
        // A regular icosahedron has all edges the same length.
        let verts = vertices();
        let reference = (verts[FACES[0][0]] - verts[FACES[0][1]]).length();
        for face in &FACES {
            for i in 0..3 {
                let len = (verts[face[i]] - verts[face[(i + 1) % 3]]).length();
                assert!((len - reference).abs() < 1e-9);
            }
        }
    }
}
