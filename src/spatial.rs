//! Spatial indexing for pointer-pick lookups
//!
//! Converts 3D positions (typically raycast hits on the rendered surface)
//! into tile IDs. Only available with the `spatial-index` feature.

use glam::Vec3;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

/// KD-tree over tile centers
///
/// Provides O(log n) nearest-neighbor lookups so a presentation layer can
/// map a pointer gesture on the 3D surface to a tile ID without scanning
/// the whole board.
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 3, 32>,
}

impl SpatialIndex {
    /// Build a spatial index from tile centers
    ///
    /// Called once per generated board; the tree is immutable because tile
    /// centers never move after generation.
    ///
    /// # Example
    ///
    /// ```
    /// use polyhedral_sweeper::SpatialIndex;
    /// use glam::Vec3;
    ///
    /// let centers = vec![
    ///     Vec3::new(1.0, 0.0, 0.0),
    ///     Vec3::new(0.0, 1.0, 0.0),
    /// ];
    /// let index = SpatialIndex::new(&centers);
    /// assert_eq!(index.find_nearest(Vec3::new(0.9, 0.1, 0.0)), 0);
    /// ```
    pub fn new(centers: &[Vec3]) -> Self {
        let points: Vec<[f32; 3]> = centers.iter().map(|c| [c.x, c.y, c.z]).collect();
        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Find the tile whose center is nearest to a position
    pub fn find_nearest(&self, position: Vec3) -> usize {
        let query = [position.x, position.y, position.z];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}
