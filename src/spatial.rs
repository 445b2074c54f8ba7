//! Spatial indexing for fast position-to-point lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use std::collections::HashSet;

#[cfg(feature = "spatial-index")]
use glam::Vec3;
#[cfg(feature = "spatial-index")]
use kiddo::{KdTree, SquaredEuclidean};

/// Wrapper around a KD-tree for nearest-point queries
///
/// Resolves a 3D position (a hover or click ray hit) to the index of the
/// closest cloud point in O(log n).
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: KdTree<f32, 3>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build a spatial index over point positions
    ///
    /// Item ids are the positions' indices in the slice. Positions that are
    /// exactly equal are stored once under the lowest index; the KD-tree
    /// cannot hold more than a bucket's worth of identical points.
    ///
    /// # Example
    ///
    /// ```
    /// use sunflower_cloud::*;
    /// use glam::Vec3;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let positions = vec![
    ///     Vec3::new(1.0, 0.0, 0.0),
    ///     Vec3::new(0.0, 1.0, 0.0),
    ///     Vec3::new(0.0, 0.0, 1.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&positions);
    /// assert_eq!(index.find_nearest(Vec3::new(1.0, 0.1, 0.0)), 0);
    /// # }
    /// ```
    pub fn new(positions: &[Vec3]) -> Self {
        let mut tree: KdTree<f32, 3> = KdTree::with_capacity(positions.len());
        let mut seen: HashSet<[u32; 3]> = HashSet::with_capacity(positions.len());

        for (i, p) in positions.iter().enumerate() {
            // +0.0 folds -0.0 into 0.0 so both hash alike
            let coords = [p.x + 0.0, p.y + 0.0, p.z + 0.0];
            let key = coords.map(f32::to_bits);
            if !seen.insert(key) {
                continue;
            }
            tree.add(&coords, i as u64);
        }

        if seen.len() < positions.len() {
            log::debug!(
                "Spatial index merged {} duplicate positions",
                positions.len() - seen.len()
            );
        }

        Self { tree }
    }

    /// Index of the position nearest to `position`
    pub fn find_nearest(&self, position: Vec3) -> usize {
        let query = [position.x, position.y, position.z];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}

#[cfg(test)]
#[cfg(feature = "spatial-index")]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_index_basic() {
        let positions = vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, 0.0),
        ];

        let index = SpatialIndex::new(&positions);

        assert_eq!(index.find_nearest(Vec3::new(0.9, 0.1, 0.0)), 0);
        assert_eq!(index.find_nearest(Vec3::new(0.0, 0.95, 0.0)), 1);
        assert_eq!(index.find_nearest(Vec3::new(0.0, 0.1, 0.9)), 2);
        assert_eq!(index.find_nearest(Vec3::new(-0.8, 0.0, 0.0)), 3);
    }

    #[test]
    fn test_spatial_index_many_identical_positions() {
        let mut positions = vec![Vec3::new(0.0, 0.0, 1e-45); 100];
        positions.push(Vec3::new(-0.0, 0.0, 1e-45));
        positions.push(Vec3::new(5.0, 0.0, 0.0));

        let index = SpatialIndex::new(&positions);

        // Duplicates resolve to the first of their group
        assert_eq!(index.find_nearest(Vec3::ZERO), 0);
        assert_eq!(index.find_nearest(Vec3::new(4.0, 0.0, 0.0)), 101);
    }

    #[test]
    fn test_spatial_index_single_point() {
        let index = SpatialIndex::new(&[Vec3::new(0.0, 0.0, 5.0)]);
        assert_eq!(index.find_nearest(Vec3::new(3.0, -2.0, 0.0)), 0);
    }
}
