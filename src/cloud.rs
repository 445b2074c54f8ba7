//! PointCloud main structure

#[cfg(feature = "spatial-index")]
use std::sync::OnceLock;
use std::time::Instant;

use glam::Vec3;

use crate::config::GenerationParams;
use crate::error::{PhyllotaxisError, Result};
use crate::generation::{generate_phyllotaxis_points, sequence_position};
use crate::scene::{ColorMapper, Rgba};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A single generated point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Position on the sphere surface
    pub position: Vec3,
    /// Normalized position in the generation sequence, `0` first and `1` last
    pub t: f32,
    /// Color assigned from `t` by the active color scheme
    pub color: Rgba,
}

/// A phyllotaxis point cloud
///
/// Points are stored in generation order, so index `i` always carries the
/// `i`-th sequence position. A cloud is immutable once generated; new
/// parameters produce a new cloud.
///
/// # Examples
///
/// ```
/// use sunflower_cloud::*;
///
/// let params = GenerationParamsBuilder::new()
///     .point_count(200)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let cloud = PointCloud::generate(params).unwrap();
/// assert_eq!(cloud.len(), 200);
///
/// if let Some(point) = cloud.get_point(0) {
///     println!("First point at {:?} colored {}", point.position, point.color);
/// }
/// ```
#[derive(Clone)]
pub struct PointCloud {
    /// Parameters used to generate this cloud
    params: GenerationParams,

    /// Points in generation order
    points: Vec<Point>,

    /// Spatial index for nearest-point lookups, built on first use
    /// (optional, requires spatial-index feature)
    #[cfg(feature = "spatial-index")]
    spatial_index: OnceLock<SpatialIndex>,
}

impl PointCloud {
    /// Generate a cloud colored by the parameters' color scheme
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the parameters fail validation and
    /// `InternalComputation` if a coordinate comes out non-finite.
    pub fn generate(params: GenerationParams) -> Result<Self> {
        let scheme = params.color_scheme;
        Self::generate_with_mapper(params, &scheme)
    }

    /// Generate a cloud with a custom color mapper
    ///
    /// The mapper replaces the parameters' color scheme; everything else is
    /// identical to [`PointCloud::generate`].
    ///
    /// # Example
    ///
    /// ```
    /// use sunflower_cloud::*;
    ///
    /// let mapper = GradientColorMapper { start: [0, 0, 0], end: [255, 255, 255] };
    /// let cloud = PointCloud::generate_with_mapper(GenerationParams::default(), &mapper).unwrap();
    /// assert_eq!(cloud.points()[0].color, Rgba::new(0, 0, 0));
    /// ```
    pub fn generate_with_mapper<C>(params: GenerationParams, color_mapper: &C) -> Result<Self>
    where
        C: ColorMapper + ?Sized,
    {
        if let Err(err) = params.validate() {
            log::warn!("Rejected point cloud parameters: {}", err);
            return Err(err);
        }

        let start = Instant::now();
        let count = params.point_count;
        let positions =
            generate_phyllotaxis_points(count, params.radius, params.angle_multiplier);

        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            log::warn!("Point {} of {} is not finite: {:?}", index, count, positions[index]);
            return Err(PhyllotaxisError::InternalComputation(format!(
                "point {} has a non-finite position",
                index
            )));
        }

        let points: Vec<Point> = positions
            .into_iter()
            .enumerate()
            .map(|(i, position)| {
                let t = sequence_position(i, count);
                Point {
                    position,
                    t,
                    color: color_mapper.map_color(t),
                }
            })
            .collect();

        log::debug!(
            "Generated {} points in {:?} (radius {}, angle multiplier {}, {})",
            points.len(),
            start.elapsed(),
            params.radius,
            params.angle_multiplier,
            params.color_scheme
        );

        Ok(Self {
            params,
            points,
            #[cfg(feature = "spatial-index")]
            spatial_index: OnceLock::new(),
        })
    }

    /// Get the parameters used to generate this cloud
    #[inline]
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Get the number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a generated cloud
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the sphere radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.params.radius
    }

    /// Get a point by index
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get_point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Get all points in generation order
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over point positions
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().map(|p| p.position)
    }

    /// Spatial index over the point positions (requires spatial-index feature)
    ///
    /// Built on the first call and reused afterwards, so clouds that are
    /// never queried never pay for it.
    #[cfg(feature = "spatial-index")]
    pub fn spatial_index(&self) -> &SpatialIndex {
        self.spatial_index.get_or_init(|| {
            let start = Instant::now();
            let positions: Vec<Vec3> = self.positions().collect();
            let index = SpatialIndex::new(&positions);
            log::debug!("Built spatial index over {} points in {:?}", positions.len(), start.elapsed());
            index
        })
    }

    /// Find the point nearest to a position (requires spatial-index feature)
    ///
    /// Used by presenters to resolve hover or click positions to a point.
    ///
    /// # Example
    ///
    /// ```
    /// # use sunflower_cloud::*;
    /// # use glam::Vec3;
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let cloud = PointCloud::generate(GenerationParams::default()).unwrap();
    /// // North pole is the first point
    /// assert_eq!(cloud.find_point_at(Vec3::new(0.0, 0.0, 10.0)), 0);
    /// # }
    /// ```
    #[cfg(feature = "spatial-index")]
    pub fn find_point_at(&self, position: Vec3) -> usize {
        self.spatial_index().find_nearest(position)
    }
}
