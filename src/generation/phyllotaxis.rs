//! Phyllotaxis (Sunflower Spiral) Point Distribution
//!
//! Places points on a sphere the way a sunflower packs its seeds: each
//! successive point is rotated by the golden angle around the vertical axis
//! while its height steps linearly from the north pole to the south pole.
//!
//! # Algorithm
//!
//! For point `i` of `n`:
//! - Sequence position: `t = i / (n - 1)` (`t = 0` when `n = 1`)
//! - Longitude: `i * golden_angle`, where `golden_angle = π(3 - √5) * multiplier`
//! - Height: `z = 1 - 2t`, planar radius `r = sqrt(max(0, 1 - z²))`
//! - Position: `(r cos θ, r sin θ, z) * radius`
//!
//! A multiplier of 1.0 gives the canonical non-overlapping packing. Other
//! values detune the rotation and produce visible spiral arms.
//!
//! Angles and heights are computed in `f64` and narrowed to `f32` positions
//! at the end.

use glam::{DVec3, Vec3};

/// The golden angle `π(3 - √5)` in radians (~137.5°)
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Golden angle scaled by `multiplier`
#[inline]
pub fn golden_angle(multiplier: f32) -> f64 {
    GOLDEN_ANGLE * multiplier as f64
}

/// Normalized position of point `index` in a sequence of `count` points
///
/// The first point is at 0 and the last at 1. A single point sits at 0.
#[inline]
pub fn sequence_position(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    (index as f64 / (count - 1) as f64) as f32
}

/// Generate points on a sphere following the phyllotaxis spiral
///
/// Deterministic: the same arguments always yield the same points.
///
/// # Arguments
///
/// * `count` - Number of points to generate
/// * `radius` - Sphere radius
/// * `angle_multiplier` - Scale applied to the golden angle
///
/// # Example
///
/// ```rust
/// use sunflower_cloud::generation::generate_phyllotaxis_points;
///
/// let points = generate_phyllotaxis_points(1000, 10.0, 1.0);
/// assert_eq!(points.len(), 1000);
/// ```
pub fn generate_phyllotaxis_points(count: usize, radius: f32, angle_multiplier: f32) -> Vec<Vec3> {
    let step = golden_angle(angle_multiplier);
    let radius = radius as f64;

    (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.0
            };
            let angle = i as f64 * step;

            let z = 1.0 - 2.0 * t;
            // Clamp guards the poles, where 1 - z² can round below zero
            let r = (1.0 - z * z).max(0.0).sqrt();

            (DVec3::new(r * angle.cos(), r * angle.sin(), z) * radius).as_vec3()
        })
        .collect()
}
