//! Orbiting camera path for the rotation animation
//!
//! The camera circles the cloud at a fixed elevation. Eye positions are in
//! the plotting collaborator's normalized scene units, so the orbit is the
//! same whatever radius the cloud was generated with.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::{DVec3, Vec3};

use crate::error::{PhyllotaxisError, Result};

/// Planar distance of the eye from the vertical axis
pub const ORBIT_RADIUS: f32 = 1.5;

/// Height of the eye above the scene center
pub const EYE_HEIGHT: f32 = 1.0;

/// Frame count the 20-revolution [`CameraOrbit::spin`] is sampled with
///
/// Like every orbit, the spin leaves out its end angle, so 500 frames step
/// 14.4° apart. Sampling both 0° and 7200° would give 7200/499 ≈ 14.43°.
pub const SPIN_FRAME_COUNT: usize = 500;

/// One step of the camera animation
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Camera eye position
    pub eye: Vec3,
}

impl CameraFrame {
    /// Azimuth of the eye in degrees, in `(-180, 180]`
    pub fn azimuth_degrees(&self) -> f32 {
        self.eye.y.atan2(self.eye.x).to_degrees()
    }
}

/// Total rotation covered by one pass of the camera path
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrbit {
    /// Rotation span in degrees (360 = one revolution)
    pub span_degrees: f32,
}

impl CameraOrbit {
    /// Exactly one revolution, for a seamless loop of `frame_count` frames
    pub const fn single_revolution() -> Self {
        Self { span_degrees: 360.0 }
    }

    /// Twenty revolutions, meant to be sampled with [`SPIN_FRAME_COUNT`] frames
    pub const fn spin() -> Self {
        Self {
            span_degrees: 7200.0,
        }
    }

    /// Number of full revolutions in this span
    pub fn revolutions(&self) -> f32 {
        self.span_degrees / 360.0
    }

    fn validate(&self) -> Result<()> {
        if !self.span_degrees.is_finite() || self.span_degrees <= 0.0 {
            return Err(PhyllotaxisError::invalid(
                "span_degrees",
                format!("must be a positive finite angle (got {})", self.span_degrees),
            ));
        }
        Ok(())
    }
}

impl Default for CameraOrbit {
    fn default() -> Self {
        Self::single_revolution()
    }
}

/// Generate the camera path for one pass of the animation
///
/// Frames are evenly spaced over the orbit span starting at 0°. The span's
/// end angle is not sampled, so for whole revolutions the frame after the
/// last is the first and playback loops without a repeated frame.
///
/// # Errors
///
/// Returns `InvalidParameter` if `frame_count` is 0 or the span is not a
/// positive finite angle.
///
/// # Example
///
/// ```rust
/// use sunflower_cloud::camera::{generate_camera_path, CameraOrbit};
///
/// let frames = generate_camera_path(4, &CameraOrbit::single_revolution()).unwrap();
/// assert_eq!(frames.len(), 4);
/// assert_eq!(frames[0].eye.z, 1.0);
/// ```
pub fn generate_camera_path(frame_count: usize, orbit: &CameraOrbit) -> Result<Vec<CameraFrame>> {
    if frame_count == 0 {
        return Err(PhyllotaxisError::invalid("frame_count", "must be at least 1 (got 0)"));
    }
    orbit.validate()?;

    let step = (orbit.span_degrees as f64 / frame_count as f64).to_radians();
    let radius = ORBIT_RADIUS as f64;

    let frames = (0..frame_count)
        .map(|k| {
            let angle = k as f64 * step;
            let eye = DVec3::new(radius * angle.cos(), radius * angle.sin(), EYE_HEIGHT as f64);
            CameraFrame { eye: eye.as_vec3() }
        })
        .collect();

    Ok(frames)
}
